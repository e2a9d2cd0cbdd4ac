//! Treetop Tree House.

use bitvec::prelude::*;

use crate::error::PuzzleError;

pub const EXAMPLE: &str = "30373\n25512\n65332\n33549\n35390\n";

struct Grid {
    heights: Vec<u8>,
    rows: usize,
    cols: usize,
}

impl Grid {
    fn parse(input: &str) -> Result<Grid, PuzzleError> {
        let mut heights = vec![];
        let mut rows = 0;
        let mut cols = None;
        for (ix, line) in input.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {continue}
            if !line.bytes().all(|b| b.is_ascii_digit()) {
                return Err(PuzzleError::parse(ix, line, "a row of tree heights 0-9"));
            }
            let expected = *cols.get_or_insert(line.len());
            if line.len() != expected {
                return Err(PuzzleError::RaggedGrid {line: ix + 1, width: line.len(), expected});
            }
            heights.extend(line.bytes().map(|b| b - b'0'));
            rows += 1;
        }
        let Some(cols) = cols else {return Err(PuzzleError::EmptyInput)};
        Ok(Grid {heights, rows, cols})
    }

    fn at(&self, ri: usize, ci: usize) -> u8 {self.heights[ri * self.cols + ci]}

    /// Every line of sight from an edge inward: rows both ways, then columns both ways.
    fn sightlines(&self) -> impl Iterator<Item = Vec<(usize, usize)>> + '_ {
        let (rows, cols) = (self.rows, self.cols);
        (0 .. rows).flat_map(move |ri| [
            (0 .. cols).map(|ci| (ri, ci)).collect::<Vec<_>>(),
            (0 .. cols).rev().map(|ci| (ri, ci)).collect(),
        ]).chain((0 .. cols).flat_map(move |ci| [
            (0 .. rows).map(|ri| (ri, ci)).collect::<Vec<_>>(),
            (0 .. rows).rev().map(|ri| (ri, ci)).collect(),
        ]))
    }

    fn count_visible(&self) -> usize {
        let mut visible = bitvec![0; self.rows * self.cols];
        for line in self.sightlines() {
            let mut tallest = None;
            for (ri, ci) in line {
                let height = self.at(ri, ci);
                if tallest.map_or(true, |t| height > t) {
                    visible.set(ri * self.cols + ci, true);
                    tallest = Some(height);
                }
                if height == 9 {break}
            }
        }
        visible.count_ones()
    }

    /// Trees seen walking from (ri, ci) by (dr, dc) until the edge or a tree at least as tall.
    fn viewing_distance(&self, ri: usize, ci: usize, (dr, dc): (isize, isize)) -> usize {
        let height = self.at(ri, ci);
        let (mut r, mut c) = (ri as isize, ci as isize);
        let mut seen = 0;
        loop {
            r += dr;
            c += dc;
            if !(0 .. self.rows as isize).contains(&r) || !(0 .. self.cols as isize).contains(&c) {break}
            seen += 1;
            if self.at(r as usize, c as usize) >= height {break}
        }
        seen
    }

    fn scenic_score(&self, ri: usize, ci: usize) -> usize {
        [(-1, 0), (1, 0), (0, -1), (0, 1)].into_iter()
            .map(|dir| self.viewing_distance(ri, ci, dir))
            .product()
    }
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    let grid = Grid::parse(input)?;
    if part == 1 {
        Ok(grid.count_visible().to_string())
    } else {
        (0 .. grid.rows).flat_map(|ri| (0 .. grid.cols).map(move |ci| (ri, ci)))
            .map(|(ri, ci)| grid.scenic_score(ri, ci))
            .max()
            .map(|score| score.to_string())
            .ok_or(PuzzleError::EmptyInput)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_part_one() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "21");
    }

    #[test]
    fn example_part_two() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "8");
    }

    #[test]
    fn scenic_scores_from_statement() {
        let grid = Grid::parse(EXAMPLE).unwrap();
        assert_eq!(grid.scenic_score(1, 2), 4);
        assert_eq!(grid.scenic_score(3, 2), 8);
        assert_eq!(grid.scenic_score(0, 0), 0);
    }

    #[test]
    fn single_tree_is_visible() {
        assert_eq!(solve(1, "5\n").unwrap(), "1");
        assert_eq!(solve(2, "5\n").unwrap(), "0");
    }

    #[test]
    fn ragged_rows() {
        assert_eq!(
            solve(1, "123\n12\n"),
            Err(PuzzleError::RaggedGrid { line: 2, width: 2, expected: 3 })
        );
    }

    #[test]
    fn non_digit_cell() {
        assert!(matches!(solve(2, "12\n1x\n"), Err(PuzzleError::Parse { line: 2, .. })));
    }
}
