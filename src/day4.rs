//! Camp Cleanup.

use std::ops::RangeInclusive;

use crate::error::PuzzleError;

pub const EXAMPLE: &str = "2-4,6-8\n2-3,4-5\n5-7,7-9\n2-8,3-7\n6-6,4-6\n2-6,4-8\n";

fn parse_range(s: &str) -> Option<RangeInclusive<u32>> {
    let (start, end) = s.split_once('-')?;
    let (start, end) = (start.parse().ok()?, end.parse().ok()?);
    (start <= end).then_some(start ..= end)
}

fn parse_pair(ix: usize, line: &str) -> Result<(RangeInclusive<u32>, RangeInclusive<u32>), PuzzleError> {
    line.split_once(',')
        .and_then(|(left, right)| Some((parse_range(left)?, parse_range(right)?)))
        .ok_or_else(|| PuzzleError::parse(ix, line, "two section ranges like 2-4,6-8"))
}

fn contains(outer: &RangeInclusive<u32>, inner: &RangeInclusive<u32>) -> bool {
    outer.start() <= inner.start() && inner.end() <= outer.end()
}

fn overlaps(a: &RangeInclusive<u32>, b: &RangeInclusive<u32>) -> bool {
    a.start() <= b.end() && b.start() <= a.end()
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    let mut count = 0;
    for (ix, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {continue}
        let (left, right) = parse_pair(ix, line)?;
        let hit = if part == 1 {
            contains(&left, &right) || contains(&right, &left)
        } else {
            overlaps(&left, &right)
        };
        if hit {count += 1}
    }
    Ok(count.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_part_one() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "2");
    }

    #[test]
    fn example_part_two() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "4");
    }

    #[test]
    fn touching_ranges_overlap() {
        assert!(overlaps(&(5 ..= 7), &(7 ..= 9)));
        assert!(!overlaps(&(2 ..= 3), &(4 ..= 5)));
    }

    #[test]
    fn reversed_range_is_rejected() {
        assert!(matches!(solve(1, "4-2,1-9"), Err(PuzzleError::Parse { line: 1, .. })));
    }
}
