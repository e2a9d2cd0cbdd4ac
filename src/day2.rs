//! Rock Paper Scissors.

use tracing::debug;

use crate::error::PuzzleError;

pub const EXAMPLE: &str = "A Y\nB X\nC Z\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {Rock, Paper, Scissors}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Outcome {Loss, Draw, Win}

impl Shape {
    fn from_index(ix: u8) -> Shape {
        match ix % 3 {0 => Shape::Rock, 1 => Shape::Paper, _ => Shape::Scissors}
    }

    fn index(self) -> u8 {self as u8}

    fn score(self) -> u64 {self.index() as u64 + 1}

    fn beats(self) -> Shape {Shape::from_index(self.index() + 2)}

    fn beaten_by(self) -> Shape {Shape::from_index(self.index() + 1)}

    fn against(self, opponent: Shape) -> Outcome {
        if self == opponent {Outcome::Draw}
        else if self.beats() == opponent {Outcome::Win}
        else {Outcome::Loss}
    }
}

impl Outcome {
    fn score(self) -> u64 {
        match self {Outcome::Loss => 0, Outcome::Draw => 3, Outcome::Win => 6}
    }

    /// The shape to throw against `opponent` to end the round this way.
    fn shape_against(self, opponent: Shape) -> Shape {
        match self {
            Outcome::Loss => opponent.beats(),
            Outcome::Draw => opponent,
            Outcome::Win => opponent.beaten_by(),
        }
    }
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    let mut total = 0;
    for (ix, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {continue}
        let (theirs, second) = match line.as_bytes() {
            &[theirs @ b'A' ..= b'C', b' ', second @ b'X' ..= b'Z'] => (theirs - b'A', second - b'X'),
            _ => return Err(PuzzleError::parse(ix, line, "a shape letter and a strategy letter"))
        };
        let theirs = Shape::from_index(theirs);
        let mine = if part == 1 {
            Shape::from_index(second)
        } else {
            let wanted = [Outcome::Loss, Outcome::Draw, Outcome::Win][second as usize];
            wanted.shape_against(theirs)
        };
        let round = mine.score() + mine.against(theirs).score();
        debug!("{} -> {}", line, round);
        total += round;
    }
    Ok(total.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_part_one() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "15");
    }

    #[test]
    fn example_part_two() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "12");
    }

    #[test]
    fn shape_cycle() {
        assert_eq!(Shape::Rock.beats(), Shape::Scissors);
        assert_eq!(Shape::Scissors.beats(), Shape::Paper);
        assert_eq!(Shape::Rock.beaten_by(), Shape::Paper);
        assert_eq!(Shape::Paper.against(Shape::Rock), Outcome::Win);
        assert_eq!(Outcome::Loss.shape_against(Shape::Paper), Shape::Rock);
    }

    #[test]
    fn rejects_unknown_letters() {
        assert!(matches!(solve(1, "A Y\nD X\n"), Err(PuzzleError::Parse { line: 2, .. })));
    }
}
