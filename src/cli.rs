use std::path::PathBuf;

use clap::Parser;

/// Advent of Code 2022 solutions, days 1-8.
#[derive(Debug, Parser)]
#[command(name = "aoc2022", version, about = "Advent of Code 2022 puzzle solver")]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Puzzle day.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=8))]
    pub day: u8,

    /// Puzzle part.
    #[arg(value_parser = clap::value_parser!(u8).range(1..=2))]
    pub part: u8,

    /// Solve the worked example from the puzzle statement instead of an input file.
    #[arg(short, long, conflicts_with = "input")]
    pub example: bool,

    /// Puzzle input file [default: <DIR>/day<DAY>/input.txt].
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Directory holding the per-day input folders.
    #[arg(short, long, default_value = ".")]
    pub dir: PathBuf,
}

impl Cli {
    pub fn input_path(&self) -> PathBuf {
        match &self.input {
            Some(path) => path.clone(),
            None => self.dir.join(format!("day{}", self.day)).join("input.txt"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_input_lives_in_day_folder() {
        let cli = Cli::try_parse_from(["aoc2022", "7", "2"]).unwrap();
        assert_eq!((cli.day, cli.part, cli.example), (7, 2, false));
        assert_eq!(cli.input_path(), PathBuf::from("./day7/input.txt"));
    }

    #[test]
    fn explicit_input_wins() {
        let cli = Cli::try_parse_from(["aoc2022", "-vv", "3", "1", "--input", "rucksacks.txt"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.input_path(), PathBuf::from("rucksacks.txt"));
    }

    #[test]
    fn day_out_of_range() {
        assert!(Cli::try_parse_from(["aoc2022", "9", "1"]).is_err());
        assert!(Cli::try_parse_from(["aoc2022", "0", "1"]).is_err());
    }

    #[test]
    fn part_must_be_one_or_two() {
        assert!(Cli::try_parse_from(["aoc2022", "1", "3"]).is_err());
    }

    #[test]
    fn example_conflicts_with_input() {
        assert!(Cli::try_parse_from(["aoc2022", "1", "1", "--example", "--input", "x.txt"]).is_err());
    }
}
