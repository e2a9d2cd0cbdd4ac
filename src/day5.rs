//! Supply Stacks.

use std::fmt;

use regex::Regex;
use tracing::debug;

use crate::error::PuzzleError;

pub const EXAMPLE: &str = concat!(
    "    [D]    \n",
    "[N] [C]    \n",
    "[Z] [M] [P]\n",
    " 1   2   3 \n",
    "\n",
    "move 1 from 2 to 1\n",
    "move 3 from 1 to 3\n",
    "move 2 from 2 to 1\n",
    "move 1 from 1 to 2\n",
);

/// Crate stacks, each listed bottom first.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Stacks(Vec<Vec<u8>>);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Move {count: usize, from: usize, to: usize, line: usize}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Crane {
    /// Moves crates one at a time.
    CrateMover9000,
    /// Moves a whole slice at once, keeping its order.
    CrateMover9001,
}

impl Stacks {
    /// Parses the drawing: labels sit at offset 1 of each 4-byte column.
    fn parse<'a>(drawing: impl DoubleEndedIterator<Item = &'a str>) -> Stacks {
        let mut stacks: Vec<Vec<u8>> = vec![];
        for layer in drawing.rev() {
            for (si, column) in layer.as_bytes().chunks(4).enumerate() {
                if si >= stacks.len() {stacks.resize(si + 1, vec![])}
                match column.get(1) {
                    Some(&label) if label.is_ascii_alphabetic() => stacks[si].push(label),
                    _ => ()
                }
            }
        }
        Stacks(stacks)
    }

    fn apply(&mut self, mv: Move, crane: Crane) -> Result<(), PuzzleError> {
        let stacks = self.0.len();
        for stack in [mv.from, mv.to] {
            if stack == 0 || stack > stacks {
                return Err(PuzzleError::NoSuchStack {line: mv.line, stack, stacks});
            }
        }
        let source = &mut self.0[mv.from - 1];
        if source.len() < mv.count {
            return Err(PuzzleError::NotEnoughCrates {
                line: mv.line, stack: mv.from, requested: mv.count, available: source.len()
            });
        }
        let mut lifted = source.split_off(source.len() - mv.count);
        if crane == Crane::CrateMover9000 {lifted.reverse()}
        self.0[mv.to - 1].extend(lifted);
        Ok(())
    }

    fn tops(&self) -> String {
        self.0.iter().filter_map(|stack| stack.last()).map(|&c| c as char).collect()
    }
}

impl fmt::Display for Stacks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let height = self.0.iter().map(Vec::len).max().unwrap_or(0);
        for level in (0 .. height).rev() {
            let row = self.0.iter().map(|stack| match stack.get(level) {
                Some(&c) => format!("[{}]", c as char),
                None => "   ".to_owned()
            }).collect::<Vec<_>>().join(" ");
            writeln!(f, "{}", row.trim_end())?;
        }
        let numbers = (1 ..= self.0.len()).map(|n| format!(" {} ", n)).collect::<Vec<_>>().join(" ");
        write!(f, "{}", numbers.trim_end())
    }
}

fn parse_moves<'a>(
    first_line: usize,
    lines: impl Iterator<Item = &'a str>,
) -> Result<Vec<Move>, PuzzleError> {
    let pattern = Regex::new(r"^move (\d+) from (\d+) to (\d+)$").unwrap();
    let mut moves = vec![];
    for (ix, line) in lines.enumerate().map(|(ix, line)| (first_line + ix, line.trim())) {
        if line.is_empty() {continue}
        let bad = || PuzzleError::parse(ix, line, "move N from A to B");
        let caps = pattern.captures(line).ok_or_else(bad)?;
        let [count, from, to] = [&caps[1], &caps[2], &caps[3]].map(|n| n.parse::<usize>());
        moves.push(Move {
            count: count.map_err(|_| bad())?,
            from: from.map_err(|_| bad())?,
            to: to.map_err(|_| bad())?,
            line: ix + 1,
        });
    }
    Ok(moves)
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    let lines = input.lines().collect::<Vec<_>>();
    let split = lines.iter().position(|line| line.trim().is_empty()).unwrap_or(lines.len());
    let mut stacks = Stacks::parse(lines[.. split].iter().copied());
    if stacks.0.is_empty() {return Err(PuzzleError::EmptyInput)}
    debug!("starting stacks:\n{}", stacks);

    let crane = if part == 1 {Crane::CrateMover9000} else {Crane::CrateMover9001};
    for mv in parse_moves(split, lines[split ..].iter().copied())? {
        stacks.apply(mv, crane)?;
    }
    debug!("final stacks:\n{}", stacks);
    Ok(stacks.tops())
}
