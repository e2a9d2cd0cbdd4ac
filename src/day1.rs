//! Calorie Counting.

use arrayvec::ArrayVec;
use tracing::info;

use crate::error::PuzzleError;

pub const EXAMPLE: &str = "1000\n2000\n3000\n\n4000\n\n5000\n6000\n\n7000\n8000\n9000\n\n10000\n";

/// Per-elf calorie totals, in input order.
fn elf_totals(input: &str) -> Result<Vec<u64>, PuzzleError> {
    let mut totals = vec![];
    let mut current = None;
    for (ix, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            totals.extend(current.take());
        } else {
            let calories: u64 = line.parse().map_err(|_| PuzzleError::parse(ix, line, "a calorie count"))?;
            *current.get_or_insert(0) += calories;
        }
    }
    totals.extend(current);
    if totals.is_empty() {return Err(PuzzleError::EmptyInput)}
    Ok(totals)
}

/// The three largest values, largest first.
fn top_three(totals: &[u64]) -> ArrayVec<u64, 3> {
    let mut top = ArrayVec::<u64, 3>::new();
    for &total in totals {
        let at = top.iter().position(|&t| total > t).unwrap_or(top.len());
        if at < top.capacity() {
            if top.is_full() {top.pop();}
            top.insert(at, total);
        }
    }
    top
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    let totals = elf_totals(input)?;
    info!(elves = totals.len(), "counted elves");
    if part == 1 {
        let (elf, most) = totals.iter().enumerate()
            .max_by_key(|&(ix, &total)| (total, std::cmp::Reverse(ix)))
            .map(|(ix, &total)| (ix + 1, total))
            .ok_or(PuzzleError::EmptyInput)?;
        info!(elf, calories = most, "elf carrying the most");
        Ok(most.to_string())
    } else {
        let top = top_three(&totals);
        info!(?top, "top three elves");
        Ok(top.iter().sum::<u64>().to_string())
    }
}
