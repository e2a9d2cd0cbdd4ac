//! Rucksack Reorganization.

use crate::error::PuzzleError;

pub const EXAMPLE: &str = "\
vJrwpWtwJgWrhcsFMMfFFhFp
jqHRNqRjqzjGDLGLrsFMfFZSrLrFZsSL
PmmdzqPrVvPwwTWBwg
wMqvLMZHhHMvwLHjbvcjnnSBnvTQFn
ttgJtRGJQctTZtZT
CrZsJsPPZsGzwwsLwLmpwMDw
";

fn priority(item: u8) -> Option<u32> {
    match item {
        b'a' ..= b'z' => Some((item - b'a') as u32 + 1),
        b'A' ..= b'Z' => Some((item - b'A') as u32 + 27),
        _ => None
    }
}

/// Bit `p` is set when an item of priority `p` is present.
fn item_set(ix: usize, items: &str) -> Result<u64, PuzzleError> {
    items.bytes().try_fold(0u64, |set, item| match priority(item) {
        Some(p) => Ok(set | 1u64 << p),
        None => Err(PuzzleError::parse(ix, items, "a rucksack of letters"))
    })
}

fn common_priority(line: usize, sets: &[u64]) -> Result<u32, PuzzleError> {
    let common = sets.iter().fold(!0u64, |acc, set| acc & set);
    if common == 0 {return Err(PuzzleError::NoCommonItem {line})}
    Ok(common.trailing_zeros())
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    let rucksacks = input.lines().map(str::trim).enumerate()
        .filter(|(_, line)| !line.is_empty())
        .collect::<Vec<_>>();
    if rucksacks.is_empty() {return Err(PuzzleError::EmptyInput)}

    let mut sum = 0;
    if part == 1 {
        for &(ix, line) in &rucksacks {
            if line.len() % 2 != 0 {
                return Err(PuzzleError::parse(ix, line, "two equally sized compartments"));
            }
            let (left, right) = line.split_at(line.len() / 2);
            sum += common_priority(ix + 1, &[item_set(ix, left)?, item_set(ix, right)?])?;
        }
    } else {
        if rucksacks.len() % 3 != 0 {
            return Err(PuzzleError::IncompleteGroup {lines: rucksacks.len()});
        }
        for group in rucksacks.chunks(3) {
            let sets = group.iter().map(|&(ix, line)| item_set(ix, line)).collect::<Result<Vec<_>, _>>()?;
            sum += common_priority(group[0].0 + 1, &sets)?;
        }
    }
    Ok(sum.to_string())
}
