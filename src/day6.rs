//! Tuning Trouble.

use itertools::Itertools;
use tracing::info;

use crate::error::PuzzleError;

pub const EXAMPLE: &str = "mjqjpqmgbljsphdztnvjfqwrcgsmlb\n";

const START_OF_PACKET: usize = 4;
const START_OF_MESSAGE: usize = 14;

/// Characters processed when the first window of `len` distinct characters ends.
fn find_marker(stream: &[u8], len: usize) -> Result<usize, PuzzleError> {
    stream.windows(len)
        .position(|window| window.iter().all_unique())
        .map(|at| {
            info!(marker = %String::from_utf8_lossy(&stream[at .. at + len]), "found marker");
            at + len
        })
        .ok_or(PuzzleError::NoMarker {len})
}

pub fn solve(part: u8, input: &str) -> Result<String, PuzzleError> {
    let stream = input.trim();
    if stream.is_empty() {return Err(PuzzleError::EmptyInput)}
    let len = if part == 1 {START_OF_PACKET} else {START_OF_MESSAGE};
    Ok(find_marker(stream.as_bytes(), len)?.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const STREAMS: [(&str, usize, usize); 5] = [
        ("mjqjpqmgbljsphdztnvjfqwrcgsmlb", 7, 19),
        ("bvwbjplbgvbhsrlpgdmjqwftvncz", 5, 23),
        ("nppdvjthqldpwncqszvftbrmjlhg", 6, 23),
        ("nznrnfrfntjfmvfwmzdfjlvtqnbhcprsg", 10, 29),
        ("zcfzfwzzqfrljwzlrfnpqdbhtmscgvjw", 11, 26),
    ];

    #[test]
    fn example_part_one() {
        assert_eq!(solve(1, EXAMPLE).unwrap(), "7");
    }

    #[test]
    fn example_part_two() {
        assert_eq!(solve(2, EXAMPLE).unwrap(), "19");
    }

    #[test]
    fn every_statement_stream() {
        for (stream, packet, message) in STREAMS {
            assert_eq!(find_marker(stream.as_bytes(), START_OF_PACKET), Ok(packet), "{}", stream);
            assert_eq!(find_marker(stream.as_bytes(), START_OF_MESSAGE), Ok(message), "{}", stream);
        }
    }

    #[test]
    fn stream_without_marker() {
        assert_eq!(solve(1, "abcabcabc"), Err(PuzzleError::NoMarker { len: 4 }));
        assert_eq!(solve(2, "abcd"), Err(PuzzleError::NoMarker { len: 14 }));
    }
}
