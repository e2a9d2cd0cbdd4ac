//! Errors shared by every day's solver.

/// Error type for all fallible puzzle operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PuzzleError {
    /// The input has no usable lines.
    #[error("puzzle input is empty")]
    EmptyInput,

    /// A line did not match the expected shape.
    #[error("line {line}: cannot parse {content:?} as {expected}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// The offending text.
        content: String,
        /// What the line should have looked like.
        expected: &'static str,
    },

    /// Day 3: the rucksack lines do not split into groups of three.
    #[error("{lines} rucksacks do not form groups of three")]
    IncompleteGroup {
        /// Number of rucksack lines in the input.
        lines: usize,
    },

    /// Day 3: a rucksack or group shares no item type.
    #[error("line {line}: no item type in common")]
    NoCommonItem {
        /// 1-based line number of the rucksack (or the group's first line).
        line: usize,
    },

    /// Day 5: a move names a stack that is not in the drawing.
    #[error("line {line}: stack {stack} does not exist (there are {stacks})")]
    NoSuchStack {
        /// 1-based line number of the move.
        line: usize,
        /// 1-based stack number as written.
        stack: usize,
        /// Number of stacks in the drawing.
        stacks: usize,
    },

    /// Day 5: a move takes more crates than the stack holds.
    #[error("line {line}: cannot take {requested} crates from stack {stack} holding {available}")]
    NotEnoughCrates {
        /// 1-based line number of the move.
        line: usize,
        /// 1-based stack number as written.
        stack: usize,
        /// Crates the move asked for.
        requested: usize,
        /// Crates actually on the stack.
        available: usize,
    },

    /// Day 6: no window of distinct characters exists.
    #[error("no marker of {len} distinct characters in the stream")]
    NoMarker {
        /// Marker length that was searched for.
        len: usize,
    },

    /// Day 7: a listing or relative `cd` arrived before the first `cd`.
    #[error("line {line}: no working directory yet")]
    NoWorkingDirectory {
        /// 1-based line number.
        line: usize,
    },

    /// Day 7: `cd ..` issued at the root.
    #[error("line {line}: root directory has no parent")]
    AboveRoot {
        /// 1-based line number.
        line: usize,
    },

    /// Day 7: no single directory frees enough space.
    #[error("no directory is large enough to free {needed} bytes")]
    NothingToDelete {
        /// Bytes that still need freeing.
        needed: u64,
    },

    /// Day 8: a grid row differs in width from the first row.
    #[error("line {line}: row has {width} trees, expected {expected}")]
    RaggedGrid {
        /// 1-based line number.
        line: usize,
        /// Width of this row.
        width: usize,
        /// Width of the first row.
        expected: usize,
    },
}

impl PuzzleError {
    /// Shorthand for [`PuzzleError::Parse`] with a 0-based line index.
    pub fn parse(index: usize, content: &str, expected: &'static str) -> Self {
        PuzzleError::Parse { line: index + 1, content: content.to_owned(), expected }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_error_reports_one_based_line() {
        let e = PuzzleError::parse(0, "A Q", "two shape letters");
        assert_eq!(e.to_string(), r#"line 1: cannot parse "A Q" as two shape letters"#);
    }

    #[test]
    fn not_enough_crates_message() {
        let e = PuzzleError::NotEnoughCrates { line: 7, stack: 2, requested: 4, available: 1 };
        assert_eq!(e.to_string(), "line 7: cannot take 4 crates from stack 2 holding 1");
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<PuzzleError>();
    }
}
