#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Scoring how far a line is from satisfying its clue.
//!
//! The score compares the line's block decomposition with the clue
//! position-by-position: the absolute length difference over the common
//! prefix, plus the lengths of surplus blocks, plus the values of unmatched
//! clue entries. Zero exactly when the decomposition equals the clue.
//!
//! This is a heuristic distance, not an edit distance: an inserted block
//! shifts the alignment of everything after it and the score makes no
//! attempt to re-align. It runs in the innermost local-search loop and is
//! deliberately a single pass over the line.

use crate::nonogram::clue::{blocks_of, Clue};
use bit_vec::BitVec;

/// Non-negative distance of `line` from `clue`; zero iff the line's blocks
/// are exactly the clue.
#[must_use]
pub fn line_error(line: &BitVec, clue: &Clue) -> usize {
    let blocks = blocks_of(line.iter());
    let wanted = clue.blocks();

    let common = blocks.len().min(wanted.len());
    let mut error = 0;
    for i in 0..common {
        error += blocks[i].abs_diff(wanted[i]);
    }
    // Spurious blocks beyond the clue, or clue entries with no block.
    error += blocks[common..].iter().sum::<usize>();
    error += wanted[common..].iter().sum::<usize>();
    error
}
