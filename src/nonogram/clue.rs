#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Clues and the block decomposition of a line.
//!
//! A clue is the ordered list of block lengths a line must contain, each
//! block being a maximal run of filled cells, blocks separated by at least
//! one empty cell. The empty clue describes an entirely blank line.

use bit_vec::BitVec;
use smallvec::SmallVec;

/// Block lengths, inline for the short clues real puzzles have.
pub type Blocks = SmallVec<[usize; 8]>;

/// An ordered sequence of block lengths for one row or column.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Clue(Blocks);

impl Clue {
    /// Creates a clue from block lengths.
    #[must_use]
    pub const fn new(blocks: Blocks) -> Self {
        Self(blocks)
    }

    /// The empty clue: an all-blank line.
    #[must_use]
    pub fn empty() -> Self {
        Self(Blocks::new())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of blocks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The block lengths as a slice.
    #[must_use]
    pub fn blocks(&self) -> &[usize] {
        &self.0
    }

    /// Minimum line length able to hold this clue: the blocks plus one
    /// separator between each adjacent pair.
    #[must_use]
    pub fn min_len(&self) -> usize {
        let total: usize = self.0.iter().sum();
        total + self.0.len().saturating_sub(1)
    }

    /// Whether `line`'s filled blocks are exactly this clue.
    #[must_use]
    pub fn matches(&self, line: &BitVec) -> bool {
        blocks_of(line.iter()) == self.0
    }
}

impl From<Vec<usize>> for Clue {
    fn from(blocks: Vec<usize>) -> Self {
        Self(SmallVec::from_vec(blocks))
    }
}

impl From<&[usize]> for Clue {
    fn from(blocks: &[usize]) -> Self {
        Self(SmallVec::from_slice(blocks))
    }
}

/// Decomposes a sequence of bits into its run lengths of consecutive ones.
pub fn blocks_of(bits: impl IntoIterator<Item = bool>) -> Blocks {
    let mut blocks = Blocks::new();
    let mut run = 0_usize;
    for bit in bits {
        if bit {
            run += 1;
        } else if run > 0 {
            blocks.push(run);
            run = 0;
        }
    }
    if run > 0 {
        blocks.push(run);
    }
    blocks
}
