#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The tri-state cell of a nonogram grid.

use std::fmt::Display;

/// State of a single grid cell.
///
/// The exact solver works with all three states; the local search solver
/// only ever produces `Filled` and `Empty`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Cell {
    /// Not yet determined.
    #[default]
    Unknown,
    /// Part of a block.
    Filled,
    /// Definitely blank.
    Empty,
}

impl Cell {
    /// Returns `true` unless the cell is `Unknown`.
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Maps a pattern bit to a known cell state.
    #[must_use]
    pub const fn from_bit(filled: bool) -> Self {
        if filled { Self::Filled } else { Self::Empty }
    }

    /// Whether a known cell agrees with a pattern bit.
    /// An `Unknown` cell agrees with anything.
    #[must_use]
    pub const fn agrees_with(self, filled: bool) -> bool {
        match self {
            Self::Unknown => true,
            Self::Filled => filled,
            Self::Empty => !filled,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "."),
            Self::Filled => write!(f, "#"),
            Self::Unknown => write!(f, " "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_bit() {
        assert_eq!(Cell::from_bit(true), Cell::Filled);
        assert_eq!(Cell::from_bit(false), Cell::Empty);
    }

    #[test]
    fn test_agrees_with() {
        assert!(Cell::Unknown.agrees_with(true));
        assert!(Cell::Unknown.agrees_with(false));
        assert!(Cell::Filled.agrees_with(true));
        assert!(!Cell::Filled.agrees_with(false));
        assert!(Cell::Empty.agrees_with(false));
        assert!(!Cell::Empty.agrees_with(true));
    }

    #[test]
    fn test_display() {
        assert_eq!(Cell::Filled.to_string(), "#");
        assert_eq!(Cell::Empty.to_string(), ".");
        assert_eq!(Cell::Unknown.to_string(), " ");
    }
}
