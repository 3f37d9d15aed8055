#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The puzzle instance: dimensions plus row and column clues.

use crate::nonogram::clue::Clue;
use crate::nonogram::grid::Grid;
use std::fmt::Display;

/// A nonogram instance.
///
/// Construction does not check that clues fit their axis; an oversized clue
/// simply has no patterns, which the exact solver reports as unsolvable.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Puzzle {
    rows: Vec<Clue>,
    cols: Vec<Clue>,
}

impl Puzzle {
    /// Creates a puzzle from its row and column clues. The grid dimensions
    /// are implied by the clue counts.
    #[must_use]
    pub const fn new(rows: Vec<Clue>, cols: Vec<Clue>) -> Self {
        Self { rows, cols }
    }

    /// Number of grid rows.
    #[must_use]
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Number of grid columns.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cols.len()
    }

    #[must_use]
    pub fn row_clues(&self) -> &[Clue] {
        &self.rows
    }

    #[must_use]
    pub fn col_clues(&self) -> &[Clue] {
        &self.cols
    }

    #[must_use]
    pub fn row_clue(&self, row: usize) -> &Clue {
        &self.rows[row]
    }

    #[must_use]
    pub fn col_clue(&self, col: usize) -> &Clue {
        &self.cols[col]
    }

    /// Checks a complete grid against every clue by block decomposition.
    ///
    /// Returns `false` for grids of the wrong shape or with remaining
    /// `Unknown` cells (an `Unknown` decomposes as empty, so a grid that
    /// only verifies by accident of that convention still has to match).
    #[must_use]
    pub fn verify(&self, grid: &Grid) -> bool {
        if grid.rows() != self.height() || grid.cols() != self.width() {
            return false;
        }
        if !grid.is_complete() {
            return false;
        }
        (0..self.height()).all(|r| self.rows[r].matches(&grid.row_bits(r)))
            && (0..self.width()).all(|c| self.cols[c].matches(&grid.col_bits(c)))
    }
}

impl Display for Puzzle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{} x {}", self.height(), self.width())?;
        for clue in &self.rows {
            writeln!(f, "row: {:?}", clue.blocks())?;
        }
        for clue in &self.cols {
            writeln!(f, "col: {:?}", clue.blocks())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonogram::cell::Cell;

    fn cross() -> Puzzle {
        // 3x3 plus sign.
        Puzzle::new(
            vec![Clue::from(vec![1]), Clue::from(vec![3]), Clue::from(vec![1])],
            vec![Clue::from(vec![1]), Clue::from(vec![3]), Clue::from(vec![1])],
        )
    }

    #[test]
    fn test_verify_accepts_solution() {
        let puzzle = cross();
        let mut grid = Grid::new(3, 3);
        for r in 0..3 {
            for c in 0..3 {
                let filled = r == 1 || c == 1;
                grid.set(r, c, Cell::from_bit(filled));
            }
        }
        assert!(puzzle.verify(&grid));
    }

    #[test]
    fn test_verify_rejects_wrong_grid() {
        let puzzle = cross();
        let mut grid = Grid::new(3, 3);
        for r in 0..3 {
            for c in 0..3 {
                grid.set(r, c, Cell::Empty);
            }
        }
        assert!(!puzzle.verify(&grid));
    }

    #[test]
    fn test_verify_rejects_incomplete_grid() {
        let puzzle = cross();
        let grid = Grid::new(3, 3);
        assert!(!puzzle.verify(&grid));
    }

    #[test]
    fn test_verify_rejects_wrong_shape() {
        let puzzle = cross();
        let grid = Grid::new(2, 3);
        assert!(!puzzle.verify(&grid));
    }
}
