#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Grid representations.
//!
//! Two grids live here: [`Grid`], the tri-state board the exact solver
//! mutates through propagation and branching, and [`BitGrid`], the fully
//! assigned binary board the local search flips bits in. `BitGrid` keeps a
//! row-major and a column-major mirror so extracting either kind of line is
//! a plain index.

use crate::nonogram::cell::Cell;
use bit_vec::BitVec;
use std::fmt::Display;

/// An R×C matrix of [`Cell`]s, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates a fully `Unknown` grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Unknown; rows * cols],
        }
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// The cells of row `row`, materialised in order.
    #[must_use]
    pub fn row(&self, row: usize) -> Vec<Cell> {
        self.cells[row * self.cols..(row + 1) * self.cols].to_vec()
    }

    /// The cells of column `col`, materialised in order.
    #[must_use]
    pub fn col(&self, col: usize) -> Vec<Cell> {
        (0..self.rows).map(|r| self.get(r, col)).collect()
    }

    /// The first `Unknown` cell in row-major scan order.
    #[must_use]
    pub fn first_unknown(&self) -> Option<(usize, usize)> {
        self.cells
            .iter()
            .position(|c| !c.is_known())
            .map(|i| (i / self.cols, i % self.cols))
    }

    /// All `Unknown` cells in row-major order.
    pub fn unknowns(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| !c.is_known())
            .map(|(i, _)| (i / self.cols, i % self.cols))
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.cells.iter().all(|c| c.is_known())
    }

    /// Row `row` as bits, treating `Unknown` as empty.
    /// Only meaningful on a complete grid.
    #[must_use]
    pub fn row_bits(&self, row: usize) -> BitVec {
        self.cells[row * self.cols..(row + 1) * self.cols]
            .iter()
            .map(|&c| c == Cell::Filled)
            .collect()
    }

    /// Column `col` as bits, treating `Unknown` as empty.
    #[must_use]
    pub fn col_bits(&self, col: usize) -> BitVec {
        (0..self.rows).map(|r| self.get(r, col) == Cell::Filled).collect()
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.rows {
            for col in 0..self.cols {
                write!(f, "{}", self.get(row, col))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// A fully assigned binary grid with row-major and column-major mirrors.
///
/// The mirrors are kept consistent by construction: the only mutations are
/// [`BitGrid::flip`] and wholesale re-randomisation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BitGrid {
    rows: usize,
    cols: usize,
    by_row: Vec<BitVec>,
    by_col: Vec<BitVec>,
}

impl BitGrid {
    /// Creates an all-empty grid.
    #[must_use]
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            by_row: vec![BitVec::from_elem(cols, false); rows],
            by_col: vec![BitVec::from_elem(rows, false); cols],
        }
    }

    /// Creates a grid of independent uniform random bits drawn from `rng`.
    #[must_use]
    pub fn random(rows: usize, cols: usize, rng: &mut fastrand::Rng) -> Self {
        let mut grid = Self::new(rows, cols);
        for r in 0..rows {
            for c in 0..cols {
                if rng.bool() {
                    grid.flip(r, c);
                }
            }
        }
        grid
    }

    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> bool {
        self.by_row[row][col]
    }

    /// Inverts one cell in both mirrors.
    pub fn flip(&mut self, row: usize, col: usize) {
        let bit = !self.by_row[row][col];
        self.by_row[row].set(col, bit);
        self.by_col[col].set(row, bit);
    }

    #[must_use]
    pub fn row(&self, row: usize) -> &BitVec {
        &self.by_row[row]
    }

    #[must_use]
    pub fn col(&self, col: usize) -> &BitVec {
        &self.by_col[col]
    }

    /// Converts to a [`Grid`] with every cell known.
    #[must_use]
    pub fn to_grid(&self) -> Grid {
        let mut grid = Grid::new(self.rows, self.cols);
        for r in 0..self.rows {
            for c in 0..self.cols {
                grid.set(r, c, Cell::from_bit(self.get(r, c)));
            }
        }
        grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_new_is_unknown() {
        let grid = Grid::new(2, 3);
        assert_eq!(grid.first_unknown(), Some((0, 0)));
        assert!(!grid.is_complete());
        assert_eq!(grid.unknowns().count(), 6);
    }

    #[test]
    fn test_grid_set_get() {
        let mut grid = Grid::new(2, 2);
        grid.set(1, 0, Cell::Filled);
        assert_eq!(grid.get(1, 0), Cell::Filled);
        assert_eq!(grid.get(0, 0), Cell::Unknown);
        assert_eq!(grid.col(0), vec![Cell::Unknown, Cell::Filled]);
    }

    #[test]
    fn test_grid_first_unknown_scan_order() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Cell::Empty);
        grid.set(0, 1, Cell::Filled);
        assert_eq!(grid.first_unknown(), Some((1, 0)));
    }

    #[test]
    fn test_grid_display() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Cell::Filled);
        grid.set(0, 1, Cell::Empty);
        grid.set(1, 0, Cell::Empty);
        grid.set(1, 1, Cell::Filled);
        assert_eq!(grid.to_string(), "#.\n.#\n");
    }

    #[test]
    fn test_bit_grid_flip_updates_both_mirrors() {
        let mut grid = BitGrid::new(2, 3);
        grid.flip(1, 2);
        assert!(grid.get(1, 2));
        assert!(grid.row(1)[2]);
        assert!(grid.col(2)[1]);
        grid.flip(1, 2);
        assert!(!grid.get(1, 2));
    }

    #[test]
    fn test_bit_grid_random_is_reproducible() {
        let a = BitGrid::random(4, 4, &mut fastrand::Rng::with_seed(7));
        let b = BitGrid::random(4, 4, &mut fastrand::Rng::with_seed(7));
        assert_eq!(a, b);
    }

    #[test]
    fn test_bit_grid_to_grid() {
        let mut bits = BitGrid::new(1, 2);
        bits.flip(0, 1);
        let grid = bits.to_grid();
        assert_eq!(grid.get(0, 0), Cell::Empty);
        assert_eq!(grid.get(0, 1), Cell::Filled);
        assert!(grid.is_complete());
    }
}
