#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Branching-cell heuristics for the exact solver.
//!
//! Which unknown cell to branch on does not affect soundness or
//! completeness, only the shape of the search tree, so the choice is a
//! pluggable strategy.

use crate::nonogram::grid::Grid;
use crate::nonogram::propagation::LineCandidates;

/// Picks the next cell to branch on. `None` means the grid is complete.
pub trait CellSelection: Clone {
    fn new() -> Self;
    fn pick(&self, grid: &Grid, candidates: &LineCandidates) -> Option<(usize, usize)>;
}

/// The first unknown cell in row-major scan order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FirstUnknown;

impl CellSelection for FirstUnknown {
    fn new() -> Self {
        Self
    }

    fn pick(&self, grid: &Grid, _: &LineCandidates) -> Option<(usize, usize)> {
        grid.first_unknown()
    }
}

/// The unknown cell whose crossing lines have the fewest surviving
/// candidates, measured as the product of its row's and column's set sizes.
/// Smaller products mean both branch values can be refuted (or confirmed)
/// with less work.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MostConstrained;

impl CellSelection for MostConstrained {
    fn new() -> Self {
        Self
    }

    fn pick(&self, grid: &Grid, candidates: &LineCandidates) -> Option<(usize, usize)> {
        grid.unknowns().min_by_key(|&(row, col)| {
            candidates.rows[row]
                .len()
                .saturating_mul(candidates.cols[col].len())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonogram::cell::Cell;
    use crate::nonogram::clue::Clue;
    use crate::nonogram::pattern::generate;
    use std::rc::Rc;

    fn uniform_candidates(rows: usize, cols: usize, clue: &Clue) -> LineCandidates {
        LineCandidates {
            rows: (0..rows).map(|_| Rc::new(generate(cols, clue))).collect(),
            cols: (0..cols).map(|_| Rc::new(generate(rows, clue))).collect(),
        }
    }

    #[test]
    fn test_first_unknown_scan_order() {
        let mut grid = Grid::new(2, 2);
        grid.set(0, 0, Cell::Filled);
        let candidates = uniform_candidates(2, 2, &Clue::from(vec![1]));
        assert_eq!(FirstUnknown.pick(&grid, &candidates), Some((0, 1)));
    }

    #[test]
    fn test_complete_grid_yields_none() {
        let mut grid = Grid::new(1, 1);
        grid.set(0, 0, Cell::Empty);
        let candidates = uniform_candidates(1, 1, &Clue::empty());
        assert_eq!(FirstUnknown.pick(&grid, &candidates), None);
        assert_eq!(MostConstrained.pick(&grid, &candidates), None);
    }

    #[test]
    fn test_most_constrained_prefers_small_sets() {
        let grid = Grid::new(2, 2);
        let mut candidates = uniform_candidates(2, 2, &Clue::from(vec![1]));
        // Every product is 2x2 = 4; pin column 1 to a single pattern so its
        // cells drop to 2.
        candidates.cols[1] = Rc::new(generate(2, &Clue::from(vec![2])));
        assert_eq!(MostConstrained.pick(&grid, &candidates), Some((0, 1)));
    }
}
