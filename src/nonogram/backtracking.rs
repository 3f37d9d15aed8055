#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! The exact depth-first solver.
//!
//! The solver first runs the propagator on the fully unknown grid with full
//! candidate sets. If that alone completes the grid, done; if it
//! contradicts, the instance is unsolvable. Otherwise it branches on an
//! unknown cell, trying empty before filled. Each trial restricts the
//! cell's row and column candidate sets to patterns agreeing with the trial
//! value, re-propagates, and recurses; the first success propagates back
//! out unchanged. Both values failing fails the branch.
//!
//! Branches are value-semantic copies. The grid is cloned outright (R×C
//! cells); the candidate collections clone as vectors of `Rc`s, so a branch
//! pays full copies only for the lines it actually restricts or prunes.
//! Siblings never observe each other's mutations.

use crate::nonogram::cell::Cell;
use crate::nonogram::cell_selection::{CellSelection, FirstUnknown};
use crate::nonogram::grid::Grid;
use crate::nonogram::pattern::PatternCache;
use crate::nonogram::propagation::{propagate, LineCandidates, LineKind, Propagation};
use crate::nonogram::puzzle::Puzzle;
use crate::nonogram::solver::{SolveStats, Solver};

/// Exact backtracking solver, generic over the branching heuristic.
#[derive(Clone, Debug)]
pub struct Backtracking<S: CellSelection = FirstUnknown> {
    puzzle: Puzzle,
    selector: S,
    stats: SolveStats,
}

impl<S: CellSelection> Solver for Backtracking<S> {
    fn new(puzzle: Puzzle) -> Self {
        Self {
            puzzle,
            selector: S::new(),
            stats: SolveStats::default(),
        }
    }

    /// Solves the instance exactly.
    ///
    /// Returns the first satisfying grid found. `None` means the search
    /// tree was exhausted, which proves no solution exists. Oversized clues
    /// fall out of the same path: their pattern sets are empty, so the root
    /// propagation contradicts immediately.
    fn solve(&mut self) -> Option<Grid> {
        self.stats = SolveStats::default();

        let mut cache = PatternCache::new();
        let width = self.puzzle.width();
        let height = self.puzzle.height();
        let mut candidates = LineCandidates {
            rows: self
                .puzzle
                .row_clues()
                .iter()
                .map(|clue| cache.patterns(width, clue))
                .collect(),
            cols: self
                .puzzle
                .col_clues()
                .iter()
                .map(|clue| cache.patterns(height, clue))
                .collect(),
        };

        let mut grid = Grid::new(height, width);
        self.stats.propagations += 1;
        if propagate(&mut grid, &mut candidates) == Propagation::Contradiction {
            return None;
        }

        let selector = self.selector.clone();
        self.search(&selector, grid, candidates)
    }

    fn stats(&self) -> SolveStats {
        self.stats
    }
}

impl<S: CellSelection> Backtracking<S> {
    fn search(
        &mut self,
        selector: &S,
        grid: Grid,
        candidates: LineCandidates,
    ) -> Option<Grid> {
        let Some((row, col)) = selector.pick(&grid, &candidates) else {
            return Some(grid);
        };

        self.stats.decisions += 1;

        for filled in [false, true] {
            let mut branch_cands = candidates.clone();
            if !branch_cands.restrict(LineKind::Row, row, col, filled) {
                continue;
            }
            if !branch_cands.restrict(LineKind::Col, col, row, filled) {
                continue;
            }

            let mut branch_grid = grid.clone();
            branch_grid.set(row, col, Cell::from_bit(filled));

            self.stats.propagations += 1;
            if propagate(&mut branch_grid, &mut branch_cands) == Propagation::Contradiction {
                continue;
            }

            if let Some(solution) = self.search(selector, branch_grid, branch_cands) {
                return Some(solution);
            }
        }

        self.stats.backtracks += 1;
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nonogram::cell_selection::MostConstrained;
    use crate::nonogram::clue::Clue;

    fn puzzle(rows: Vec<Vec<usize>>, cols: Vec<Vec<usize>>) -> Puzzle {
        Puzzle::new(
            rows.into_iter().map(Clue::from).collect(),
            cols.into_iter().map(Clue::from).collect(),
        )
    }

    #[test]
    fn test_single_empty_cell() {
        let p = puzzle(vec![vec![]], vec![vec![]]);
        let mut solver = Backtracking::<FirstUnknown>::new(p.clone());
        let grid = solver.solve().unwrap();
        assert_eq!(grid.get(0, 0), Cell::Empty);
        assert!(p.verify(&grid));
    }

    #[test]
    fn test_full_row() {
        let p = puzzle(vec![vec![3]], vec![vec![1], vec![1], vec![1]]);
        let mut solver = Backtracking::<FirstUnknown>::new(p.clone());
        let grid = solver.solve().unwrap();
        for col in 0..3 {
            assert_eq!(grid.get(0, col), Cell::Filled);
        }
        assert!(p.verify(&grid));
    }

    #[test]
    fn test_ambiguous_diagonal() {
        // Two solutions exist (identity and its mirror); either verifies.
        let p = puzzle(vec![vec![1], vec![1]], vec![vec![1], vec![1]]);
        let mut solver = Backtracking::<FirstUnknown>::new(p.clone());
        let grid = solver.solve().unwrap();
        assert!(p.verify(&grid));
    }

    #[test]
    fn test_infeasible_oversized_clue() {
        let p = puzzle(vec![vec![2]], vec![vec![1]]);
        let mut solver = Backtracking::<FirstUnknown>::new(p);
        assert!(solver.solve().is_none());
    }

    #[test]
    fn test_infeasible_inconsistent_totals() {
        // Row demands 2 filled cells, columns demand none.
        let p = puzzle(vec![vec![2]], vec![vec![], vec![]]);
        let mut solver = Backtracking::<FirstUnknown>::new(p);
        assert!(solver.solve().is_none());
    }

    #[test]
    fn test_plus_shape_requires_search_free_inference() {
        let p = puzzle(
            vec![vec![1], vec![3], vec![1]],
            vec![vec![1], vec![3], vec![1]],
        );
        let mut solver = Backtracking::<FirstUnknown>::new(p.clone());
        let grid = solver.solve().unwrap();
        assert!(p.verify(&grid));
        assert_eq!(grid.get(1, 1), Cell::Filled);
        assert_eq!(grid.get(0, 0), Cell::Empty);
    }

    #[test]
    fn test_five_by_five_heart() {
        let p = puzzle(
            vec![vec![1, 1], vec![5], vec![5], vec![3], vec![1]],
            vec![vec![2], vec![4], vec![4], vec![4], vec![2]],
        );
        let mut solver = Backtracking::<FirstUnknown>::new(p.clone());
        let grid = solver.solve().unwrap();
        assert!(p.verify(&grid));
    }

    #[test]
    fn test_most_constrained_agrees_with_first_unknown() {
        let p = puzzle(
            vec![vec![2], vec![1, 1], vec![2]],
            vec![vec![1, 1], vec![1, 1], vec![2]],
        );
        let mut first = Backtracking::<FirstUnknown>::new(p.clone());
        let mut constrained = Backtracking::<MostConstrained>::new(p.clone());
        let a = first.solve();
        let b = constrained.solve();
        match (a, b) {
            (Some(a), Some(b)) => {
                assert!(p.verify(&a));
                assert!(p.verify(&b));
            }
            (None, None) => {}
            _ => panic!("heuristics disagreed on satisfiability"),
        }
    }

    #[test]
    fn test_stats_counted() {
        let p = puzzle(vec![vec![1], vec![1]], vec![vec![1], vec![1]]);
        let mut solver = Backtracking::<FirstUnknown>::new(p);
        let _ = solver.solve();
        let stats = solver.stats();
        assert!(stats.propagations >= 1);
    }
}
