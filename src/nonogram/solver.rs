#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Common solver interface and counters.

use crate::nonogram::grid::Grid;
use crate::nonogram::puzzle::Puzzle;

/// A nonogram solving engine.
pub trait Solver {
    /// Builds a solver for one puzzle instance.
    fn new(puzzle: Puzzle) -> Self;

    /// Attempts to solve. `None` means the engine established that no
    /// solution exists within its guarantees; the local search engine never
    /// returns `None`.
    fn solve(&mut self) -> Option<Grid>;

    /// Counters accumulated during the last `solve` call.
    fn stats(&self) -> SolveStats;
}

/// Counters reported by the CLI's statistics table.
///
/// Each engine fills the subset that is meaningful for it and leaves the
/// rest at zero.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Branching choices made by the exact solver.
    pub decisions: usize,
    /// Full propagation runs (root plus one per attempted branch value).
    pub propagations: usize,
    /// Branches abandoned after a contradiction or exhausted values.
    pub backtracks: usize,
    /// Single-cell flips applied by the local search.
    pub flips: usize,
    /// Random restarts taken by the local search.
    pub restarts: usize,
    /// Residual total error of the returned grid (zero for exact solutions).
    pub residual_error: usize,
}
