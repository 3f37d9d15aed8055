#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
//! Stochastic repair solver.
//!
//! Starts from a uniformly random grid and repeatedly flips one cell of a
//! line that still violates its clue, preferring the flip that most reduces
//! the combined error of the flipped cell's row and column. A small noise
//! probability overrides the greedy choice when it is not strictly
//! improving, and a restart policy re-randomises the grid after prolonged
//! stagnation.
//!
//! This engine is anytime and unsound: it never reports infeasibility, and
//! on budget exhaustion it returns the lowest-error grid observed across
//! the whole run, restarts included. Callers that need a definite answer
//! check the returned grid's residual error (or [`Puzzle::verify`]).
//!
//! All randomness flows through one injected `fastrand::Rng`, so a seeded
//! run replays exactly.

use crate::nonogram::error_model::line_error;
use crate::nonogram::grid::{BitGrid, Grid};
use crate::nonogram::puzzle::Puzzle;
use crate::nonogram::restarter::{RestartPolicy, Stagnation};
use crate::nonogram::solver::{SolveStats, Solver};

/// Tuning knobs for [`LocalSearch`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocalSearchConfig {
    /// Flip budget for the whole run, restarts included.
    pub max_iterations: usize,
    /// Iterations without improvement before the restart policy fires.
    pub restart_threshold: usize,
    /// Probability of replacing a non-improving greedy choice with a
    /// uniform random position.
    pub noise: f64,
    /// RNG seed; `None` seeds from entropy.
    pub seed: Option<u64>,
}

impl Default for LocalSearchConfig {
    fn default() -> Self {
        Self {
            max_iterations: 300_000,
            restart_threshold: 10_000,
            noise: 0.1,
            seed: None,
        }
    }
}

/// WalkSAT-style local search over full grids.
#[derive(Clone, Debug)]
pub struct LocalSearch<R: RestartPolicy = Stagnation> {
    puzzle: Puzzle,
    config: LocalSearchConfig,
    stats: SolveStats,
    _policy: std::marker::PhantomData<R>,
}

impl<R: RestartPolicy> Solver for LocalSearch<R> {
    fn new(puzzle: Puzzle) -> Self {
        Self::with_config(puzzle, LocalSearchConfig::default())
    }

    /// Runs the search. Always returns a grid; inspect
    /// `stats().residual_error` to tell a solution from a best effort.
    fn solve(&mut self) -> Option<Grid> {
        self.stats = SolveStats::default();

        let mut rng = self
            .config
            .seed
            .map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
        let mut policy = R::new(self.config.restart_threshold);

        let mut state = State::random(&self.puzzle, &mut rng);
        let mut best_since_restart = state.total();
        let mut best_total = state.total();
        let mut best_grid = state.grid.clone();

        for _ in 0..self.config.max_iterations {
            if state.total() == 0 {
                break;
            }

            self.step(&mut state, &mut rng);
            self.stats.flips += 1;

            let total = state.total();
            if total < best_total {
                best_total = total;
                best_grid = state.grid.clone();
            }

            let improved = total < best_since_restart;
            if improved {
                best_since_restart = total;
            }
            if policy.note(!improved) {
                state = State::random(&self.puzzle, &mut rng);
                best_since_restart = state.total();
                if best_since_restart < best_total {
                    best_total = best_since_restart;
                    best_grid = state.grid.clone();
                }
            }
        }

        self.stats.restarts = policy.num_restarts();
        self.stats.residual_error = best_total;
        Some(best_grid.to_grid())
    }

    fn stats(&self) -> SolveStats {
        self.stats
    }
}

impl<R: RestartPolicy> LocalSearch<R> {
    /// Builds a solver with explicit tuning.
    #[must_use]
    pub fn with_config(puzzle: Puzzle, config: LocalSearchConfig) -> Self {
        Self {
            puzzle,
            config,
            stats: SolveStats::default(),
            _policy: std::marker::PhantomData,
        }
    }

    /// One repair iteration: pick a bad line, pick a flip, apply it.
    fn step(&self, state: &mut State, rng: &mut fastrand::Rng) {
        let bad_rows: Vec<usize> = (0..state.grid.rows())
            .filter(|&r| state.row_errors[r] > 0)
            .collect();
        let bad_cols: Vec<usize> = (0..state.grid.cols())
            .filter(|&c| state.col_errors[c] > 0)
            .collect();

        // 50/50 between a bad row and a bad column when both exist.
        let repair_row = !bad_rows.is_empty() && (bad_cols.is_empty() || rng.bool());

        if repair_row {
            let row = bad_rows[rng.usize(..bad_rows.len())];
            let len = state.grid.cols();
            let col = self.choose_flip(state, rng, len, |state, col| {
                state.improvement(&self.puzzle, row, col)
            });
            state.flip(&self.puzzle, row, col);
        } else {
            let col = bad_cols[rng.usize(..bad_cols.len())];
            let len = state.grid.rows();
            let row = self.choose_flip(state, rng, len, |state, row| {
                state.improvement(&self.puzzle, row, col)
            });
            state.flip(&self.puzzle, row, col);
        }
    }

    /// Greedy-with-noise position choice along one line.
    ///
    /// Scans every position, keeping the first-seen maximum improvement.
    /// Falls back to a uniform position when nothing scored above the
    /// starting bar, and with probability `noise` overrides a choice whose
    /// improvement is not strictly positive.
    fn choose_flip(
        &self,
        state: &mut State,
        rng: &mut fastrand::Rng,
        len: usize,
        improvement: impl Fn(&mut State, usize) -> i64,
    ) -> usize {
        let mut best_improve = -1_i64;
        let mut best_pos = None;
        for pos in 0..len {
            let improve = improvement(state, pos);
            if improve > best_improve {
                best_improve = improve;
                best_pos = Some(pos);
            }
        }

        let mut pos = best_pos.unwrap_or_else(|| rng.usize(..len));
        if best_improve <= 0 && rng.f64() < self.config.noise {
            pos = rng.usize(..len);
        }
        pos
    }
}

/// The mutable search state: the grid plus cached per-line errors.
#[derive(Clone, Debug)]
struct State {
    grid: BitGrid,
    row_errors: Vec<usize>,
    col_errors: Vec<usize>,
}

impl State {
    fn random(puzzle: &Puzzle, rng: &mut fastrand::Rng) -> Self {
        let grid = BitGrid::random(puzzle.height(), puzzle.width(), rng);
        let row_errors = (0..puzzle.height())
            .map(|r| line_error(grid.row(r), puzzle.row_clue(r)))
            .collect();
        let col_errors = (0..puzzle.width())
            .map(|c| line_error(grid.col(c), puzzle.col_clue(c)))
            .collect();
        Self {
            grid,
            row_errors,
            col_errors,
        }
    }

    fn total(&self) -> usize {
        self.row_errors.iter().sum::<usize>() + self.col_errors.iter().sum::<usize>()
    }

    /// Error reduction a flip of `(row, col)` would achieve on its own row
    /// and column. Flips the cell, measures, flips it back.
    fn improvement(&mut self, puzzle: &Puzzle, row: usize, col: usize) -> i64 {
        let before = (self.row_errors[row] + self.col_errors[col]) as i64;
        self.grid.flip(row, col);
        let after = (line_error(self.grid.row(row), puzzle.row_clue(row))
            + line_error(self.grid.col(col), puzzle.col_clue(col))) as i64;
        self.grid.flip(row, col);
        before - after
    }

    /// Applies a flip and refreshes the two affected line errors.
    fn flip(&mut self, puzzle: &Puzzle, row: usize, col: usize) {
        self.grid.flip(row, col);
        self.row_errors[row] = line_error(self.grid.row(row), puzzle.row_clue(row));
        self.col_errors[col] = line_error(self.grid.col(col), puzzle.col_clue(col));
    }
}
