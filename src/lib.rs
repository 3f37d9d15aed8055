//! Nonogram solving engines and their supporting types.
//!
//! Two engines live under [`nonogram`]: an exact backtracking solver built
//! on candidate-pattern generation and arc-consistency propagation, and an
//! anytime stochastic local-search solver that repairs a random grid by
//! greedy, noisy single-cell flips with restarts.

/// The `nonogram` module holds the puzzle model, both solving engines, and
/// the puzzle file reader.
pub mod nonogram;
