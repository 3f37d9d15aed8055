//! Command-line driver for the nonogram solver.
//!
//! Two engines are exposed:
//! 1. **Exact backtracking**: candidate-pattern generation, arc-consistency
//!    propagation, and depth-first search. Sound and complete; reports
//!    `No solution found` for unsatisfiable instances.
//! 2. **Local search**: WalkSAT-style single-cell repair with noise and
//!    random restarts. Anytime; always prints a grid, with the residual
//!    error telling a real solution from a best effort.
//!
//! ## Usage
//!
//! ```sh
//! # Exact solve (also the default for a bare path argument)
//! nonogram_solver solve --path puzzle.non
//! nonogram_solver puzzle.non
//!
//! # Exact solve with the most-constrained branching heuristic
//! nonogram_solver solve --path puzzle.non --cell-selection most-constrained
//!
//! # Local search with a fixed seed and a tighter budget
//! nonogram_solver local --path puzzle.non --seed 7 --max-iterations 100000
//!
//! # Solve every .non file under a directory
//! nonogram_solver dir --path puzzles/
//! ```
//!
//! The puzzle file format is described in `nonogram::parser`. Grids print
//! one row per line, `#` for filled, `.` for empty.

use clap::Parser;

mod command_line;

use command_line::cli::{run, Cli};

/// Global allocator using `tikv-jemallocator` for potentially better
/// performance and memory usage tracking.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
