#![allow(clippy::cast_precision_loss)]
//! Command definitions and dispatch for the nonogram solver binary.

use clap::{Args, Parser, Subcommand, ValueEnum};
use nonogram_solver::nonogram::backtracking::Backtracking;
use nonogram_solver::nonogram::cell_selection::{FirstUnknown, MostConstrained};
use nonogram_solver::nonogram::grid::Grid;
use nonogram_solver::nonogram::local_search::{LocalSearch, LocalSearchConfig};
use nonogram_solver::nonogram::parser::parse_file;
use nonogram_solver::nonogram::puzzle::Puzzle;
use nonogram_solver::nonogram::restarter::Stagnation;
use nonogram_solver::nonogram::solver::{SolveStats, Solver};
use std::fmt::Display;
use std::path::PathBuf;
use std::time::Duration;
use tikv_jemalloc_ctl::{epoch, stats};

/// Defines the command-line interface for the nonogram solver application.
///
/// Uses `clap` for parsing arguments.
#[derive(Parser, Debug)]
#[command(name = "nonogram_solver", version, about = "A configurable nonogram solver")]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as the path to a puzzle file for the exact solver.
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `solve`, `local`, `dir`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a puzzle file with the exact backtracking solver.
    Solve {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,

        /// Branching heuristic for the search.
        #[arg(long, default_value_t = CellSelectionType::FirstUnknown)]
        cell_selection: CellSelectionType,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle file with the anytime local-search solver.
    /// Always prints a grid; check the residual error for success.
    Local {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,

        /// RNG seed for a reproducible run. Seeded from entropy if absent.
        #[arg(long)]
        seed: Option<u64>,

        /// Flip budget for the whole run.
        #[arg(long, default_value_t = 300_000)]
        max_iterations: usize,

        /// Iterations without improvement before a random restart.
        /// Defaults to 50 x rows x cols.
        #[arg(long)]
        restart_threshold: Option<usize>,

        /// Probability of a random walk step when greedy repair stalls.
        #[arg(long, default_value_t = 0.1)]
        noise: f64,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every `.non` puzzle file under a directory with the exact solver.
    Dir {
        /// Path to the directory.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Generate shell completion scripts.
    Completions {
        /// The shell to generate completions for.
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Defines common command-line options shared across different subcommands.
#[derive(Args, Debug, Default, Clone)]
pub(crate) struct CommonOptions {
    /// Enable debug output, providing more verbose logging during solving.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Re-check the returned grid against every clue by block decomposition.
    #[arg(short, long, default_value_t = true)]
    pub(crate) verify: bool,

    /// Enable printing of performance and problem statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Write the solved grid to this file in addition to printing it.
    #[arg(short, long)]
    pub(crate) output: Option<PathBuf>,
}

/// Branching heuristics selectable from the command line.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) enum CellSelectionType {
    /// First unknown cell in row-major order.
    #[default]
    FirstUnknown,
    /// Unknown cell with the fewest surviving candidate patterns.
    MostConstrained,
}

impl Display for CellSelectionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::FirstUnknown => write!(f, "first-unknown"),
            Self::MostConstrained => write!(f, "most-constrained"),
        }
    }
}

/// Dispatches a parsed command line.
pub(crate) fn run(cli: Cli) -> Result<(), String> {
    match cli.command {
        Some(Commands::Solve {
            path,
            cell_selection,
            common,
        }) => solve_exact(&path, cell_selection, &common),
        Some(Commands::Local {
            path,
            seed,
            max_iterations,
            restart_threshold,
            noise,
            common,
        }) => solve_local(&path, seed, max_iterations, restart_threshold, noise, &common),
        Some(Commands::Dir { path, common }) => solve_dir(&path, &common),
        Some(Commands::Completions { shell }) => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => match cli.path {
            Some(path) => solve_exact(&path, CellSelectionType::FirstUnknown, &cli.common),
            None => Err("no puzzle file given; see --help".into()),
        },
    }
}

/// Solves one puzzle file exactly and reports the result.
///
/// # Errors
///
/// If the file cannot be read or parsed.
pub(crate) fn solve_exact(
    path: &PathBuf,
    selection: CellSelectionType,
    common: &CommonOptions,
) -> Result<(), String> {
    let (puzzle, parse_time) = load_puzzle(path, common)?;

    let time = std::time::Instant::now();
    let (solution, solve_stats) = match selection {
        CellSelectionType::FirstUnknown => {
            let mut solver = Backtracking::<FirstUnknown>::new(puzzle.clone());
            (solver.solve(), solver.stats())
        }
        CellSelectionType::MostConstrained => {
            let mut solver = Backtracking::<MostConstrained>::new(puzzle.clone());
            (solver.solve(), solver.stats())
        }
    };
    let elapsed = time.elapsed();

    report(&puzzle, solution.as_ref(), &solve_stats, parse_time, elapsed, common)
}

/// Solves one puzzle file with the local search and reports the result.
///
/// # Errors
///
/// If the file cannot be read or parsed.
pub(crate) fn solve_local(
    path: &PathBuf,
    seed: Option<u64>,
    max_iterations: usize,
    restart_threshold: Option<usize>,
    noise: f64,
    common: &CommonOptions,
) -> Result<(), String> {
    let (puzzle, parse_time) = load_puzzle(path, common)?;

    let config = LocalSearchConfig {
        max_iterations,
        restart_threshold: restart_threshold
            .unwrap_or(50 * puzzle.height() * puzzle.width()),
        noise,
        seed,
    };

    let time = std::time::Instant::now();
    let mut solver = LocalSearch::<Stagnation>::with_config(puzzle.clone(), config);
    let solution = solver.solve();
    let elapsed = time.elapsed();
    let solve_stats = solver.stats();

    if solve_stats.residual_error > 0 {
        println!("Best effort (residual error {})", solve_stats.residual_error);
    }

    report(&puzzle, solution.as_ref(), &solve_stats, parse_time, elapsed, common)
}

/// Solves every `.non` file under a directory with the exact solver.
///
/// # Errors
///
/// If the path is not a directory, or any puzzle file fails to parse.
pub(crate) fn solve_dir(path: &PathBuf, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!("Provided path is not a directory: {}", path.display()));
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path().to_path_buf();
        if !file_path.is_file() {
            continue;
        }
        if file_path.extension().is_none_or(|ext| ext != "non") {
            eprintln!("Skipping non-puzzle file: {}", file_path.display());
            continue;
        }

        solve_exact(&file_path, CellSelectionType::FirstUnknown, common)?;
    }

    Ok(())
}

fn load_puzzle(path: &PathBuf, common: &CommonOptions) -> Result<(Puzzle, Duration), String> {
    if !path.exists() {
        return Err(format!("Puzzle file does not exist: {}", path.display()));
    }

    let time = std::time::Instant::now();
    let puzzle = parse_file(path).map_err(|e| format!("Error parsing puzzle file: {e}"))?;
    let parse_time = time.elapsed();

    println!("Solving: {}", path.display());
    if common.debug {
        println!("Parsed puzzle:\n{puzzle}");
    }

    Ok((puzzle, parse_time))
}

/// Prints the grid (or the absence of one), verification, and statistics.
fn report(
    puzzle: &Puzzle,
    solution: Option<&Grid>,
    solve_stats: &SolveStats,
    parse_time: Duration,
    elapsed: Duration,
    common: &CommonOptions,
) -> Result<(), String> {
    epoch::advance().unwrap();
    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    match solution {
        Some(grid) => {
            print!("{grid}");
            if let Some(out) = &common.output {
                std::fs::write(out, grid.to_string())
                    .map_err(|e| format!("Unable to write {}: {e}", out.display()))?;
            }
            if common.verify {
                let ok = puzzle.verify(grid);
                println!("Verified: {ok}");
            }
        }
        None => println!("No solution found"),
    }

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            puzzle,
            solve_stats,
            allocated_mib,
            resident_mib,
        );
    }

    Ok(())
}

/// Helper function to print a single statistic line in a formatted table row.
fn stat_line(label: &str, value: impl Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate (value/second).
fn stat_line_with_rate(label: &str, value: usize, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    puzzle: &Puzzle,
    s: &SolveStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Rows", puzzle.height());
    stat_line("Columns", puzzle.width());

    println!("========================[ Search Statistics ]========================");
    stat_line_with_rate("Decisions", s.decisions, elapsed_secs);
    stat_line_with_rate("Propagations", s.propagations, elapsed_secs);
    stat_line_with_rate("Backtracks", s.backtracks, elapsed_secs);
    stat_line_with_rate("Flips", s.flips, elapsed_secs);
    stat_line_with_rate("Restarts", s.restarts, elapsed_secs);
    stat_line("Residual error", s.residual_error);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
