//! Defines the command-line interface for the solver binary.
//!
//! Uses `clap` for parsing arguments.

use clap::{Args, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::time::Duration;
use sudoku_solver::grid::parse::{parse_file, parse_str, read_interactive};
use sudoku_solver::grid::{Dimensions, Grid};
use sudoku_solver::solver::search::{Backtracker, SearchStats, StdoutSink};
use tikv_jemalloc_ctl::{epoch, stats};

/// The command-line surface of the enumerator.
#[derive(Parser, Debug)]
#[command(name = "sudoku_solver", version, about = "An exhaustive Sudoku solution enumerator")]
pub(crate) struct Cli {
    /// An optional global path argument. If provided without a subcommand,
    /// it's treated as a puzzle file to solve (or a directory of puzzle
    /// files to solve in turn).
    #[arg(global = true)]
    pub path: Option<PathBuf>,

    /// Specifies the subcommand to execute (e.g. `file`, `text`, `stdin`).
    #[clap(subcommand)]
    pub command: Option<Commands>,

    /// Common options applicable to all commands.
    #[command(flatten)]
    pub common: CommonOptions,
}

/// Enumerates the available subcommands for the solver.
#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Solve a puzzle file (81 whitespace-delimited tokens, 1-9 or '.').
    File {
        /// Path to the puzzle file.
        #[arg(long)]
        path: PathBuf,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve a puzzle provided as plain text (e.g. "5 3 . . 7 ...").
    Text {
        /// The puzzle as 81 whitespace-delimited tokens.
        #[arg(short, long)]
        input: String,

        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Read a puzzle from standard input, token by token.
    /// Unrecognized tokens are skipped, so a typo only costs a retype.
    Stdin {
        /// Common options for this subcommand.
        #[command(flatten)]
        common: CommonOptions,
    },

    /// Solve every `.sudoku` file under a directory.
    Dir {
        /// Path to the directory to walk.
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
    /// Enable debug output, printing the parsed puzzle before solving.
    #[arg(short, long, default_value_t = false)]
    pub(crate) debug: bool,

    /// Enable printing of performance and search statistics after solving.
    #[arg(short, long, default_value_t = true)]
    pub(crate) stats: bool,

    /// Suppress the per-solution grids and print only the final count.
    #[arg(short, long, default_value_t = false)]
    pub(crate) quiet: bool,

    /// Stop after this many solutions instead of running to exhaustion.
    #[arg(short, long)]
    pub(crate) max_solutions: Option<u64>,

    /// Reject puzzles that already break row/column/box uniqueness instead
    /// of searching from them.
    #[arg(long, default_value_t = false)]
    pub(crate) validate: bool,
}

/// Solve a puzzle file.
///
/// # Errors
///
/// If the file doesn't exist or its content is malformed.
pub(crate) fn solve_file(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_file() {
        return Err(format!("Provided path is not a file: {}", path.display()));
    }

    let time = std::time::Instant::now();
    let grid = parse_file(path).map_err(|e| format!("Error parsing {}: {e}", path.display()))?;
    let parse_time = time.elapsed();

    solve_and_report(grid, common, Some(path), parse_time)
}

/// Solve a puzzle given inline on the command line.
///
/// # Errors
///
/// If the text is malformed.
pub(crate) fn solve_text(input: &str, common: &CommonOptions) -> Result<(), String> {
    let time = std::time::Instant::now();
    let grid = parse_str(input, Dimensions::CLASSIC)
        .map_err(|e| format!("Error parsing puzzle text: {e}"))?;
    let parse_time = time.elapsed();

    solve_and_report(grid, common, None, parse_time)
}

/// Read a puzzle from standard input and solve it.
///
/// # Errors
///
/// If standard input closes before a full grid has been read.
pub(crate) fn solve_stdin(common: &CommonOptions) -> Result<(), String> {
    let time = std::time::Instant::now();
    let stdin = std::io::stdin();
    let grid = read_interactive(stdin.lock(), Dimensions::CLASSIC)
        .map_err(|e| format!("Error reading puzzle: {e}"))?;
    let parse_time = time.elapsed();

    solve_and_report(grid, common, None, parse_time)
}

/// Solves every `.sudoku` file under a directory.
///
/// # Errors
///
/// If the path is not a directory, or any puzzle file fails to parse or
/// solve.
pub(crate) fn solve_dir(path: &Path, common: &CommonOptions) -> Result<(), String> {
    if !path.is_dir() {
        return Err(format!("Provided path is not a directory: {}", path.display()));
    }

    for entry in walkdir::WalkDir::new(path)
        .into_iter()
        .filter_map(Result::ok)
    {
        let file_path = entry.path();
        if !file_path.is_file() {
            continue;
        }
        if file_path.extension().is_none_or(|ext| ext != "sudoku") {
            continue;
        }

        solve_file(file_path, common)?;
    }

    Ok(())
}

/// Parses, optionally validates, enumerates, and reports one puzzle.
///
/// # Errors
///
/// If `--validate` is set and the puzzle already violates uniqueness.
pub(crate) fn solve_and_report(
    grid: Grid,
    common: &CommonOptions,
    label: Option<&Path>,
    parse_time: Duration,
) -> Result<(), String> {
    if let Some(name) = label {
        println!("Solving: {}", name.display());
    }

    if common.debug {
        println!("Parsed puzzle:\n{grid}");
        println!("Clues: {}", grid.clue_count());
        println!("Empty cells: {}", grid.empty_count());
    }

    if common.validate {
        if let Some(violation) = grid.first_violation() {
            return Err(format!("Puzzle is inconsistent: {violation}"));
        }
    }

    epoch::advance().unwrap();

    let time = std::time::Instant::now();

    let mut solver = match common.max_solutions {
        Some(limit) => Backtracker::with_limit(grid, limit),
        None => Backtracker::new(grid),
    };
    let mut sink = StdoutSink::new(!common.quiet);
    let search_stats = solver.enumerate(&mut sink);

    let elapsed = time.elapsed();

    epoch::advance().unwrap();

    let allocated_bytes = stats::allocated::mib().unwrap().read().unwrap();
    let resident_bytes = stats::resident::mib().unwrap().read().unwrap();

    #[allow(clippy::cast_precision_loss)]
    let allocated_mib = allocated_bytes as f64 / (1024.0 * 1024.0);
    #[allow(clippy::cast_precision_loss)]
    let resident_mib = resident_bytes as f64 / (1024.0 * 1024.0);

    if common.stats {
        print_stats(
            parse_time,
            elapsed,
            solver.grid(),
            &search_stats,
            allocated_mib,
            resident_mib,
        );
    }

    Ok(())
}

/// Helper function to print a single statistic line in a formatted table row.
pub(crate) fn stat_line(label: &str, value: impl std::fmt::Display) {
    println!("|  {label:<28} {value:>18}  |");
}

/// Helper function to print a statistic line that includes a rate
/// (value/second).
#[allow(clippy::cast_precision_loss)]
pub(crate) fn stat_line_with_rate(label: &str, value: u64, elapsed: f64) {
    let rate = if elapsed > 0.0 {
        value as f64 / elapsed
    } else {
        0.0
    };
    println!("|  {label:<20} {value:>12} ({rate:>9.0}/sec)  |");
}

/// Prints a summary of problem and search statistics.
pub(crate) fn print_stats(
    parse_time: Duration,
    elapsed: Duration,
    grid: &Grid,
    s: &SearchStats,
    allocated: f64,
    resident: f64,
) {
    let elapsed_secs = elapsed.as_secs_f64();

    println!("\n=======================[ Problem Statistics ]=========================");
    stat_line("Parse time (s)", format!("{:.3}", parse_time.as_secs_f64()));
    stat_line("Grid size", grid.dims().size());
    stat_line("Clues", grid.clue_count());
    stat_line("Empty cells", grid.empty_count());

    println!("========================[ Search Statistics ]========================");
    stat_line("Solutions", s.solutions);
    stat_line_with_rate("Placements", s.placements, elapsed_secs);
    stat_line_with_rate("Conflicts", s.conflicts, elapsed_secs);
    stat_line("Max depth", s.max_depth);
    stat_line("Memory usage (MiB)", format!("{allocated:.2}"));
    stat_line("Resident memory (MiB)", format!("{resident:.2}"));
    stat_line("CPU time (s)", format!("{elapsed_secs:.3}"));
    println!("=====================================================================");
}
