//! The solver binary: parses command-line arguments and drives the
//! enumerator over puzzles from files, inline text, standard input, or
//! whole directories.

use clap::{CommandFactory, Parser};

mod command_line;

use command_line::cli::{Cli, Commands, solve_dir, solve_file, solve_stdin, solve_text};

/// Global allocator using `tikv-jemallocator`, which also backs the memory
/// usage figures in the statistics table.
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() {
    let cli = Cli::parse();

    // A bare path without a subcommand solves that file, or every puzzle
    // file under it when it names a directory.
    if let Some(path) = cli.path.clone() {
        if cli.command.is_none() {
            let result = if path.is_dir() {
                solve_dir(&path, &cli.common)
            } else {
                solve_file(&path, &cli.common)
            };
            exit_on_error(result);
            return;
        }
    }

    let result = match cli.command {
        Some(Commands::File { path, common }) => solve_file(&path, &common),
        Some(Commands::Text { input, common }) => solve_text(&input, &common),
        Some(Commands::Stdin { common }) => solve_stdin(&common),
        Some(Commands::Dir { path, common }) => solve_dir(&path, &common),
        Some(Commands::Completions { shell }) => {
            let mut cmd = Cli::command();
            let name = cmd.get_name().to_string();
            clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
            Ok(())
        }
        None => {
            eprintln!("No command provided. Use --help for more information.");
            std::process::exit(1);
        }
    };

    exit_on_error(result);
}

fn exit_on_error(result: Result<(), String>) {
    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
