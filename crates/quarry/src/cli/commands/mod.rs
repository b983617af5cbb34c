//! Command implementations and dispatch.

pub mod inspect;
pub mod search;
pub mod stats;

use std::process::ExitCode;

use super::args::Commands;

/// Dispatches to the selected subcommand.
pub fn run(command: Commands) -> ExitCode {
    match command {
        Commands::Search(cmd) => search::run(&cmd),
        Commands::Inspect(cmd) => inspect::run(&cmd),
        Commands::Stats(cmd) => stats::run(&cmd),
    }
}
