//! Command-line interface for the `quarry` search tool.

mod cli;

use std::process::ExitCode;

use clap::Parser;

use cli::args::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    cli::commands::run(cli.command)
}
