//! Implementation of `quarry stats`.

use std::process::ExitCode;

use crate::cli::{args::StatsCommand, corpus};

/// Indexes the directory and prints corpus counts.
pub fn run(cmd: &StatsCommand) -> ExitCode {
    match corpus::load(&cmd.dir) {
        Ok(searcher) => {
            println!("documents: {}", searcher.document_count());
            println!("terms: {}", searcher.term_count());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
