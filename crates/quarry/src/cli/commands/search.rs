//! Implementation of `quarry search`.

use std::process::ExitCode;

use serde::Serialize;

use crate::cli::{args::SearchCommand, corpus};

/// JSON shape of a search run.
#[derive(Serialize)]
struct SearchReport<'a> {
    /// The query as given.
    query: &'a str,
    /// Number of matching documents.
    count: usize,
    /// Matching document ids, sorted.
    matches: Vec<String>,
}

/// Indexes the directory and prints the documents matching the query.
pub fn run(cmd: &SearchCommand) -> ExitCode {
    let searcher = match corpus::load(&cmd.dir) {
        Ok(searcher) => searcher,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if cmd.explain {
        match quarry_index::parse_query(&cmd.query) {
            Ok(parsed) => println!("query: {parsed}"),
            Err(e) => {
                eprintln!("error: {e}");
                return ExitCode::FAILURE;
            }
        }
    }

    let mut matches: Vec<String> = match searcher.search(&cmd.query) {
        Ok(ids) => ids.into_iter().map(|d| d.as_str().to_string()).collect(),
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    matches.sort();

    if cmd.json {
        let report = SearchReport {
            query: &cmd.query,
            count: matches.len(),
            matches,
        };
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("error: cannot encode results: {e}");
                return ExitCode::FAILURE;
            }
        }
    } else if matches.is_empty() {
        println!("no matches");
    } else {
        for id in &matches {
            println!("{id}");
        }
    }

    ExitCode::SUCCESS
}
