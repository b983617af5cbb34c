//! Clap argument definitions for the `quarry` CLI.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI options.
#[derive(Parser)]
#[command(name = "quarry")]
#[command(about = "In-memory full-text search over a directory of text files")]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Commands {
    /// Index a directory and run one query against it
    #[command(after_help = "\
QUERY SYNTAX:
  term              Term must appear somewhere in the document
  term1 term2       Both terms must appear (implicit AND)
  \"a b c\"           The words must appear contiguously, in order

Matching is case-sensitive, and punctuation splits words the same
way in documents and in queries.

EXAMPLES:
  quarry search docs/ Frankenstein
  quarry search docs/ '\"Call me Ishmael\"'
  quarry search docs/ 'whale \"three months\"'")]
    Search(SearchCommand),

    /// Print the token stream of one file
    Inspect(InspectCommand),

    /// Index a directory and print corpus statistics
    Stats(StatsCommand),
}

/// Arguments for `quarry search`.
#[derive(Args, Debug, Clone)]
pub struct SearchCommand {
    /// Directory holding the documents to index
    pub dir: PathBuf,

    /// The query
    pub query: String,

    /// Output in JSON format
    #[arg(long)]
    pub json: bool,

    /// Print the parsed query before the results
    #[arg(long)]
    pub explain: bool,
}

/// Arguments for `quarry inspect`.
#[derive(Args, Debug, Clone)]
pub struct InspectCommand {
    /// File to tokenize
    pub file: PathBuf,
}

/// Arguments for `quarry stats`.
#[derive(Args, Debug, Clone)]
pub struct StatsCommand {
    /// Directory holding the documents to index
    pub dir: PathBuf,
}
