//! Query parsing for quarry search.
//!
//! The query language is free text mixing bare words with quoted
//! phrases:
//!
//! - **Words**: `wharves Manhattoes` — every word must appear somewhere
//!   in a matching document.
//! - **Phrases**: `"Call me Ishmael"` — the words must appear
//!   contiguously and in order.
//!
//! Atoms combine by implicit AND. The double quote is the only
//! metacharacter. Words and phrase bodies run through the same
//! tokenizer as document ingestion, so a query matches exactly what
//! was indexed.
//!
//! # Example
//!
//! ```
//! let query = quarry_query::parse("wharves \"Call me Ishmael\"").unwrap();
//! assert!(query.terms.contains("wharves"));
//! assert_eq!(query.phrases, [["Call", "me", "Ishmael"]]);
//! ```

#![warn(missing_docs)]

mod ast;
mod error;
mod lexer;
mod parser;

pub use ast::Query;
pub use error::BadQuery;
pub use parser::parse;
