//! Byte-stream tokenizer for the quarry search engine.
//!
//! Ingestion and query parsing share one classification: a term is a
//! maximal run of bytes that are neither whitespace nor ASCII
//! punctuation; everything else separates terms. Each emitted term
//! carries a 0-based position counted over emitted terms only, so
//! discarded separator runs never leave gaps.
//!
//! Terms are case-sensitive and byte-oriented: no folding, no stemming,
//! digits and non-ASCII bytes are ordinary term bytes.
//!
//! # Example
//!
//! ```
//! let terms: Vec<_> = quarry_text::tokenize("Is-hma--el").map(|t| t.text).collect();
//! assert_eq!(terms, ["Is", "hma", "el"]);
//! ```

#![warn(missing_docs)]

mod tokenizer;

pub use tokenizer::{Token, Tokenizer, Tokens, is_separator, read_tokens, tokenize};
