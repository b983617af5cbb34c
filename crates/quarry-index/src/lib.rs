//! In-memory positional full-text search for quarry.
//!
//! This crate holds the engine proper:
//!
//! - [`InvertedIndex`] — term → document → ascending occurrence
//!   positions, plus the set of documents currently present
//! - the evaluator — implicit-AND intersection with positional
//!   phrase verification
//! - [`Searcher`] — the add/remove/search façade tying the shared
//!   tokenizer, the query parser, and the index together
//!
//! # Searching
//!
//! ```
//! use quarry_index::Searcher;
//!
//! let mut searcher = Searcher::new();
//! searcher.add_document("opening", "Call me Ishmael".as_bytes())?;
//!
//! assert_eq!(searcher.search("Ishmael")?.len(), 1);
//! assert_eq!(searcher.search("\"me Ishmael\"")?.len(), 1);
//! assert!(searcher.search("Boris")?.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]

mod doc;
mod eval;
mod index;
mod searcher;

pub use doc::DocId;
pub use index::{InvertedIndex, PostingsMap};
// Query types surface here so engine consumers need only one import.
pub use quarry_query::{BadQuery, Query, parse as parse_query};
pub use searcher::Searcher;
