//! quarry: in-memory full-text search
//!
//! A small search engine over a directory of plain-text files. Documents
//! are tokenized into case-sensitive terms on a positional inverted
//! index; queries mix bare words (implicit AND) with quoted phrases that
//! must match contiguously. The `quarry` binary indexes a directory per
//! invocation and answers one query against it.

#![warn(missing_docs)]
