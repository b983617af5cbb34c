//! The search façade.

use std::io::{self, Read};

use quarry_query::{BadQuery, parse};
use quarry_text::read_tokens;

use crate::{DocId, eval, index::InvertedIndex};

/// An in-memory full-text search engine over a changing document set.
///
/// Documents are added under a caller-chosen [`DocId`] and removed by
/// the same id; queries mix bare words with quoted phrases and return
/// the ids of every matching document.
///
/// Searching takes `&self`, so one `Searcher` shared across threads
/// serves concurrent queries with no further synchronization. Adding
/// and removing take `&mut self`: the exclusive-writer discipline is a
/// compile-time property, and no reader can ever observe a
/// half-mutated posting list.
///
/// # Example
///
/// ```
/// use quarry_index::Searcher;
///
/// let mut searcher = Searcher::new();
/// searcher.add_document("opening", "Call me Ishmael".as_bytes())?;
///
/// let hits = searcher.search("\"me Ishmael\"")?;
/// assert_eq!(hits.len(), 1);
/// assert_eq!(hits[0].as_str(), "opening");
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Default)]
pub struct Searcher {
    /// The index plus the known-document set.
    index: InvertedIndex,
}

impl Searcher {
    /// Creates an empty searcher.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ingests `source` under `id`.
    ///
    /// Adding an id that is already present is a no-op and leaves the
    /// existing postings untouched; remove first to replace a
    /// document. A source that yields no terms still records the
    /// document as present. The source is read to completion before
    /// the index is touched, so a failing reader leaves the searcher
    /// unchanged; the only error surfaced is the reader's own.
    pub fn add_document<R: Read>(&mut self, id: impl Into<DocId>, source: R) -> io::Result<()> {
        let id = id.into();
        if self.index.contains(&id) {
            return Ok(());
        }

        let mut tokens = Vec::new();
        read_tokens(source, |token| tokens.push(token))?;

        self.index.insert_document(id.clone());
        for token in tokens {
            self.index.insert(token.text, &id, token.position);
        }
        Ok(())
    }

    /// Removes the document under `id`; unknown ids are a silent
    /// no-op, whatever the ordering of prior calls.
    pub fn remove_document(&mut self, id: &DocId) {
        self.index.remove_document(id);
    }

    /// Runs a query and returns the matching ids, unordered and
    /// without duplicates.
    ///
    /// Fails with [`BadQuery`] before touching the index. A query
    /// mentioning terms no document contains is not an error, just an
    /// empty result.
    pub fn search(&self, query: &str) -> Result<Vec<DocId>, BadQuery> {
        let parsed = parse(query)?;
        Ok(eval::execute(&parsed, &self.index))
    }

    /// Returns true if a document is present under `id`.
    pub fn contains(&self, id: &DocId) -> bool {
        self.index.contains(id)
    }

    /// Number of documents currently present.
    pub fn document_count(&self) -> usize {
        self.index.document_count()
    }

    /// Number of distinct terms currently indexed.
    pub fn term_count(&self) -> usize {
        self.index.term_count()
    }

    /// True when no documents are present.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}
