//! The positional inverted index.

use std::collections::{HashMap, HashSet};

use crate::DocId;

/// For one term: every document it occurs in, mapped to the ascending
/// positions of its occurrences there.
pub type PostingsMap = HashMap<DocId, Vec<usize>>;

/// Maps each term to its postings and tracks which documents are
/// present.
///
/// Position order is the ingestion contract: within one ingestion the
/// positions of a (term, document) pair arrive strictly ascending, so
/// [`InvertedIndex::insert`] is a plain append. The document set is
/// tracked separately from the postings because a document that
/// produced no terms at all is still present.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    /// term → document → ascending occurrence positions.
    postings: HashMap<String, PostingsMap>,
    /// Documents currently present, including empty ones.
    documents: HashSet<DocId>,
}

impl InvertedIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `doc` as present. Returns false if it already was.
    pub fn insert_document(&mut self, doc: DocId) -> bool {
        self.documents.insert(doc)
    }

    /// Appends one occurrence of `term` in `doc` at `position`.
    pub fn insert(&mut self, term: String, doc: &DocId, position: usize) {
        self.postings
            .entry(term)
            .or_default()
            .entry(doc.clone())
            .or_default()
            .push(position);
    }

    /// Removes every posting of `doc` and forgets the document.
    ///
    /// Returns false (and changes nothing) if `doc` was not present.
    /// Terms left with no postings are dropped.
    pub fn remove_document(&mut self, doc: &DocId) -> bool {
        if !self.documents.remove(doc) {
            return false;
        }
        self.postings.retain(|_, map| {
            map.remove(doc);
            !map.is_empty()
        });
        true
    }

    /// The postings of `term`, or `None` if no document contains it.
    pub fn postings(&self, term: &str) -> Option<&PostingsMap> {
        self.postings.get(term)
    }

    /// Returns true if `doc` is present.
    pub fn contains(&self, doc: &DocId) -> bool {
        self.documents.contains(doc)
    }

    /// Number of documents present.
    pub fn document_count(&self) -> usize {
        self.documents.len()
    }

    /// Number of distinct terms with at least one posting.
    pub fn term_count(&self) -> usize {
        self.postings.len()
    }

    /// True when no documents are present.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}
