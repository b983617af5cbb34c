//! Parsed query representation.

use std::{collections::BTreeSet, fmt};

/// A parsed query: the flat output of the implicit-AND grammar.
///
/// Word atoms land in `terms`; a set, because duplicating an atom
/// cannot change an AND. Quoted atoms of two or more terms land in
/// `phrases` in query order; a quoted atom with exactly one term
/// collapses into `terms`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    /// Single-term atoms. Each must occur somewhere in a document.
    pub terms: BTreeSet<String>,
    /// Phrase atoms. Each must occur contiguously, in order.
    pub phrases: Vec<Vec<String>>,
}

impl Query {
    /// Returns true if the query carries no atoms at all.
    pub fn is_empty(&self) -> bool {
        self.terms.is_empty() && self.phrases.is_empty()
    }

    /// Every distinct term the query mentions, across word and phrase
    /// atoms.
    pub fn distinct_terms(&self) -> BTreeSet<&str> {
        let mut all: BTreeSet<&str> = self.terms.iter().map(String::as_str).collect();
        for phrase in &self.phrases {
            all.extend(phrase.iter().map(String::as_str));
        }
        all
    }
}

impl fmt::Display for Query {
    /// Renders a canonical form: word atoms in set order, then phrase
    /// atoms quoted, space-separated.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut sep = "";
        for term in &self.terms {
            write!(f, "{sep}{term}")?;
            sep = " ";
        }
        for phrase in &self.phrases {
            write!(f, "{sep}\"{}\"", phrase.join(" "))?;
            sep = " ";
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(terms: &[&str], phrases: &[&[&str]]) -> Query {
        Query {
            terms: terms.iter().map(|t| t.to_string()).collect(),
            phrases: phrases
                .iter()
                .map(|p| p.iter().map(|t| t.to_string()).collect())
                .collect(),
        }
    }

    #[test]
    fn empty_query_has_no_atoms() {
        assert!(Query::default().is_empty());
        assert!(!query(&["speed"], &[]).is_empty());
        assert!(!query(&[], &[&["the", "speed"]]).is_empty());
    }

    #[test]
    fn distinct_terms_unions_words_and_phrases() {
        let q = query(&["speed", "engine"], &[&["the", "speed"], &["of", "query"]]);
        let expected: BTreeSet<&str> = ["engine", "of", "query", "speed", "the"].into();
        assert_eq!(q.distinct_terms(), expected);
    }

    #[test]
    fn display_renders_canonical_form() {
        let q = query(&["wharves", "Manhattoes"], &[&["Call", "me", "Ishmael"]]);
        assert_eq!(q.to_string(), "Manhattoes wharves \"Call me Ishmael\"");
    }

    #[test]
    fn display_of_empty_query_is_empty() {
        assert_eq!(Query::default().to_string(), "");
    }
}
