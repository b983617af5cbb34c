//! Query parsing.
//!
//! # Grammar
//!
//! ```text
//! query  → atom+
//! atom   → phrase | word
//! phrase → '"' <any characters except '"'> '"'
//! word   → a maximal unquoted run of text
//! ```
//!
//! Every fragment is tokenized with the shared document tokenizer, so
//! `Is-hma--el` in a query means the same three terms it would mean in
//! a document. A phrase body must yield at least one term; a phrase
//! that yields exactly one collapses to a word atom. Unquoted text
//! that tokenizes to nothing (stray punctuation) contributes no atoms;
//! the query is rejected only when nothing searchable remains.

use quarry_text::tokenize;

use crate::{
    ast::Query,
    error::BadQuery,
    lexer::{Fragment, scan},
};

/// Parses a query string into a [`Query`].
///
/// Returns [`BadQuery`] when quotes are unbalanced, a phrase holds no
/// words, or the query as a whole yields no atoms (empty, whitespace,
/// or pure punctuation).
pub fn parse(input: &str) -> Result<Query, BadQuery> {
    let mut query = Query::default();

    for fragment in scan(input)? {
        match fragment {
            Fragment::Raw(text) => {
                query.terms.extend(tokenize(text).map(|t| t.text));
            }
            Fragment::Phrase { body, start } => {
                let terms: Vec<String> = tokenize(body).map(|t| t.text).collect();
                match terms.len() {
                    0 => return Err(BadQuery::new("phrase has no words", Some(start), input)),
                    // A one-word phrase is just that word.
                    1 => query.terms.extend(terms),
                    _ => query.phrases.push(terms),
                }
            }
        }
    }

    if query.is_empty() {
        return Err(BadQuery::new("no searchable words", None, input));
    }
    Ok(query)
}
