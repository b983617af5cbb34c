//! Raw query scanning.
//!
//! Splits a query string into unquoted runs and quoted phrase bodies
//! before any tokenization happens. Quotes pair left to right; the
//! scan tracks byte offsets so errors can point into the original
//! string.

use crate::error::BadQuery;

/// A raw slice of the query, prior to tokenization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Fragment<'a> {
    /// Text between phrases; may hold any number of word atoms.
    Raw(&'a str),
    /// A quoted phrase, quotes stripped.
    Phrase {
        /// Body text between the quotes.
        body: &'a str,
        /// Byte offset of the opening quote.
        start: usize,
    },
}

/// Splits `input` on double quotes.
///
/// An opening quote with no closing partner is an error; a closing
/// quote without an opener manifests as the same error, because the
/// scan pairs quotes left to right.
pub(crate) fn scan(input: &str) -> Result<Vec<Fragment<'_>>, BadQuery> {
    let mut fragments = Vec::new();
    let mut rest = input;
    let mut offset = 0;

    while let Some(open) = rest.find('"') {
        if open > 0 {
            fragments.push(Fragment::Raw(&rest[..open]));
        }
        let after_open = &rest[open + 1..];
        let Some(close) = after_open.find('"') else {
            return Err(BadQuery::new("unclosed quote", Some(offset + open), input));
        };
        fragments.push(Fragment::Phrase {
            body: &after_open[..close],
            start: offset + open,
        });
        rest = &after_open[close + 1..];
        offset += open + close + 2;
    }
    if !rest.is_empty() {
        fragments.push(Fragment::Raw(rest));
    }
    Ok(fragments)
}
