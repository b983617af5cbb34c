//! The query error type.

use std::{error::Error, fmt};

/// The sole error surfaced by query parsing.
///
/// Raised when a query fails the grammar: an unpaired double quote, a
/// phrase with no words inside it, or a query that yields nothing
/// searchable at all. Carries the original query and, where known, the
/// byte offset of the offending character so `Display` can point at it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadQuery {
    /// What went wrong.
    message: String,
    /// Byte offset in the query where the problem starts, if known.
    position: Option<usize>,
    /// The original query string.
    query: String,
}

impl BadQuery {
    /// Creates an error for `query`.
    pub(crate) fn new(message: impl Into<String>, position: Option<usize>, query: &str) -> Self {
        Self {
            message: message.into(),
            position,
            query: query.to_string(),
        }
    }

    /// The error message without context.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Byte offset of the problem in the query, if known.
    pub fn position(&self) -> Option<usize> {
        self.position
    }

    /// The query that failed.
    pub fn query(&self) -> &str {
        &self.query
    }
}

impl fmt::Display for BadQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "bad query: {}", self.message)?;
        if !self.query.is_empty() {
            write!(f, "\n  {}", self.query)?;
            if let Some(pos) = self.position {
                let clamped = pos.min(self.query.len());
                write!(f, "\n  {}^", " ".repeat(clamped))?;
            }
        }
        Ok(())
    }
}

impl Error for BadQuery {}
