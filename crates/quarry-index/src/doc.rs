//! Document identifiers.

use std::{fmt, path::Path, sync::Arc};

/// An opaque, caller-supplied document identifier.
///
/// The engine assumes nothing about an id beyond equality and hashing.
/// Callers that index files typically use the path they opened; the
/// engine never normalizes it (whether `./a.txt` and `a.txt` are the
/// same document is the caller's decision). Cloning is cheap — ids are
/// shared, not copied — because the index stores one copy per term a
/// document contains.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocId(Arc<str>);

impl DocId {
    /// Creates an id from any string-like value.
    pub fn new(id: impl Into<Arc<str>>) -> Self {
        Self(id.into())
    }

    /// Creates an id from a filesystem path.
    ///
    /// Non-UTF-8 paths are converted lossily; distinct paths that
    /// collide after conversion count as one document.
    pub fn from_path(path: &Path) -> Self {
        Self(path.to_string_lossy().into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for DocId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for DocId {
    fn from(id: String) -> Self {
        Self::new(id)
    }
}

impl From<&Path> for DocId {
    fn from(path: &Path) -> Self {
        Self::from_path(path)
    }
}

impl AsRef<str> for DocId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}
