//! Loading a directory of documents into a searcher.

use std::{
    fs::File,
    io,
    path::{Path, PathBuf},
};

use quarry_index::Searcher;
use thiserror::Error;
use walkdir::WalkDir;

/// Errors raised while loading a corpus directory.
#[derive(Debug, Error)]
pub enum CorpusError {
    /// A directory entry could not be enumerated.
    #[error("cannot walk {path}: {source}")]
    Walk {
        /// Directory being walked.
        path: PathBuf,
        /// Underlying walkdir error.
        #[source]
        source: walkdir::Error,
    },

    /// A file could not be opened or read.
    #[error("cannot read {path}: {source}")]
    Read {
        /// File being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Indexes every regular file under `dir`, in file-name order.
///
/// Document ids are the paths exactly as walked; the engine does not
/// normalize them.
pub fn load(dir: &Path) -> Result<Searcher, CorpusError> {
    let mut searcher = Searcher::new();

    for entry in WalkDir::new(dir).sort_by_file_name() {
        let entry = entry.map_err(|source| CorpusError::Walk {
            path: dir.to_path_buf(),
            source,
        })?;
        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        let read_error = |source| CorpusError::Read {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(read_error)?;
        searcher.add_document(path, file).map_err(read_error)?;
    }

    Ok(searcher)
}

#[cfg(test)]
mod tests {
    use std::fs;

    use quarry_index::DocId;

    use super::*;

    #[test]
    fn loads_every_regular_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "whale boat").unwrap();
        fs::write(dir.path().join("b.txt"), "harbor").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested/c.txt"), "whale harbor").unwrap();

        let searcher = load(dir.path()).unwrap();
        assert_eq!(searcher.document_count(), 3);
        assert_eq!(searcher.search("whale").unwrap().len(), 2);
        assert!(searcher.contains(&DocId::from_path(&dir.path().join("nested/c.txt"))));
    }

    #[test]
    fn missing_directory_is_a_walk_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, CorpusError::Walk { .. }));
        assert!(err.to_string().contains("absent"));
    }

    #[test]
    fn empty_directory_loads_an_empty_searcher() {
        let dir = tempfile::tempdir().unwrap();
        let searcher = load(dir.path()).unwrap();
        assert!(searcher.is_empty());
    }
}
