use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// The single failure mode of the counter: the source could not be acquired.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source '{}' not found or unreadable: {message}", .path.display())]
    Unavailable { path: PathBuf, message: String },
}

/// Read the whole source file.
///
/// Scoped acquisition: open, read fully, closed on every exit path. On
/// failure no bytes are returned, so nothing downstream sees a partial map.
pub fn read_source(path: &Path) -> Result<Vec<u8>, SourceError> {
    fs::read(path).map_err(|err| SourceError::Unavailable {
        path: path.to_path_buf(),
        message: err.to_string(),
    })
}
