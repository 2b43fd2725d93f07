use std::path::PathBuf;
use thiserror::Error;

/// Errors reported by key-value storage backends.
///
/// These only surface at the storage seam. The theme cache treats every
/// write failure as non-fatal: it logs a warning and still returns the
/// computed theme, so no `StoreError` ever reaches a theme consumer from
/// the resolve path.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to create store directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write entry '{key}': {source}")]
    WriteEntry {
        key: String,
        source: std::io::Error,
    },
    #[error("Failed to remove entry '{key}': {source}")]
    RemoveEntry {
        key: String,
        source: std::io::Error,
    },
    #[error("Store rejected write for '{key}': {reason}")]
    WriteRejected { key: String, reason: String },
}
