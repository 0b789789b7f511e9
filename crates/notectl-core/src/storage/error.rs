//! Storage error handling
//!
//! Provides typed errors for storage operations with descriptive messages.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    /// Database file could not be opened or created
    #[error("Cannot open or create database at '{path}': {source}")]
    Unavailable {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// SQLite database error
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// Generic I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unavailable_display() {
        let err = StorageError::Unavailable {
            path: PathBuf::from("/no/such/dir/notectl.db"),
            source: rusqlite::Error::InvalidPath(PathBuf::from("/no/such/dir/notectl.db")),
        };

        let msg = err.to_string();
        assert!(msg.contains("Cannot open or create database"));
        assert!(msg.contains("/no/such/dir/notectl.db"));
    }
}
