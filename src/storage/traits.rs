//! Storage traits and error types
//!
//! This module defines the trait interface for persisting retrieved resources
//! and the associated error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while persisting a resource
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid file name: {0:?}")]
    InvalidName(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Trait for resource persistence backends
///
/// Both crawl directions share one store, so implementations must be safe to
/// call from concurrent tasks. Writing a name that already exists replaces it.
pub trait ResourceStore: Send + Sync {
    /// Persists `bytes` under `name`
    ///
    /// # Returns
    ///
    /// The location the resource was written to
    fn write(&self, name: &str, bytes: &[u8]) -> StorageResult<PathBuf>;
}
