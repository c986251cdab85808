//! Error type shared by the I/O boundary of the crate.
//!
//! The analysis pipeline itself never fails: missing capabilities degrade to
//! heuristics or empty results. Only loading files, downloading resources and
//! parsing configuration return these errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while acquiring resources or configuration
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing a file failed
    #[error("IO error at '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Network error during a resource download
    #[error("Network error: {0}")]
    Network(String),
    /// Error extracting a downloaded archive
    #[error("Zip error: {0}")]
    Zip(String),
    /// A required resource file is missing
    #[error("Resource not found: {0}")]
    ResourceNotFound(String),
    /// Invalid analysis configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
    /// Malformed JSON
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    /// The syllable segmenter could not process its input
    #[error("Segmenter error: {0}")]
    Segmenter(String),
}

impl Error {
    /// Wrap an `io::Error` with the path that caused it
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;
