//! Error types for the Diamond library.
//!
//! The summarization engine itself never fails; these errors come from
//! loading field lists and configuration.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Diamond operations.
#[derive(Debug, Error)]
pub enum DiamondError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// File format not supported.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Empty file or no field records to summarize.
    #[error("Empty data: {0}")]
    EmptyData(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Diamond operations.
pub type Result<T> = std::result::Result<T, DiamondError>;
