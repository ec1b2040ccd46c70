//! Error types for the Habitgrid library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Habitgrid operations.
#[derive(Debug, Error)]
pub enum HabitgridError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed CSV syntax. Fatal: no partial grid is produced.
    #[error("parse error at line {line}: {message}")]
    Parse { line: usize, message: String },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for Habitgrid operations.
pub type Result<T> = std::result::Result<T, HabitgridError>;
