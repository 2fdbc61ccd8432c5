//! Error types for relation writers.

use thiserror::Error;

/// Errors that can occur while writing a relation.
#[derive(Error, Debug)]
pub enum OutputError {
    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Cursor error.
    #[error("Cursor error: {0}")]
    Cursor(#[from] relation_generator::CursorError),
}
