//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during an aggregation pass
///
/// Malformed lines are never errors; they only count towards `total_lines`.
#[derive(Error, Debug)]
pub enum AggregateError {
    /// The source could not be opened at all
    #[error("Log source unavailable: {}: {source}", path.display())]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading failed after the source was opened; no partial result
    #[error("Aggregation failed after {lines_read} lines: {source}")]
    AggregationFailed {
        lines_read: u64,
        #[source]
        source: std::io::Error,
    },
}

/// Errors that can occur during report output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Inconsistent report: {0}")]
    InvalidReport(String),
}
