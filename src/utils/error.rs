//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while reading a build log
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read build log: {0}")]
    Io(#[from] std::io::Error),

    #[error("build log is empty (expected a header line)")]
    MissingHeader,

    #[error("line {line}: expected {expected} tab-separated fields, found {found}")]
    MalformedLine {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("line {line}: invalid timestamp {value:?}")]
    InvalidTimestamp { line: usize, value: String },
}

/// Errors that can occur during tree aggregation
#[derive(Error, Debug)]
pub enum AggregateError {
    #[error("cannot insert an empty path")]
    EmptyPath,
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
