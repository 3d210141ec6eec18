//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while loading the order dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to open dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Errors raised at the aggregation boundary
#[derive(Error, Debug, PartialEq, Eq)]
pub enum AggregateError {
    #[error("Invalid date range: start {start} is after end {end}")]
    InvalidRange { start: NaiveDate, end: NaiveDate },
}

/// Errors that can occur while writing or reading report files
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write report: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),

    #[error("Failed to read report: {0}")]
    ReadFailed(std::io::Error),

    #[error("Not a valid report: {0}")]
    InvalidReport(serde_json::Error),

    #[error("Unsupported report schema version {found} (expected {expected})")]
    UnsupportedVersion { found: String, expected: String },
}
