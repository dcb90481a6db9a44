//! Error types for benchmark run analysis
//!
//! Provides a unified error type for all settle-stats crates.

use thiserror::Error;

/// Core error type for run-analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Time column could not be parsed by either the numeric or the
    /// datetime heuristic
    #[error("Cannot parse time column '{column}': neither numeric nor datetime (sample: {samples:?})")]
    TimeParse {
        column: String,
        samples: Vec<String>,
    },

    /// No column matched a metric family's keyword rules and no fallback
    /// applied
    #[error("No usable column for {family}: available columns {columns:?}")]
    NoUsableColumn {
        family: String,
        columns: Vec<String>,
    },

    /// Insufficient data for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// IO error (for reader-based table construction)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty table or column
    pub fn empty_input() -> Self {
        Self::InsufficientData {
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for mismatched column lengths
    pub fn length_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Length mismatch in {context}: expected {expected}, got {actual}"
        ))
    }
}
