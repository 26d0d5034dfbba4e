//! Error types for traffic-output.
//!
//! Only I/O can fail here; both variants wrap the underlying cause so the
//! diagnostic printed by the facade names the actual filesystem problem.

use thiserror::Error;

/// Errors that can occur while writing output tables.
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV write error: {0}")]
    Csv(#[from] csv::Error),
}

/// Alias for `Result<T, OutputError>`.
pub type OutputResult<T> = Result<T, OutputError>;
