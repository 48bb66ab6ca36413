//! Error types for Cashbook core operations.
//!
//! Errors are descriptive at the core level; the CLI layer maps these
//! to user-facing messages and exit codes.

use thiserror::Error;

/// Result type alias for Cashbook operations.
pub type Result<T> = std::result::Result<T, CashbookError>;

/// Core error type for Cashbook operations.
#[derive(Debug, Error)]
pub enum CashbookError {
    /// Amount text that is not a decimal number
    #[error("Invalid amount: {0}")]
    MalformedAmount(String),

    /// Date text that is not `YYYY-MM-DD`
    #[error("Invalid date (expected YYYY-MM-DD): {0}")]
    MalformedDate(String),

    /// A persisted line with five fields whose date, time, or amount does not parse
    #[error("Malformed record on line {line}: {reason}")]
    MalformedRecord { line: usize, reason: String },

    /// Data validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Backing store could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<std::io::Error> for CashbookError {
    fn from(err: std::io::Error) -> Self {
        CashbookError::Storage(err.to_string())
    }
}
