//! CLI error types for structured error handling.
//!
//! This module provides typed errors that map to specific exit codes,
//! enabling consistent error handling across the CLI.

use std::fmt;

use cashbook_core::CashbookError;

/// CLI-specific errors with associated exit codes.
#[derive(Debug)]
pub enum CliError {
    /// Invalid user input
    InvalidInput(String),

    /// Ledger could not be read or written
    Storage {
        message: String,
        hint: Option<String>,
    },
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::InvalidInput(message) => write!(f, "{}", message),
            CliError::Storage { message, hint } => {
                if let Some(h) = hint {
                    write!(f, "{}\n{}", message, h)
                } else {
                    write!(f, "{}", message)
                }
            }
        }
    }
}

impl std::error::Error for CliError {}

impl CliError {
    /// Create an InvalidInput error.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        CliError::InvalidInput(message.into())
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        use super::constants::exit_codes;
        match self {
            CliError::InvalidInput(_) => exit_codes::INVALID_INPUT,
            CliError::Storage { .. } => exit_codes::STORAGE_FAILED,
        }
    }
}

impl From<CashbookError> for CliError {
    fn from(err: CashbookError) -> Self {
        match err {
            CashbookError::MalformedAmount(_)
            | CashbookError::MalformedDate(_)
            | CashbookError::Validation(_) => CliError::InvalidInput(err.to_string()),
            CashbookError::MalformedRecord { .. } => CliError::Storage {
                message: err.to_string(),
                hint: Some(
                    "Hint: Fix the line by hand, or pass --lenient to skip unreadable lines."
                        .to_string(),
                ),
            },
            CashbookError::Storage(_) => CliError::Storage {
                message: err.to_string(),
                hint: None,
            },
        }
    }
}
