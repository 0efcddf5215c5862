//! Custom error types for spendlog
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for spendlog operations
#[derive(Error, Debug)]
pub enum SpendlogError {
    /// Terminal I/O errors (prompt read/write)
    #[error("I/O error: {0}")]
    Io(String),

    /// Malformed money amount entered at a prompt
    #[error("Invalid amount: {0}")]
    ParseAmount(String),

    /// Malformed date entered at a prompt
    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    ParseDate(String),

    /// Malformed integer entered at a prompt
    #[error("Invalid number: {0}")]
    ParseNumber(String),
}

impl SpendlogError {
    /// Check if this error came from parsing user input (recoverable
    /// by re-prompting) rather than from the terminal itself.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

impl From<std::io::Error> for SpendlogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// Result type alias for spendlog operations
pub type SpendlogResult<T> = Result<T, SpendlogError>;
