//! CLI error types.

use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// A cash-flow token that is empty or not a number.
    #[error("Invalid cash flow '{token}' at position {position}. Enter numbers separated by commas.")]
    InvalidCashFlow {
        /// The offending token, trimmed.
        token: String,
        /// One-based position in the list.
        position: usize,
    },

    /// No cash flows at all.
    #[error("No cash flows given. Enter numbers separated by commas, e.g. \"-100, 30, 40\".")]
    EmptyCashFlows,

    /// Display window outside the supported bounds.
    #[error("Invalid rate window: {0}")]
    InvalidWindow(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
