//! Error types for the NPV Lab domain model.
//!
//! This module defines the error types raised when domain values are
//! constructed or evaluated outside their valid range.

use thiserror::Error;

/// A specialized Result type for domain operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// The main error type for domain operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// The cash-flow series cannot be used for valuation.
    #[error("Invalid cash flow: {reason}")]
    InvalidCashFlow {
        /// Description of the invalid cash flow.
        reason: String,
    },

    /// A rate range or sampling resolution is malformed.
    #[error("Invalid range: {reason}")]
    InvalidRange {
        /// Description of what's invalid.
        reason: String,
    },

    /// A discount rate at or below -100%, where discount factors are undefined.
    #[error("Discount rate {rate} is outside the valuation domain (rate must be > -1)")]
    Domain {
        /// The offending rate, as a fraction.
        rate: f64,
    },
}

impl CoreError {
    /// Creates an invalid cash flow error.
    #[must_use]
    pub fn invalid_cash_flow(reason: impl Into<String>) -> Self {
        Self::InvalidCashFlow {
            reason: reason.into(),
        }
    }

    /// Creates an invalid range error.
    #[must_use]
    pub fn invalid_range(reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            reason: reason.into(),
        }
    }

    /// Creates a domain error for `rate`.
    #[must_use]
    pub fn domain(rate: f64) -> Self {
        Self::Domain { rate }
    }
}
