//! Unified error types for the analytics engine.
//!
//! Valuation and root-finding share one error type so callers only match on
//! a single enum. Failures of the cross-check solver are represented here as
//! well, but the root finder never lets them escape.

use thiserror::Error;

use npvlab_core::CoreError;

/// Unified error type for all analytics operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum AnalyticsError {
    // ========== Valuation Errors ==========
    /// Discount rate at or below -100%
    #[error("discount rate {rate} is outside the valuation domain (rate must be > -1)")]
    Domain {
        /// The offending rate, as a fraction.
        rate: f64,
    },

    /// Malformed rate range, sampling resolution or search configuration
    #[error("invalid range: {reason}")]
    InvalidRange {
        /// Description of what's invalid.
        reason: String,
    },

    /// Cash flows that cannot be valued
    #[error("invalid cash flow: {0}")]
    InvalidCashFlow(String),

    // ========== Root-Finding Errors ==========
    /// A cross-check solver produced no usable IRR
    #[error("{solver} cross-check failed: {reason}")]
    CrossCheckFailed {
        /// Name of the solver that failed.
        solver: &'static str,
        /// Reason for failure.
        reason: String,
    },

    // ========== General Errors ==========
    /// Invalid input parameter
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Math/solver error
    #[error("math error: {0}")]
    MathError(String),
}

/// Result type alias for analytics operations.
pub type AnalyticsResult<T> = Result<T, AnalyticsError>;

impl AnalyticsError {
    /// Creates an invalid range error.
    #[must_use]
    pub fn invalid_range(reason: impl Into<String>) -> Self {
        Self::InvalidRange {
            reason: reason.into(),
        }
    }

    /// Creates a cross-check failure.
    #[must_use]
    pub fn cross_check_failed(solver: &'static str, reason: impl Into<String>) -> Self {
        Self::CrossCheckFailed {
            solver,
            reason: reason.into(),
        }
    }
}

impl From<CoreError> for AnalyticsError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Domain { rate } => AnalyticsError::Domain { rate },
            CoreError::InvalidRange { reason } => AnalyticsError::InvalidRange { reason },
            CoreError::InvalidCashFlow { reason } => AnalyticsError::InvalidCashFlow(reason),
        }
    }
}

impl From<npvlab_math::MathError> for AnalyticsError {
    fn from(err: npvlab_math::MathError) -> Self {
        AnalyticsError::MathError(err.to_string())
    }
}
