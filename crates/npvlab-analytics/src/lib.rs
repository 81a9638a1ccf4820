//! # NPV Lab Analytics
//!
//! Valuation and IRR analysis for annual cash-flow series.
//!
//! This crate provides:
//! - **Valuation**: NPV at a single rate and NPV curves sampled across a rate window
//! - **Roots**: Every IRR of a series, found by a dense scan plus bisection and
//!   optionally confirmed by an independent cross-check solver
//!
//! ## Multiple IRRs
//!
//! A conventional series (one outlay followed by inflows) has exactly one IRR.
//! A non-conventional series can have one IRR per sign change in its flows, or
//! none at all. The root finder returns all of them as an [`IrrSet`]; an empty
//! set is a normal answer, not an error.
//!
//! ## Usage
//!
//! ```rust
//! use npvlab_analytics::prelude::*;
//! use npvlab_core::{CashFlowSeries, RateRange};
//!
//! let series = CashFlowSeries::new(vec![-100.0, 230.0, -132.0]).unwrap();
//!
//! let curve = sample_curve(&series, &RateRange::from_percent(0.0, 30.0).unwrap(), 100).unwrap();
//! let analysis = find_roots(&series).unwrap();
//!
//! assert_eq!(curve.len(), 100);
//! assert_eq!(analysis.irrs.len(), 2);
//! ```
//!
//! [`IrrSet`]: npvlab_core::IrrSet

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod roots;
pub mod valuation;

pub use error::{AnalyticsError, AnalyticsResult};

/// Prelude module for convenient imports.
///
/// ```rust
/// use npvlab_analytics::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::{AnalyticsError, AnalyticsResult};

    // Valuation
    pub use crate::valuation::{compute_npv, npv_derivative, sample_curve, DEFAULT_CURVE_POINTS};

    // Root finding
    pub use crate::roots::{
        find_roots, find_roots_with, scan_for_roots, CrossCheck, CrossCheckMethod,
        CrossCheckOutcome, IrrAnalysis, NewtonCrossCheck, PolynomialCrossCheck, RootFinderConfig,
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crate_compiles() {
        // Basic smoke test
        let err = AnalyticsError::InvalidInput("test".to_string());
        assert!(err.to_string().contains("test"));
    }
}
