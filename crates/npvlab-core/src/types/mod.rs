//! Domain types for cash-flow valuation.
//!
//! This module provides type-safe representations of the valuation inputs
//! and outputs:
//!
//! - [`CashFlowSeries`]: Annual cash flows indexed by period
//! - [`RateRange`]: A window of discount rates (fractions)
//! - [`NpvCurve`]: NPV sampled across a rate window
//! - [`IrrSet`]: Deduplicated internal rates of return

mod cashflow;
mod curve;
mod irr_set;
mod rate_range;

pub use cashflow::CashFlowSeries;
pub use curve::{CurvePoint, NpvCurve};
pub use irr_set::IrrSet;
pub use rate_range::{RateRange, SEARCH_RATE_MAX, SEARCH_RATE_MIN};

/// Strictly opposite signs, compared without multiplying (which underflows
/// for tiny magnitudes).
pub(crate) fn opposite_signs(a: f64, b: f64) -> bool {
    (a < 0.0 && b > 0.0) || (a > 0.0 && b < 0.0)
}
