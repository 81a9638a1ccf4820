//! Valuation engine: NPV at a rate and NPV profiles across a rate window.
//!
//! Cash flows are annual, so the period index is used directly as the
//! discounting exponent:
//!
//! ```text
//! NPV(r) = Σ cf_t / (1 + r)^t
//! ```
//!
//! The expression is undefined at `r = -1` and flips the sign of odd-period
//! discount factors below it, so every entry point rejects `r <= -1`.

use npvlab_core::{CashFlowSeries, CurvePoint, NpvCurve, RateRange};
use npvlab_math::grid::linspace;

use crate::error::{AnalyticsError, AnalyticsResult};

/// Number of samples the NPV chart uses when none is given.
pub const DEFAULT_CURVE_POINTS: usize = 100;

/// Net present value of `series` at `rate`.
///
/// # Errors
///
/// Returns [`AnalyticsError::Domain`] if `rate <= -1` (or is `NaN`).
///
/// # Example
///
/// ```rust
/// use npvlab_analytics::valuation::compute_npv;
/// use npvlab_core::CashFlowSeries;
///
/// let series = CashFlowSeries::new(vec![-100.0, 60.0, 60.0]).unwrap();
/// let npv = compute_npv(&series, 0.10).unwrap();
///
/// assert!((npv - 4.1322).abs() < 1e-4);
/// ```
pub fn compute_npv(series: &CashFlowSeries, rate: f64) -> AnalyticsResult<f64> {
    check_domain(rate)?;
    Ok(discounted_sum(series.as_slice(), rate))
}

/// First derivative of NPV with respect to the rate.
///
/// `dNPV/dr = -Σ t · cf_t / (1 + r)^(t + 1)`
///
/// # Errors
///
/// Returns [`AnalyticsError::Domain`] if `rate <= -1`.
pub fn npv_derivative(series: &CashFlowSeries, rate: f64) -> AnalyticsResult<f64> {
    check_domain(rate)?;
    Ok(discounted_derivative(series.as_slice(), rate))
}

/// Samples NPV at `num_points` evenly spaced rates across `range`.
///
/// Both endpoints are included, so `num_points = 2` yields exactly
/// `range.min()` and `range.max()`.
///
/// # Errors
///
/// - [`AnalyticsError::InvalidRange`] if `num_points < 2`.
/// - [`AnalyticsError::Domain`] if the range reaches down to `-1` or below.
pub fn sample_curve(
    series: &CashFlowSeries,
    range: &RateRange,
    num_points: usize,
) -> AnalyticsResult<NpvCurve> {
    if num_points < 2 {
        return Err(AnalyticsError::invalid_range(format!(
            "curve needs at least 2 points, got {num_points}"
        )));
    }
    check_domain(range.min())?;

    let points = linspace(range.min(), range.max(), num_points)?
        .into_iter()
        .map(|rate| CurvePoint::new(rate, discounted_sum(series.as_slice(), rate)))
        .collect();

    Ok(NpvCurve::from_points(points)?)
}

fn check_domain(rate: f64) -> AnalyticsResult<()> {
    if rate > -1.0 {
        Ok(())
    } else {
        Err(AnalyticsError::Domain { rate })
    }
}

/// `Σ cf_t / (1 + r)^t` without the domain check.
pub(crate) fn discounted_sum(flows: &[f64], rate: f64) -> f64 {
    let base = 1.0 + rate;
    flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf / base.powi(t as i32))
        .sum()
}

/// `Σ |cf_t| / (1 + r)^t`: the scale against which an NPV residual is judged.
pub(crate) fn discounted_magnitude(flows: &[f64], rate: f64) -> f64 {
    let base = 1.0 + rate;
    flows
        .iter()
        .enumerate()
        .map(|(t, cf)| cf.abs() / base.powi(t as i32))
        .sum()
}

pub(crate) fn discounted_derivative(flows: &[f64], rate: f64) -> f64 {
    let base = 1.0 + rate;
    flows
        .iter()
        .enumerate()
        .skip(1)
        .map(|(t, cf)| -(t as f64) * cf / base.powi(t as i32 + 1))
        .sum()
}
