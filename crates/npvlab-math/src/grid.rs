//! Evenly spaced sampling grids.

use crate::error::{MathError, MathResult};

/// Returns `num_points` evenly spaced values over `[start, end]`.
///
/// Both endpoints are included and the last value is exactly `end`.
/// A degenerate interval (`start == end`) yields `num_points` copies of
/// `start`.
///
/// # Errors
///
/// Returns [`MathError::InsufficientData`] when `num_points < 2` and
/// [`MathError::InvalidInput`] when either endpoint is not finite.
///
/// # Example
///
/// ```rust
/// use npvlab_math::grid::linspace;
///
/// let xs = linspace(-0.1, 0.3, 5).unwrap();
/// assert_eq!(xs.len(), 5);
/// assert_eq!(xs[0], -0.1);
/// assert_eq!(xs[4], 0.3);
/// ```
pub fn linspace(start: f64, end: f64, num_points: usize) -> MathResult<Vec<f64>> {
    if num_points < 2 {
        return Err(MathError::insufficient_data(2, num_points));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(MathError::invalid_input(format!(
            "grid endpoints must be finite, got [{start}, {end}]"
        )));
    }

    let last = num_points - 1;
    let step = (end - start) / last as f64;

    let mut xs: Vec<f64> = (0..num_points).map(|i| start + step * i as f64).collect();
    xs[last] = end;
    Ok(xs)
}
