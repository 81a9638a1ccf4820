//! Bisection root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{straddles_zero, SolverConfig, SolverResult};

/// Bisection root-finding algorithm.
///
/// Repeatedly halves the bracket, keeping the half whose endpoints still
/// straddle a sign change (or hold an exact zero), until the bracket is
/// narrower than `config.tolerance` or cannot be split any further in
/// floating point. The midpoint of the final bracket is returned as the
/// root estimate.
///
/// Requires: `f(a)` and `f(b)` of opposite signs, or a zero at an endpoint
///
/// # Arguments
///
/// * `f` - The function for which to find a root
/// * `a` - One end of the bracket
/// * `b` - The other end of the bracket
/// * `config` - Solver configuration; `tolerance` is the bracket width at
///   which bisection stops
///
/// # Returns
///
/// The root and iteration statistics, or an error if the bracket is invalid.
///
/// # Example
///
/// ```rust
/// use npvlab_math::solvers::{bisection, SolverConfig};
///
/// // Find root of x^2 - 2 (i.e., sqrt(2))
/// let f = |x: f64| x * x - 2.0;
///
/// let result = bisection(f, 1.0, 2.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - std::f64::consts::SQRT_2).abs() < 1e-10);
/// ```
pub fn bisection<F>(f: F, a: f64, b: f64, config: &SolverConfig) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
{
    if !(config.tolerance > 0.0) {
        return Err(MathError::invalid_input(format!(
            "bisection tolerance must be positive, got {}",
            config.tolerance
        )));
    }

    let mut lo = a.min(b);
    let mut hi = a.max(b);

    let mut f_lo = f(lo);
    let f_hi = f(hi);

    if f_lo.is_nan() {
        return Err(MathError::NonFinite { x: lo });
    }
    if f_hi.is_nan() {
        return Err(MathError::NonFinite { x: hi });
    }

    // Check that root is bracketed
    if !straddles_zero(f_lo, f_hi) {
        return Err(MathError::InvalidBracket {
            a: lo,
            b: hi,
            fa: f_lo,
            fb: f_hi,
        });
    }

    let mut iterations = 0;
    while hi - lo >= config.tolerance {
        if iterations == config.max_iterations {
            let mid = (lo + hi) / 2.0;
            return Err(MathError::convergence_failed(iterations, f(mid).abs()));
        }

        let mid = (lo + hi) / 2.0;
        // lo and hi are adjacent floats: the tolerance is below resolution
        if mid <= lo || mid >= hi {
            break;
        }
        let f_mid = f(mid);
        iterations += 1;

        if f_mid == 0.0 {
            return Ok(SolverResult {
                root: mid,
                iterations,
                residual: 0.0,
            });
        }

        // Keep the half that still holds the sign change
        if straddles_zero(f_lo, f_mid) {
            hi = mid;
        } else {
            lo = mid;
            f_lo = f_mid;
        }
    }

    let root = (lo + hi) / 2.0;
    Ok(SolverResult {
        root,
        iterations,
        residual: f(root),
    })
}
