//! Dense grid scan for root brackets.

use serde::{Deserialize, Serialize};

use crate::error::MathResult;
use crate::grid::linspace;
use crate::solvers::straddles_zero;

/// An interval known to contain at least one root.
///
/// `f_lo` and `f_hi` have opposite signs, or at least one of them is
/// exactly zero.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bracket {
    /// Lower end of the interval.
    pub lo: f64,
    /// Upper end of the interval.
    pub hi: f64,
    /// Function value at `lo`.
    pub f_lo: f64,
    /// Function value at `hi`.
    pub f_hi: f64,
}

impl Bracket {
    /// Width of the interval.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.hi - self.lo
    }

    /// Returns true if `x` lies inside the closed interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        self.lo <= x && x <= self.hi
    }
}

/// Samples `f` at `num_points` evenly spaced points over `[lo, hi]` and
/// returns every adjacent pair that brackets a root.
///
/// A pair is a bracket when the sampled values have opposite signs or one of
/// them is exactly zero, so a root landing on a grid point is reported by
/// both neighbouring pairs. Pairs involving `NaN` are skipped.
///
/// # Example
///
/// ```rust
/// use npvlab_math::solvers::scan_brackets;
///
/// let f = |x: f64| (x - 0.25) * (x - 0.75);
/// let brackets = scan_brackets(f, 0.0, 1.0, 101).unwrap();
///
/// assert!(brackets.iter().any(|b| b.contains(0.25)));
/// assert!(brackets.iter().any(|b| b.contains(0.75)));
/// ```
pub fn scan_brackets<F>(f: F, lo: f64, hi: f64, num_points: usize) -> MathResult<Vec<Bracket>>
where
    F: Fn(f64) -> f64,
{
    let grid = linspace(lo, hi, num_points)?;

    let mut brackets = Vec::new();
    let mut prev_x = grid[0];
    let mut prev_f = f(prev_x);

    for &x in &grid[1..] {
        let fx = f(x);
        if straddles_zero(prev_f, fx) {
            brackets.push(Bracket {
                lo: prev_x,
                hi: x,
                f_lo: prev_f,
                f_hi: fx,
            });
        }
        prev_x = x;
        prev_f = fx;
    }

    log::trace!(
        "scan of [{lo}, {hi}] with {num_points} points found {} bracket(s)",
        brackets.len()
    );

    Ok(brackets)
}
