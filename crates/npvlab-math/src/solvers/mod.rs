//! Root-finding algorithms.
//!
//! This module provides numerical solvers for finding roots of equations:
//!
//! - [`scan_brackets`]: Dense grid scan that locates every sign change
//! - [`bisection`]: Simple and reliable bracketing method
//! - [`newton_raphson`]: Fast quadratic convergence when derivative is available
//!
//! # Choosing a Solver
//!
//! | Solver | Speed | Reliability | Requires |
//! |--------|-------|-------------|----------|
//! | Scan | Slow (one pass over the grid) | Finds all sign changes at grid resolution | Interval |
//! | Bisection | Slow (linear) | Guaranteed | Bracket |
//! | Newton-Raphson | Fastest (quadratic) | May diverge | Derivative |
//!
//! Scanning followed by bisection of each bracket is the way to recover
//! *all* roots of a function on an interval; Newton only ever reports the
//! one its starting point happens to be attracted to.
//!
//! # Example: Multiple Roots
//!
//! ```rust
//! use npvlab_math::solvers::{bisection, scan_brackets, SolverConfig};
//!
//! let f = |x: f64| (x - 0.1) * (x - 0.2);
//! let config = SolverConfig::default();
//!
//! let roots: Vec<f64> = scan_brackets(f, 0.0, 1.0, 1001)
//!     .unwrap()
//!     .into_iter()
//!     .map(|b| bisection(f, b.lo, b.hi, &config).unwrap().root)
//!     .collect();
//!
//! assert!(roots.iter().any(|r| (r - 0.1).abs() < 1e-9));
//! assert!(roots.iter().any(|r| (r - 0.2).abs() < 1e-9));
//! ```

mod bisection;
mod newton;
mod scan;

pub use bisection::bisection;
pub use newton::newton_raphson;
pub use scan::{scan_brackets, Bracket};

/// True when `a` and `b` bracket a root: strictly opposite signs, or either
/// is exactly zero. `NaN` never brackets.
///
/// Signs are compared directly rather than through `a * b`, which underflows
/// to zero for tiny magnitudes.
#[must_use]
pub fn straddles_zero(a: f64, b: f64) -> bool {
    if a.is_nan() || b.is_nan() {
        return false;
    }
    a == 0.0 || b == 0.0 || (a < 0.0) != (b < 0.0)
}

/// Default tolerance for root-finding algorithms.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;

/// Default maximum iterations for root-finding algorithms.
pub const DEFAULT_MAX_ITERATIONS: u32 = 100;

/// Configuration for root-finding algorithms.
#[derive(Debug, Clone, Copy)]
pub struct SolverConfig {
    /// Tolerance for convergence.
    pub tolerance: f64,
    /// Maximum number of iterations.
    pub max_iterations: u32,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

impl SolverConfig {
    /// Creates a new solver configuration.
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: u32) -> Self {
        Self {
            tolerance,
            max_iterations,
        }
    }

    /// Sets the tolerance.
    #[must_use]
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Sets the maximum iterations.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: u32) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}

/// Result of a root-finding iteration.
#[derive(Debug, Clone, Copy)]
pub struct SolverResult {
    /// The root found.
    pub root: f64,
    /// Number of iterations used.
    pub iterations: u32,
    /// Final residual (function value at root).
    pub residual: f64,
}
