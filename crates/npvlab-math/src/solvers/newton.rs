//! Newton-Raphson root-finding algorithm.

use crate::error::{MathError, MathResult};
use crate::solvers::{SolverConfig, SolverResult};

/// Finds a root of `f` from a single starting point using its derivative `df`.
///
/// Iterates `x_{n+1} = x_n - f(x_n) / f'(x_n)` and stops when either the
/// residual or the step falls below `config.tolerance`. A non-finite `f` or
/// `f'` ends the search with [`MathError::NonFinite`], so a function defined
/// only on part of the real line can return `NaN` outside it.
///
/// Newton can converge to any root, or to none, depending on the start.
/// Callers that need every root should scan for brackets instead.
///
/// # Example
///
/// ```rust
/// use npvlab_math::solvers::{newton_raphson, SolverConfig};
///
/// // -100 + 121 / (1 + r)^2 vanishes at r = 10%
/// let f = |r: f64| -100.0 + 121.0 / (1.0 + r).powi(2);
/// let df = |r: f64| -242.0 / (1.0 + r).powi(3);
///
/// let result = newton_raphson(f, df, 0.0, &SolverConfig::default()).unwrap();
/// assert!((result.root - 0.10).abs() < 1e-10);
/// ```
pub fn newton_raphson<F, DF>(
    f: F,
    df: DF,
    initial_guess: f64,
    config: &SolverConfig,
) -> MathResult<SolverResult>
where
    F: Fn(f64) -> f64,
    DF: Fn(f64) -> f64,
{
    let mut x = initial_guess;

    for iteration in 0..config.max_iterations {
        let fx = f(x);
        if !fx.is_finite() {
            return Err(MathError::NonFinite { x });
        }

        // Check for convergence
        if fx.abs() < config.tolerance {
            return Ok(SolverResult {
                root: x,
                iterations: iteration,
                residual: fx,
            });
        }

        let dfx = df(x);
        if !dfx.is_finite() {
            return Err(MathError::NonFinite { x });
        }

        // Check for zero derivative
        if dfx.abs() < 1e-15 {
            return Err(MathError::DivisionByZero { value: dfx });
        }

        // Newton step
        let step = fx / dfx;
        x -= step;

        // Check for step convergence
        if step.abs() < config.tolerance {
            let final_fx = f(x);
            if !final_fx.is_finite() {
                return Err(MathError::NonFinite { x });
            }
            return Ok(SolverResult {
                root: x,
                iterations: iteration + 1,
                residual: final_fx,
            });
        }
    }

    Err(MathError::convergence_failed(
        config.max_iterations,
        f(x).abs(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_two_period_discounting() {
        let f = |r: f64| -100.0 + 121.0 / (1.0 + r).powi(2);
        let df = |r: f64| -242.0 / (1.0 + r).powi(3);

        let result = newton_raphson(f, df, 0.0, &SolverConfig::default()).unwrap();

        assert_relative_eq!(result.root, 0.10, epsilon = 1e-12);
        assert!(result.iterations < 10);
        assert!(result.residual.abs() < 1e-10);
    }

    #[test]
    fn test_start_selects_root() {
        // (r - 0.1)(r - 0.2) has a root on each side of 0.15
        let f = |r: f64| (r - 0.1) * (r - 0.2);
        let df = |r: f64| 2.0 * r - 0.3;

        let low = newton_raphson(f, df, 0.0, &SolverConfig::default()).unwrap();
        let high = newton_raphson(f, df, 0.5, &SolverConfig::default()).unwrap();

        assert_relative_eq!(low.root, 0.1, epsilon = 1e-10);
        assert_relative_eq!(high.root, 0.2, epsilon = 1e-10);
    }

    #[test]
    fn test_flat_derivative() {
        let f = |r: f64| (r - 0.1) * (r - 0.2);
        let df = |r: f64| 2.0 * r - 0.3;

        let result = newton_raphson(f, df, 0.15, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::DivisionByZero { .. })));
    }

    #[test]
    fn test_leaving_domain_stops_iteration() {
        // Defined only above -1; the first step from 10 overshoots below it
        let f = |r: f64| if r <= -1.0 { f64::NAN } else { 1.0 / (1.0 + r) - 5.0 };
        let df = |r: f64| -1.0 / ((1.0 + r) * (1.0 + r));

        let result = newton_raphson(f, df, 10.0, &SolverConfig::default());

        assert!(matches!(result, Err(MathError::NonFinite { .. })));
    }

    #[test]
    fn test_iteration_limit() {
        // Always positive, so Newton oscillates without settling
        let f = |r: f64| r * r + 1.0;
        let df = |r: f64| 2.0 * r;

        let config = SolverConfig::new(1e-12, 20);
        let result = newton_raphson(f, df, 0.5, &config);

        assert!(matches!(result, Err(MathError::ConvergenceFailed { iterations: 20, .. })));
    }
}
