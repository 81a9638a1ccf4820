//! Independent IRR solvers used to cross-check the scan.
//!
//! The scan-plus-bisection search is authoritative. A cross-check solver is
//! a second opinion that can only *add* a root the scan missed, for example
//! one outside the search domain. Solvers are interchangeable through the
//! [`CrossCheck`] trait.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use npvlab_core::CashFlowSeries;
use npvlab_math::polynomial::real_polynomial_roots;
use npvlab_math::solvers::{newton_raphson, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::valuation::{discounted_derivative, discounted_magnitude, discounted_sum};

/// Starting point / tie-breaker used by the cross-check solvers (10%).
pub const DEFAULT_GUESS: f64 = 0.1;

/// Largest accepted `|NPV|` relative to the discounted magnitude of the flows.
const RELATIVE_RESIDUAL_TOLERANCE: f64 = 1e-6;

/// Imaginary-part tolerance for accepting a polynomial root as real.
const IMAGINARY_TOLERANCE: f64 = 1e-9;

/// A solver that returns a single IRR for a cash-flow series.
pub trait CrossCheck: Send + Sync {
    /// Solves for one IRR.
    ///
    /// The returned rate is finite and greater than -1.
    fn solve(&self, series: &CashFlowSeries) -> AnalyticsResult<f64>;

    /// Returns the name of the solver.
    fn name(&self) -> &'static str;
}

/// IRR from the roots of the discount-factor polynomial.
///
/// With `x = 1 / (1 + r)`, NPV is the polynomial `Σ cf_t · x^t`. All its
/// roots come from the companion-matrix eigenvalues; real roots with `x > 0`
/// map back to rates `r = 1/x - 1`, and the one nearest the guess wins.
#[derive(Debug, Clone, Copy)]
pub struct PolynomialCrossCheck {
    /// Rate used to choose between several candidate roots.
    pub guess: f64,
}

impl Default for PolynomialCrossCheck {
    fn default() -> Self {
        Self {
            guess: DEFAULT_GUESS,
        }
    }
}

impl CrossCheck for PolynomialCrossCheck {
    fn solve(&self, series: &CashFlowSeries) -> AnalyticsResult<f64> {
        let roots = real_polynomial_roots(series.as_slice(), IMAGINARY_TOLERANCE)
            .map_err(|e| AnalyticsError::cross_check_failed(self.name(), e.to_string()))?;

        roots
            .into_iter()
            .filter(|&x| x > 0.0)
            .map(|x| 1.0 / x - 1.0)
            .filter(|r| r.is_finite())
            .filter(|&r| is_root(series, r))
            .min_by(|a, b| (a - self.guess).abs().total_cmp(&(b - self.guess).abs()))
            .ok_or_else(|| {
                AnalyticsError::cross_check_failed(
                    self.name(),
                    "no real root with a positive discount factor",
                )
            })
    }

    fn name(&self) -> &'static str {
        "Polynomial"
    }
}

/// IRR by Newton-Raphson on NPV with the analytic derivative.
#[derive(Debug, Clone, Copy)]
pub struct NewtonCrossCheck {
    /// Starting rate.
    pub guess: f64,
    /// Solver tolerance and iteration budget.
    pub config: SolverConfig,
}

impl Default for NewtonCrossCheck {
    fn default() -> Self {
        Self {
            guess: DEFAULT_GUESS,
            config: SolverConfig::default(),
        }
    }
}

impl CrossCheck for NewtonCrossCheck {
    fn solve(&self, series: &CashFlowSeries) -> AnalyticsResult<f64> {
        let flows = series.as_slice();
        // NaN outside the domain makes the solver stop instead of wandering below -1
        let f = |r: f64| {
            if r > -1.0 {
                discounted_sum(flows, r)
            } else {
                f64::NAN
            }
        };
        let df = |r: f64| {
            if r > -1.0 {
                discounted_derivative(flows, r)
            } else {
                f64::NAN
            }
        };

        let result = newton_raphson(f, df, self.guess, &self.config)
            .map_err(|e| AnalyticsError::cross_check_failed(self.name(), e.to_string()))?;

        if is_root(series, result.root) {
            Ok(result.root)
        } else {
            Err(AnalyticsError::cross_check_failed(
                self.name(),
                format!(
                    "converged to {} where NPV {:.3e} is not negligible",
                    result.root, result.residual
                ),
            ))
        }
    }

    fn name(&self) -> &'static str {
        "Newton-Raphson"
    }
}

/// True when NPV at `rate` is negligible next to the discounted flows.
///
/// Guards against solvers that "converge" by driving every discount factor
/// towards zero instead of finding a genuine root.
fn is_root(series: &CashFlowSeries, rate: f64) -> bool {
    if !(rate > -1.0) || !rate.is_finite() {
        return false;
    }
    let flows = series.as_slice();
    let scale = discounted_magnitude(flows, rate);
    scale > 0.0 && discounted_sum(flows, rate).abs() <= RELATIVE_RESIDUAL_TOLERANCE * scale
}

/// Selectable cross-check strategy, e.g. from a configuration file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CrossCheckMethod {
    /// [`PolynomialCrossCheck`]
    #[default]
    Polynomial,
    /// [`NewtonCrossCheck`]
    Newton,
    /// Scan only.
    None,
}

impl CrossCheckMethod {
    /// Builds the solver for this method, or `None` for scan-only.
    #[must_use]
    pub fn solver(self) -> Option<Box<dyn CrossCheck>> {
        match self {
            Self::Polynomial => Some(Box::new(PolynomialCrossCheck::default())),
            Self::Newton => Some(Box::new(NewtonCrossCheck::default())),
            Self::None => None,
        }
    }
}

impl fmt::Display for CrossCheckMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Polynomial => "polynomial",
            Self::Newton => "newton",
            Self::None => "none",
        };
        write!(f, "{name}")
    }
}

impl FromStr for CrossCheckMethod {
    type Err = AnalyticsError;

    fn from_str(s: &str) -> AnalyticsResult<Self> {
        match s.to_lowercase().as_str() {
            "polynomial" | "poly" => Ok(Self::Polynomial),
            "newton" | "newton-raphson" => Ok(Self::Newton),
            "none" | "off" => Ok(Self::None),
            other => Err(AnalyticsError::InvalidInput(format!(
                "unknown cross-check method '{other}' (expected polynomial, newton or none)"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn series(flows: &[f64]) -> CashFlowSeries {
        CashFlowSeries::new(flows.to_vec()).unwrap()
    }

    #[test]
    fn test_polynomial_conventional() {
        let s = series(&[-100.0, 30.0, 40.0, 50.0, 60.0]);

        let irr = PolynomialCrossCheck::default().solve(&s).unwrap();

        assert_relative_eq!(irr, 0.248_883_356_6, epsilon = 1e-8);
    }

    #[test]
    fn test_polynomial_picks_root_nearest_guess() {
        let s = series(&[-100.0, 230.0, -132.0]);

        let near_ten = PolynomialCrossCheck { guess: 0.1 }.solve(&s).unwrap();
        let near_twenty = PolynomialCrossCheck { guess: 0.19 }.solve(&s).unwrap();

        assert_relative_eq!(near_ten, 0.10, epsilon = 1e-10);
        assert_relative_eq!(near_twenty, 0.20, epsilon = 1e-10);
    }

    #[test]
    fn test_polynomial_no_root() {
        let s = series(&[100.0, 50.0, 30.0]);

        let err = PolynomialCrossCheck::default().solve(&s).unwrap_err();

        assert!(matches!(err, AnalyticsError::CrossCheckFailed { solver: "Polynomial", .. }));
    }

    #[test]
    fn test_polynomial_constant_series_fails() {
        assert!(PolynomialCrossCheck::default().solve(&series(&[-5.0])).is_err());
    }

    #[test]
    fn test_polynomial_finds_negative_rate() {
        // -100 then +50 two years later: (1 + r)^2 = 0.5
        let s = series(&[-100.0, 0.0, 50.0]);

        let irr = PolynomialCrossCheck::default().solve(&s).unwrap();

        assert_relative_eq!(irr, 0.5_f64.sqrt() - 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_newton_conventional() {
        let s = series(&[-100.0, 30.0, 40.0, 50.0, 60.0]);

        let irr = NewtonCrossCheck::default().solve(&s).unwrap();

        assert_relative_eq!(irr, 0.248_883_356_6, epsilon = 1e-8);
    }

    #[test]
    fn test_newton_rejects_vanishing_discount_factors() {
        // NPV = 1 / (1 + r) never reaches zero, but Newton pushes r to infinity
        let s = series(&[0.0, 1.0]);

        assert!(NewtonCrossCheck::default().solve(&s).is_err());
    }

    #[test]
    fn test_newton_no_root() {
        let s = series(&[100.0, 50.0, 30.0]);

        assert!(NewtonCrossCheck::default().solve(&s).is_err());
    }

    #[test]
    fn test_method_parsing() {
        assert_eq!("Newton".parse::<CrossCheckMethod>().unwrap(), CrossCheckMethod::Newton);
        assert_eq!("poly".parse::<CrossCheckMethod>().unwrap(), CrossCheckMethod::Polynomial);
        assert_eq!("off".parse::<CrossCheckMethod>().unwrap(), CrossCheckMethod::None);
        assert!("brent".parse::<CrossCheckMethod>().is_err());
        assert_eq!(CrossCheckMethod::default().to_string(), "polynomial");
    }

    #[test]
    fn test_method_solver() {
        assert_eq!(CrossCheckMethod::Newton.solver().unwrap().name(), "Newton-Raphson");
        assert!(CrossCheckMethod::None.solver().is_none());
    }
}
