//! Root finder: every IRR of a cash-flow series.
//!
//! A series with more than one sign change can have several IRRs, so a
//! single Newton iteration is not enough. The search here is:
//!
//! 1. Scan NPV densely over a fixed search domain and collect every pair
//!    of neighbouring samples that brackets a root.
//! 2. Bisect each bracket down to the configured precision.
//! 3. Merge estimates closer than the merge threshold.
//! 4. Ask an optional cross-check solver for one more opinion and keep its
//!    answer only if it is a root the scan did not already report.
//!
//! The search domain never depends on a display window; filtering IRRs to
//! what is visible on a chart is the caller's job (see [`IrrSet::within`]).
//!
//! # Example
//!
//! ```rust
//! use npvlab_analytics::roots::find_roots;
//! use npvlab_core::CashFlowSeries;
//!
//! let series = CashFlowSeries::new(vec![-100.0, 230.0, -132.0]).unwrap();
//! let analysis = find_roots(&series).unwrap();
//!
//! assert_eq!(analysis.sign_changes, 2);
//! assert_eq!(analysis.irrs.len(), 2);
//! ```

mod cross_check;

pub use cross_check::{
    CrossCheck, CrossCheckMethod, NewtonCrossCheck, PolynomialCrossCheck, DEFAULT_GUESS,
};

use serde::{Deserialize, Serialize};

use npvlab_core::{CashFlowSeries, IrrSet, RateRange};
use npvlab_math::solvers::{bisection, scan_brackets, SolverConfig};

use crate::error::{AnalyticsError, AnalyticsResult};
use crate::valuation::discounted_sum;

/// Samples taken across the search domain.
pub const DEFAULT_SCAN_POINTS: usize = 10_000;

/// Bracket width at which bisection stops.
pub const DEFAULT_PRECISION: f64 = 1e-4;

/// Estimates closer than this (one percentage point) are the same root.
pub const DEFAULT_MERGE_THRESHOLD: f64 = 0.01;

/// Upper bound on halvings per bracket.
pub const DEFAULT_MAX_BISECTIONS: u32 = 200;

/// Tunable parameters of the root search.
///
/// The merge threshold is a known approximation: two genuine roots closer
/// than it are reported as one, and two estimates of one root straddling it
/// would be reported twice.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RootFinderConfig {
    /// Rates scanned for sign changes.
    pub search_range: RateRange,
    /// Number of samples across `search_range`.
    pub scan_points: usize,
    /// Bracket width at which bisection stops.
    pub precision: f64,
    /// Minimum separation between two reported roots.
    pub merge_threshold: f64,
    /// Maximum halvings per bracket.
    pub max_bisections: u32,
}

impl Default for RootFinderConfig {
    fn default() -> Self {
        Self {
            search_range: RateRange::default_search(),
            scan_points: DEFAULT_SCAN_POINTS,
            precision: DEFAULT_PRECISION,
            merge_threshold: DEFAULT_MERGE_THRESHOLD,
            max_bisections: DEFAULT_MAX_BISECTIONS,
        }
    }
}

impl RootFinderConfig {
    /// Sets the search domain.
    #[must_use]
    pub fn with_search_range(mut self, search_range: RateRange) -> Self {
        self.search_range = search_range;
        self
    }

    /// Sets the number of scan samples.
    #[must_use]
    pub fn with_scan_points(mut self, scan_points: usize) -> Self {
        self.scan_points = scan_points;
        self
    }

    /// Sets the bisection precision.
    #[must_use]
    pub fn with_precision(mut self, precision: f64) -> Self {
        self.precision = precision;
        self
    }

    /// Sets the merge threshold.
    #[must_use]
    pub fn with_merge_threshold(mut self, merge_threshold: f64) -> Self {
        self.merge_threshold = merge_threshold;
        self
    }

    /// Sets the maximum halvings per bracket.
    #[must_use]
    pub fn with_max_bisections(mut self, max_bisections: u32) -> Self {
        self.max_bisections = max_bisections;
        self
    }

    /// Checks that the configuration describes a usable search.
    pub fn validate(&self) -> AnalyticsResult<()> {
        if self.scan_points < 2 {
            return Err(AnalyticsError::invalid_range(format!(
                "scan needs at least 2 points, got {}",
                self.scan_points
            )));
        }
        if !(self.precision > 0.0) || !self.precision.is_finite() {
            return Err(AnalyticsError::invalid_range(format!(
                "precision must be positive, got {}",
                self.precision
            )));
        }
        if !(self.merge_threshold > 0.0) || !self.merge_threshold.is_finite() {
            return Err(AnalyticsError::invalid_range(format!(
                "merge threshold must be positive, got {}",
                self.merge_threshold
            )));
        }
        if !(self.search_range.min() > -1.0) {
            return Err(AnalyticsError::Domain {
                rate: self.search_range.min(),
            });
        }
        Ok(())
    }

    fn bisection_config(&self) -> SolverConfig {
        SolverConfig::new(self.precision, self.max_bisections)
    }
}

/// What the cross-check solver contributed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum CrossCheckOutcome {
    /// No cross-check solver was configured, or the series was degenerate.
    NotRun,
    /// The solver found a root the scan had already reported.
    Agreed {
        /// The solver's estimate.
        rate: f64,
    },
    /// The solver found a root the scan missed; it was added to the set.
    Added {
        /// The added rate.
        rate: f64,
    },
    /// The solver failed; the scan results stand as they are.
    Failed {
        /// Why the solver failed.
        reason: String,
    },
}

/// Every IRR of a series plus diagnostics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IrrAnalysis {
    /// Distinct IRRs in ascending order; empty when none exists.
    pub irrs: IrrSet,
    /// Index-adjacent sign flips in the raw cash flows.
    pub sign_changes: usize,
    /// How many of `irrs` came from the scan.
    pub scan_roots: usize,
    /// Contribution of the cross-check solver.
    pub cross_check: CrossCheckOutcome,
}

impl IrrAnalysis {
    /// True when the series has no IRR.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.irrs.is_empty()
    }
}

/// Finds every IRR with the default configuration and the polynomial
/// cross-check.
pub fn find_roots(series: &CashFlowSeries) -> AnalyticsResult<IrrAnalysis> {
    find_roots_with(
        series,
        &RootFinderConfig::default(),
        Some(&PolynomialCrossCheck::default()),
    )
}

/// Finds every IRR with an explicit configuration and optional cross-check.
///
/// An empty [`IrrSet`] is a normal result. Cross-check failures are logged
/// and recorded in [`IrrAnalysis::cross_check`], never returned.
///
/// # Errors
///
/// Only an invalid `config` is an error.
pub fn find_roots_with(
    series: &CashFlowSeries,
    config: &RootFinderConfig,
    cross_check: Option<&dyn CrossCheck>,
) -> AnalyticsResult<IrrAnalysis> {
    config.validate()?;

    let sign_changes = series.sign_changes();

    // Identically zero NPV: every rate is a root, so no rate is an IRR
    if series.iter().all(|cf| cf == 0.0) {
        log::debug!("all cash flows are zero; IRR is undefined");
        return Ok(IrrAnalysis {
            irrs: IrrSet::new(),
            sign_changes,
            scan_roots: 0,
            cross_check: CrossCheckOutcome::NotRun,
        });
    }

    let mut irrs = IrrSet::new();
    for estimate in scan_for_roots(series, config)? {
        irrs.insert(estimate, config.merge_threshold);
    }
    let scan_roots = irrs.len();

    let cross_check = match cross_check {
        None => CrossCheckOutcome::NotRun,
        Some(solver) => match solver.solve(series) {
            Ok(rate) if irrs.insert(rate, config.merge_threshold) => {
                log::debug!("{} cross-check added IRR {rate}", solver.name());
                CrossCheckOutcome::Added { rate }
            }
            Ok(rate) => CrossCheckOutcome::Agreed { rate },
            Err(err) => {
                log::debug!("{err}; keeping {scan_roots} scan root(s)");
                CrossCheckOutcome::Failed {
                    reason: err.to_string(),
                }
            }
        },
    };

    Ok(IrrAnalysis {
        irrs,
        sign_changes,
        scan_roots,
        cross_check,
    })
}

/// Raw root estimates from the scan, one per bracket, before merging.
///
/// Estimates are in ascending order. A root landing exactly on a scan
/// sample shows up twice (once per neighbouring bracket).
pub fn scan_for_roots(
    series: &CashFlowSeries,
    config: &RootFinderConfig,
) -> AnalyticsResult<Vec<f64>> {
    config.validate()?;

    let flows = series.as_slice();
    let npv = |rate: f64| discounted_sum(flows, rate);

    let brackets = scan_brackets(
        npv,
        config.search_range.min(),
        config.search_range.max(),
        config.scan_points,
    )?;

    let solver_config = config.bisection_config();
    let mut estimates = Vec::with_capacity(brackets.len());
    for bracket in brackets {
        let result = bisection(npv, bracket.lo, bracket.hi, &solver_config)?;
        log::trace!(
            "bracket [{}, {}] -> root {} after {} halving(s)",
            bracket.lo,
            bracket.hi,
            result.root,
            result.iterations
        );
        estimates.push(result.root);
    }

    Ok(estimates)
}
