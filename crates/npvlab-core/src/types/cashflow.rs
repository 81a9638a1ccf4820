//! Cash-flow series.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;

use super::opposite_signs;
use crate::error::{CoreError, CoreResult};

/// An ordered series of annual cash flows.
///
/// Index `t` is the period, so element 0 is conventionally the initial
/// outlay (usually negative) and every later element arrives one year after
/// the previous one. Zero entries are allowed. The series is never empty and
/// every entry is finite; once built it cannot be modified.
///
/// # Example
///
/// ```rust
/// use npvlab_core::types::CashFlowSeries;
///
/// let series = CashFlowSeries::new(vec![-100.0, 30.0, 40.0, 50.0, 60.0]).unwrap();
/// assert_eq!(series.len(), 5);
/// assert_eq!(series.initial_outlay(), -100.0);
/// assert_eq!(series.sign_changes(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct CashFlowSeries {
    flows: Vec<f64>,
}

impl CashFlowSeries {
    /// Creates a series from per-period amounts.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidCashFlow`] if `flows` is empty or holds a
    /// non-finite amount.
    pub fn new(flows: Vec<f64>) -> CoreResult<Self> {
        if flows.is_empty() {
            return Err(CoreError::invalid_cash_flow(
                "at least one cash flow is required",
            ));
        }
        if let Some((period, amount)) = flows.iter().enumerate().find(|(_, cf)| !cf.is_finite()) {
            return Err(CoreError::invalid_cash_flow(format!(
                "amount {amount} in period {period} is not finite"
            )));
        }
        Ok(Self { flows })
    }

    /// Number of periods, including period 0.
    #[must_use]
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    /// Always false: a series holds at least one cash flow.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// Returns the cash flow in `period`, if any.
    #[must_use]
    pub fn get(&self, period: usize) -> Option<f64> {
        self.flows.get(period).copied()
    }

    /// The period-0 amount.
    #[must_use]
    pub fn initial_outlay(&self) -> f64 {
        self.flows[0]
    }

    /// Iterates over the amounts in period order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.flows.iter().copied()
    }

    /// Returns the amounts as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.flows
    }

    /// Counts sign flips between index-adjacent cash flows.
    ///
    /// Only strictly positive/negative neighbours count, so a zero entry
    /// never forms a flip with either side. By Descartes' rule of signs this
    /// bounds the number of positive discount factors at which NPV vanishes;
    /// it is a diagnostic, not a promise about how many IRRs exist.
    #[must_use]
    pub fn sign_changes(&self) -> usize {
        self.flows.windows(2).filter(|w| opposite_signs(w[0], w[1])).count()
    }

    /// True when no cash flow is negative or no cash flow is positive.
    #[must_use]
    pub fn is_single_signed(&self) -> bool {
        self.flows.iter().all(|&cf| cf >= 0.0) || self.flows.iter().all(|&cf| cf <= 0.0)
    }
}

impl Index<usize> for CashFlowSeries {
    type Output = f64;

    fn index(&self, period: usize) -> &f64 {
        &self.flows[period]
    }
}

impl TryFrom<Vec<f64>> for CashFlowSeries {
    type Error = CoreError;

    fn try_from(flows: Vec<f64>) -> CoreResult<Self> {
        Self::new(flows)
    }
}

impl From<CashFlowSeries> for Vec<f64> {
    fn from(series: CashFlowSeries) -> Self {
        series.flows
    }
}

impl fmt::Display for CashFlowSeries {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cf) in self.flows.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{cf}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_empty() {
        assert!(matches!(
            CashFlowSeries::new(vec![]),
            Err(CoreError::InvalidCashFlow { .. })
        ));
    }

    #[test]
    fn test_rejects_non_finite() {
        let err = CashFlowSeries::new(vec![-100.0, f64::NAN]).unwrap_err();
        assert!(err.to_string().contains("period 1"));
    }

    #[test]
    fn test_sign_changes() {
        let conventional = CashFlowSeries::new(vec![-100.0, 30.0, 40.0, 50.0, 60.0]).unwrap();
        let two_flips = CashFlowSeries::new(vec![-100.0, 230.0, -132.0]).unwrap();
        let positive = CashFlowSeries::new(vec![100.0, 50.0, 30.0]).unwrap();

        assert_eq!(conventional.sign_changes(), 1);
        assert_eq!(two_flips.sign_changes(), 2);
        assert_eq!(positive.sign_changes(), 0);
    }

    #[test]
    fn test_sign_changes_tiny_amounts() {
        // 1e-200 * -1e-200 underflows to zero
        let series = CashFlowSeries::new(vec![1e-200, -1e-200, 1e-200]).unwrap();

        assert_eq!(series.sign_changes(), 2);
    }

    #[test]
    fn test_zero_breaks_adjacency() {
        // -100 -> 0 -> 50: no index-adjacent pair has strictly opposite signs
        let series = CashFlowSeries::new(vec![-100.0, 0.0, 50.0]).unwrap();

        assert_eq!(series.sign_changes(), 0);
        assert!(!series.is_single_signed());
    }

    #[test]
    fn test_single_signed() {
        assert!(CashFlowSeries::new(vec![0.0, 10.0]).unwrap().is_single_signed());
        assert!(CashFlowSeries::new(vec![-5.0, 0.0, -1.0]).unwrap().is_single_signed());
        assert!(!CashFlowSeries::new(vec![-5.0, 1.0]).unwrap().is_single_signed());
    }

    #[test]
    fn test_accessors() {
        let series = CashFlowSeries::new(vec![-50.0, 20.0, 40.0]).unwrap();

        assert_eq!(series[1], 20.0);
        assert_eq!(series.get(2), Some(40.0));
        assert_eq!(series.get(3), None);
        assert_eq!(series.iter().sum::<f64>(), 10.0);
        assert!(!series.is_empty());
        assert_eq!(series.to_string(), "-50, 20, 40");
    }

    #[test]
    fn test_serde_validates() {
        let series: CashFlowSeries = serde_json::from_str("[-100.0, 60.0, 60.0]").unwrap();
        assert_eq!(series.len(), 3);

        assert!(serde_json::from_str::<CashFlowSeries>("[]").is_err());
        assert_eq!(serde_json::to_string(&series).unwrap(), "[-100.0,60.0,60.0]");
    }
}
