//! Sets of internal rates of return.

use serde::{Deserialize, Serialize};

use super::RateRange;
use crate::error::{CoreError, CoreResult};

/// Discount rates at which NPV vanishes, kept in ascending order.
///
/// Two rates closer than the merge threshold passed to [`IrrSet::insert`]
/// are treated as the same root and the value inserted first is kept. The
/// threshold is a heuristic: it can merge two genuinely distinct roots that
/// sit closer together than the threshold.
///
/// An empty set is a valid outcome (no IRR exists in the searched domain),
/// not an error.
///
/// Serializes as a plain list. Deserializing rejects lists that are not
/// finite and strictly ascending.
///
/// # Example
///
/// ```rust
/// use npvlab_core::types::IrrSet;
///
/// let mut irrs = IrrSet::new();
/// assert!(irrs.insert(0.20, 0.01));
/// assert!(irrs.insert(0.10, 0.01));
/// assert!(!irrs.insert(0.1004, 0.01)); // same root as 0.10
///
/// assert_eq!(irrs.as_slice(), &[0.10, 0.20]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct IrrSet {
    rates: Vec<f64>,
}

impl IrrSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `rate` unless a member lies within `merge_threshold` of it.
    ///
    /// Returns true if the rate was added.
    pub fn insert(&mut self, rate: f64, merge_threshold: f64) -> bool {
        if self.contains_near(rate, merge_threshold) {
            return false;
        }
        let at = self.rates.partition_point(|&r| r < rate);
        self.rates.insert(at, rate);
        true
    }

    /// True if some member lies strictly closer than `threshold` to `rate`.
    #[must_use]
    pub fn contains_near(&self, rate: f64, threshold: f64) -> bool {
        self.rates.iter().any(|&r| (r - rate).abs() < threshold)
    }

    /// Number of distinct rates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rates.len()
    }

    /// True if no IRR was found.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rates.is_empty()
    }

    /// Iterates over the rates in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.rates.iter().copied()
    }

    /// The rates in ascending order.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.rates
    }

    /// Members that fall inside a display window.
    ///
    /// Membership of the set itself never depends on the window; this is
    /// only for deciding which rates to mark on a chart.
    #[must_use]
    pub fn within(&self, window: &RateRange) -> Vec<f64> {
        self.iter().filter(|&r| window.contains(r)).collect()
    }
}

impl TryFrom<Vec<f64>> for IrrSet {
    type Error = CoreError;

    fn try_from(rates: Vec<f64>) -> CoreResult<Self> {
        if let Some(bad) = rates.iter().find(|r| !r.is_finite()) {
            return Err(CoreError::invalid_range(format!("IRR {bad} is not finite")));
        }
        if let Some(w) = rates.windows(2).find(|w| w[0] >= w[1]) {
            return Err(CoreError::invalid_range(format!(
                "IRRs must be strictly ascending, got {} before {}",
                w[0], w[1]
            )));
        }
        Ok(Self { rates })
    }
}

impl From<IrrSet> for Vec<f64> {
    fn from(set: IrrSet) -> Self {
        set.rates
    }
}

impl<'a> IntoIterator for &'a IrrSet {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.rates.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_by_default() {
        let irrs = IrrSet::new();
        assert!(irrs.is_empty());
        assert_eq!(irrs.len(), 0);
    }

    #[test]
    fn test_merge_keeps_first_seen() {
        let mut irrs = IrrSet::new();

        assert!(irrs.insert(0.1745, 0.01));
        assert!(!irrs.insert(0.1790, 0.01));

        assert_eq!(irrs.as_slice(), &[0.1745]);
    }

    #[test]
    fn test_threshold_is_strict() {
        let mut irrs = IrrSet::new();
        irrs.insert(0.25, 0.5);

        // Exactly one threshold apart counts as distinct
        assert!(irrs.insert(0.75, 0.5));
        assert_eq!(irrs.len(), 2);
    }

    #[test]
    fn test_sorted_iteration() {
        let mut irrs = IrrSet::new();
        for r in [0.4, 0.1, 0.25] {
            irrs.insert(r, 0.01);
        }

        assert_eq!(irrs.iter().collect::<Vec<_>>(), vec![0.1, 0.25, 0.4]);
        assert_eq!((&irrs).into_iter().count(), 3);
    }

    #[test]
    fn test_within_window() {
        let mut irrs = IrrSet::new();
        irrs.insert(0.10, 0.01);
        irrs.insert(0.45, 0.01);

        let window = RateRange::from_percent(-10.0, 30.0).unwrap();

        assert_eq!(irrs.within(&window), vec![0.10]);
        assert_eq!(irrs.len(), 2);
    }

    #[test]
    fn test_serializes_as_list() {
        let mut irrs = IrrSet::new();
        irrs.insert(0.2, 0.01);
        irrs.insert(0.1, 0.01);

        assert_eq!(serde_json::to_string(&irrs).unwrap(), "[0.1,0.2]");
    }

    #[test]
    fn test_deserialize_checks_order() {
        let irrs: IrrSet = serde_json::from_str("[0.1,0.2]").unwrap();
        assert_eq!(irrs.as_slice(), &[0.1, 0.2]);

        assert!(serde_json::from_str::<IrrSet>("[]").unwrap().is_empty());
        assert!(serde_json::from_str::<IrrSet>("[0.2,0.1]").is_err());
        assert!(serde_json::from_str::<IrrSet>("[0.1,0.1]").is_err());
    }
}
