//! Discount-rate windows.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{CoreError, CoreResult};

/// Lower bound of the IRR search domain (0.01%).
pub const SEARCH_RATE_MIN: f64 = 0.0001;

/// Upper bound of the IRR search domain (99.99%).
pub const SEARCH_RATE_MAX: f64 = 0.9999;

/// A closed window of discount rates, stored as fractions (0.05 = 5%).
///
/// Used both for the chart display window and for the root-finder search
/// domain. Construction guarantees `min <= max` and finite bounds.
///
/// # Example
///
/// ```rust
/// use npvlab_core::types::RateRange;
///
/// let window = RateRange::from_percent(-10.0, 30.0).unwrap();
/// assert!(window.contains(0.175));
/// assert!(!window.contains(0.35));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RateRangeRepr")]
pub struct RateRange {
    min: f64,
    max: f64,
}

#[derive(Deserialize)]
struct RateRangeRepr {
    min: f64,
    max: f64,
}

impl TryFrom<RateRangeRepr> for RateRange {
    type Error = CoreError;

    fn try_from(repr: RateRangeRepr) -> CoreResult<Self> {
        Self::new(repr.min, repr.max)
    }
}

impl RateRange {
    /// Creates a window from fractional bounds.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRange`] if `min > max` or either bound is
    /// not finite.
    pub fn new(min: f64, max: f64) -> CoreResult<Self> {
        if !min.is_finite() || !max.is_finite() {
            return Err(CoreError::invalid_range(format!(
                "bounds must be finite, got [{min}, {max}]"
            )));
        }
        if min > max {
            return Err(CoreError::invalid_range(format!(
                "min {min} exceeds max {max}"
            )));
        }
        Ok(Self { min, max })
    }

    /// Creates a window from percentage bounds (`-10.0` means -10%).
    pub fn from_percent(min_pct: f64, max_pct: f64) -> CoreResult<Self> {
        Self::new(min_pct / 100.0, max_pct / 100.0)
    }

    /// The default IRR search domain, (0.0001, 0.9999).
    #[must_use]
    pub const fn default_search() -> Self {
        Self {
            min: SEARCH_RATE_MIN,
            max: SEARCH_RATE_MAX,
        }
    }

    /// Lower bound.
    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Upper bound.
    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// `max - min`.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.max - self.min
    }

    /// True if `rate` lies in the closed window.
    #[must_use]
    pub fn contains(&self, rate: f64) -> bool {
        self.min <= rate && rate <= self.max
    }
}

impl Default for RateRange {
    fn default() -> Self {
        Self::default_search()
    }
}

impl fmt::Display for RateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:.2}%, {:.2}%]", self.min * 100.0, self.max * 100.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_rejects_inverted() {
        assert!(matches!(
            RateRange::new(0.3, 0.1),
            Err(CoreError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_degenerate_allowed() {
        let range = RateRange::new(0.1, 0.1).unwrap();
        assert_eq!(range.width(), 0.0);
        assert!(range.contains(0.1));
    }

    #[test]
    fn test_rejects_non_finite() {
        assert!(RateRange::new(f64::NEG_INFINITY, 0.1).is_err());
        assert!(RateRange::new(0.0, f64::NAN).is_err());
    }

    #[test]
    fn test_from_percent() {
        let range = RateRange::from_percent(-10.0, 30.0).unwrap();

        assert_relative_eq!(range.min(), -0.10);
        assert_relative_eq!(range.max(), 0.30);
        assert_eq!(range.to_string(), "[-10.00%, 30.00%]");
    }

    #[test]
    fn test_default_search_domain() {
        let search = RateRange::default();

        assert_eq!(search.min(), SEARCH_RATE_MIN);
        assert_eq!(search.max(), SEARCH_RATE_MAX);
        assert!(!search.contains(0.0));
        assert!(!search.contains(1.0));
    }

    #[test]
    fn test_serde_validates() {
        let ok: RateRange = serde_json::from_str(r#"{"min": -0.1, "max": 0.3}"#).unwrap();
        assert_relative_eq!(ok.width(), 0.4);

        assert!(serde_json::from_str::<RateRange>(r#"{"min": 0.3, "max": -0.1}"#).is_err());
    }
}
