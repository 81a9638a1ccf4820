//! Sampled NPV curves.

use serde::{Deserialize, Serialize};

use super::opposite_signs;
use crate::error::{CoreError, CoreResult};

/// One sample of the NPV profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    /// Discount rate as a fraction.
    pub rate: f64,
    /// Net present value at `rate`.
    pub npv: f64,
}

impl CurvePoint {
    /// Creates a curve point.
    #[must_use]
    pub fn new(rate: f64, npv: f64) -> Self {
        Self { rate, npv }
    }
}

/// NPV sampled across a window of discount rates, ordered by rate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NpvCurve {
    points: Vec<CurvePoint>,
}

impl NpvCurve {
    /// Creates a curve from samples.
    ///
    /// # Errors
    ///
    /// Returns [`CoreError::InvalidRange`] if fewer than two points are given
    /// or the rates decrease anywhere.
    pub fn from_points(points: Vec<CurvePoint>) -> CoreResult<Self> {
        if points.len() < 2 {
            return Err(CoreError::invalid_range(format!(
                "a curve needs at least 2 points, got {}",
                points.len()
            )));
        }
        if points.windows(2).any(|w| w[1].rate < w[0].rate) {
            return Err(CoreError::invalid_range("curve rates must be non-decreasing"));
        }
        Ok(Self { points })
    }

    /// The samples in rate order.
    #[must_use]
    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false: a curve holds at least two samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Sampled rates.
    pub fn rates(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.rate)
    }

    /// Sampled NPV values.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.points.iter().map(|p| p.npv)
    }

    /// Adjacent sample pairs between which the curve crosses zero.
    ///
    /// A sample sitting exactly on zero is reported once, as the right end
    /// of its pair (or the left end when it is the first sample).
    #[must_use]
    pub fn zero_crossings(&self) -> Vec<(CurvePoint, CurvePoint)> {
        self.points
            .windows(2)
            .enumerate()
            .filter(|(i, w)| {
                opposite_signs(w[0].npv, w[1].npv)
                    || w[1].npv == 0.0
                    || (*i == 0 && w[0].npv == 0.0)
            })
            .map(|(_, w)| (w[0], w[1]))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(samples: &[(f64, f64)]) -> NpvCurve {
        NpvCurve::from_points(samples.iter().map(|&(r, v)| CurvePoint::new(r, v)).collect())
            .unwrap()
    }

    #[test]
    fn test_requires_two_points() {
        assert!(NpvCurve::from_points(vec![CurvePoint::new(0.1, 5.0)]).is_err());
    }

    #[test]
    fn test_rejects_decreasing_rates() {
        let points = vec![CurvePoint::new(0.2, 1.0), CurvePoint::new(0.1, 2.0)];
        assert!(NpvCurve::from_points(points).is_err());
    }

    #[test]
    fn test_accessors() {
        let c = curve(&[(0.0, 80.0), (0.1, 56.3), (0.2, -7.0)]);

        assert_eq!(c.len(), 3);
        assert_eq!(c.rates().collect::<Vec<_>>(), vec![0.0, 0.1, 0.2]);
        assert_eq!(c.values().last(), Some(-7.0));
    }

    #[test]
    fn test_zero_crossings() {
        let c = curve(&[(0.0, 2.0), (0.1, -1.0), (0.2, 0.0), (0.3, 3.0), (0.4, 4.0)]);

        let crossings = c.zero_crossings();

        assert_eq!(crossings.len(), 2);
        assert_eq!(crossings[0].0.rate, 0.0);
        assert_eq!(crossings[1].1.rate, 0.2);
    }

    #[test]
    fn test_tiny_values_crossing() {
        let c = curve(&[(0.0, 1e-200), (0.1, 2e-200), (0.2, -1e-200)]);

        let crossings = c.zero_crossings();

        assert_eq!(crossings.len(), 1);
        assert_eq!(crossings[0].0.rate, 0.1);
    }

    #[test]
    fn test_zero_at_first_sample() {
        let c = curve(&[(0.0, 0.0), (0.1, 1.0), (0.2, 2.0)]);

        assert_eq!(c.zero_crossings().len(), 1);
    }

    #[test]
    fn test_serializes_as_list() {
        let c = curve(&[(0.0, 1.0), (0.5, -1.0)]);

        let json = serde_json::to_string(&c).unwrap();

        assert_eq!(json, r#"[{"rate":0.0,"npv":1.0},{"rate":0.5,"npv":-1.0}]"#);
    }
}
