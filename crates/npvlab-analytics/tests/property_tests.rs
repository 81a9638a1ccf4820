//! Property-based tests for valuation and root-finding invariants.
//!
//! These tests verify properties that should hold for any cash-flow series:
//! - A single flow is worth its face value at every rate
//! - Single-signed series have no IRR
//! - NPV of a conventional series decreases as the rate rises
//! - Every reported IRR zeroes the NPV
//! - Reported IRRs are sorted and separated by at least the merge threshold

use proptest::prelude::*;

use npvlab_analytics::prelude::*;
use npvlab_core::CashFlowSeries;

// =============================================================================
// GENERATORS
// =============================================================================

/// A non-negative amount: exactly zero, or between 1 and 1000.
fn amount() -> impl Strategy<Value = f64> {
    prop_oneof![Just(0.0), 1.0..1000.0_f64]
}

/// A rate comfortably inside the valuation domain.
fn rate() -> impl Strategy<Value = f64> {
    -0.9..2.0_f64
}

/// Mixed-sign series of two to eight periods.
fn mixed_series() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        (amount(), any::<bool>()).prop_map(|(a, neg)| if neg { -a } else { a }),
        2..=8,
    )
}

proptest! {
    #[test]
    fn single_flow_is_rate_independent(cf in -1000.0..1000.0_f64, r in rate()) {
        let series = CashFlowSeries::new(vec![cf]).unwrap();

        prop_assert_eq!(compute_npv(&series, r).unwrap(), cf);
    }

    #[test]
    fn non_negative_series_has_no_irr(flows in prop::collection::vec(amount(), 1..=8)) {
        let series = CashFlowSeries::new(flows).unwrap();

        let analysis = find_roots(&series).unwrap();

        prop_assert!(analysis.irrs.is_empty());
        prop_assert_eq!(analysis.sign_changes, 0);
    }

    #[test]
    fn non_positive_series_has_no_irr(flows in prop::collection::vec(amount(), 1..=8)) {
        let negated: Vec<f64> = flows.into_iter().map(|a| -a).collect();
        let series = CashFlowSeries::new(negated).unwrap();

        let analysis = find_roots(&series).unwrap();

        prop_assert!(analysis.irrs.is_empty());
        prop_assert_eq!(analysis.sign_changes, 0);
    }

    #[test]
    fn conventional_npv_is_decreasing(
        outlay in 1.0..1000.0_f64,
        inflows in prop::collection::vec(1.0..1000.0_f64, 1..=6),
        r in rate(),
        step in 0.001..0.5_f64,
    ) {
        let mut flows = vec![-outlay];
        flows.extend(inflows);
        let series = CashFlowSeries::new(flows).unwrap();

        let lower = compute_npv(&series, r).unwrap();
        let higher = compute_npv(&series, r + step).unwrap();

        prop_assert!(higher < lower);
    }

    #[test]
    fn found_roots_zero_the_npv(flows in mixed_series()) {
        let series = CashFlowSeries::new(flows).unwrap();
        let analysis = find_roots(&series).unwrap();

        for irr in analysis.irrs.iter() {
            let npv = compute_npv(&series, irr).unwrap();
            let scale: f64 = series
                .iter()
                .enumerate()
                .map(|(t, cf)| cf.abs() / (1.0 + irr).powi(t as i32))
                .sum();
            // Bisection stops at a 1e-4 bracket, so allow the slope times that width
            let slope = npv_derivative(&series, irr).unwrap().abs();
            prop_assert!(
                npv.abs() <= 1e-4 * slope + 1e-6 * scale,
                "NPV({}) = {} for {}",
                irr,
                npv,
                series
            );
        }
    }

    #[test]
    fn roots_are_sorted_and_separated(flows in mixed_series()) {
        let series = CashFlowSeries::new(flows).unwrap();
        let config = RootFinderConfig::default();

        let analysis = find_roots_with(&series, &config, None).unwrap();

        let irrs = analysis.irrs.as_slice();
        for pair in irrs.windows(2) {
            prop_assert!(pair[1] - pair[0] >= config.merge_threshold);
        }
        prop_assert!(analysis.scan_roots == irrs.len());
    }
}
