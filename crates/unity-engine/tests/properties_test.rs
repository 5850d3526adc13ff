//! Property tests for the numeric invariants.

use proptest::prelude::*;

use unity_core::config::{CoverageConfig, LeverageConfig, WeightConfig};
use unity_core::constants::UNITY_TOLERANCE;
use unity_core::types::Snapshot;
use unity_engine::coverage::items_to_cover;
use unity_engine::{compose, CoverageTracker, ExclusionRequest, LeverageAnalyzer, ShareMatrix};

/// Non-negative raw values with at least one strictly positive entry.
fn raw_values() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(0.0f64..1_000.0, 1..40).prop_filter(
        "column sum must be positive",
        |values| values.iter().sum::<f64>() > 0.0,
    )
}

fn snapshot_from(values: &[f64]) -> Snapshot {
    let mut builder = Snapshot::builder(["metric"]);
    for (index, value) in values.iter().enumerate() {
        builder = builder.item(format!("item-{index}"), &[*value]);
    }
    builder.build().unwrap()
}

proptest! {
    #[test]
    fn normalizer_output_sums_to_unity(values in raw_values()) {
        let matrix = ShareMatrix::from_snapshot(&snapshot_from(&values)).unwrap();
        let sum: f64 = matrix.column(0).iter().sum();
        prop_assert!((sum - 1.0).abs() <= UNITY_TOLERANCE);
    }

    #[test]
    fn composer_output_sums_to_unity(
        a in raw_values(),
        weight_a in 0.0001f64..0.9999,
    ) {
        // Two metrics over the same items; second column is a shifted copy
        // so it is never degenerate.
        let mut builder = Snapshot::builder(["alpha", "beta"]);
        for (index, value) in a.iter().enumerate() {
            builder = builder.item(format!("item-{index}"), &[*value, value + 1.0]);
        }
        let snapshot = builder.build().unwrap();
        let matrix = ShareMatrix::from_snapshot(&snapshot).unwrap();
        let weights =
            WeightConfig::from_pairs([("alpha", weight_a), ("beta", 1.0 - weight_a)]);

        let composite = compose(&matrix, &weights).unwrap();
        let sum: f64 = composite.shares().iter().sum();
        prop_assert!((sum - 1.0).abs() <= UNITY_TOLERANCE);
    }

    #[test]
    fn leverage_is_exact_inverse_and_decreasing(share in 0.0001f64..1.0) {
        let analyzer = LeverageAnalyzer::new(LeverageConfig::default());
        let reading = analyzer.analyze("item", share).unwrap();
        prop_assert_eq!(reading.leverage, 1.0 / share);

        let smaller = analyzer.analyze("item", share / 2.0).unwrap();
        prop_assert!(smaller.leverage > reading.leverage);
    }

    #[test]
    fn coverage_conserves_mass_under_exclusion(
        values in prop::collection::vec(0.01f64..1_000.0, 2..30),
        excluded_index in any::<prop::sample::Index>(),
    ) {
        let snapshot = snapshot_from(&values);
        let matrix = ShareMatrix::from_snapshot(&snapshot).unwrap();
        let composite = compose(&matrix, &WeightConfig::from_pairs([("metric", 1.0)])).unwrap();

        let excluded = format!("item-{}", excluded_index.index(values.len()));
        let tracker = CoverageTracker::new(CoverageConfig::default());
        let report = tracker
            .track(&composite, &[ExclusionRequest::new(excluded, "property probe")])
            .unwrap();

        prop_assert!(
            (report.retained_mass + report.discarded_mass - 1.0).abs() <= UNITY_TOLERANCE
        );
        let post_sum: f64 = report.retained.iter().map(|r| r.post_filter_share).sum();
        prop_assert!((post_sum - 1.0).abs() <= UNITY_TOLERANCE);
    }

    #[test]
    fn items_to_cover_is_within_bounds(
        shares in prop::collection::vec(0.001f64..1.0, 1..50),
        target in 0.1f64..1.0,
    ) {
        let k = items_to_cover(shares.iter().copied(), target);
        prop_assert!(k >= 1);
        prop_assert!(k <= shares.len());
    }
}
