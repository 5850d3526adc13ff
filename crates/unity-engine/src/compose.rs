//! Weighted Composer — one composite score per item, summing to unity.

use unity_core::config::WeightConfig;
use unity_core::errors::{AuditError, MetricError, WeightError};

use crate::normalize::{renormalize, verify_unity, ShareMatrix};

/// Composite scores per item, normalized to sum to exactly 1.0.
#[derive(Debug, Clone)]
pub struct CompositeShares {
    ids: Vec<String>,
    shares: Vec<f64>,
}

impl CompositeShares {
    pub(crate) fn new(ids: Vec<String>, shares: Vec<f64>) -> Self {
        debug_assert_eq!(ids.len(), shares.len());
        Self { ids, shares }
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn shares(&self) -> &[f64] {
        &self.shares
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Share for one item id, if present.
    pub fn share_of(&self, id: &str) -> Option<f64> {
        self.ids
            .iter()
            .position(|i| i == id)
            .map(|idx| self.shares[idx])
    }

    /// (id, share) pairs in original item order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.ids
            .iter()
            .map(String::as_str)
            .zip(self.shares.iter().copied())
    }
}

/// Compose normalized per-metric shares into one composite score per item.
///
/// The weight set must sum to 1.0 within tolerance and cover the matrix's
/// metric names exactly (no extra, no missing). The weighted sums are
/// divided by their total — weighted sums of already-unity-summing shares
/// do not themselves sum to exactly 1 under floating point — and the unity
/// postcondition is then verified, not assumed.
pub fn compose(
    matrix: &ShareMatrix,
    weights: &WeightConfig,
) -> Result<CompositeShares, AuditError> {
    weights.validate()?;
    weights.check_metric_names(matrix.metrics())?;

    let weight_row: Vec<f64> = matrix
        .metrics()
        .iter()
        .map(|metric| {
            weights
                .target(metric)
                .ok_or_else(|| WeightError::MetricMismatch {
                    missing: vec![metric.clone()],
                    unexpected: Vec::new(),
                })
        })
        .collect::<Result<_, _>>()?;

    let mut composite: Vec<f64> = (0..matrix.len())
        .map(|item| {
            matrix
                .row(item)
                .iter()
                .zip(&weight_row)
                .map(|(share, weight)| share * weight)
                .sum()
        })
        .collect();

    let total: f64 = composite.iter().sum();
    if total <= 0.0 {
        return Err(MetricError::DegenerateSum {
            metric: "composite".to_string(),
        }
        .into());
    }

    renormalize(&mut composite);
    verify_unity("composite", &composite)?;

    Ok(CompositeShares::new(matrix.ids().to_vec(), composite))
}
