//! Unity Normalizer — proportional shares that sum to exactly 1.

use smallvec::SmallVec;

use unity_core::constants::UNITY_TOLERANCE;
use unity_core::errors::MetricError;
use unity_core::types::Snapshot;

/// Normalize one metric column to proportional shares.
///
/// Each share is `value / sum(values)`, renormalized once more so the
/// column sums to 1.0 within [`UNITY_TOLERANCE`]. An item with a zero raw
/// value receives a zero share provided the column sum is positive.
///
/// `item_ids` is used only to name the offending item in errors and must be
/// the same length as `values`.
pub fn unity_normalize(
    metric: &str,
    item_ids: &[&str],
    values: &[f64],
) -> Result<Vec<f64>, MetricError> {
    debug_assert_eq!(item_ids.len(), values.len());

    if values.is_empty() {
        return Err(MetricError::EmptyItemSet {
            metric: metric.to_string(),
        });
    }

    for (id, &value) in item_ids.iter().zip(values) {
        if !value.is_finite() {
            return Err(MetricError::NonFiniteValue {
                metric: metric.to_string(),
                item: (*id).to_string(),
            });
        }
        if value < 0.0 {
            return Err(MetricError::NegativeValue {
                metric: metric.to_string(),
                item: (*id).to_string(),
                value,
            });
        }
    }

    let sum: f64 = values.iter().sum();
    if sum <= 0.0 {
        return Err(MetricError::DegenerateSum {
            metric: metric.to_string(),
        });
    }

    let mut shares: Vec<f64> = values.iter().map(|v| v / sum).collect();
    renormalize(&mut shares);
    verify_unity(metric, &shares)?;
    Ok(shares)
}

/// Divide every share by the current total, absorbing floating-point drift.
/// The caller guarantees the total is positive.
pub(crate) fn renormalize(shares: &mut [f64]) {
    let total: f64 = shares.iter().sum();
    for share in shares.iter_mut() {
        *share /= total;
    }
}

/// Assert the unity contract: shares sum to 1.0 within [`UNITY_TOLERANCE`].
///
/// Checked at the end of every normalization and composition, never
/// assumed. Returns the observed sum for the trace report.
pub fn verify_unity(scope: &str, shares: &[f64]) -> Result<f64, MetricError> {
    let sum: f64 = shares.iter().sum();
    if (sum - 1.0).abs() > UNITY_TOLERANCE {
        return Err(MetricError::UnityViolated {
            scope: scope.to_string(),
            sum,
            tolerance: UNITY_TOLERANCE,
        });
    }
    Ok(sum)
}

/// Per-item, per-metric normalized shares for a whole snapshot.
///
/// Rows follow the snapshot's item order; columns follow its declared
/// metric order.
#[derive(Debug, Clone)]
pub struct ShareMatrix {
    metrics: Vec<String>,
    ids: Vec<String>,
    rows: Vec<SmallVec<[f64; 4]>>,
}

impl ShareMatrix {
    /// Normalize every metric column of the snapshot.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self, MetricError> {
        let ids: Vec<String> = snapshot.items().iter().map(|i| i.id.clone()).collect();
        let id_refs: Vec<&str> = ids.iter().map(String::as_str).collect();

        let mut columns = Vec::with_capacity(snapshot.metrics().len());
        for (index, metric) in snapshot.metrics().iter().enumerate() {
            let values: Vec<f64> = snapshot.column(index).collect();
            columns.push(unity_normalize(metric, &id_refs, &values)?);
        }

        let rows = (0..ids.len())
            .map(|item| columns.iter().map(|col| col[item]).collect())
            .collect();

        Ok(Self {
            metrics: snapshot.metrics().to_vec(),
            ids,
            rows,
        })
    }

    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn metric_index(&self, metric: &str) -> Option<usize> {
        self.metrics.iter().position(|m| m == metric)
    }

    /// Share of one item for one metric.
    pub fn share(&self, item: usize, metric: usize) -> f64 {
        self.rows[item][metric]
    }

    /// All of one item's metric shares, in metric order.
    pub fn row(&self, item: usize) -> &[f64] {
        &self.rows[item]
    }

    /// One metric's shares, in item order.
    pub fn column(&self, metric: usize) -> Vec<f64> {
        self.rows.iter().map(|row| row[metric]).collect()
    }
}
