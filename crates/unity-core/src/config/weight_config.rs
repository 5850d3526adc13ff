//! Operator weight set configuration.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::constants::UNITY_TOLERANCE;
use crate::errors::WeightError;

/// The operator-declared weight set: metric name → weight in [0, 1].
///
/// Declared once per run and immutable for that run's computation. The
/// invariant that weights sum to 1.0 within tolerance is checked by
/// [`WeightConfig::validate`] and again by the composer before use.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct WeightConfig {
    /// Target weight per metric.
    pub targets: FxHashMap<String, f64>,
}

impl WeightConfig {
    /// Build a weight set from (metric, weight) pairs.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        Self {
            targets: pairs.into_iter().map(|(m, w)| (m.into(), w)).collect(),
        }
    }

    /// Returns the declared target for a metric, if any.
    pub fn target(&self, metric: &str) -> Option<f64> {
        self.targets.get(metric).copied()
    }

    /// Validate range and unity-sum invariants.
    pub fn validate(&self) -> Result<(), WeightError> {
        if self.targets.is_empty() {
            return Err(WeightError::Empty);
        }
        for (metric, &weight) in &self.targets {
            if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
                return Err(WeightError::OutOfRange {
                    metric: metric.clone(),
                    weight,
                });
            }
        }
        let sum: f64 = self.targets.values().sum();
        if (sum - 1.0).abs() > UNITY_TOLERANCE {
            return Err(WeightError::SumNotUnity {
                sum,
                tolerance: UNITY_TOLERANCE,
            });
        }
        Ok(())
    }

    /// Check that the weight set covers `metrics` exactly: no extra names,
    /// no missing names.
    pub fn check_metric_names(&self, metrics: &[String]) -> Result<(), WeightError> {
        let mut missing: Vec<String> = metrics
            .iter()
            .filter(|m| !self.targets.contains_key(*m))
            .cloned()
            .collect();
        let mut unexpected: Vec<String> = self
            .targets
            .keys()
            .filter(|m| !metrics.contains(m))
            .cloned()
            .collect();
        if missing.is_empty() && unexpected.is_empty() {
            return Ok(());
        }
        missing.sort();
        unexpected.sort();
        Err(WeightError::MetricMismatch {
            missing,
            unexpected,
        })
    }
}
