//! Metric normalization errors.

use super::error_code::{self, UnityErrorCode};

/// Errors raised while normalizing a metric column to unity.
#[derive(Debug, thiserror::Error)]
pub enum MetricError {
    #[error("metric '{metric}' sums to zero; shares are undefined")]
    DegenerateSum { metric: String },

    #[error("metric '{metric}' has negative value {value} for item '{item}'")]
    NegativeValue {
        metric: String,
        item: String,
        value: f64,
    },

    #[error("metric '{metric}' has a non-finite value for item '{item}'")]
    NonFiniteValue { metric: String, item: String },

    #[error("cannot normalize an empty item set for metric '{metric}'")]
    EmptyItemSet { metric: String },

    #[error("unity check failed for {scope}: shares sum to {sum} (tolerance {tolerance})")]
    UnityViolated {
        scope: String,
        sum: f64,
        tolerance: f64,
    },
}

impl UnityErrorCode for MetricError {
    fn error_code(&self) -> &'static str {
        error_code::METRIC_ERROR
    }
}
