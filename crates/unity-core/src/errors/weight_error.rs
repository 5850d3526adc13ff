//! Operator weight set errors.

use super::error_code::{self, UnityErrorCode};

/// Errors raised when an operator weight set fails validation.
///
/// Every variant names the offending weight or metric so the failed
/// invariant is visible in the error itself, not just "invalid weights".
#[derive(Debug, thiserror::Error)]
pub enum WeightError {
    #[error("weights sum to {sum} (expected 1.0 within {tolerance})")]
    SumNotUnity { sum: f64, tolerance: f64 },

    #[error("weight for metric '{metric}' is {weight}, outside [0, 1]")]
    OutOfRange { metric: String, weight: f64 },

    #[error("weight set does not match metric columns (missing: [{}], unexpected: [{}])",
        missing.join(", "), unexpected.join(", "))]
    MetricMismatch {
        missing: Vec<String>,
        unexpected: Vec<String>,
    },

    #[error("weight set is empty")]
    Empty,
}

impl UnityErrorCode for WeightError {
    fn error_code(&self) -> &'static str {
        error_code::WEIGHT_ERROR
    }
}
