//! Stable machine-readable error codes.
//!
//! Artifact consumers match on these codes rather than on display strings,
//! which are free to change.

/// Trait implemented by every Unity error enum.
pub trait UnityErrorCode {
    /// Returns the stable code for this error.
    fn error_code(&self) -> &'static str;
}

pub const WEIGHT_ERROR: &str = "UNITY_WEIGHT_ERROR";
pub const METRIC_ERROR: &str = "UNITY_METRIC_ERROR";
pub const LEVERAGE_ERROR: &str = "UNITY_LEVERAGE_ERROR";
pub const LEDGER_ERROR: &str = "UNITY_LEDGER_ERROR";
pub const COVERAGE_ERROR: &str = "UNITY_COVERAGE_ERROR";
pub const SNAPSHOT_ERROR: &str = "UNITY_SNAPSHOT_ERROR";
pub const CONFIG_ERROR: &str = "UNITY_CONFIG_ERROR";
pub const ARTIFACT_ERROR: &str = "UNITY_ARTIFACT_ERROR";
