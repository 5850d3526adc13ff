//! Leverage tier configuration.

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_LEVERAGE_HIGH, DEFAULT_LEVERAGE_MEDIUM};

/// Tier boundaries for the leverage indicator.
///
/// Thresholds are configuration, not hardcoded constants, so deployments
/// can tune them: High (leverage > high), Medium (medium ≤ leverage ≤ high),
/// Low (leverage < medium).
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LeverageConfig {
    /// Leverage above this is High. Default: 100.
    pub high_threshold: Option<f64>,
    /// Leverage at or above this (up to the high threshold) is Medium.
    /// Default: 10.
    pub medium_threshold: Option<f64>,
}

impl LeverageConfig {
    /// Returns the effective High boundary, defaulting to 100.
    pub fn effective_high_threshold(&self) -> f64 {
        self.high_threshold.unwrap_or(DEFAULT_LEVERAGE_HIGH)
    }

    /// Returns the effective Medium boundary, defaulting to 10.
    pub fn effective_medium_threshold(&self) -> f64 {
        self.medium_threshold.unwrap_or(DEFAULT_LEVERAGE_MEDIUM)
    }
}
