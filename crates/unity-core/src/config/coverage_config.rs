//! Coverage / error-budget configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_CONCENTRATION_TARGET;

/// Configuration for the coverage tracker.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CoverageConfig {
    /// Minimum composite share (τ) an item must hold to stay in the
    /// retained set. Items below it are excluded and their pre-filter mass
    /// is booked against the error budget. Default: no threshold.
    pub min_share: Option<f64>,
    /// Retained-mass fraction for the concentration metric
    /// (`items_to_cover`). Default: 0.90.
    pub concentration_target: Option<f64>,
}

impl CoverageConfig {
    /// Returns the effective τ threshold, defaulting to 0 (keep everything).
    pub fn effective_min_share(&self) -> f64 {
        self.min_share.unwrap_or(0.0)
    }

    /// Returns the effective concentration target, defaulting to 0.90.
    pub fn effective_concentration_target(&self) -> f64 {
        self.concentration_target
            .unwrap_or(DEFAULT_CONCENTRATION_TARGET)
    }
}
