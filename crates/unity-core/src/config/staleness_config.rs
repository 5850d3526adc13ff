//! Data staleness configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_STALENESS_YEARS;

/// Configuration for the data-age check.
///
/// Staleness is informational: it is recorded in the share table and the
/// trace report, and execution continues.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct StalenessConfig {
    /// Flag a metric value as stale when `current_year - vintage_year`
    /// exceeds this. Default: 5.
    pub max_age_years: Option<i32>,
}

impl StalenessConfig {
    /// Returns the effective age threshold, defaulting to 5 years.
    pub fn effective_max_age_years(&self) -> i32 {
        self.max_age_years.unwrap_or(DEFAULT_STALENESS_YEARS)
    }
}
