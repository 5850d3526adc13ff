//! Result records produced by the engine and consumed by the emitter.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::labels::{DriftClass, LeverageTier};

/// Leverage reading for one item: full-precision value plus tier.
/// Display rounding happens at emission time only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeverageReading {
    pub item: String,
    pub leverage: f64,
    pub tier: LeverageTier,
}

/// Informational stale-data flag for one (item, metric) pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StaleFlag {
    pub item: String,
    pub metric: String,
    pub vintage_year: i32,
    pub age_years: i32,
}

/// Signed share movement of one item between two reporting cycles.
/// The delta is the only thing the ledger computes; meaning is attested
/// separately.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleDelta {
    pub item: String,
    pub cycle_a: String,
    pub cycle_b: String,
    pub delta: f64,
}

/// A cycle delta plus the caller-attested classification and its driver
/// (the recorded governance decision, or the absence of one).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CycleDriftRecord {
    pub delta: CycleDelta,
    pub classification: DriftClass,
    pub driver: String,
}

/// A retained item with its share before and after exclusion filtering.
/// Both are reported so the renormalize-after-filter step stays auditable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RetainedItem {
    pub id: String,
    pub pre_filter_share: f64,
    pub post_filter_share: f64,
}

/// An excluded entity, the stated reason, and the pre-filter mass it
/// carried.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExcludedEntity {
    pub entity: String,
    pub reason: String,
    pub discarded_share: f64,
}

/// Coverage / error-budget accounting for one run.
///
/// Invariant: `retained_mass + discarded_mass == 1.0` within the unity
/// tolerance whenever normalization ran over a superset that was then
/// filtered.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoverageReport {
    pub retained: Vec<RetainedItem>,
    pub exclusions: Vec<ExcludedEntity>,
    pub retained_mass: f64,
    pub discarded_mass: f64,
    /// Smallest k such that the top-k retained items cover
    /// `concentration_target` of retained mass.
    pub items_to_cover: usize,
    pub concentration_target: f64,
}

impl CoverageReport {
    pub fn has_exclusions(&self) -> bool {
        !self.exclusions.is_empty()
    }
}

/// Identity of one audit run: every artifact in a bundle carries the same
/// stamp, so bundles from different runs can never be mixed up.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunStamp {
    pub run_id: String,
    pub generated_at: DateTime<Utc>,
}

impl RunStamp {
    /// Stamp a new run at the current instant.
    pub fn now() -> Self {
        let generated_at = Utc::now();
        Self {
            run_id: format!("run-{}", generated_at.format("%Y%m%dT%H%M%S%3fZ")),
            generated_at,
        }
    }

    /// Stamp with a fixed instant (for deterministic tests).
    pub fn at(generated_at: DateTime<Utc>) -> Self {
        Self {
            run_id: format!("run-{}", generated_at.format("%Y%m%dT%H%M%S%3fZ")),
            generated_at,
        }
    }
}
