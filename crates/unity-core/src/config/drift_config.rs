//! Drift classification configuration.

use serde::{Deserialize, Serialize};

/// One drift rule: flag an item as pulling toward `metric` when its share
/// for that metric exceeds the declared target by more than `tolerance`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DriftRule {
    pub metric: String,
    /// Tolerance band above the target weight. Falls back to
    /// `DriftConfig::default_tolerance` when absent.
    pub tolerance: Option<f64>,
}

/// Configuration for the drift classifier.
///
/// Rule order is precedence: with more than two metrics, several shares can
/// exceed tolerance simultaneously, and the first listed rule wins the
/// label. When `rules` is empty the classifier synthesizes one rule per
/// metric in the snapshot's declared column order and records that order in
/// the trace report.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DriftConfig {
    /// Ordered rule list, highest precedence first.
    pub rules: Vec<DriftRule>,
    /// Tolerance used for rules that do not declare their own. Default: 0.15.
    pub default_tolerance: Option<f64>,
}

impl DriftConfig {
    /// Returns the effective default tolerance, defaulting to 0.15.
    pub fn effective_default_tolerance(&self) -> f64 {
        self.default_tolerance.unwrap_or(0.15)
    }

    /// Returns the effective tolerance for a rule.
    pub fn effective_tolerance(&self, rule: &DriftRule) -> f64 {
        rule.tolerance
            .unwrap_or_else(|| self.effective_default_tolerance())
    }
}
