//! Drift Classifier — first-match-wins over a declared rule order.

use unity_core::config::{DriftConfig, WeightConfig};
use unity_core::errors::ConfigError;
use unity_core::types::DriftLabel;

use crate::normalize::ShareMatrix;

/// Details of the rule that fired for a flagged item. Feeds the trace
/// report and the change log.
#[derive(Debug, Clone)]
pub struct DriftFinding {
    pub metric: String,
    pub share: f64,
    pub target: f64,
    pub tolerance: f64,
}

/// Classifies each item against the operator's targets using an explicit
/// ordered rule list.
///
/// With more than two metrics, several shares can exceed tolerance at once;
/// precedence is the rule order, never incidental iteration order. When the
/// configuration declares no rules, one rule per snapshot metric is
/// synthesized in declared column order, and the pipeline records that
/// synthesized order in the trace report.
#[derive(Debug, Clone)]
pub struct DriftClassifier {
    /// (metric, tolerance), highest precedence first.
    rules: Vec<(String, f64)>,
    from_config: bool,
}

impl DriftClassifier {
    /// Build the rule list from configuration, synthesizing from the
    /// snapshot's metric order when the config declares none.
    ///
    /// A configured rule naming a metric the snapshot does not carry is a
    /// configuration error: a rule that can never fire must fail loudly,
    /// not sit dead in the precedence order.
    pub fn from_config(
        config: &DriftConfig,
        snapshot_metrics: &[String],
    ) -> Result<Self, ConfigError> {
        if config.rules.is_empty() {
            let tolerance = config.effective_default_tolerance();
            return Ok(Self {
                rules: snapshot_metrics
                    .iter()
                    .map(|m| (m.clone(), tolerance))
                    .collect(),
                from_config: false,
            });
        }
        for rule in &config.rules {
            if !snapshot_metrics.contains(&rule.metric) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("drift.rules[{}]", rule.metric),
                    message: "rule names a metric the snapshot does not carry".to_string(),
                });
            }
        }
        Ok(Self {
            rules: config
                .rules
                .iter()
                .map(|rule| (rule.metric.clone(), config.effective_tolerance(rule)))
                .collect(),
            from_config: true,
        })
    }

    /// The declared precedence order, for the trace report.
    pub fn rule_order(&self) -> Vec<String> {
        self.rules.iter().map(|(m, _)| m.clone()).collect()
    }

    /// Whether the order came from config or was synthesized.
    pub fn is_declared_order(&self) -> bool {
        self.from_config
    }

    /// Classify one item. Returns the label and, when flagged, the finding
    /// that fired.
    ///
    /// Rules naming metrics absent from the matrix or the weight set cannot
    /// fire. Default label is `Aligned`.
    pub fn classify(
        &self,
        matrix: &ShareMatrix,
        weights: &WeightConfig,
        item: usize,
    ) -> (DriftLabel, Option<DriftFinding>) {
        for (metric, tolerance) in &self.rules {
            let Some(index) = matrix.metric_index(metric) else {
                continue;
            };
            let Some(target) = weights.target(metric) else {
                continue;
            };
            let share = matrix.share(item, index);
            if share > target + tolerance {
                return (
                    DriftLabel::Pull {
                        metric: metric.clone(),
                    },
                    Some(DriftFinding {
                        metric: metric.clone(),
                        share,
                        target,
                        tolerance: *tolerance,
                    }),
                );
            }
        }
        (DriftLabel::Aligned, None)
    }

    /// Classify every item of the matrix, in item order.
    pub fn classify_all(
        &self,
        matrix: &ShareMatrix,
        weights: &WeightConfig,
    ) -> Vec<(DriftLabel, Option<DriftFinding>)> {
        (0..matrix.len())
            .map(|item| self.classify(matrix, weights, item))
            .collect()
    }
}
