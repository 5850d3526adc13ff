//! Top-level audit configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{CoverageConfig, DriftConfig, LeverageConfig, StalenessConfig, WeightConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Modeled as an explicit immutable value passed into every component call,
/// never as ambient global state, so each computation is testable in
/// isolation. Loaded from `unity.toml` in the project root, falling back to
/// compiled defaults for anything not declared.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AuditConfig {
    pub weights: WeightConfig,
    pub drift: DriftConfig,
    pub leverage: LeverageConfig,
    pub coverage: CoverageConfig,
    pub staleness: StalenessConfig,
}

impl AuditConfig {
    /// Load configuration from `unity.toml` under `root`.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let path = root.join("unity.toml");
        let content = std::fs::read_to_string(&path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        let config: AuditConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: AuditConfig =
            toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
                path: "<string>".to_string(),
                message: e.to_string(),
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration values.
    ///
    /// Weight-set unity is checked again by the composer at run time; this
    /// catches it at load time so a bad declaration fails before any data
    /// is ingested.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.weights.targets.is_empty() {
            self.weights
                .validate()
                .map_err(|e| ConfigError::ValidationFailed {
                    field: "weights.targets".to_string(),
                    message: e.to_string(),
                })?;
        }

        for rule in &self.drift.rules {
            let tolerance = self.drift.effective_tolerance(rule);
            if !(0.0..=1.0).contains(&tolerance) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("drift.rules[{}].tolerance", rule.metric),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(tolerance) = self.drift.default_tolerance {
            if !(0.0..=1.0).contains(&tolerance) {
                return Err(ConfigError::ValidationFailed {
                    field: "drift.default_tolerance".to_string(),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }

        let high = self.leverage.effective_high_threshold();
        let medium = self.leverage.effective_medium_threshold();
        if medium <= 0.0 || high <= medium {
            return Err(ConfigError::ValidationFailed {
                field: "leverage".to_string(),
                message: format!(
                    "thresholds must satisfy 0 < medium < high (got medium={medium}, high={high})"
                ),
            });
        }

        if let Some(min_share) = self.coverage.min_share {
            if !(0.0..1.0).contains(&min_share) {
                return Err(ConfigError::ValidationFailed {
                    field: "coverage.min_share".to_string(),
                    message: "must be in [0.0, 1.0)".to_string(),
                });
            }
        }
        let target = self.coverage.effective_concentration_target();
        if !(0.0..=1.0).contains(&target) || target == 0.0 {
            return Err(ConfigError::ValidationFailed {
                field: "coverage.concentration_target".to_string(),
                message: "must be in (0.0, 1.0]".to_string(),
            });
        }

        if let Some(years) = self.staleness.max_age_years {
            if years < 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "staleness.max_age_years".to_string(),
                    message: "must be non-negative".to_string(),
                });
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXAMPLE: &str = r#"
        [weights.targets]
        protein = 0.35
        carbs = 0.45
        fat = 0.20

        [drift]
        default_tolerance = 0.15

        [[drift.rules]]
        metric = "protein"

        [[drift.rules]]
        metric = "carbs"

        [[drift.rules]]
        metric = "fat"
        tolerance = 0.10

        [leverage]
        high_threshold = 100.0
        medium_threshold = 10.0

        [coverage]
        min_share = 0.02
        concentration_target = 0.90

        [staleness]
        max_age_years = 5
    "#;

    #[test]
    fn parses_full_example() {
        let config = AuditConfig::from_toml(EXAMPLE).unwrap();
        assert_eq!(config.weights.target("carbs"), Some(0.45));
        assert_eq!(config.drift.rules.len(), 3);
        assert_eq!(config.drift.effective_tolerance(&config.drift.rules[2]), 0.10);
        assert_eq!(config.coverage.effective_min_share(), 0.02);
        assert_eq!(config.staleness.effective_max_age_years(), 5);
    }

    #[test]
    fn defaults_validate() {
        let config = AuditConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn bad_weight_sum_fails_at_load() {
        let toml_str = r#"
            [weights.targets]
            a = 0.6
            b = 0.6
        "#;
        assert!(matches!(
            AuditConfig::from_toml(toml_str),
            Err(ConfigError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn inverted_leverage_thresholds_fail() {
        let toml_str = r#"
            [leverage]
            high_threshold = 5.0
            medium_threshold = 10.0
        "#;
        assert!(matches!(
            AuditConfig::from_toml(toml_str),
            Err(ConfigError::ValidationFailed { .. })
        ));
    }

    #[test]
    fn load_reads_unity_toml_from_root() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("unity.toml"), EXAMPLE).unwrap();
        let config = AuditConfig::load(dir.path()).unwrap();
        assert_eq!(config.weights.target("protein"), Some(0.35));
    }

    #[test]
    fn load_missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            AuditConfig::load(dir.path()),
            Err(ConfigError::FileNotFound { .. })
        ));
    }
}
