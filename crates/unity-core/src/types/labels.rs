//! Classification labels.

use serde::{Deserialize, Serialize};

/// Drift alignment state for one item. Exactly one label per item per run.
///
/// The tagged variant makes the classification exhaustive: an item is either
/// aligned with the declared weights or pulls toward exactly one metric,
/// chosen by the classifier's declared rule precedence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriftLabel {
    Aligned,
    Pull { metric: String },
}

impl DriftLabel {
    pub fn is_aligned(&self) -> bool {
        matches!(self, Self::Aligned)
    }
}

impl std::fmt::Display for DriftLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Aligned => write!(f, "Aligned"),
            Self::Pull { metric } => write!(f, "{metric} Pull"),
        }
    }
}

/// Governance-risk tier derived from leverage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LeverageTier {
    High,
    Medium,
    Low,
}

impl std::fmt::Display for LeverageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Medium => write!(f, "Medium"),
            Self::Low => write!(f, "Low"),
        }
    }
}

/// Attested classification of a cross-cycle share movement.
///
/// Supplied by the invoking collaborator: distinguishing a documented
/// governance decision from an unexplained shift requires evidence this
/// engine cannot infer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriftClass {
    IntentionalReweighting,
    SilentDrift,
}

impl std::fmt::Display for DriftClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IntentionalReweighting => write!(f, "Intentional Reweighting"),
            Self::SilentDrift => write!(f, "Silent Drift"),
        }
    }
}
