//! Top-level audit errors.

use super::error_code::UnityErrorCode;
use super::{
    ArtifactError, ConfigError, CoverageError, LedgerError, LeverageError, MetricError,
    SnapshotError, WeightError,
};

/// Errors that can abort an audit run.
/// Aggregates subsystem errors via `From` conversions.
///
/// All variants are fatal to the run producing the artifact bundle: none
/// are silently recovered, because a corrupted audit artifact is worse
/// than a missing one.
#[derive(Debug, thiserror::Error)]
pub enum AuditError {
    #[error("snapshot error: {0}")]
    Snapshot(#[from] SnapshotError),

    #[error("weight set error: {0}")]
    Weight(#[from] WeightError),

    #[error("metric error: {0}")]
    Metric(#[from] MetricError),

    #[error("leverage error: {0}")]
    Leverage(#[from] LeverageError),

    #[error("ledger error: {0}")]
    Ledger(#[from] LedgerError),

    #[error("coverage error: {0}")]
    Coverage(#[from] CoverageError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("artifact error: {0}")]
    Artifact(#[from] ArtifactError),
}

impl UnityErrorCode for AuditError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Snapshot(e) => e.error_code(),
            Self::Weight(e) => e.error_code(),
            Self::Metric(e) => e.error_code(),
            Self::Leverage(e) => e.error_code(),
            Self::Ledger(e) => e.error_code(),
            Self::Coverage(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Artifact(e) => e.error_code(),
        }
    }
}
