//! Error handling for Unity.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod artifact_error;
pub mod audit_error;
pub mod config_error;
pub mod coverage_error;
pub mod error_code;
pub mod ledger_error;
pub mod leverage_error;
pub mod metric_error;
pub mod snapshot_error;
pub mod weight_error;

pub use artifact_error::ArtifactError;
pub use audit_error::AuditError;
pub use config_error::ConfigError;
pub use coverage_error::CoverageError;
pub use error_code::UnityErrorCode;
pub use ledger_error::LedgerError;
pub use leverage_error::LeverageError;
pub use metric_error::MetricError;
pub use snapshot_error::SnapshotError;
pub use weight_error::WeightError;
