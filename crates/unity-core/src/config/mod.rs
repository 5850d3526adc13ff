//! Configuration system for Unity.
//! TOML-based: project file > compiled defaults, validated after merge.

pub mod audit_config;
pub mod coverage_config;
pub mod drift_config;
pub mod leverage_config;
pub mod staleness_config;
pub mod weight_config;

pub use audit_config::AuditConfig;
pub use coverage_config::CoverageConfig;
pub use drift_config::{DriftConfig, DriftRule};
pub use leverage_config::LeverageConfig;
pub use staleness_config::StalenessConfig;
pub use weight_config::WeightConfig;
