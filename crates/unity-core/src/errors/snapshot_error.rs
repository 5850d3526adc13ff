//! Input snapshot construction errors.

use super::error_code::{self, UnityErrorCode};

/// Errors raised while assembling an input snapshot.
#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("duplicate item id '{item}'")]
    DuplicateItem { item: String },

    #[error("duplicate metric column '{metric}'")]
    DuplicateMetric { metric: String },

    #[error("item '{item}' has {actual} values, expected {expected} (one per metric)")]
    ValueCountMismatch {
        item: String,
        expected: usize,
        actual: usize,
    },

    #[error("snapshot declares no metric columns")]
    NoMetrics,
}

impl UnityErrorCode for SnapshotError {
    fn error_code(&self) -> &'static str {
        error_code::SNAPSHOT_ERROR
    }
}
