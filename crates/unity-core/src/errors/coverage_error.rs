//! Coverage / error-budget errors.

use super::error_code::{self, UnityErrorCode};

/// Errors raised while accounting for excluded mass.
#[derive(Debug, thiserror::Error)]
pub enum CoverageError {
    #[error("exclusion names unknown entity '{entity}'")]
    UnknownEntity { entity: String },

    #[error("entity '{entity}' was excluded more than once")]
    DuplicateExclusion { entity: String },

    #[error("every item was excluded; nothing left to renormalize")]
    EmptyRetainedSet,

    #[error("mass not conserved: retained {retained} + discarded {discarded} != 1.0 \
             (tolerance {tolerance})")]
    MassNotConserved {
        retained: f64,
        discarded: f64,
        tolerance: f64,
    },
}

impl UnityErrorCode for CoverageError {
    fn error_code(&self) -> &'static str {
        error_code::COVERAGE_ERROR
    }
}
