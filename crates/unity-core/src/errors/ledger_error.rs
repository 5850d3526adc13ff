//! Cycle drift ledger errors.

use super::error_code::{self, UnityErrorCode};

/// Errors raised when comparing share snapshots across reporting cycles.
#[derive(Debug, thiserror::Error)]
pub enum LedgerError {
    #[error("cycles '{cycle_a}' and '{cycle_b}' cover different item sets \
             (only in '{cycle_a}': [{}], only in '{cycle_b}': [{}])",
        only_in_a.join(", "), only_in_b.join(", "))]
    ScheduleMismatch {
        cycle_a: String,
        cycle_b: String,
        only_in_a: Vec<String>,
        only_in_b: Vec<String>,
    },

    #[error("unknown reporting cycle '{cycle}'")]
    UnknownCycle { cycle: String },

    #[error("reporting cycle '{cycle}' was already recorded")]
    DuplicateCycle { cycle: String },
}

impl UnityErrorCode for LedgerError {
    fn error_code(&self) -> &'static str {
        error_code::LEDGER_ERROR
    }
}
