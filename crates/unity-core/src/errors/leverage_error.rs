//! Leverage analysis errors.

use super::error_code::{self, UnityErrorCode};

/// Errors raised while deriving leverage from a share.
///
/// A zero share is an error, never +infinity: total exclusion has a
/// different governance meaning than near-total exclusion.
#[derive(Debug, thiserror::Error)]
pub enum LeverageError {
    #[error("leverage is undefined for item '{item}': share is exactly 0")]
    ZeroShare { item: String },

    #[error("leverage is undefined for item '{item}': share {share} is not a valid share")]
    InvalidShare { item: String, share: f64 },
}

impl UnityErrorCode for LeverageError {
    fn error_code(&self) -> &'static str {
        error_code::LEVERAGE_ERROR
    }
}
