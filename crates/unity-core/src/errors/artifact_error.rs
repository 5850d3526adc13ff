//! Artifact rendering errors.

use super::error_code::{self, UnityErrorCode};

/// Errors raised while rendering audit artifacts.
///
/// Any rendering error aborts the whole bundle: a partial artifact set is
/// worse than none, because downstream inspectors treat absence as "never
/// ran" but a partial bundle as authoritative.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("failed to render {artifact}: {message}")]
    RenderFailed { artifact: String, message: String },

    #[error("artifact {artifact} requires {missing} but the audit outcome does not carry it")]
    MissingInput {
        artifact: String,
        missing: String,
    },
}

impl UnityErrorCode for ArtifactError {
    fn error_code(&self) -> &'static str {
        error_code::ARTIFACT_ERROR
    }
}
