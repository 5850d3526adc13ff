//! All-or-nothing rendering of the four-artifact bundle.

use tracing::info;

use unity_core::errors::ArtifactError;
use unity_engine::AuditOutcome;

use crate::{artifact_names, create_renderer};

/// One rendered artifact. Writing it anywhere is the caller's concern.
#[derive(Debug, Clone)]
pub struct RenderedArtifact {
    pub file_name: &'static str,
    pub contents: String,
}

/// Renders complete bundles.
///
/// Rendering is all-or-nothing: the first failure aborts the bundle and
/// nothing is surfaced. Inspectors treat a missing bundle as "never ran",
/// so a partial one must never exist.
pub struct ArtifactBundle;

impl ArtifactBundle {
    /// Render all four artifacts in bundle order.
    pub fn render_all(outcome: &AuditOutcome) -> Result<Vec<RenderedArtifact>, ArtifactError> {
        let mut rendered = Vec::with_capacity(artifact_names().len());
        for name in artifact_names() {
            let renderer = create_renderer(name).ok_or_else(|| ArtifactError::RenderFailed {
                artifact: (*name).to_string(),
                message: "no renderer registered under this name".to_string(),
            })?;
            let contents = renderer.render(outcome)?;
            info!(
                run_id = %outcome.stamp.run_id,
                artifact = renderer.file_name(),
                bytes = contents.len(),
                "artifact rendered"
            );
            rendered.push(RenderedArtifact {
                file_name: renderer.file_name(),
                contents,
            });
        }
        Ok(rendered)
    }
}
