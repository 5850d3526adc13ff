//! Artifact emitter for audit outcomes.
//!
//! Every finished run is published as a four-artifact bundle: a share
//! table, a trace report, a change log, and a coverage record. The CSV
//! artifacts are hand-rendered (the column sets are small and fixed);
//! the coverage record is JSON.

mod bundle;
mod change_log;
mod coverage_record;
mod csv;
mod format;
mod share_table;
mod trace_report;

pub use bundle::{ArtifactBundle, RenderedArtifact};
pub use change_log::ChangeLogRenderer;
pub use coverage_record::CoverageRecordRenderer;
pub use share_table::ShareTableRenderer;
pub use trace_report::TraceReportRenderer;

use unity_core::errors::ArtifactError;
use unity_engine::AuditOutcome;

/// Renders one artifact of the bundle from a finished audit outcome.
///
/// Renderers are stateless; all run identity comes from the outcome's
/// stamp.
pub trait ArtifactRenderer: Send + Sync {
    /// File name this artifact is published under.
    fn file_name(&self) -> &'static str;

    /// Render the artifact body. Any error aborts the whole bundle.
    fn render(&self, outcome: &AuditOutcome) -> Result<String, ArtifactError>;
}

/// Names accepted by [`create_renderer`], in bundle order.
pub fn artifact_names() -> &'static [&'static str] {
    &["share_table", "trace_report", "change_log", "coverage_record"]
}

/// Look up a renderer by artifact name.
pub fn create_renderer(name: &str) -> Option<Box<dyn ArtifactRenderer>> {
    match name {
        "share_table" => Some(Box::new(ShareTableRenderer)),
        "trace_report" => Some(Box::new(TraceReportRenderer)),
        "change_log" => Some(Box::new(ChangeLogRenderer)),
        "coverage_record" => Some(Box::new(CoverageRecordRenderer)),
        _ => None,
    }
}
