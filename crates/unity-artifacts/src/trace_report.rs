//! `trace_report.csv` — the append-ordered justification log.

use unity_core::errors::ArtifactError;
use unity_engine::AuditOutcome;

use crate::csv::CsvBuilder;
use crate::ArtifactRenderer;

/// Renders the trace recorder's rows verbatim, in append order. Free-text
/// justifications routinely carry commas, so quoting matters here.
pub struct TraceReportRenderer;

const ARTIFACT: &str = "trace_report.csv";

impl ArtifactRenderer for TraceReportRenderer {
    fn file_name(&self) -> &'static str {
        ARTIFACT
    }

    fn render(&self, outcome: &AuditOutcome) -> Result<String, ArtifactError> {
        if outcome.trace.is_empty() {
            return Err(ArtifactError::MissingInput {
                artifact: ARTIFACT.to_string(),
                missing: "a non-empty trace (every run records at least its \
                          weight declaration)"
                    .to_string(),
            });
        }

        let mut csv = CsvBuilder::new();
        csv.row(["timestamp", "action", "affected", "justification"]);
        for entry in &outcome.trace {
            let timestamp = entry.timestamp.format("%Y-%m-%d %H:%M:%S").to_string();
            csv.row([
                timestamp.as_str(),
                entry.action.as_str(),
                entry.affected.as_str(),
                entry.justification.as_str(),
            ]);
        }
        Ok(csv.finish())
    }
}
