//! `coverage_record.json` — coverage and error-budget accounting.

use serde::Serialize;
use serde_json::json;

use unity_core::errors::ArtifactError;
use unity_engine::AuditOutcome;

use crate::ArtifactRenderer;

/// Renders the coverage report as pretty-printed JSON, stamped with the
/// run identity. A run with no exclusions still gets a record saying so;
/// downstream readers must never have to distinguish "nothing excluded"
/// from "record missing".
pub struct CoverageRecordRenderer;

const ARTIFACT: &str = "coverage_record.json";

#[derive(Serialize)]
struct RetainedRow<'a> {
    id: &'a str,
    pre_filter_share: f64,
    post_filter_share: f64,
}

#[derive(Serialize)]
struct ExclusionRow<'a> {
    entity: &'a str,
    reason: &'a str,
    discarded_share: f64,
}

impl ArtifactRenderer for CoverageRecordRenderer {
    fn file_name(&self) -> &'static str {
        ARTIFACT
    }

    fn render(&self, outcome: &AuditOutcome) -> Result<String, ArtifactError> {
        let coverage = &outcome.coverage;
        let retained: Vec<RetainedRow<'_>> = coverage
            .retained
            .iter()
            .map(|item| RetainedRow {
                id: &item.id,
                pre_filter_share: item.pre_filter_share,
                post_filter_share: item.post_filter_share,
            })
            .collect();
        let exclusions: Vec<ExclusionRow<'_>> = coverage
            .exclusions
            .iter()
            .map(|excluded| ExclusionRow {
                entity: &excluded.entity,
                reason: &excluded.reason,
                discarded_share: excluded.discarded_share,
            })
            .collect();

        let note = if exclusions.is_empty() {
            "No exclusions this run; the full universe was retained."
        } else {
            "Discarded shares are booked against the error budget."
        };

        let record = json!({
            "run_id": outcome.stamp.run_id,
            "generated_at": outcome.stamp.generated_at,
            "retained_mass": coverage.retained_mass,
            "discarded_mass": coverage.discarded_mass,
            "concentration": {
                "target": coverage.concentration_target,
                "items_to_cover": coverage.items_to_cover,
            },
            "retained": retained,
            "exclusions": exclusions,
            "note": note,
        });

        serde_json::to_string_pretty(&record).map_err(|err| ArtifactError::RenderFailed {
            artifact: ARTIFACT.to_string(),
            message: err.to_string(),
        })
    }
}
