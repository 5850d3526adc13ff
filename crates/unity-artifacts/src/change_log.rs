//! `change_log.csv` — within-run drift flags plus attested cross-cycle
//! records.

use unity_core::errors::ArtifactError;
use unity_engine::AuditOutcome;

use crate::csv::CsvBuilder;
use crate::format;
use crate::ArtifactRenderer;

/// Renders one row per flagged item (drift label, full-precision composite
/// share, and the per-metric shares that drove the label) followed by one
/// row per attested cross-cycle record. Cycle columns stay empty on
/// within-run rows and vice versa; a run with nothing to report renders the
/// header alone.
pub struct ChangeLogRenderer;

const ARTIFACT: &str = "change_log.csv";

impl ArtifactRenderer for ChangeLogRenderer {
    fn file_name(&self) -> &'static str {
        ARTIFACT
    }

    fn render(&self, outcome: &AuditOutcome) -> Result<String, ArtifactError> {
        let metric_count = outcome.matrix.metrics().len();

        let mut csv = CsvBuilder::new();
        let mut header = vec![
            "item".to_string(),
            "drift_flag".to_string(),
            "composite_share".to_string(),
        ];
        for metric in outcome.matrix.metrics() {
            header.push(format!("{metric}_share"));
        }
        header.extend(
            ["cycle_pair", "share_delta", "classification", "driver"].map(str::to_string),
        );
        csv.row(header.iter().map(String::as_str));

        for (index, label) in outcome.labels.iter().enumerate() {
            if label.is_aligned() {
                continue;
            }
            let id = &outcome.matrix.ids()[index];
            let share = outcome.composite.share_of(id).ok_or_else(|| {
                ArtifactError::MissingInput {
                    artifact: ARTIFACT.to_string(),
                    missing: format!("composite share for flagged item '{id}'"),
                }
            })?;

            let mut row = vec![id.clone(), label.to_string(), format::share(share)];
            for metric_share in outcome.matrix.row(index) {
                row.push(format::share(*metric_share));
            }
            row.extend(std::iter::repeat(String::new()).take(4));
            csv.row(row.iter().map(String::as_str));
        }

        for record in &outcome.cycle_records {
            let mut row = vec![record.delta.item.clone(), String::new(), String::new()];
            row.extend(std::iter::repeat(String::new()).take(metric_count));
            row.push(format!("{} -> {}", record.delta.cycle_a, record.delta.cycle_b));
            row.push(format::delta(record.delta.delta));
            row.push(record.classification.to_string());
            row.push(record.driver.clone());
            csv.row(row.iter().map(String::as_str));
        }

        Ok(csv.finish())
    }
}
