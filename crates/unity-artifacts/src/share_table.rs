//! `share_table.csv` — the retained portfolio, one row per item.

use rustc_hash::FxHashMap;

use unity_core::errors::ArtifactError;
use unity_core::types::LeverageReading;
use unity_engine::AuditOutcome;

use crate::csv::CsvBuilder;
use crate::format;
use crate::ArtifactRenderer;

/// Renders the headline artifact: composite share (as a percentage),
/// per-metric shares, drift label, leverage with tier, and any data-age
/// warning, sorted by descending composite share. Ties keep input order.
pub struct ShareTableRenderer;

const ARTIFACT: &str = "share_table.csv";

impl ArtifactRenderer for ShareTableRenderer {
    fn file_name(&self) -> &'static str {
        ARTIFACT
    }

    fn render(&self, outcome: &AuditOutcome) -> Result<String, ArtifactError> {
        let leverage: FxHashMap<&str, &LeverageReading> = outcome
            .leverage
            .iter()
            .map(|reading| (reading.item.as_str(), reading))
            .collect();

        let mut ranked: Vec<&unity_core::types::RetainedItem> =
            outcome.coverage.retained.iter().collect();
        // Stable sort: equal shares keep snapshot order.
        ranked.sort_by(|a, b| {
            b.post_filter_share
                .partial_cmp(&a.post_filter_share)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut csv = CsvBuilder::new();
        let mut header = vec!["item".to_string(), "composite_share".to_string()];
        for metric in outcome.matrix.metrics() {
            header.push(format!("{metric}_share"));
        }
        header.extend(
            ["drift_flag", "leverage", "leverage_tier", "data_age"]
                .map(str::to_string),
        );
        csv.row(header.iter().map(String::as_str));

        for item in ranked {
            let row_index = outcome
                .matrix
                .ids()
                .iter()
                .position(|id| *id == item.id)
                .ok_or_else(|| ArtifactError::MissingInput {
                    artifact: ARTIFACT.to_string(),
                    missing: format!("share matrix row for '{}'", item.id),
                })?;
            let reading =
                leverage
                    .get(item.id.as_str())
                    .ok_or_else(|| ArtifactError::MissingInput {
                        artifact: ARTIFACT.to_string(),
                        missing: format!("leverage reading for '{}'", item.id),
                    })?;
            let label = &outcome.labels[row_index];

            let mut row = vec![
                item.id.clone(),
                format::percent(item.post_filter_share),
            ];
            for share in outcome.matrix.row(row_index) {
                row.push(format::share(*share));
            }
            row.push(label.to_string());
            row.push(format::leverage(reading.leverage));
            row.push(reading.tier.to_string());
            row.push(data_age_note(outcome, &item.id));
            csv.row(row.iter().map(String::as_str));
        }

        Ok(csv.finish())
    }
}

fn data_age_note(outcome: &AuditOutcome, item: &str) -> String {
    let notes: Vec<String> = outcome
        .stale
        .iter()
        .filter(|flag| flag.item == item)
        .map(|flag| {
            format!(
                "{} data {} yrs old (vintage {})",
                flag.metric, flag.age_years, flag.vintage_year
            )
        })
        .collect();
    if notes.is_empty() {
        "Current".to_string()
    } else {
        notes.join("; ")
    }
}
