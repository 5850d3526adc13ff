//! TraceRecorder — turns audit events into trace report rows.

use std::sync::Mutex;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::handler::AuditEventHandler;
use super::types::*;

/// One row of the trace/justification log: timestamp, action kind, affected
/// item(s) ("All" allowed), free-text justification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraceEntry {
    pub timestamp: DateTime<Utc>,
    pub action: String,
    pub affected: String,
    pub justification: String,
}

/// Append-only recorder for the trace report.
///
/// Registered as an event handler on the dispatcher; every audit event
/// becomes one timestamped row. Entries are never mutated after append.
#[derive(Default)]
pub struct TraceRecorder {
    entries: Mutex<Vec<TraceEntry>>,
}

impl TraceRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    fn append(&self, action: &str, affected: String, justification: String) {
        let entry = TraceEntry {
            timestamp: Utc::now(),
            action: action.to_string(),
            affected,
            justification,
        };
        self.entries
            .lock()
            .expect("trace recorder mutex poisoned")
            .push(entry);
    }

    /// Snapshot of the recorded entries, in append order.
    pub fn entries(&self) -> Vec<TraceEntry> {
        self.entries
            .lock()
            .expect("trace recorder mutex poisoned")
            .clone()
    }
}

impl AuditEventHandler for TraceRecorder {
    fn on_weights_declared(&self, event: &WeightsDeclaredEvent) {
        let declared = event
            .targets
            .iter()
            .map(|(metric, weight)| format!("{metric} target={weight}"))
            .collect::<Vec<_>>()
            .join(", ");
        self.append(
            "Operator Weight Declaration",
            "All".to_string(),
            format!("{declared}. Declared before normalization run."),
        );
    }

    fn on_ingest_complete(&self, event: &IngestCompleteEvent) {
        self.append(
            "Data Ingestion",
            "All".to_string(),
            format!(
                "Loaded {} items across {} metric columns as best available.",
                event.items, event.metrics
            ),
        );
    }

    fn on_unity_confirmed(&self, event: &UnityConfirmedEvent) {
        self.append(
            "Unity Check",
            "All".to_string(),
            format!(
                "Shares for {} normalized to sum to 1.0 (observed sum {:.12}). \
                 All mass accounted for.",
                event.scope, event.sum
            ),
        );
    }

    fn on_rule_order_resolved(&self, event: &RuleOrderResolvedEvent) {
        let source = if event.from_config {
            "declared in configuration"
        } else {
            "synthesized from snapshot metric order"
        };
        self.append(
            "Drift Rule Order",
            "All".to_string(),
            format!(
                "Drift precedence {source}: {}. First matching rule wins.",
                event.order.join(" > ")
            ),
        );
    }

    fn on_stale_metric(&self, event: &StaleMetricEvent) {
        self.append(
            "Stale Data Warning",
            event.item.clone(),
            format!(
                "{} data is {} years old (vintage {}). Informational only; \
                 value used as provided.",
                event.metric, event.age_years, event.vintage_year
            ),
        );
    }

    fn on_drift_flagged(&self, event: &DriftFlaggedEvent) {
        self.append(
            "Drift Flag",
            event.item.clone(),
            format!(
                "{} share {:.6} exceeds target {} by more than tolerance {}.",
                event.metric, event.share, event.target, event.tolerance
            ),
        );
    }

    fn on_item_excluded(&self, event: &ItemExcludedEvent) {
        self.append(
            "Exclusion",
            event.entity.clone(),
            format!(
                "{} Pre-filter share {:.6} booked against the error budget.",
                event.reason, event.discarded_share
            ),
        );
    }

    fn on_delta_recorded(&self, event: &DeltaRecordedEvent) {
        self.append(
            "Cycle Delta",
            event.item.clone(),
            format!(
                "Share moved {:+.6} between cycles '{}' and '{}'. \
                 Classification pending attestation.",
                event.delta, event.cycle_a, event.cycle_b
            ),
        );
    }
}
