//! AuditEventHandler trait — all methods default to no-ops.

use super::types::*;

/// Receives audit events from the dispatcher.
///
/// Implementors override only the events they care about. Handlers must be
/// `Send + Sync`; the dispatcher calls them synchronously in registration
/// order.
pub trait AuditEventHandler: Send + Sync {
    fn on_weights_declared(&self, event: &WeightsDeclaredEvent) {
        let _ = event;
    }

    fn on_ingest_complete(&self, event: &IngestCompleteEvent) {
        let _ = event;
    }

    fn on_unity_confirmed(&self, event: &UnityConfirmedEvent) {
        let _ = event;
    }

    fn on_rule_order_resolved(&self, event: &RuleOrderResolvedEvent) {
        let _ = event;
    }

    fn on_stale_metric(&self, event: &StaleMetricEvent) {
        let _ = event;
    }

    fn on_drift_flagged(&self, event: &DriftFlaggedEvent) {
        let _ = event;
    }

    fn on_item_excluded(&self, event: &ItemExcludedEvent) {
        let _ = event;
    }

    fn on_delta_recorded(&self, event: &DeltaRecordedEvent) {
        let _ = event;
    }
}
