//! EventDispatcher — synchronous event dispatch with zero overhead when empty.

use std::sync::Arc;

use super::handler::AuditEventHandler;
use super::types::*;

/// Synchronous event dispatcher wrapping a list of handlers.
///
/// When no handlers are registered, `emit` iterates over an empty Vec —
/// effectively zero cost.
pub struct EventDispatcher {
    handlers: Vec<Arc<dyn AuditEventHandler>>,
}

impl EventDispatcher {
    /// Create a new empty dispatcher.
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
        }
    }

    /// Register an event handler.
    pub fn register(&mut self, handler: Arc<dyn AuditEventHandler>) {
        self.handlers.push(handler);
    }

    /// Returns the number of registered handlers.
    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Emit an event to all registered handlers.
    /// Handlers that panic are isolated and do not prevent subsequent
    /// handlers from receiving the event.
    fn emit<F: Fn(&dyn AuditEventHandler)>(&self, f: F) {
        for handler in &self.handlers {
            let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
                f(handler.as_ref());
            }));
            if result.is_err() {
                tracing::warn!("audit event handler panicked; continuing with remaining handlers");
            }
        }
    }

    pub fn emit_weights_declared(&self, event: &WeightsDeclaredEvent) {
        self.emit(|h| h.on_weights_declared(event));
    }

    pub fn emit_ingest_complete(&self, event: &IngestCompleteEvent) {
        self.emit(|h| h.on_ingest_complete(event));
    }

    pub fn emit_unity_confirmed(&self, event: &UnityConfirmedEvent) {
        self.emit(|h| h.on_unity_confirmed(event));
    }

    pub fn emit_rule_order_resolved(&self, event: &RuleOrderResolvedEvent) {
        self.emit(|h| h.on_rule_order_resolved(event));
    }

    pub fn emit_stale_metric(&self, event: &StaleMetricEvent) {
        self.emit(|h| h.on_stale_metric(event));
    }

    pub fn emit_drift_flagged(&self, event: &DriftFlaggedEvent) {
        self.emit(|h| h.on_drift_flagged(event));
    }

    pub fn emit_item_excluded(&self, event: &ItemExcludedEvent) {
        self.emit(|h| h.on_item_excluded(event));
    }

    pub fn emit_delta_recorded(&self, event: &DeltaRecordedEvent) {
        self.emit(|h| h.on_delta_recorded(event));
    }
}

impl Default for EventDispatcher {
    fn default() -> Self {
        Self::new()
    }
}
