//! Event payload types for the audit trace.

/// Payload for `on_weights_declared`.
#[derive(Debug, Clone)]
pub struct WeightsDeclaredEvent {
    /// (metric, target weight) in the snapshot's declared metric order.
    pub targets: Vec<(String, f64)>,
}

/// Payload for `on_ingest_complete`.
#[derive(Debug, Clone)]
pub struct IngestCompleteEvent {
    pub items: usize,
    pub metrics: usize,
}

/// Payload for `on_unity_confirmed`.
#[derive(Debug, Clone)]
pub struct UnityConfirmedEvent {
    /// What was checked: a metric name or "composite".
    pub scope: String,
    pub sum: f64,
}

/// Payload for `on_rule_order_resolved`.
///
/// Emitted once per run so the drift precedence order is always an
/// auditable artifact, whether it came from config or was synthesized from
/// the snapshot's metric order.
#[derive(Debug, Clone)]
pub struct RuleOrderResolvedEvent {
    pub order: Vec<String>,
    pub from_config: bool,
}

/// Payload for `on_stale_metric`.
#[derive(Debug, Clone)]
pub struct StaleMetricEvent {
    pub item: String,
    pub metric: String,
    pub vintage_year: i32,
    pub age_years: i32,
}

/// Payload for `on_drift_flagged`.
#[derive(Debug, Clone)]
pub struct DriftFlaggedEvent {
    pub item: String,
    pub metric: String,
    pub share: f64,
    pub target: f64,
    pub tolerance: f64,
}

/// Payload for `on_item_excluded`.
#[derive(Debug, Clone)]
pub struct ItemExcludedEvent {
    pub entity: String,
    pub reason: String,
    pub discarded_share: f64,
}

/// Payload for `on_delta_recorded`.
#[derive(Debug, Clone)]
pub struct DeltaRecordedEvent {
    pub item: String,
    pub cycle_a: String,
    pub cycle_b: String,
    pub delta: f64,
}
