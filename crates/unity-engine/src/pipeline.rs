//! Audit pipeline — one run, one outcome, full trace.

use std::sync::Arc;

use chrono::{Datelike, Utc};
use tracing::{debug, info};

use unity_core::config::AuditConfig;
use unity_core::errors::AuditError;
use unity_core::events::{
    AuditEventHandler, DriftFlaggedEvent, EventDispatcher, IngestCompleteEvent,
    ItemExcludedEvent, RuleOrderResolvedEvent, StaleMetricEvent, TraceEntry, TraceRecorder,
    UnityConfirmedEvent, WeightsDeclaredEvent,
};
use unity_core::types::{
    CoverageReport, CycleDriftRecord, DriftLabel, LeverageReading, RunStamp, Snapshot,
    StaleFlag,
};

use crate::compose::{compose, CompositeShares};
use crate::coverage::{CoverageTracker, ExclusionRequest};
use crate::drift::DriftClassifier;
use crate::leverage::LeverageAnalyzer;
use crate::normalize::{verify_unity, ShareMatrix};
use crate::staleness::staleness_flags;

/// Everything one run produced, in the shape the artifact emitter consumes.
///
/// Outcomes are immutable snapshots of a finished run; nothing here is
/// shared or mutated between runs.
#[derive(Debug, Clone)]
pub struct AuditOutcome {
    pub stamp: RunStamp,
    pub matrix: ShareMatrix,
    /// Pre-filter composite shares over the full item set.
    pub composite: CompositeShares,
    /// Drift label per item, aligned with `matrix.ids()`.
    pub labels: Vec<DriftLabel>,
    /// Leverage per retained item, computed on post-filter shares.
    pub leverage: Vec<LeverageReading>,
    pub stale: Vec<StaleFlag>,
    pub coverage: CoverageReport,
    pub trace: Vec<TraceEntry>,
    /// Attested cross-cycle records attached by the caller, when a ledger
    /// spans multiple runs.
    pub cycle_records: Vec<CycleDriftRecord>,
}

impl AuditOutcome {
    /// Attach attested cross-cycle drift records for the change log.
    pub fn with_cycle_records(mut self, records: Vec<CycleDriftRecord>) -> Self {
        self.cycle_records = records;
        self
    }

    /// Drift label for one item id, if the item exists.
    pub fn label_of(&self, id: &str) -> Option<&DriftLabel> {
        self.matrix
            .ids()
            .iter()
            .position(|i| i == id)
            .map(|idx| &self.labels[idx])
    }
}

/// Orchestrates normalize → compose → {leverage, drift, staleness} →
/// coverage over an immutable snapshot, emitting trace events throughout.
///
/// Any subsystem error aborts the run with no partial outcome; the
/// artifact emitter therefore never sees a half-finished audit.
pub struct AuditPipeline {
    config: AuditConfig,
    handlers: Vec<Arc<dyn AuditEventHandler>>,
}

impl AuditPipeline {
    pub fn new(config: AuditConfig) -> Self {
        Self {
            config,
            handlers: Vec::new(),
        }
    }

    /// Register an additional event handler (live dashboards, test probes).
    /// The trace recorder is always registered per run.
    pub fn register_handler(&mut self, handler: Arc<dyn AuditEventHandler>) {
        self.handlers.push(handler);
    }

    pub fn config(&self) -> &AuditConfig {
        &self.config
    }

    /// Run the audit with no explicit exclusions.
    pub fn run(&self, snapshot: &Snapshot) -> Result<AuditOutcome, AuditError> {
        self.run_with_exclusions(snapshot, &[])
    }

    /// Run the audit, excluding the named entities from the retained set.
    pub fn run_with_exclusions(
        &self,
        snapshot: &Snapshot,
        exclusions: &[ExclusionRequest],
    ) -> Result<AuditOutcome, AuditError> {
        let stamp = RunStamp::now();
        info!(
            run_id = %stamp.run_id,
            items = snapshot.len(),
            metrics = snapshot.metrics().len(),
            "starting audit run"
        );

        let recorder = Arc::new(TraceRecorder::new());
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(recorder.clone());
        for handler in &self.handlers {
            dispatcher.register(handler.clone());
        }

        // Operator declaration first: weights are declared before the
        // normalization run, and the trace preserves that order.
        let targets: Vec<(String, f64)> = snapshot
            .metrics()
            .iter()
            .filter_map(|m| self.config.weights.target(m).map(|w| (m.clone(), w)))
            .collect();
        dispatcher.emit_weights_declared(&WeightsDeclaredEvent { targets });
        dispatcher.emit_ingest_complete(&IngestCompleteEvent {
            items: snapshot.len(),
            metrics: snapshot.metrics().len(),
        });

        let matrix = ShareMatrix::from_snapshot(snapshot)?;
        for (index, metric) in matrix.metrics().iter().enumerate() {
            let sum = verify_unity(metric, &matrix.column(index))?;
            dispatcher.emit_unity_confirmed(&UnityConfirmedEvent {
                scope: metric.clone(),
                sum,
            });
        }

        let composite = compose(&matrix, &self.config.weights)?;
        let composite_sum = verify_unity("composite", composite.shares())?;
        dispatcher.emit_unity_confirmed(&UnityConfirmedEvent {
            scope: "composite".to_string(),
            sum: composite_sum,
        });
        debug!(sum = composite_sum, "composite unity confirmed");

        let classifier = DriftClassifier::from_config(&self.config.drift, matrix.metrics())?;
        dispatcher.emit_rule_order_resolved(&RuleOrderResolvedEvent {
            order: classifier.rule_order(),
            from_config: classifier.is_declared_order(),
        });
        let mut labels = Vec::with_capacity(matrix.len());
        for (item, (label, finding)) in classifier
            .classify_all(&matrix, &self.config.weights)
            .into_iter()
            .enumerate()
        {
            if let Some(finding) = finding {
                dispatcher.emit_drift_flagged(&DriftFlaggedEvent {
                    item: matrix.ids()[item].clone(),
                    metric: finding.metric,
                    share: finding.share,
                    target: finding.target,
                    tolerance: finding.tolerance,
                });
            }
            labels.push(label);
        }

        let stale = staleness_flags(snapshot, &self.config.staleness, Utc::now().year());
        for flag in &stale {
            dispatcher.emit_stale_metric(&StaleMetricEvent {
                item: flag.item.clone(),
                metric: flag.metric.clone(),
                vintage_year: flag.vintage_year,
                age_years: flag.age_years,
            });
        }

        let tracker = CoverageTracker::new(self.config.coverage.clone());
        let coverage = tracker.track(&composite, exclusions)?;
        for excluded in &coverage.exclusions {
            dispatcher.emit_item_excluded(&ItemExcludedEvent {
                entity: excluded.entity.clone(),
                reason: excluded.reason.clone(),
                discarded_share: excluded.discarded_share,
            });
        }

        // Leverage runs on the post-filter shares: the share table reports
        // the retained portfolio, and a zero share must fail loudly here
        // rather than render as infinity.
        let analyzer = LeverageAnalyzer::new(self.config.leverage.clone());
        let leverage = coverage
            .retained
            .iter()
            .map(|item| analyzer.analyze(&item.id, item.post_filter_share))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            run_id = %stamp.run_id,
            retained = coverage.retained.len(),
            excluded = coverage.exclusions.len(),
            flagged = labels.iter().filter(|l| !l.is_aligned()).count(),
            "audit run complete"
        );

        Ok(AuditOutcome {
            stamp,
            matrix,
            composite,
            labels,
            leverage,
            stale,
            coverage,
            trace: recorder.entries(),
            cycle_records: Vec::new(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use unity_core::config::WeightConfig;
    use unity_core::constants::UNITY_TOLERANCE;

    fn food_guide_snapshot() -> Snapshot {
        Snapshot::builder(["protein", "carbs", "fat"])
            .item("Chicken and vegetable stir-fry", &[28.0, 22.0, 8.0])
            .item("Red lentil soup", &[14.0, 38.0, 4.0])
            .item("Vegetable omelette", &[18.0, 6.0, 12.0])
            .item("Overnight oats with berries", &[9.0, 44.0, 7.0])
            .item("Salmon with roasted vegetables", &[32.0, 18.0, 14.0])
            .build()
            .unwrap()
    }

    fn food_guide_config() -> AuditConfig {
        AuditConfig {
            weights: WeightConfig::from_pairs([
                ("protein", 0.35),
                ("carbs", 0.45),
                ("fat", 0.20),
            ]),
            ..AuditConfig::default()
        }
    }

    #[test]
    fn run_produces_a_complete_outcome() {
        let pipeline = AuditPipeline::new(food_guide_config());
        let outcome = pipeline.run(&food_guide_snapshot()).unwrap();

        let sum: f64 = outcome.composite.shares().iter().sum();
        assert!((sum - 1.0).abs() <= UNITY_TOLERANCE);
        assert_eq!(outcome.labels.len(), 5);
        assert_eq!(outcome.leverage.len(), 5);
        assert!(!outcome.coverage.has_exclusions());
        assert!(outcome.trace.len() >= 5, "trace should carry declaration, ingest, and unity checks");
    }

    #[test]
    fn trace_opens_with_the_weight_declaration() {
        let pipeline = AuditPipeline::new(food_guide_config());
        let outcome = pipeline.run(&food_guide_snapshot()).unwrap();
        assert_eq!(outcome.trace[0].action, "Operator Weight Declaration");
        assert_eq!(outcome.trace[0].affected, "All");
    }

    #[test]
    fn weight_metric_mismatch_aborts_the_run() {
        let config = AuditConfig {
            weights: WeightConfig::from_pairs([("protein", 0.5), ("fiber", 0.5)]),
            ..AuditConfig::default()
        };
        let pipeline = AuditPipeline::new(config);
        assert!(matches!(
            pipeline.run(&food_guide_snapshot()),
            Err(AuditError::Weight(_))
        ));
    }

    #[test]
    fn explicit_exclusion_flows_into_coverage_and_trace() {
        let pipeline = AuditPipeline::new(food_guide_config());
        let outcome = pipeline
            .run_with_exclusions(
                &food_guide_snapshot(),
                &[ExclusionRequest::new(
                    "Vegetable omelette",
                    "De-prioritized for the current cycle by operator decision.",
                )],
            )
            .unwrap();

        assert_eq!(outcome.coverage.exclusions.len(), 1);
        assert_eq!(outcome.leverage.len(), 4);
        assert!(outcome
            .trace
            .iter()
            .any(|entry| entry.action == "Exclusion" && entry.affected == "Vegetable omelette"));
        let post_sum: f64 = outcome
            .coverage
            .retained
            .iter()
            .map(|r| r.post_filter_share)
            .sum();
        assert!((post_sum - 1.0).abs() <= UNITY_TOLERANCE);
    }
}
