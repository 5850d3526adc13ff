//! Cycle Drift Ledger — signed share deltas across reporting cycles.
//!
//! The ledger's sole computed responsibility is the numeric delta and its
//! sign. Whether a movement was an intentional reweighting or silent drift
//! requires external evidence (a recorded governance decision) and is
//! attested by the caller, never inferred here.

use rustc_hash::FxHashMap;

use unity_core::errors::LedgerError;
use unity_core::events::{DeltaRecordedEvent, EventDispatcher};
use unity_core::types::{CycleDelta, CycleDriftRecord, DriftClass};

use crate::compose::CompositeShares;

/// One recorded snapshot of composite shares, labeled by reporting cycle.
#[derive(Debug, Clone)]
struct CycleSnapshot {
    cycle: String,
    /// (item, share) in original item order, for deterministic output.
    shares: Vec<(String, f64)>,
}

/// Records share snapshots per reporting cycle and computes per-item
/// signed deltas between any two of them.
#[derive(Debug, Clone, Default)]
pub struct CycleLedger {
    cycles: Vec<CycleSnapshot>,
}

impl CycleLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the composite shares of one run under a cycle label.
    pub fn record_cycle(
        &mut self,
        cycle: impl Into<String>,
        composite: &CompositeShares,
    ) -> Result<(), LedgerError> {
        let cycle = cycle.into();
        if self.cycles.iter().any(|c| c.cycle == cycle) {
            return Err(LedgerError::DuplicateCycle { cycle });
        }
        self.cycles.push(CycleSnapshot {
            cycle,
            shares: composite
                .iter()
                .map(|(id, share)| (id.to_string(), share))
                .collect(),
        });
        Ok(())
    }

    /// Recorded cycle labels, in recording order.
    pub fn cycles(&self) -> Vec<&str> {
        self.cycles.iter().map(|c| c.cycle.as_str()).collect()
    }

    /// Signed per-item deltas (`cycle_b` share minus `cycle_a` share),
    /// ordered by descending movement magnitude, ties by `cycle_a` item
    /// order.
    ///
    /// The two cycles must cover the same item set; comparing different
    /// sets is a `ScheduleMismatch`, not a partial answer.
    pub fn deltas(&self, cycle_a: &str, cycle_b: &str) -> Result<Vec<CycleDelta>, LedgerError> {
        let a = self.find(cycle_a)?;
        let b = self.find(cycle_b)?;

        let b_map: FxHashMap<&str, f64> = b
            .shares
            .iter()
            .map(|(id, share)| (id.as_str(), *share))
            .collect();

        let mut only_in_a: Vec<String> = a
            .shares
            .iter()
            .filter(|(id, _)| !b_map.contains_key(id.as_str()))
            .map(|(id, _)| id.clone())
            .collect();
        let a_ids: FxHashMap<&str, ()> =
            a.shares.iter().map(|(id, _)| (id.as_str(), ())).collect();
        let mut only_in_b: Vec<String> = b
            .shares
            .iter()
            .filter(|(id, _)| !a_ids.contains_key(id.as_str()))
            .map(|(id, _)| id.clone())
            .collect();

        if !only_in_a.is_empty() || !only_in_b.is_empty() {
            only_in_a.sort();
            only_in_b.sort();
            return Err(LedgerError::ScheduleMismatch {
                cycle_a: cycle_a.to_string(),
                cycle_b: cycle_b.to_string(),
                only_in_a,
                only_in_b,
            });
        }

        let mut deltas: Vec<CycleDelta> = a
            .shares
            .iter()
            .map(|(id, share_a)| CycleDelta {
                item: id.clone(),
                cycle_a: cycle_a.to_string(),
                cycle_b: cycle_b.to_string(),
                delta: b_map[id.as_str()] - share_a,
            })
            .collect();
        deltas.sort_by(|x, y| {
            y.delta
                .abs()
                .partial_cmp(&x.delta.abs())
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Ok(deltas)
    }

    /// Compute deltas and emit one `Cycle Delta` trace event per item, so
    /// cross-cycle movements land in the trace report alongside the run
    /// that consumed them.
    pub fn deltas_traced(
        &self,
        cycle_a: &str,
        cycle_b: &str,
        dispatcher: &EventDispatcher,
    ) -> Result<Vec<CycleDelta>, LedgerError> {
        let deltas = self.deltas(cycle_a, cycle_b)?;
        for delta in &deltas {
            dispatcher.emit_delta_recorded(&DeltaRecordedEvent {
                item: delta.item.clone(),
                cycle_a: delta.cycle_a.clone(),
                cycle_b: delta.cycle_b.clone(),
                delta: delta.delta,
            });
        }
        Ok(deltas)
    }

    /// Attach the caller's attested classification to a computed delta.
    pub fn attest(
        delta: CycleDelta,
        classification: DriftClass,
        driver: impl Into<String>,
    ) -> CycleDriftRecord {
        CycleDriftRecord {
            delta,
            classification,
            driver: driver.into(),
        }
    }

    fn find(&self, cycle: &str) -> Result<&CycleSnapshot, LedgerError> {
        self.cycles
            .iter()
            .find(|c| c.cycle == cycle)
            .ok_or_else(|| LedgerError::UnknownCycle {
                cycle: cycle.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn composite(pairs: &[(&str, f64)]) -> CompositeShares {
        CompositeShares::new(
            pairs.iter().map(|(id, _)| id.to_string()).collect(),
            pairs.iter().map(|(_, share)| *share).collect(),
        )
    }

    #[test]
    fn deltas_are_signed_and_sorted_by_magnitude() {
        let mut ledger = CycleLedger::new();
        ledger
            .record_cycle("2021", &composite(&[("a", 0.5), ("b", 0.3), ("c", 0.2)]))
            .unwrap();
        ledger
            .record_cycle("2024", &composite(&[("a", 0.45), ("b", 0.42), ("c", 0.13)]))
            .unwrap();

        let deltas = ledger.deltas("2021", "2024").unwrap();
        assert_eq!(deltas[0].item, "b");
        assert!((deltas[0].delta - 0.12).abs() < 1e-12);
        assert_eq!(deltas[1].item, "c");
        assert!(deltas[1].delta < 0.0);
        assert_eq!(deltas[2].item, "a");
    }

    #[test]
    fn mismatched_item_sets_are_a_schedule_mismatch() {
        let mut ledger = CycleLedger::new();
        ledger
            .record_cycle("2021", &composite(&[("a", 0.6), ("b", 0.4)]))
            .unwrap();
        ledger
            .record_cycle("2024", &composite(&[("a", 0.7), ("c", 0.3)]))
            .unwrap();

        match ledger.deltas("2021", "2024") {
            Err(LedgerError::ScheduleMismatch {
                only_in_a,
                only_in_b,
                ..
            }) => {
                assert_eq!(only_in_a, vec!["b".to_string()]);
                assert_eq!(only_in_b, vec!["c".to_string()]);
            }
            other => panic!("expected ScheduleMismatch, got {other:?}"),
        }
    }

    #[test]
    fn unknown_cycle_is_reported() {
        let ledger = CycleLedger::new();
        assert!(matches!(
            ledger.deltas("2021", "2024"),
            Err(LedgerError::UnknownCycle { .. })
        ));
    }

    #[test]
    fn duplicate_cycle_label_is_rejected() {
        let mut ledger = CycleLedger::new();
        ledger
            .record_cycle("2021", &composite(&[("a", 1.0)]))
            .unwrap();
        assert!(matches!(
            ledger.record_cycle("2021", &composite(&[("a", 1.0)])),
            Err(LedgerError::DuplicateCycle { .. })
        ));
    }

    #[test]
    fn traced_deltas_land_in_the_trace_report() {
        use std::sync::Arc;
        use unity_core::events::TraceRecorder;

        let mut ledger = CycleLedger::new();
        ledger
            .record_cycle("2021", &composite(&[("a", 0.5), ("b", 0.5)]))
            .unwrap();
        ledger
            .record_cycle("2024", &composite(&[("a", 0.6), ("b", 0.4)]))
            .unwrap();

        let recorder = Arc::new(TraceRecorder::new());
        let mut dispatcher = EventDispatcher::new();
        dispatcher.register(recorder.clone());

        let deltas = ledger.deltas_traced("2021", "2024", &dispatcher).unwrap();
        assert_eq!(deltas.len(), 2);
        let entries = recorder.entries();
        assert_eq!(entries.len(), 2);
        assert!(entries.iter().all(|e| e.action == "Cycle Delta"));
        assert!(entries[0].justification.contains("'2021' and '2024'"));
    }

    #[test]
    fn attestation_is_attached_verbatim() {
        let delta = CycleDelta {
            item: "Lower Neretva Valley".to_string(),
            cycle_a: "2021".to_string(),
            cycle_b: "2024".to_string(),
            delta: 0.042,
        };
        let record = CycleLedger::attest(
            delta,
            DriftClass::IntentionalReweighting,
            "Transboundary governance obligation, documented in committee minutes",
        );
        assert_eq!(record.classification, DriftClass::IntentionalReweighting);
        assert!(record.driver.contains("committee minutes"));
    }
}
