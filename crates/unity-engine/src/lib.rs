//! The Unity numeric engine.
//!
//! A small set of invariant-preserving transforms over an immutable input
//! snapshot: normalize metric columns to unity, compose them under
//! operator-declared weights, derive leverage and drift labels, account for
//! cross-cycle deltas and excluded mass. All computation is synchronous,
//! single-threaded, and pure over the snapshot; the only state is the audit
//! trail the pipeline emits as events.
//!
//! Control flow: snapshot → [`normalize`] → [`compose`] →
//! {[`leverage`], [`drift`], [`staleness`]} → [`ledger`] (cross-run) →
//! [`coverage`] → `AuditOutcome` (consumed by `unity-artifacts`).

pub mod compose;
pub mod coverage;
pub mod drift;
pub mod ledger;
pub mod leverage;
pub mod normalize;
pub mod pipeline;
pub mod staleness;

pub use compose::{compose, CompositeShares};
pub use coverage::{CoverageTracker, ExclusionRequest};
pub use drift::DriftClassifier;
pub use ledger::CycleLedger;
pub use leverage::LeverageAnalyzer;
pub use normalize::{unity_normalize, verify_unity, ShareMatrix};
pub use pipeline::{AuditOutcome, AuditPipeline};
