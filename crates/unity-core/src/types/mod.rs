//! Shared types for the Unity audit engine.

pub mod labels;
pub mod records;
pub mod snapshot;

pub use labels::{DriftClass, DriftLabel, LeverageTier};
pub use records::{
    CoverageReport, CycleDelta, CycleDriftRecord, ExcludedEntity, LeverageReading,
    RetainedItem, RunStamp, StaleFlag,
};
pub use snapshot::{ItemRecord, Snapshot, SnapshotBuilder};
