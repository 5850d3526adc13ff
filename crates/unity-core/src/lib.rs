//! Core types, errors, configuration, and audit trace events for the Unity
//! mass-distribution audit engine.
//!
//! Unity audits how a finite mass (a budget, nutrient content, an ecological
//! metric, a retrieval score) is distributed across named items under
//! operator-declared weights. This crate carries everything the engine and
//! the artifact emitter share: the immutable input [`types::Snapshot`], the
//! per-subsystem error taxonomy, the [`config::AuditConfig`] passed
//! explicitly into every component call, and the trace event machinery that
//! feeds the audit trail.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod types;

pub use config::AuditConfig;
pub use constants::UNITY_TOLERANCE;
pub use errors::{AuditError, UnityErrorCode};
pub use types::Snapshot;
