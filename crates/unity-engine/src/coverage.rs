//! Coverage / Error-Budget Tracker — accounting for excluded mass.
//!
//! Discarded items carry no share in a unity-normalized system, so the
//! discarded-mass concept applies when normalization ran over a superset
//! that is then filtered: the discarded mass is the pre-filter share of the
//! removed items, and the retained shares are renormalized to unity. Both
//! the pre-filter and post-filter share of every retained item are
//! reported so that step stays auditable.

use rustc_hash::{FxHashMap, FxHashSet};

use unity_core::config::CoverageConfig;
use unity_core::constants::UNITY_TOLERANCE;
use unity_core::errors::CoverageError;
use unity_core::types::{CoverageReport, ExcludedEntity, RetainedItem};

use crate::compose::CompositeShares;

/// An explicit caller-requested exclusion with its stated reason.
#[derive(Debug, Clone)]
pub struct ExclusionRequest {
    pub entity: String,
    pub reason: String,
}

impl ExclusionRequest {
    pub fn new(entity: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            reason: reason.into(),
        }
    }
}

/// Filters a composite by explicit exclusions and the configured minimum
/// share τ, then books the removed mass against the error budget.
#[derive(Debug, Clone)]
pub struct CoverageTracker {
    config: CoverageConfig,
}

impl CoverageTracker {
    pub fn new(config: CoverageConfig) -> Self {
        Self { config }
    }

    /// Apply exclusions to the pre-filter composite and produce the
    /// coverage report.
    ///
    /// Invariant: retained mass + discarded mass = 1.0 within tolerance;
    /// a violation is an error, not a rounding note.
    pub fn track(
        &self,
        composite: &CompositeShares,
        explicit: &[ExclusionRequest],
    ) -> Result<CoverageReport, CoverageError> {
        let known: FxHashSet<&str> = composite.ids().iter().map(String::as_str).collect();
        let mut reasons: FxHashMap<&str, &str> = FxHashMap::default();
        for request in explicit {
            if !known.contains(request.entity.as_str()) {
                return Err(CoverageError::UnknownEntity {
                    entity: request.entity.clone(),
                });
            }
            if reasons
                .insert(request.entity.as_str(), request.reason.as_str())
                .is_some()
            {
                return Err(CoverageError::DuplicateExclusion {
                    entity: request.entity.clone(),
                });
            }
        }

        let tau = self.config.effective_min_share();
        let mut exclusions = Vec::new();
        let mut retained_pre = Vec::new();
        for (id, share) in composite.iter() {
            if let Some(reason) = reasons.get(id) {
                exclusions.push(ExcludedEntity {
                    entity: id.to_string(),
                    reason: (*reason).to_string(),
                    discarded_share: share,
                });
            } else if share < tau {
                exclusions.push(ExcludedEntity {
                    entity: id.to_string(),
                    reason: format!(
                        "Composite share {share:.6} below operator threshold τ = {tau}."
                    ),
                    discarded_share: share,
                });
            } else {
                retained_pre.push((id.to_string(), share));
            }
        }

        if retained_pre.is_empty() {
            return Err(CoverageError::EmptyRetainedSet);
        }

        let discarded_mass: f64 = exclusions.iter().map(|e| e.discarded_share).sum();
        let retained_mass: f64 = retained_pre.iter().map(|(_, share)| share).sum();
        if (retained_mass + discarded_mass - 1.0).abs() > UNITY_TOLERANCE {
            return Err(CoverageError::MassNotConserved {
                retained: retained_mass,
                discarded: discarded_mass,
                tolerance: UNITY_TOLERANCE,
            });
        }

        // Renormalize the survivors to unity over the retained set.
        let retained: Vec<RetainedItem> = retained_pre
            .into_iter()
            .map(|(id, pre)| RetainedItem {
                id,
                pre_filter_share: pre,
                post_filter_share: pre / retained_mass,
            })
            .collect();

        let target = self.config.effective_concentration_target();
        let items_to_cover = items_to_cover(
            retained.iter().map(|r| r.post_filter_share),
            target,
        );

        Ok(CoverageReport {
            retained,
            exclusions,
            retained_mass,
            discarded_mass,
            items_to_cover,
            concentration_target: target,
        })
    }
}

/// Smallest k such that the top-k shares (descending) reach `target` of
/// their total. Returns 0 for an empty set.
pub fn items_to_cover(shares: impl Iterator<Item = f64>, target: f64) -> usize {
    let mut sorted: Vec<f64> = shares.collect();
    if sorted.is_empty() {
        return 0;
    }
    sorted.sort_by(|a, b| b.partial_cmp(a).unwrap_or(std::cmp::Ordering::Equal));
    let total: f64 = sorted.iter().sum();
    let goal = target * total;
    let mut cumulative = 0.0;
    for (k, share) in sorted.iter().enumerate() {
        cumulative += share;
        if cumulative >= goal {
            return k + 1;
        }
    }
    sorted.len()
}
