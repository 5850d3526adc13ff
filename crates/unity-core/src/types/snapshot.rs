//! Immutable input snapshot.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::errors::SnapshotError;

/// One unit of accounting: a recipe, a site, a retrieval result.
///
/// `values` and `vintages` are aligned with the snapshot's declared metric
/// order; a missing vintage means the metric carries no temporal metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRecord {
    pub id: String,
    pub values: SmallVec<[f64; 4]>,
    pub vintages: SmallVec<[Option<i32>; 4]>,
}

/// The immutable input table for one audit run: a declared metric column
/// order plus one row per item.
///
/// The metric order declared here is the canonical iteration order for
/// every downstream component, which keeps output deterministic across
/// runs on identical input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    metrics: Vec<String>,
    items: Vec<ItemRecord>,
}

impl Snapshot {
    /// Start building a snapshot over the given metric columns.
    pub fn builder<I, S>(metrics: I) -> SnapshotBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SnapshotBuilder {
            metrics: metrics.into_iter().map(Into::into).collect(),
            items: Vec::new(),
        }
    }

    /// Declared metric columns, in canonical order.
    pub fn metrics(&self) -> &[String] {
        &self.metrics
    }

    /// Items in original input order.
    pub fn items(&self) -> &[ItemRecord] {
        &self.items
    }

    /// Position of a metric in the declared column order.
    pub fn metric_index(&self, metric: &str) -> Option<usize> {
        self.metrics.iter().position(|m| m == metric)
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Raw values of one metric column, in item order.
    pub fn column(&self, index: usize) -> impl Iterator<Item = f64> + '_ {
        self.items.iter().map(move |item| item.values[index])
    }
}

/// Accumulates rows, then validates the whole table at once in [`build`].
///
/// [`build`]: SnapshotBuilder::build
#[derive(Debug)]
pub struct SnapshotBuilder {
    metrics: Vec<String>,
    items: Vec<ItemRecord>,
}

impl SnapshotBuilder {
    /// Add an item with one raw value per metric column.
    pub fn item(self, id: impl Into<String>, values: &[f64]) -> Self {
        let vintages = std::iter::repeat(None).take(values.len()).collect();
        self.push(id.into(), values.iter().copied().collect(), vintages)
    }

    /// Add an item with values and per-metric vintage years.
    pub fn item_with_vintages(
        self,
        id: impl Into<String>,
        values: &[f64],
        vintages: &[Option<i32>],
    ) -> Self {
        self.push(
            id.into(),
            values.iter().copied().collect(),
            vintages.iter().copied().collect(),
        )
    }

    fn push(
        mut self,
        id: String,
        values: SmallVec<[f64; 4]>,
        vintages: SmallVec<[Option<i32>; 4]>,
    ) -> Self {
        self.items.push(ItemRecord {
            id,
            values,
            vintages,
        });
        self
    }

    /// Validate and freeze the snapshot.
    pub fn build(self) -> Result<Snapshot, SnapshotError> {
        if self.metrics.is_empty() {
            return Err(SnapshotError::NoMetrics);
        }

        let mut seen_metrics: FxHashSet<&str> = FxHashSet::default();
        for metric in &self.metrics {
            if !seen_metrics.insert(metric) {
                return Err(SnapshotError::DuplicateMetric {
                    metric: metric.clone(),
                });
            }
        }

        let expected = self.metrics.len();
        let mut seen_items: FxHashSet<&str> = FxHashSet::default();
        for item in &self.items {
            if !seen_items.insert(&item.id) {
                return Err(SnapshotError::DuplicateItem {
                    item: item.id.clone(),
                });
            }
            if item.values.len() != expected {
                return Err(SnapshotError::ValueCountMismatch {
                    item: item.id.clone(),
                    expected,
                    actual: item.values.len(),
                });
            }
            if item.vintages.len() != expected {
                return Err(SnapshotError::ValueCountMismatch {
                    item: item.id.clone(),
                    expected,
                    actual: item.vintages.len(),
                });
            }
        }

        Ok(Snapshot {
            metrics: self.metrics,
            items: self.items,
        })
    }
}
