//! Data-age check — informational, never fatal.

use unity_core::config::StalenessConfig;
use unity_core::types::{Snapshot, StaleFlag};

/// Flag every (item, metric) pair whose vintage year is older than the
/// configured threshold. Metrics without temporal metadata are skipped.
pub fn staleness_flags(
    snapshot: &Snapshot,
    config: &StalenessConfig,
    current_year: i32,
) -> Vec<StaleFlag> {
    let max_age = config.effective_max_age_years();
    let mut flags = Vec::new();
    for item in snapshot.items() {
        for (index, metric) in snapshot.metrics().iter().enumerate() {
            let Some(vintage) = item.vintages[index] else {
                continue;
            };
            let age = current_year - vintage;
            if age > max_age {
                flags.push(StaleFlag {
                    item: item.id.clone(),
                    metric: metric.clone(),
                    vintage_year: vintage,
                    age_years: age,
                });
            }
        }
    }
    flags
}
