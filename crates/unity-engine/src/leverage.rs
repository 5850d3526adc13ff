//! Leverage Analyzer — inverse-share sensitivity with governance tiers.
//!
//! Leverage values are a qualitative sensitivity signal, not a precise
//! multiplicative claim: a high-leverage item's small proportional share
//! masks outsized governance sensitivity, and the number needs independent
//! corroboration before anyone acts on it alone.

use unity_core::config::LeverageConfig;
use unity_core::errors::LeverageError;
use unity_core::types::{LeverageReading, LeverageTier};

use crate::compose::CompositeShares;

/// Derives leverage = 1/share and assigns a tier from configured
/// thresholds.
#[derive(Debug, Clone)]
pub struct LeverageAnalyzer {
    config: LeverageConfig,
}

impl LeverageAnalyzer {
    pub fn new(config: LeverageConfig) -> Self {
        Self { config }
    }

    /// Leverage for one item's share, at full precision.
    ///
    /// A share of exactly 0 is an error, never +infinity: total exclusion
    /// has a different governance meaning than near-total exclusion.
    pub fn analyze(&self, item: &str, share: f64) -> Result<LeverageReading, LeverageError> {
        if share == 0.0 {
            return Err(LeverageError::ZeroShare {
                item: item.to_string(),
            });
        }
        if !share.is_finite() || !(0.0..=1.0).contains(&share) {
            return Err(LeverageError::InvalidShare {
                item: item.to_string(),
                share,
            });
        }

        let leverage = 1.0 / share;
        Ok(LeverageReading {
            item: item.to_string(),
            leverage,
            tier: self.tier(leverage),
        })
    }

    /// Leverage for every item of a composite, in item order.
    pub fn analyze_all(
        &self,
        composite: &CompositeShares,
    ) -> Result<Vec<LeverageReading>, LeverageError> {
        composite
            .iter()
            .map(|(id, share)| self.analyze(id, share))
            .collect()
    }

    fn tier(&self, leverage: f64) -> LeverageTier {
        if leverage > self.config.effective_high_threshold() {
            LeverageTier::High
        } else if leverage >= self.config.effective_medium_threshold() {
            LeverageTier::Medium
        } else {
            LeverageTier::Low
        }
    }
}
