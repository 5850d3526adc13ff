//! Numeric contract constants shared across the workspace.

/// Tolerance for every unity check: weight sums, share sums, and the
/// retained + discarded mass invariant.
pub const UNITY_TOLERANCE: f64 = 1e-9;

/// Decimal places used when formatting shares and leverage for display.
/// Rounding happens at emission time only and never feeds back into
/// computation.
pub const DISPLAY_PRECISION: u32 = 2;

/// Default data-age threshold in years before a metric value is flagged
/// stale.
pub const DEFAULT_STALENESS_YEARS: i32 = 5;

/// Default leverage tier boundaries.
pub const DEFAULT_LEVERAGE_HIGH: f64 = 100.0;
pub const DEFAULT_LEVERAGE_MEDIUM: f64 = 10.0;

/// Default retained-mass fraction for the concentration metric
/// (smallest k items covering this fraction).
pub const DEFAULT_CONCENTRATION_TARGET: f64 = 0.90;
