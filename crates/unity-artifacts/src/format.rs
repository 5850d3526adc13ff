//! Display formatting for artifact fields.
//!
//! Rounding lives here and only here; the engine carries full precision
//! end to end.

use unity_core::constants::DISPLAY_PRECISION;

/// Format a unit-interval share as a percentage, e.g. `0.1234` → `12.34%`.
pub(crate) fn percent(share: f64) -> String {
    format!(
        "{:.prec$}%",
        share * 100.0,
        prec = DISPLAY_PRECISION as usize
    )
}

/// Format a leverage value, e.g. `8.1037` → `8.10`.
pub(crate) fn leverage(value: f64) -> String {
    format!("{value:.prec$}", prec = DISPLAY_PRECISION as usize)
}

/// Format a raw share with full audit precision.
pub(crate) fn share(value: f64) -> String {
    format!("{value:.6}")
}

/// Format a signed cross-cycle delta, sign always shown.
pub(crate) fn delta(value: f64) -> String {
    format!("{value:+.6}")
}
