//! Percentage helpers shared by every aggregate.
//!
//! A zero denominator always yields `0.0`; NaN and infinity never leave
//! this module.

/// `part / whole * 100`, or `0.0` when `whole` is zero.
#[must_use]
pub fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    part / whole * 100.0
}

/// `(current - previous) / previous * 100`, or `0.0` when `previous` is zero.
#[must_use]
pub fn percent_change(current: f64, previous: f64) -> f64 {
    percent_of(current - previous, previous)
}

/// Round half away from zero to `decimals` places.
#[must_use]
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10f64.powi(decimals as i32);
    (value * factor).round() / factor
}
