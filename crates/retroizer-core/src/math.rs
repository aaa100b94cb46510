//! Mathematical utility functions for DSP.
//!
//! Allocation-free helpers suitable for `no_std` and real-time use.

use libm::logf;

/// Blend a dry and wet signal.
///
/// `mix = 0.0` returns the dry signal unchanged, `mix = 1.0` the wet signal.
/// Values outside [0, 1] extrapolate rather than clamp; callers that want a
/// strict blend must clamp first.
///
/// # Example
/// ```rust
/// use retroizer_core::wet_dry_mix;
///
/// assert_eq!(wet_dry_mix(1.0, 0.0, 0.0), 1.0);
/// assert_eq!(wet_dry_mix(1.0, 0.0, 1.0), 0.0);
/// assert_eq!(wet_dry_mix(1.0, 0.0, 0.5), 0.5);
/// ```
#[inline]
pub fn wet_dry_mix(dry: f32, wet: f32, mix: f32) -> f32 {
    dry * (1.0 - mix) + wet * mix
}

/// Convert linear gain to decibels.
///
/// Values at or below zero are floored to avoid `-inf`.
#[inline]
pub fn linear_to_db(linear: f32) -> f32 {
    const FACTOR: f32 = 20.0 / core::f32::consts::LN_10;
    logf(linear.max(1e-10)) * FACTOR
}
