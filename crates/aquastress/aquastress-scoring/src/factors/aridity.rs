//! Aridity factor: precipitation relative to potential evapotranspiration.
//!
//! ```text
//! PET = 0.0023 × (T + 17.8) × √|25 − T| × 5
//! AI  = precipitation / PET        (0 when precipitation ≤ 0)
//! ```
//!
//! Range: 0 – 40. Lower AI means more arid and more stress.

use super::stepped;

pub const MAX_CONTRIBUTION: f64 = 40.0;

/// Below this magnitude PET is treated as zero.
pub const PET_EPSILON: f64 = 1e-9;

/// (exclusive upper bound on AI, contribution)
pub(crate) const BANDS: [(f64, f64); 4] = [(0.05, 40.0), (0.20, 30.0), (0.50, 20.0), (0.65, 10.0)];

/// Temperature-only potential evapotranspiration estimate, mm/day.
pub fn potential_evapotranspiration(temperature_celsius: f64) -> f64 {
    0.0023 * (temperature_celsius + 17.8) * (25.0 - temperature_celsius).abs().sqrt() * 5.0
}

/// Aridity index for the given precipitation and temperature.
///
/// Zero or missing precipitation yields 0 (fully arid). A vanishing or
/// undefined PET with positive precipitation yields +∞ (fully wet).
pub fn aridity_index(precipitation_mm_per_day: f64, temperature_celsius: f64) -> f64 {
    if precipitation_mm_per_day.is_nan() || precipitation_mm_per_day <= 0.0 {
        return 0.0;
    }
    let pet = potential_evapotranspiration(temperature_celsius);
    if !pet.is_finite() || pet.abs() < PET_EPSILON {
        return f64::INFINITY;
    }
    precipitation_mm_per_day / pet
}

pub fn calculate(precipitation_mm_per_day: f64, temperature_celsius: f64) -> f64 {
    stepped(
        aridity_index(precipitation_mm_per_day, temperature_celsius),
        &BANDS,
    )
}
