//! Per-capita water availability factor.
//!
//! ```text
//! area_km2   = √(population_millions × 10)
//! volume_m3  = precipitation × area_km2 × 1000
//! per_capita = volume_m3 / (population_millions × 1_000_000)
//! ```
//!
//! Range: 0 – 30.

use super::stepped;

pub const MAX_CONTRIBUTION: f64 = 30.0;

/// 1 mm of rain over 1 km² is 1000 m³.
const M3_PER_MM_KM2: f64 = 1_000.0;

pub(crate) const BANDS: [(f64, f64); 3] = [(500.0, 30.0), (1_000.0, 20.0), (1_700.0, 10.0)];

/// Estimated urban area served, km².
pub fn served_area_km2(population_millions: f64) -> f64 {
    (population_millions * 10.0).sqrt()
}

/// Cubic metres of water per person per day.
///
/// A non-positive or non-finite population has no supply estimate and
/// yields 0 (treated as scarce).
pub fn per_capita_m3(precipitation_mm_per_day: f64, population_millions: f64) -> f64 {
    if !(population_millions.is_finite() && population_millions > 0.0) {
        return 0.0;
    }
    let area = served_area_km2(population_millions);
    let volume = precipitation_mm_per_day.max(0.0) * area * M3_PER_MM_KM2;
    volume / (population_millions * 1_000_000.0)
}

pub fn calculate(precipitation_mm_per_day: f64, population_millions: f64) -> f64 {
    stepped(
        per_capita_m3(precipitation_mm_per_day, population_millions),
        &BANDS,
    )
}
