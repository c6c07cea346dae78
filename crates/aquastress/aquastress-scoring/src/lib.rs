//! # aquastress-scoring
//!
//! Four-factor additive water stress index.
//! Factors: aridity (precipitation vs. potential evapotranspiration), per-capita
//! water availability, temperature stress, and dryness of the air.
//! The sum is clamped to [0, 100] and discretized into a severity level.

pub mod engine;
pub mod factors;
pub mod formula;

pub use engine::StressEngine;
pub use formula::StressBreakdown;

use aquastress_core::models::{Observation, StressAssessment};

/// Score raw inputs directly. Never fails: out-of-range input degrades via clamping.
pub fn compute_stress(
    precipitation_mm_per_day: f64,
    temperature_celsius: f64,
    relative_humidity_percent: f64,
    population_millions: f64,
) -> StressAssessment {
    let observation = Observation::new(
        precipitation_mm_per_day,
        temperature_celsius,
        relative_humidity_percent,
        population_millions,
    );
    StressAssessment::from_total(formula::compute(&observation))
}
