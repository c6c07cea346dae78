use aquastress_core::models::{Observation, StressIndex};
use serde::Serialize;

use crate::factors::{aridity, humidity, per_capita, temperature};

/// 4-factor additive stress formula.
///
/// ```text
/// index = aridity           (0–40)
///       + perCapitaWater    (0–30)
///       + temperatureStress (0–20)
///       + dryAir            (0–10)
/// ```
///
/// Result is clamped to [0.0, 100.0].
pub fn compute(observation: &Observation) -> f64 {
    let total = sum(observation);
    StressIndex::new(total).value()
}

fn sum(o: &Observation) -> f64 {
    aridity::calculate(o.precipitation_mm_per_day, o.temperature_celsius)
        + per_capita::calculate(o.precipitation_mm_per_day, o.population_millions)
        + temperature::calculate(o.temperature_celsius)
        + humidity::calculate(o.relative_humidity_percent)
}

/// Each factor individually, for debugging and display.
#[derive(Debug, Clone, Serialize)]
pub struct StressBreakdown {
    pub potential_evapotranspiration: f64,
    pub aridity_index: f64,
    pub per_capita_m3: f64,
    pub aridity: f64,
    pub per_capita: f64,
    pub temperature: f64,
    pub humidity: f64,
    /// Sum before clamping.
    pub raw_total: f64,
    pub index: f64,
}

/// Compute the index with a full breakdown of each factor.
pub fn compute_breakdown(o: &Observation) -> StressBreakdown {
    let aridity = aridity::calculate(o.precipitation_mm_per_day, o.temperature_celsius);
    let per_capita = per_capita::calculate(o.precipitation_mm_per_day, o.population_millions);
    let temperature = temperature::calculate(o.temperature_celsius);
    let humidity = humidity::calculate(o.relative_humidity_percent);
    let raw_total = aridity + per_capita + temperature + humidity;

    StressBreakdown {
        potential_evapotranspiration: aridity::potential_evapotranspiration(o.temperature_celsius),
        aridity_index: aridity::aridity_index(o.precipitation_mm_per_day, o.temperature_celsius),
        per_capita_m3: per_capita::per_capita_m3(o.precipitation_mm_per_day, o.population_millions),
        aridity,
        per_capita,
        temperature,
        humidity,
        raw_total,
        index: StressIndex::new(raw_total).value(),
    }
}
