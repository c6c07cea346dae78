//! Structured log events for the refresh pipeline.
//!
//! Each function emits a `tracing` event with structured fields.

use aquastress_core::models::{Reading, StressAssessment, WaterLevelReading};

/// Log a complete observation returned by a provider.
pub fn observation_fetched(reading: &Reading) {
    tracing::debug!(
        event = "observation_fetched",
        location = %reading.location_id,
        provider = %reading.provider,
        observed_at = %reading.observed_at,
        precipitation_mm = reading.observation.precipitation_mm_per_day,
        temperature_c = reading.observation.temperature_celsius,
        humidity_pct = reading.observation.relative_humidity_percent,
        "observation fetched"
    );
}

/// Log a location for which no provider returned a complete observation.
pub fn observation_unavailable(location_id: &str, consecutive_failures: u32) {
    tracing::warn!(
        event = "observation_unavailable",
        location = %location_id,
        consecutive_failures = consecutive_failures,
        "no complete observation"
    );
}

pub fn assessment_computed(location_id: &str, assessment: &StressAssessment) {
    tracing::info!(
        event = "assessment_computed",
        location = %location_id,
        index = assessment.index.value(),
        severity = %assessment.severity,
        "stress assessed"
    );
}

/// Log a provider or transport failure. Failures never abort a cycle.
pub fn source_failed(location_id: &str, provider: &str, error: &str) {
    tracing::warn!(
        event = "source_failed",
        location = %location_id,
        provider = %provider,
        error = %error,
        "source failed"
    );
}

pub fn water_level_fetched(location_id: &str, level: &WaterLevelReading) {
    tracing::debug!(
        event = "water_level_fetched",
        location = %location_id,
        site = %level.site_code,
        value = level.value,
        unit = %level.unit,
        "water level fetched"
    );
}

/// Log a presentation sink failure.
pub fn sink_failed(sink: &str, error: &str) {
    tracing::error!(
        event = "sink_failed",
        sink = %sink,
        error = %error,
        "presentation sink failed"
    );
}

pub fn cycle_completed(scored: usize, unavailable: usize, errors: usize, duration_ms: u64) {
    tracing::info!(
        event = "cycle_completed",
        scored = scored,
        unavailable = unavailable,
        errors = errors,
        duration_ms = duration_ms,
        "refresh cycle completed"
    );
}

pub fn refresh_cancelled(completed_cycles: u64) {
    tracing::info!(
        event = "refresh_cancelled",
        completed_cycles = completed_cycles,
        "scheduled refresh cancelled"
    );
}
