//! Span definitions for the refresh pipeline.

/// Span wrapping one full refresh cycle.
#[macro_export]
macro_rules! cycle_span {
    ($cycle:expr, $locations:expr) => {
        tracing::info_span!("aquastress.cycle", cycle = $cycle, locations = $locations)
    };
}

/// Span wrapping the fetch and scoring of one location.
#[macro_export]
macro_rules! location_span {
    ($location_id:expr) => {
        tracing::debug_span!("aquastress.location", location = %$location_id)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const CYCLE: &str = "aquastress.cycle";
    pub const LOCATION: &str = "aquastress.location";
}
