//! # aquastress-observability
//!
//! Tracing subscriber setup, named log events, and counters for refresh cycles.

pub mod metrics;
pub mod tracing_setup;

pub use metrics::{CycleMetrics, CycleSample, MetricsCollector, SourceMetrics};
pub use tracing_setup::init_tracing;
