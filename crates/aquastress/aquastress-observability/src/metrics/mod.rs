//! Central metrics registry.
//!
//! [`MetricsCollector`] owns the cycle and per-provider collectors.

pub mod cycle_metrics;
pub mod source_metrics;

pub use cycle_metrics::{CycleMetrics, CycleSample};
pub use source_metrics::{ProviderCounts, SourceMetrics};

/// Central metrics registry.
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct MetricsCollector {
    pub cycles: CycleMetrics,
    pub sources: SourceMetrics,
}

impl MetricsCollector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset all metrics.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
