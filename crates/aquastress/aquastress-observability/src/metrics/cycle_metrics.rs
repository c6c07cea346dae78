use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of one refresh cycle, fed to [`CycleMetrics::record`].
#[derive(Debug, Clone, Default)]
pub struct CycleSample {
    pub scored: usize,
    pub unavailable: usize,
    pub errors: usize,
    pub duration: Duration,
    /// Indices produced this cycle.
    pub indices: Vec<f64>,
    pub completed_at: Option<DateTime<Utc>>,
}

/// Running totals across refresh cycles.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CycleMetrics {
    pub cycles: u64,
    pub cancelled: u64,
    pub scored_total: u64,
    pub unavailable_total: u64,
    pub errors_total: u64,
    pub last_duration_ms: u64,
    /// Mean index of the last cycle; `None` when it scored nothing.
    pub last_mean_index: Option<f64>,
    pub last_completed_at: Option<DateTime<Utc>>,
}

impl CycleMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, sample: &CycleSample) {
        self.cycles += 1;
        self.scored_total += sample.scored as u64;
        self.unavailable_total += sample.unavailable as u64;
        self.errors_total += sample.errors as u64;
        self.last_duration_ms = u64::try_from(sample.duration.as_millis()).unwrap_or(u64::MAX);
        self.last_mean_index = mean(&sample.indices);
        self.last_completed_at = sample.completed_at;
    }

    pub fn record_cancelled(&mut self) {
        self.cancelled += 1;
    }

    /// Fraction of attempted locations that produced an assessment.
    pub fn success_rate(&self) -> f64 {
        let attempted = self.scored_total + self.unavailable_total;
        if attempted == 0 {
            return 0.0;
        }
        self.scored_total as f64 / attempted as f64
    }
}

fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}
