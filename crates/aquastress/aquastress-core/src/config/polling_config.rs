use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::MissingDataPolicy;

/// Polling cadence and missing-data handling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PollingConfig {
    /// Fixed delay between consecutive locations in a cycle (milliseconds).
    pub request_delay_ms: u64,
    /// Interval between refresh cycles (seconds).
    pub refresh_interval_secs: u64,
    pub missing_data: MissingDataPolicy,
}

impl Default for PollingConfig {
    fn default() -> Self {
        Self {
            request_delay_ms: defaults::DEFAULT_REQUEST_DELAY_MS,
            refresh_interval_secs: defaults::DEFAULT_REFRESH_INTERVAL_SECS,
            missing_data: MissingDataPolicy::default(),
        }
    }
}
