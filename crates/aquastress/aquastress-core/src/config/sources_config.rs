use serde::{Deserialize, Serialize};

use super::defaults;
use crate::models::Provider;

/// Remote data provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SourcesConfig {
    pub open_meteo_url: String,
    pub nasa_power_url: String,
    pub usgs_url: String,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
    /// Retries after the first attempt.
    pub max_retries: u32,
    /// Initial backoff; doubles each retry up to `max_backoff_ms`.
    pub initial_backoff_ms: u64,
    pub max_backoff_ms: u64,
    /// Providers tried in order; the first complete reading wins.
    pub providers: Vec<Provider>,
    /// Days of NASA POWER history requested (the archive lags a few days).
    pub nasa_lookback_days: u32,
    pub usgs_parameter_code: String,
    /// Fetch USGS water levels for locations with a site code.
    pub water_levels: bool,
}

impl Default for SourcesConfig {
    fn default() -> Self {
        Self {
            open_meteo_url: defaults::DEFAULT_OPEN_METEO_URL.to_string(),
            nasa_power_url: defaults::DEFAULT_NASA_POWER_URL.to_string(),
            usgs_url: defaults::DEFAULT_USGS_URL.to_string(),
            timeout_secs: defaults::DEFAULT_HTTP_TIMEOUT_SECS,
            max_retries: defaults::DEFAULT_MAX_RETRIES,
            initial_backoff_ms: defaults::DEFAULT_INITIAL_BACKOFF_MS,
            max_backoff_ms: defaults::DEFAULT_MAX_BACKOFF_MS,
            providers: vec![Provider::OpenMeteo, Provider::NasaPower],
            nasa_lookback_days: defaults::DEFAULT_NASA_LOOKBACK_DAYS,
            usgs_parameter_code: defaults::DEFAULT_USGS_PARAMETER_CODE.to_string(),
            water_levels: true,
        }
    }
}
