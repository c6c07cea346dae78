use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Latest instantaneous water level reported by a USGS gauge.
///
/// Display-only: water levels do not feed the stress index.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WaterLevelReading {
    pub site_code: String,
    pub site_name: String,
    pub parameter_code: String,
    pub unit: String,
    pub value: f64,
    pub observed_at: DateTime<Utc>,
}
