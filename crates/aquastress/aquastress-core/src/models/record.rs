use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Location, Reading, StressAssessment, WaterLevelReading};

/// Freshness of a location's latest assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordStatus {
    /// Registered but never polled.
    Pending,
    /// The latest poll produced an assessment.
    Fresh,
    /// The latest poll produced no observation. Any previous assessment is stale.
    Unavailable,
}

/// Latest known state of one monitored location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationRecord {
    pub location: Location,
    pub latest_reading: Option<Reading>,
    pub latest_assessment: Option<StressAssessment>,
    pub water_level: Option<WaterLevelReading>,
    pub status: RecordStatus,
    pub updated_at: Option<DateTime<Utc>>,
    pub consecutive_failures: u32,
}

impl LocationRecord {
    pub fn new(location: Location) -> Self {
        Self {
            location,
            latest_reading: None,
            latest_assessment: None,
            water_level: None,
            status: RecordStatus::Pending,
            updated_at: None,
            consecutive_failures: 0,
        }
    }

    /// Whether the held assessment predates the latest poll.
    pub fn is_stale(&self) -> bool {
        self.status != RecordStatus::Fresh
    }
}
