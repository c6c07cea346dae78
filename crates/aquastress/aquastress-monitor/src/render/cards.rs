use aquastress_core::models::{LocationRecord, Provider, SeverityLevel, WaterLevelReading};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::NO_DATA_COLOR;

/// Per-location detail card.
///
/// An unavailable location keeps its previous values with `stale` set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: String,
    pub name: String,
    pub index: Option<f64>,
    pub severity: Option<SeverityLevel>,
    pub color: String,
    pub precipitation_mm: Option<f64>,
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    pub soil_moisture: Option<f64>,
    pub water_level: Option<WaterLevelReading>,
    pub provider: Option<Provider>,
    pub observed_at: Option<DateTime<Utc>>,
    pub stale: bool,
}

impl From<&LocationRecord> for Card {
    fn from(record: &LocationRecord) -> Self {
        let assessment = record.latest_assessment.as_ref();
        let reading = record.latest_reading.as_ref();
        Self {
            id: record.location.id.clone(),
            name: record.location.name.clone(),
            index: assessment.map(|a| a.index.value()),
            severity: assessment.map(|a| a.severity),
            color: assessment
                .map_or(NO_DATA_COLOR, |a| a.severity_color())
                .to_string(),
            precipitation_mm: reading.map(|r| r.observation.precipitation_mm_per_day),
            temperature_c: reading.map(|r| r.observation.temperature_celsius),
            humidity_pct: reading.map(|r| r.observation.relative_humidity_percent),
            soil_moisture: reading.and_then(|r| r.soil_moisture),
            water_level: record.water_level.clone(),
            provider: reading.map(|r| r.provider),
            observed_at: reading.map(|r| r.observed_at),
            stale: record.is_stale(),
        }
    }
}

/// Cards in snapshot order.
pub fn build_cards(records: &[LocationRecord]) -> Vec<Card> {
    records.iter().map(Card::from).collect()
}
