use aquastress_core::errors::SinkError;
use aquastress_core::models::LocationRecord;
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::Value;

use super::{build_cards, build_markers, ticker_line, Card};

/// Everything the dashboard page consumes, in one document.
#[derive(Debug, Clone, Serialize)]
pub struct Dashboard {
    pub generated_at: DateTime<Utc>,
    pub ticker: String,
    pub cards: Vec<Card>,
    pub markers: Value,
}

impl Dashboard {
    pub fn build(records: &[LocationRecord], generated_at: DateTime<Utc>) -> Self {
        Self {
            generated_at,
            ticker: ticker_line(records),
            cards: build_cards(records),
            markers: build_markers(records),
        }
    }

    pub fn to_json_pretty(&self) -> Result<String, SinkError> {
        serde_json::to_string_pretty(self).map_err(|e| SinkError::Serialize {
            reason: e.to_string(),
        })
    }
}
