//! Open-Meteo forecast API: current temperature and humidity, plus today's
//! precipitation total.

use std::sync::Arc;

use aquastress_core::errors::{AquaResult, SourceError};
use aquastress_core::models::{Location, MissingDataPolicy, Provider, RawSample, Reading};
use aquastress_core::traits::IObservationSource;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::Deserialize;

use super::parse_err;
use crate::transport::HttpClient;

const NAME: &str = "open_meteo";

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current: Option<Current>,
    daily: Option<Daily>,
}

#[derive(Debug, Deserialize)]
struct Current {
    time: String,
    temperature_2m: Option<f64>,
    relative_humidity_2m: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Daily {
    #[serde(default)]
    precipitation_sum: Vec<Option<f64>>,
}

/// Parse a forecast response body into a raw sample.
///
/// Times are requested in GMT and carry no offset.
pub fn parse(body: &str) -> Result<RawSample, SourceError> {
    let resp: ForecastResponse =
        serde_json::from_str(body).map_err(|e| parse_err(NAME, e.to_string()))?;
    let current = resp
        .current
        .ok_or_else(|| parse_err(NAME, "response has no `current` block"))?;

    let observed_at = parse_time(&current.time)?;
    let mut sample = RawSample::new(Provider::OpenMeteo, observed_at);
    sample.temperature_c = current.temperature_2m;
    sample.humidity_pct = current.relative_humidity_2m;
    sample.precipitation_mm = resp
        .daily
        .and_then(|d| d.precipitation_sum.first().copied().flatten());
    Ok(sample)
}

fn parse_time(raw: &str) -> Result<DateTime<Utc>, SourceError> {
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .map(|naive| naive.and_utc())
        .map_err(|e| parse_err(NAME, format!("bad time {raw:?}: {e}")))
}

/// Observation source backed by Open-Meteo.
pub struct OpenMeteoSource {
    client: Arc<HttpClient>,
    base_url: String,
    policy: MissingDataPolicy,
}

impl OpenMeteoSource {
    pub fn new(client: Arc<HttpClient>, base_url: impl Into<String>, policy: MissingDataPolicy) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            policy,
        }
    }

    /// Query parameters for a location.
    pub fn query(location: &Location) -> Vec<(&'static str, String)> {
        vec![
            ("latitude", format!("{:.4}", location.latitude)),
            ("longitude", format!("{:.4}", location.longitude)),
            ("current", "temperature_2m,relative_humidity_2m".to_string()),
            ("daily", "precipitation_sum".to_string()),
            ("forecast_days", "1".to_string()),
            ("timezone", "GMT".to_string()),
        ]
    }
}

impl IObservationSource for OpenMeteoSource {
    fn name(&self) -> &str {
        NAME
    }

    fn observe(&self, location: &Location) -> AquaResult<Option<Reading>> {
        let body = self
            .client
            .get_text(NAME, &self.base_url, &Self::query(location))?;
        let sample = parse(&body)?;
        let reading = sample.into_reading(location, self.policy);
        if reading.is_none() {
            tracing::debug!(provider = NAME, location = %location.id, "incomplete sample declined");
        }
        Ok(reading)
    }
}
