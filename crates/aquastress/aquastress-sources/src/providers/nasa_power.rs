//! NASA POWER daily point API: corrected precipitation, 2 m temperature,
//! 2 m relative humidity and root-zone soil wetness.
//!
//! The archive lags real time by a few days, so a lookback window is
//! requested and the newest usable day is taken.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use aquastress_core::constants::NASA_POWER_FILL_VALUE;
use aquastress_core::errors::{AquaResult, SourceError};
use aquastress_core::models::{Location, MissingDataPolicy, Provider, RawSample, Reading};
use aquastress_core::traits::IObservationSource;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Deserialize;

use super::parse_err;
use crate::transport::HttpClient;

const NAME: &str = "nasa_power";

pub const PARAM_PRECIPITATION: &str = "PRECTOTCORR";
pub const PARAM_TEMPERATURE: &str = "T2M";
pub const PARAM_HUMIDITY: &str = "RH2M";
pub const PARAM_SOIL_MOISTURE: &str = "GWETROOT";

#[derive(Debug, Deserialize)]
struct PointResponse {
    properties: Properties,
    #[serde(default)]
    header: Option<Header>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    /// parameter → (YYYYMMDD → value)
    parameter: HashMap<String, BTreeMap<String, f64>>,
}

#[derive(Debug, Deserialize)]
struct Header {
    fill_value: Option<f64>,
}

/// Parse a daily point response into the newest usable sample.
///
/// Prefers the newest day where precipitation, temperature and humidity are
/// all present. Otherwise the newest day with a temperature is returned as a
/// partial sample and the missing-data policy decides.
pub fn parse(body: &str) -> Result<RawSample, SourceError> {
    let resp: PointResponse =
        serde_json::from_str(body).map_err(|e| parse_err(NAME, e.to_string()))?;
    let fill = resp
        .header
        .and_then(|h| h.fill_value)
        .unwrap_or(NASA_POWER_FILL_VALUE);
    let params = &resp.properties.parameter;

    let temperature = params
        .get(PARAM_TEMPERATURE)
        .ok_or_else(|| parse_err(NAME, "response has no T2M series"))?;

    let value = |param: &str, day: &str| -> Option<f64> {
        params
            .get(param)
            .and_then(|series| series.get(day))
            .copied()
            .filter(|v| v.is_finite() && (*v - fill).abs() > f64::EPSILON)
    };

    let days_with_temperature: Vec<&String> = temperature
        .keys()
        .rev()
        .filter(|day| value(PARAM_TEMPERATURE, day).is_some())
        .collect();

    let day = days_with_temperature
        .iter()
        .find(|day| {
            value(PARAM_PRECIPITATION, day).is_some() && value(PARAM_HUMIDITY, day).is_some()
        })
        .or_else(|| days_with_temperature.first())
        .ok_or_else(|| SourceError::NoData {
            provider: NAME.to_string(),
            target: "any day in the requested window".to_string(),
        })?;

    let mut sample = RawSample::new(Provider::NasaPower, parse_day(day)?);
    sample.temperature_c = value(PARAM_TEMPERATURE, day);
    sample.precipitation_mm = value(PARAM_PRECIPITATION, day);
    sample.humidity_pct = value(PARAM_HUMIDITY, day);
    sample.soil_moisture = value(PARAM_SOIL_MOISTURE, day);
    Ok(sample)
}

/// Daily values are stamped at midday UTC.
fn parse_day(day: &str) -> Result<DateTime<Utc>, SourceError> {
    NaiveDate::parse_from_str(day, "%Y%m%d")
        .ok()
        .and_then(|d| d.and_hms_opt(12, 0, 0))
        .map(|naive| naive.and_utc())
        .ok_or_else(|| parse_err(NAME, format!("bad date key {day:?}")))
}

/// Observation source backed by NASA POWER.
pub struct NasaPowerSource {
    client: Arc<HttpClient>,
    base_url: String,
    lookback_days: u32,
    policy: MissingDataPolicy,
}

impl NasaPowerSource {
    pub fn new(
        client: Arc<HttpClient>,
        base_url: impl Into<String>,
        lookback_days: u32,
        policy: MissingDataPolicy,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            lookback_days,
            policy,
        }
    }

    /// Query parameters for a location and a window ending `today`.
    pub fn query(&self, location: &Location, today: NaiveDate) -> Vec<(&'static str, String)> {
        let start = today - Duration::days(i64::from(self.lookback_days));
        vec![
            (
                "parameters",
                [
                    PARAM_PRECIPITATION,
                    PARAM_TEMPERATURE,
                    PARAM_HUMIDITY,
                    PARAM_SOIL_MOISTURE,
                ]
                .join(","),
            ),
            ("community", "AG".to_string()),
            ("latitude", format!("{:.4}", location.latitude)),
            ("longitude", format!("{:.4}", location.longitude)),
            ("start", start.format("%Y%m%d").to_string()),
            ("end", today.format("%Y%m%d").to_string()),
            ("format", "JSON".to_string()),
        ]
    }
}

impl IObservationSource for NasaPowerSource {
    fn name(&self) -> &str {
        NAME
    }

    fn observe(&self, location: &Location) -> AquaResult<Option<Reading>> {
        let today = Utc::now().date_naive();
        let body = self
            .client
            .get_text(NAME, &self.base_url, &self.query(location, today))?;
        let sample = match parse(&body) {
            Ok(s) => s,
            Err(SourceError::NoData { .. }) => {
                tracing::debug!(provider = NAME, location = %location.id, "no usable day in window");
                return Ok(None);
            }
            Err(e) => return Err(e.into()),
        };
        Ok(sample.into_reading(location, self.policy))
    }
}
