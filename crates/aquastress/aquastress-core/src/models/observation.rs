use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::location::Location;

/// The four scoring inputs for one location.
///
/// Constructed fresh per scoring call and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    pub precipitation_mm_per_day: f64,
    pub temperature_celsius: f64,
    /// Relative humidity in percent, clamped to [0, 100].
    pub relative_humidity_percent: f64,
    pub population_millions: f64,
}

impl Observation {
    pub fn new(
        precipitation_mm_per_day: f64,
        temperature_celsius: f64,
        relative_humidity_percent: f64,
        population_millions: f64,
    ) -> Self {
        Self {
            precipitation_mm_per_day,
            temperature_celsius,
            relative_humidity_percent: relative_humidity_percent.clamp(0.0, 100.0),
            population_millions,
        }
    }
}

/// Upstream data provider that produced a sample.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Provider {
    OpenMeteo,
    NasaPower,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::OpenMeteo => "open_meteo",
            Provider::NasaPower => "nasa_power",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What to do when a provider omits precipitation or humidity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingDataPolicy {
    /// Report the location as unavailable and do not score it.
    #[default]
    Skip,
    /// Substitute zero for the missing field and score anyway.
    TreatAsZero,
}

/// Fields exactly as one provider reported them for one time window.
///
/// Any field may be absent. A sample never mixes providers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawSample {
    pub provider: Provider,
    pub observed_at: DateTime<Utc>,
    pub precipitation_mm: Option<f64>,
    pub temperature_c: Option<f64>,
    pub humidity_pct: Option<f64>,
    /// Root-zone soil wetness (0..1), NASA POWER only.
    pub soil_moisture: Option<f64>,
}

impl RawSample {
    pub fn new(provider: Provider, observed_at: DateTime<Utc>) -> Self {
        Self {
            provider,
            observed_at,
            precipitation_mm: None,
            temperature_c: None,
            humidity_pct: None,
            soil_moisture: None,
        }
    }

    /// Turn the sample into a complete reading for `location`.
    ///
    /// Returns `None` when the sample cannot be scored under `policy`.
    /// Temperature is never substituted.
    pub fn into_reading(self, location: &Location, policy: MissingDataPolicy) -> Option<Reading> {
        let temperature = finite(self.temperature_c)?;
        let fill = |v: Option<f64>| match (finite(v), policy) {
            (Some(v), _) => Some(v),
            (None, MissingDataPolicy::TreatAsZero) => Some(0.0),
            (None, MissingDataPolicy::Skip) => None,
        };
        let precipitation = fill(self.precipitation_mm)?;
        let humidity = fill(self.humidity_pct)?;

        Some(Reading {
            location_id: location.id.clone(),
            provider: self.provider,
            observed_at: self.observed_at,
            observation: Observation::new(
                precipitation.max(0.0),
                temperature,
                humidity,
                location.population_millions,
            ),
            soil_moisture: finite(self.soil_moisture),
        })
    }
}

fn finite(v: Option<f64>) -> Option<f64> {
    v.filter(|x| x.is_finite())
}

/// A complete observation for one location from one provider and window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Reading {
    pub location_id: String,
    pub provider: Provider,
    pub observed_at: DateTime<Utc>,
    pub observation: Observation,
    pub soil_moisture: Option<f64>,
}
