#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use aquastress_core::errors::{AquaResult, SinkError, SourceError};
use aquastress_core::models::{
    Location, LocationRecord, Observation, Provider, Reading, StressAssessment, WaterLevelReading,
};
use aquastress_core::traits::{IObservationSource, IPresentationSink, IWaterLevelSource};
use aquastress_monitor::{Cancellable, CancellationToken};
use chrono::Utc;

/// Inputs scoring 95 (critical).
pub fn hot_dry() -> Observation {
    Observation::new(0.0, 40.0, 10.0, 10.0)
}

/// Inputs scoring 33 (moderate).
pub fn mild_wet() -> Observation {
    Observation::new(50.0, 20.0, 70.0, 5.0)
}

pub fn loc(id: &str) -> Location {
    Location::new(id, format!("City {}", id.to_uppercase()), 35.0, -110.0, 2.0)
}

#[derive(Debug, Clone)]
pub enum Script {
    Reading(Observation),
    Decline,
    Fail,
}

/// Answers each location per a mutable script and records the call order.
#[derive(Default)]
pub struct ScriptedSource {
    scripts: Mutex<HashMap<String, Script>>,
    calls: Mutex<Vec<String>>,
    cancel_on: Mutex<Option<(String, CancellationToken)>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, id: &str, script: Script) {
        self.scripts.lock().unwrap().insert(id.to_string(), script);
    }

    /// Cancel `token` while observing `id`.
    pub fn cancel_during(&self, id: &str, token: CancellationToken) {
        *self.cancel_on.lock().unwrap() = Some((id.to_string(), token));
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl IObservationSource for ScriptedSource {
    fn name(&self) -> &str {
        "open_meteo"
    }

    fn observe(&self, location: &Location) -> AquaResult<Option<Reading>> {
        self.calls.lock().unwrap().push(location.id.clone());
        if let Some((id, token)) = self.cancel_on.lock().unwrap().as_ref() {
            if *id == location.id {
                token.cancel();
            }
        }

        let script = self.scripts.lock().unwrap().get(&location.id).cloned();
        match script.unwrap_or(Script::Decline) {
            Script::Reading(observation) => Ok(Some(Reading {
                location_id: location.id.clone(),
                provider: Provider::OpenMeteo,
                observed_at: Utc::now(),
                observation,
                soil_moisture: None,
            })),
            Script::Decline => Ok(None),
            Script::Fail => Err(SourceError::Network {
                provider: "open_meteo".to_string(),
                reason: "connection refused".to_string(),
            }
            .into()),
        }
    }
}

/// Reports a fixed level for every site.
pub struct FixedWaterLevels;

impl IWaterLevelSource for FixedWaterLevels {
    fn water_level(&self, site_code: &str) -> AquaResult<Option<WaterLevelReading>> {
        Ok(Some(WaterLevelReading {
            site_code: site_code.to_string(),
            site_name: "TEST GAUGE".to_string(),
            parameter_code: "00065".to_string(),
            unit: "ft".to_string(),
            value: 4.2,
            observed_at: Utc::now(),
        }))
    }
}

/// Fails every call.
pub struct BrokenSink;

impl IPresentationSink for BrokenSink {
    fn present(&self, _: &Location, _: &Reading, _: &StressAssessment) -> AquaResult<()> {
        Err(SinkError::Serialize {
            reason: "broken".to_string(),
        }
        .into())
    }

    fn flush(&self, _: &[LocationRecord]) -> AquaResult<()> {
        Err(SinkError::Io {
            path: "/dev/full".to_string(),
            reason: "no space".to_string(),
        }
        .into())
    }
}
