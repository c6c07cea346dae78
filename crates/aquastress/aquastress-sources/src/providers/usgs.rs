//! USGS NWIS instantaneous values: latest gauge water level for a site.

use std::sync::Arc;

use aquastress_core::constants::USGS_NO_DATA_VALUE;
use aquastress_core::errors::{AquaResult, SourceError};
use aquastress_core::models::WaterLevelReading;
use aquastress_core::traits::IWaterLevelSource;
use chrono::{DateTime, Utc};
use serde::Deserialize;

use super::parse_err;
use crate::transport::HttpClient;

const NAME: &str = "usgs";

#[derive(Debug, Deserialize)]
struct IvResponse {
    value: IvValue,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct IvValue {
    #[serde(default)]
    time_series: Vec<TimeSeries>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TimeSeries {
    source_info: SourceInfo,
    variable: Variable,
    #[serde(default)]
    values: Vec<ValueBlock>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SourceInfo {
    site_name: String,
    #[serde(default)]
    site_code: Vec<Code>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Variable {
    #[serde(default)]
    variable_code: Vec<Code>,
    unit: Unit,
    no_data_value: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct Code {
    value: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Unit {
    unit_code: String,
}

#[derive(Debug, Deserialize)]
struct ValueBlock {
    #[serde(default)]
    value: Vec<Point>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Point {
    value: String,
    date_time: String,
}

/// Parse an IV response and return the newest valid value for
/// `site_code` / `parameter_code`.
///
/// `Ok(None)` when the site reports the parameter but every value is the
/// no-data sentinel or unparseable.
pub fn parse(
    body: &str,
    site_code: &str,
    parameter_code: &str,
) -> Result<Option<WaterLevelReading>, SourceError> {
    let resp: IvResponse =
        serde_json::from_str(body).map_err(|e| parse_err(NAME, e.to_string()))?;

    let series = resp
        .value
        .time_series
        .into_iter()
        .find(|ts| {
            ts.source_info.site_code.iter().any(|c| c.value == site_code)
                && ts.variable.variable_code.iter().any(|c| c.value == parameter_code)
        })
        .ok_or_else(|| SourceError::NoData {
            provider: NAME.to_string(),
            target: format!("site {site_code} parameter {parameter_code}"),
        })?;

    let sentinel = series.variable.no_data_value.unwrap_or(USGS_NO_DATA_VALUE);
    let newest = series
        .values
        .iter()
        .flat_map(|block| block.value.iter())
        .filter_map(|p| {
            let value: f64 = p.value.trim().parse().ok()?;
            if !value.is_finite() || (value - sentinel).abs() < f64::EPSILON {
                return None;
            }
            let at = DateTime::parse_from_rfc3339(&p.date_time).ok()?;
            Some((at.with_timezone(&Utc), value))
        })
        .max_by_key(|(at, _)| *at);

    Ok(newest.map(|(observed_at, value)| WaterLevelReading {
        site_code: site_code.to_string(),
        site_name: series.source_info.site_name.clone(),
        parameter_code: parameter_code.to_string(),
        unit: series.variable.unit.unit_code.clone(),
        value,
        observed_at,
    }))
}

/// Water-level source backed by USGS NWIS.
pub struct UsgsWaterLevelSource {
    client: Arc<HttpClient>,
    base_url: String,
    parameter_code: String,
}

impl UsgsWaterLevelSource {
    pub fn new(
        client: Arc<HttpClient>,
        base_url: impl Into<String>,
        parameter_code: impl Into<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            parameter_code: parameter_code.into(),
        }
    }

    pub fn query(&self, site_code: &str) -> Vec<(&'static str, String)> {
        vec![
            ("format", "json".to_string()),
            ("sites", site_code.to_string()),
            ("parameterCd", self.parameter_code.clone()),
            ("siteStatus", "all".to_string()),
        ]
    }
}

impl IWaterLevelSource for UsgsWaterLevelSource {
    fn water_level(&self, site_code: &str) -> AquaResult<Option<WaterLevelReading>> {
        let body = self
            .client
            .get_text(NAME, &self.base_url, &self.query(site_code))?;
        match parse(&body, site_code, &self.parameter_code) {
            Ok(reading) => Ok(reading),
            Err(SourceError::NoData { .. }) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
      "name": "ns1:timeSeriesResponseType",
      "value": {
        "queryInfo": {"queryURL": "http://waterservices.usgs.gov/nwis/iv/"},
        "timeSeries": [{
          "sourceInfo": {
            "siteName": "COLORADO RIVER BELOW HOOVER DAM, AZ-NV",
            "siteCode": [{"value": "09421500", "network": "NWIS", "agencyCode": "USGS"}]
          },
          "variable": {
            "variableCode": [{"value": "00065", "network": "NWIS"}],
            "variableName": "Gage height, ft",
            "unit": {"unitCode": "ft"},
            "noDataValue": -999999.0
          },
          "values": [{
            "value": [
              {"value": "8.41", "qualifiers": ["P"], "dateTime": "2024-07-01T11:45:00.000-07:00"},
              {"value": "8.47", "qualifiers": ["P"], "dateTime": "2024-07-01T12:00:00.000-07:00"},
              {"value": "-999999", "qualifiers": ["P", "Eqp"], "dateTime": "2024-07-01T12:15:00.000-07:00"}
            ]
          }]
        }]
      }
    }"#;

    #[test]
    fn newest_non_sentinel_value_wins() {
        let r = parse(FIXTURE, "09421500", "00065").unwrap().unwrap();
        assert_eq!(r.value, 8.47);
        assert_eq!(r.unit, "ft");
        assert_eq!(r.site_name, "COLORADO RIVER BELOW HOOVER DAM, AZ-NV");
        assert_eq!(r.observed_at.to_rfc3339(), "2024-07-01T19:00:00+00:00");
    }

    #[test]
    fn unknown_site_is_no_data() {
        let err = parse(FIXTURE, "00000000", "00065").unwrap_err();
        assert!(matches!(err, SourceError::NoData { .. }));
    }

    #[test]
    fn only_sentinels_yields_none() {
        let body = FIXTURE
            .replace("\"8.41\"", "\"-999999\"")
            .replace("\"8.47\"", "\"-999999.00\"");
        assert!(parse(&body, "09421500", "00065").unwrap().is_none());
    }

    #[test]
    fn malformed_body_is_a_parse_error() {
        assert!(matches!(
            parse("<html>", "09421500", "00065"),
            Err(SourceError::Parse { .. })
        ));
    }
}
