//! GeoJSON map markers.

use aquastress_core::models::LocationRecord;
use serde_json::{json, Value};

use super::NO_DATA_COLOR;

/// A `FeatureCollection` with one `Point` per location.
/// Coordinates follow GeoJSON order: `[longitude, latitude]`.
pub fn build_markers(records: &[LocationRecord]) -> Value {
    let features: Vec<Value> = records.iter().map(marker).collect();
    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn marker(record: &LocationRecord) -> Value {
    let assessment = record.latest_assessment.as_ref();
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [record.location.longitude, record.location.latitude],
        },
        "properties": {
            "id": record.location.id,
            "name": record.location.name,
            "index": assessment.map(|a| a.index.value()),
            "severity": assessment.map(|a| a.severity.label()),
            "color": assessment.map_or(NO_DATA_COLOR, |a| a.severity_color()),
            "stale": record.is_stale(),
        },
    })
}
