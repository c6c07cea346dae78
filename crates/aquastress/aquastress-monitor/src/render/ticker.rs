use std::cmp::Ordering;

use aquastress_core::models::{LocationRecord, RecordStatus};

const SEPARATOR: &str = " • ";

/// Single-line summary: `"<name> <index> <LEVEL>"` per location, joined by
/// `" • "`, most stressed first. Locations without a fresh assessment render
/// as `"<name> n/a"` after the scored ones, in snapshot order.
pub fn ticker_line(records: &[LocationRecord]) -> String {
    let mut scored: Vec<(&LocationRecord, f64)> = Vec::new();
    let mut missing: Vec<&LocationRecord> = Vec::new();

    for record in records {
        match (&record.latest_assessment, record.status) {
            (Some(a), RecordStatus::Fresh) => scored.push((record, a.index.value())),
            _ => missing.push(record),
        }
    }
    // Stable sort keeps snapshot order among equal indices.
    scored.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));

    scored
        .into_iter()
        .map(|(record, _)| ticker_item(record))
        .chain(missing.into_iter().map(ticker_item))
        .collect::<Vec<_>>()
        .join(SEPARATOR)
}

fn ticker_item(record: &LocationRecord) -> String {
    match (&record.latest_assessment, record.status) {
        (Some(a), RecordStatus::Fresh) => format!(
            "{} {} {}",
            record.location.name,
            a.index,
            a.severity.label().to_uppercase()
        ),
        _ => format!("{} n/a", record.location.name),
    }
}
