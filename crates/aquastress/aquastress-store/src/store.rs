//! Latest-value store with concurrent per-location access via DashMap.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use aquastress_core::models::{
    Location, LocationRecord, Reading, RecordStatus, StressAssessment, WaterLevelReading,
};
use chrono::{DateTime, Utc};
use dashmap::DashMap;

/// Thread-safe latest-value store keyed by location id.
///
/// Cloning shares the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct ReadingStore {
    records: Arc<DashMap<String, LocationRecord>>,
    /// Registration order, used to keep snapshots stable.
    order: Arc<DashMap<String, usize>>,
    /// Next rank to hand out. Ranks are never reused.
    next_rank: Arc<AtomicUsize>,
}

impl ReadingStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with every location registered as pending.
    pub fn with_locations(locations: &[Location]) -> Self {
        let store = Self::new();
        for location in locations {
            store.register(location.clone());
        }
        store
    }

    /// Register a location. Re-registering keeps existing readings but
    /// replaces the location metadata.
    pub fn register(&self, location: Location) {
        // The entry guard holds the shard lock, so a rank is drawn at most
        // once per id even under concurrent registration.
        self.order
            .entry(location.id.clone())
            .or_insert_with(|| self.next_rank.fetch_add(1, Ordering::Relaxed));
        self.records
            .entry(location.id.clone())
            .and_modify(|r| r.location = location.clone())
            .or_insert_with(|| LocationRecord::new(location));
    }

    /// Store a fresh reading and its assessment. Returns false for an
    /// unregistered location.
    pub fn record_assessment(
        &self,
        reading: Reading,
        assessment: StressAssessment,
        at: DateTime<Utc>,
    ) -> bool {
        match self.records.get_mut(&reading.location_id) {
            Some(mut entry) => {
                entry.latest_reading = Some(reading);
                entry.latest_assessment = Some(assessment);
                entry.status = RecordStatus::Fresh;
                entry.updated_at = Some(at);
                entry.consecutive_failures = 0;
                true
            }
            None => false,
        }
    }

    /// Flag a location as unavailable this cycle. The previous assessment
    /// is kept but becomes stale.
    pub fn mark_unavailable(&self, location_id: &str, at: DateTime<Utc>) -> bool {
        match self.records.get_mut(location_id) {
            Some(mut entry) => {
                entry.status = RecordStatus::Unavailable;
                entry.updated_at = Some(at);
                entry.consecutive_failures += 1;
                true
            }
            None => false,
        }
    }

    pub fn record_water_level(&self, location_id: &str, level: WaterLevelReading) -> bool {
        match self.records.get_mut(location_id) {
            Some(mut entry) => {
                entry.water_level = Some(level);
                true
            }
            None => false,
        }
    }

    /// Get a record by id (cloned snapshot).
    pub fn get(&self, location_id: &str) -> Option<LocationRecord> {
        self.records.get(location_id).map(|r| r.clone())
    }

    /// Registration position of `id`, starting at 0.
    pub fn rank(&self, id: &str) -> Option<usize> {
        self.order.get(id).map(|o| *o)
    }

    /// All records in registration order.
    pub fn snapshot(&self) -> Vec<LocationRecord> {
        let mut records: Vec<(usize, LocationRecord)> = self
            .records
            .iter()
            .map(|r| {
                let rank = self.order.get(r.key()).map(|o| *o).unwrap_or(usize::MAX);
                (rank, r.value().clone())
            })
            .collect();
        records.sort_by_key(|(rank, _)| *rank);
        records.into_iter().map(|(_, r)| r).collect()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records whose latest poll succeeded.
    pub fn fresh_count(&self) -> usize {
        self.records
            .iter()
            .filter(|r| r.status == RecordStatus::Fresh)
            .count()
    }
}
