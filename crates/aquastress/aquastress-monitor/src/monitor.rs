//! One polling cycle: observe, score, store, present.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use aquastress_core::errors::{AquaError, AquaResult};
use aquastress_core::models::{Location, Reading, StressAssessment};
use aquastress_core::traits::{
    IObservationSource, IPresentationSink, IStressScorer, IWaterLevelSource, ProviderOutcome,
};
use aquastress_observability::metrics::{CycleSample, MetricsCollector};
use aquastress_observability::tracing_setup::events;
use aquastress_observability::{cycle_span, location_span};
use aquastress_scoring::StressEngine;
use aquastress_store::ReadingStore;
use chrono::Utc;
use serde::Serialize;

use crate::cancellation::{Cancellable, CancellationToken};

/// A non-fatal failure recorded during a cycle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CycleError {
    /// Location being processed, `None` for end-of-cycle failures.
    pub location_id: Option<String>,
    /// Provider or sink that failed.
    pub origin: String,
    pub message: String,
}

/// Summary of one completed cycle.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub scored: usize,
    pub unavailable: usize,
    pub errors: Vec<CycleError>,
    pub duration: Duration,
}

impl CycleReport {
    fn push_error(&mut self, location_id: Option<&str>, origin: &str, message: String) {
        self.errors.push(CycleError {
            location_id: location_id.map(str::to_string),
            origin: origin.to_string(),
            message,
        });
    }
}

/// Composes a source, scorer, store and sinks over a fixed location list.
pub struct Monitor {
    locations: Vec<Location>,
    source: Box<dyn IObservationSource>,
    water_levels: Option<Box<dyn IWaterLevelSource>>,
    scorer: Box<dyn IStressScorer>,
    store: ReadingStore,
    sinks: Vec<Box<dyn IPresentationSink>>,
    request_delay: Duration,
    metrics: Mutex<MetricsCollector>,
    cycles: AtomicU64,
}

impl Monitor {
    /// Monitor with the default engine, a fresh store, no sinks and no delay.
    pub fn new(locations: Vec<Location>, source: Box<dyn IObservationSource>) -> Self {
        let store = ReadingStore::with_locations(&locations);
        Self {
            locations,
            source,
            water_levels: None,
            scorer: Box::new(StressEngine::new()),
            store,
            sinks: Vec::new(),
            request_delay: Duration::ZERO,
            metrics: Mutex::new(MetricsCollector::new()),
            cycles: AtomicU64::new(0),
        }
    }

    pub fn with_water_levels(mut self, source: Box<dyn IWaterLevelSource>) -> Self {
        self.water_levels = Some(source);
        self
    }

    pub fn with_scorer(mut self, scorer: Box<dyn IStressScorer>) -> Self {
        self.scorer = scorer;
        self
    }

    /// Use a caller-owned store. The monitored locations are registered in it.
    pub fn with_store(mut self, store: ReadingStore) -> Self {
        for location in &self.locations {
            store.register(location.clone());
        }
        self.store = store;
        self
    }

    pub fn with_sink(mut self, sink: Box<dyn IPresentationSink>) -> Self {
        self.sinks.push(sink);
        self
    }

    /// Pause between consecutive locations within a cycle.
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn store(&self) -> &ReadingStore {
        &self.store
    }

    /// Snapshot of the collected metrics.
    pub fn metrics(&self) -> MetricsCollector {
        self.lock_metrics().clone()
    }

    /// Number of cycles started so far.
    pub fn cycles_started(&self) -> u64 {
        self.cycles.load(Ordering::Relaxed)
    }

    /// Run one cycle over every location, in order.
    ///
    /// Per-location failures are collected in the report and never abort the
    /// cycle. Returns `AquaError::Cancelled` if `token` is cancelled before a
    /// location is started; the location in flight always completes.
    pub fn run_cycle(&self, token: &CancellationToken) -> AquaResult<CycleReport> {
        let cycle = self.cycles.fetch_add(1, Ordering::Relaxed) + 1;
        let span = cycle_span!(cycle, self.locations.len());
        let _guard = span.enter();

        let started = Instant::now();
        let mut report = CycleReport {
            cycle,
            ..CycleReport::default()
        };
        let mut indices = Vec::with_capacity(self.locations.len());

        for (i, location) in self.locations.iter().enumerate() {
            if token.is_cancelled() {
                return Err(self.cancelled());
            }
            if i > 0
                && !self.request_delay.is_zero()
                && token.sleep_unless_cancelled(self.request_delay)
            {
                return Err(self.cancelled());
            }

            let span = location_span!(location.id);
            let _guard = span.enter();
            if let Some(assessment) = self.poll_location(location, &mut report) {
                indices.push(assessment.index.value());
            }
            self.poll_water_level(location, &mut report);
        }

        let snapshot = self.store.snapshot();
        for (i, sink) in self.sinks.iter().enumerate() {
            if let Err(e) = sink.flush(&snapshot) {
                let origin = format!("sink#{i}");
                events::sink_failed(&origin, &e.to_string());
                report.push_error(None, &origin, e.to_string());
            }
        }

        report.duration = started.elapsed();
        self.lock_metrics().cycles.record(&CycleSample {
            scored: report.scored,
            unavailable: report.unavailable,
            errors: report.errors.len(),
            duration: report.duration,
            indices,
            completed_at: Some(Utc::now()),
        });
        events::cycle_completed(
            report.scored,
            report.unavailable,
            report.errors.len(),
            u64::try_from(report.duration.as_millis()).unwrap_or(u64::MAX),
        );
        Ok(report)
    }

    fn poll_location(
        &self,
        location: &Location,
        report: &mut CycleReport,
    ) -> Option<StressAssessment> {
        let mut outcomes: Vec<(String, ProviderOutcome)> = Vec::new();
        let result = self
            .source
            .observe_reporting(location, &mut |name, outcome| {
                outcomes.push((name.to_string(), outcome));
            });
        self.record_outcomes(&outcomes);

        match result {
            Ok(Some(reading)) => {
                events::observation_fetched(&reading);
                let assessment = self.scorer.score(&reading.observation);
                events::assessment_computed(&location.id, &assessment);
                self.store
                    .record_assessment(reading.clone(), assessment, Utc::now());
                self.present(location, &reading, &assessment, report);
                report.scored += 1;
                Some(assessment)
            }
            Ok(None) => {
                self.mark_unavailable(location, report);
                None
            }
            Err(e) => {
                let origin = match &e {
                    AquaError::Source(source_err) => source_err.provider().to_string(),
                    _ => self.source.name().to_string(),
                };
                events::source_failed(&location.id, &origin, &e.to_string());
                report.push_error(Some(&location.id), &origin, e.to_string());
                self.mark_unavailable(location, report);
                None
            }
        }
    }

    /// Provider counters are keyed by the name each provider reports.
    fn record_outcomes(&self, outcomes: &[(String, ProviderOutcome)]) {
        let mut metrics = self.lock_metrics();
        for (name, outcome) in outcomes {
            match outcome {
                ProviderOutcome::Observed => metrics.sources.record_success(name),
                ProviderOutcome::Declined => metrics.sources.record_decline(name),
                ProviderOutcome::Failed => metrics.sources.record_failure(name),
            }
        }
    }

    fn present(
        &self,
        location: &Location,
        reading: &Reading,
        assessment: &StressAssessment,
        report: &mut CycleReport,
    ) {
        for (i, sink) in self.sinks.iter().enumerate() {
            if let Err(e) = sink.present(location, reading, assessment) {
                let origin = format!("sink#{i}");
                events::sink_failed(&origin, &e.to_string());
                report.push_error(Some(&location.id), &origin, e.to_string());
            }
        }
    }

    fn mark_unavailable(&self, location: &Location, report: &mut CycleReport) {
        self.store.mark_unavailable(&location.id, Utc::now());
        let failures = self
            .store
            .get(&location.id)
            .map_or(0, |r| r.consecutive_failures);
        events::observation_unavailable(&location.id, failures);
        report.unavailable += 1;

        for (i, sink) in self.sinks.iter().enumerate() {
            if let Err(e) = sink.present_unavailable(location) {
                let origin = format!("sink#{i}");
                events::sink_failed(&origin, &e.to_string());
                report.push_error(Some(&location.id), &origin, e.to_string());
            }
        }
    }

    /// Water levels are display-only; failures are recorded but do not
    /// affect the location's status.
    fn poll_water_level(&self, location: &Location, report: &mut CycleReport) {
        let (Some(source), Some(site)) = (&self.water_levels, &location.usgs_site) else {
            return;
        };
        match source.water_level(site) {
            Ok(Some(level)) => {
                events::water_level_fetched(&location.id, &level);
                self.store.record_water_level(&location.id, level);
            }
            Ok(None) => {}
            Err(e) => {
                let origin = match &e {
                    AquaError::Source(source_err) => source_err.provider().to_string(),
                    _ => "water_levels".to_string(),
                };
                events::source_failed(&location.id, &origin, &e.to_string());
                report.push_error(Some(&location.id), &origin, e.to_string());
            }
        }
    }

    fn cancelled(&self) -> AquaError {
        self.lock_metrics().cycles.record_cancelled();
        AquaError::Cancelled
    }

    fn lock_metrics(&self) -> MutexGuard<'_, MetricsCollector> {
        self.metrics.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
