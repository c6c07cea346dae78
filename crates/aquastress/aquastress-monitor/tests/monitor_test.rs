mod common;

use std::sync::Arc;
use std::time::{Duration, Instant};

use aquastress_core::errors::{AquaError, AquaResult, SourceError};
use aquastress_core::models::{Location, Provider, Reading, RecordStatus, SeverityLevel};
use aquastress_core::traits::IObservationSource;
use aquastress_monitor::sinks::MemorySink;
use aquastress_monitor::{CancellationToken, Monitor};
use aquastress_sources::FallbackSource;
use aquastress_store::ReadingStore;
use common::{hot_dry, loc, mild_wet, BrokenSink, FixedWaterLevels, Script, ScriptedSource};

fn monitor_with(source: &Arc<ScriptedSource>, sink: &Arc<MemorySink>, ids: &[&str]) -> Monitor {
    Monitor::new(ids.iter().map(|id| loc(id)).collect(), Box::new(Arc::clone(source)))
        .with_sink(Box::new(Arc::clone(sink)))
}

// ── Cycle outcomes ──────────────────────────────────────────────────────

#[test]
fn cycle_scores_available_and_marks_the_rest_unavailable() {
    let source = Arc::new(ScriptedSource::new());
    source.set("a", Script::Reading(hot_dry()));
    source.set("b", Script::Decline);
    source.set("c", Script::Fail);
    let sink = Arc::new(MemorySink::new());
    let monitor = monitor_with(&source, &sink, &["a", "b", "c"]);

    let report = monitor.run_cycle(&CancellationToken::new()).unwrap();

    assert_eq!(report.cycle, 1);
    assert_eq!(report.scored, 1);
    assert_eq!(report.unavailable, 2);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].location_id.as_deref(), Some("c"));
    assert_eq!(report.errors[0].origin, "open_meteo");

    let presented = sink.presented();
    assert_eq!(presented.len(), 1);
    assert_eq!(presented[0].0, "a");
    assert_eq!(presented[0].1.severity, SeverityLevel::Critical);
    assert_eq!(sink.unavailable(), vec!["b".to_string(), "c".to_string()]);

    assert_eq!(sink.flush_count(), 1);
    let snapshot = sink.last_snapshot().unwrap();
    let ids: Vec<&str> = snapshot.iter().map(|r| r.location.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b", "c"]);

    let store = monitor.store();
    assert_eq!(store.get("a").unwrap().status, RecordStatus::Fresh);
    assert_eq!(store.get("b").unwrap().status, RecordStatus::Unavailable);
    assert_eq!(store.get("c").unwrap().status, RecordStatus::Unavailable);
}

#[test]
fn locations_are_polled_sequentially_in_order() {
    let source = Arc::new(ScriptedSource::new());
    let sink = Arc::new(MemorySink::new());
    let monitor = monitor_with(&source, &sink, &["x", "y", "z"]);

    monitor.run_cycle(&CancellationToken::new()).unwrap();
    assert_eq!(source.calls(), vec!["x", "y", "z"]);
}

#[test]
fn request_delay_separates_locations() {
    let source = Arc::new(ScriptedSource::new());
    let sink = Arc::new(MemorySink::new());
    let monitor =
        monitor_with(&source, &sink, &["a", "b", "c"]).with_request_delay(Duration::from_millis(30));

    let start = Instant::now();
    monitor.run_cycle(&CancellationToken::new()).unwrap();
    assert!(start.elapsed() >= Duration::from_millis(60));
}

#[test]
fn unavailable_location_keeps_stale_assessment() {
    let source = Arc::new(ScriptedSource::new());
    source.set("a", Script::Reading(mild_wet()));
    let sink = Arc::new(MemorySink::new());
    let monitor = monitor_with(&source, &sink, &["a"]);

    monitor.run_cycle(&CancellationToken::new()).unwrap();
    source.set("a", Script::Decline);
    monitor.run_cycle(&CancellationToken::new()).unwrap();

    let record = monitor.store().get("a").unwrap();
    assert_eq!(record.status, RecordStatus::Unavailable);
    assert!(record.is_stale());
    assert_eq!(record.consecutive_failures, 1);
    assert_eq!(record.latest_assessment.unwrap().severity, SeverityLevel::Moderate);
}

// ── Failures never abort a cycle ────────────────────────────────────────

#[test]
fn sink_failures_are_reported_and_other_sinks_still_run() {
    let source = Arc::new(ScriptedSource::new());
    source.set("a", Script::Reading(hot_dry()));
    let sink = Arc::new(MemorySink::new());
    let monitor = Monitor::new(vec![loc("a"), loc("b")], Box::new(Arc::clone(&source)))
        .with_sink(Box::new(BrokenSink))
        .with_sink(Box::new(Arc::clone(&sink)));

    let report = monitor.run_cycle(&CancellationToken::new()).unwrap();

    // One failed present for "a", one failed flush.
    assert_eq!(report.errors.len(), 2);
    assert!(report.errors.iter().all(|e| e.origin == "sink#0"));
    assert_eq!(report.errors[1].location_id, None);
    assert_eq!(sink.presented().len(), 1);
    assert_eq!(sink.flush_count(), 1);
}

#[test]
fn every_location_failing_still_completes_the_cycle() {
    let source = Arc::new(ScriptedSource::new());
    for id in ["a", "b"] {
        source.set(id, Script::Fail);
    }
    let sink = Arc::new(MemorySink::new());
    let monitor = monitor_with(&source, &sink, &["a", "b"]);

    let report = monitor.run_cycle(&CancellationToken::new()).unwrap();
    assert_eq!(report.scored, 0);
    assert_eq!(report.unavailable, 2);
    assert_eq!(report.errors.len(), 2);
    assert_eq!(sink.flush_count(), 1);
}

// ── Cancellation ────────────────────────────────────────────────────────

#[test]
fn cancelled_token_stops_before_first_location() {
    let source = Arc::new(ScriptedSource::new());
    let sink = Arc::new(MemorySink::new());
    let monitor = monitor_with(&source, &sink, &["a", "b"]);
    let token = CancellationToken::new();
    aquastress_monitor::Cancellable::cancel(&token);

    let result = monitor.run_cycle(&token);

    assert!(matches!(result, Err(AquaError::Cancelled)));
    assert!(source.calls().is_empty());
    assert_eq!(sink.flush_count(), 0);
    assert_eq!(monitor.metrics().cycles.cancelled, 1);
}

#[test]
fn cancellation_mid_cycle_finishes_current_location_only() {
    let source = Arc::new(ScriptedSource::new());
    for id in ["a", "b", "c"] {
        source.set(id, Script::Reading(mild_wet()));
    }
    let token = CancellationToken::new();
    source.cancel_during("b", token.clone());
    let sink = Arc::new(MemorySink::new());
    let monitor = monitor_with(&source, &sink, &["a", "b", "c"]);

    let result = monitor.run_cycle(&token);

    assert!(matches!(result, Err(AquaError::Cancelled)));
    assert_eq!(source.calls(), vec!["a", "b"]);
    assert_eq!(monitor.store().get("b").unwrap().status, RecordStatus::Fresh);
    assert_eq!(monitor.store().get("c").unwrap().status, RecordStatus::Pending);
}

#[test]
fn cancellation_interrupts_request_delay() {
    let source = Arc::new(ScriptedSource::new());
    let token = CancellationToken::new();
    source.cancel_during("a", token.clone());
    let sink = Arc::new(MemorySink::new());
    let monitor =
        monitor_with(&source, &sink, &["a", "b"]).with_request_delay(Duration::from_secs(30));

    let start = Instant::now();
    assert!(matches!(monitor.run_cycle(&token), Err(AquaError::Cancelled)));
    assert!(start.elapsed() < Duration::from_secs(5));
}

// ── Water levels, store, metrics ────────────────────────────────────────

#[test]
fn water_levels_attach_only_to_gauged_locations() {
    let source = Arc::new(ScriptedSource::new());
    let monitor = Monitor::new(
        vec![loc("a").with_usgs_site("09421500"), loc("b")],
        Box::new(Arc::clone(&source)),
    )
    .with_water_levels(Box::new(FixedWaterLevels));

    monitor.run_cycle(&CancellationToken::new()).unwrap();

    let a = monitor.store().get("a").unwrap();
    assert_eq!(a.water_level.unwrap().site_code, "09421500");
    // Water level does not make the location available.
    assert_eq!(a.status, RecordStatus::Unavailable);
    assert!(monitor.store().get("b").unwrap().water_level.is_none());
}

#[test]
fn external_store_receives_registrations_and_updates() {
    let store = ReadingStore::new();
    let source = Arc::new(ScriptedSource::new());
    source.set("a", Script::Reading(hot_dry()));
    let monitor =
        Monitor::new(vec![loc("a")], Box::new(Arc::clone(&source))).with_store(store.clone());

    monitor.run_cycle(&CancellationToken::new()).unwrap();
    assert_eq!(store.fresh_count(), 1);
}

#[test]
fn metrics_accumulate_across_cycles() {
    let source = Arc::new(ScriptedSource::new());
    source.set("a", Script::Reading(hot_dry()));
    source.set("b", Script::Fail);
    let sink = Arc::new(MemorySink::new());
    let monitor = monitor_with(&source, &sink, &["a", "b"]);

    monitor.run_cycle(&CancellationToken::new()).unwrap();
    monitor.run_cycle(&CancellationToken::new()).unwrap();

    let metrics = monitor.metrics();
    assert_eq!(monitor.cycles_started(), 2);
    assert_eq!(metrics.cycles.cycles, 2);
    assert_eq!(metrics.cycles.scored_total, 2);
    assert_eq!(metrics.cycles.unavailable_total, 2);
    let mean = metrics.cycles.last_mean_index.unwrap();
    assert!((mean - 95.0).abs() < 1e-9, "got {mean}");
    assert_eq!(metrics.sources.get("open_meteo").successes, 2);
    assert_eq!(metrics.sources.get("open_meteo").failures, 2);
}

/// Fixed behaviour under a fixed provider name.
struct NamedSource {
    name: &'static str,
    script: Script,
}

impl IObservationSource for NamedSource {
    fn name(&self) -> &str {
        self.name
    }

    fn observe(&self, location: &Location) -> AquaResult<Option<Reading>> {
        match &self.script {
            Script::Reading(observation) => Ok(Some(Reading {
                location_id: location.id.clone(),
                provider: Provider::NasaPower,
                observed_at: chrono::Utc::now(),
                observation: *observation,
                soil_moisture: None,
            })),
            Script::Decline => Ok(None),
            Script::Fail => Err(SourceError::Network {
                provider: self.name.to_string(),
                reason: "timeout".to_string(),
            }
            .into()),
        }
    }
}

#[test]
fn provider_metrics_use_each_chain_members_own_name() {
    let chain = FallbackSource::new(vec![
        Box::new(NamedSource { name: "open_meteo", script: Script::Fail }),
        Box::new(NamedSource { name: "nasa_power", script: Script::Decline }),
    ]);
    let sink = Arc::new(MemorySink::new());
    let monitor = Monitor::new(vec![loc("a")], Box::new(chain)).with_sink(Box::new(Arc::clone(&sink)));

    monitor.run_cycle(&CancellationToken::new()).unwrap();

    let metrics = monitor.metrics();
    assert_eq!(metrics.sources.get("open_meteo").failures, 1);
    assert_eq!(metrics.sources.get("nasa_power").declines, 1);
    assert_eq!(metrics.sources.get("fallback"), Default::default());
}

#[test]
fn chain_success_is_counted_once_under_the_answering_provider() {
    let chain = FallbackSource::new(vec![
        Box::new(NamedSource { name: "open_meteo", script: Script::Decline }),
        Box::new(NamedSource { name: "nasa_power", script: Script::Reading(hot_dry()) }),
    ]);
    let sink = Arc::new(MemorySink::new());
    let monitor = Monitor::new(vec![loc("a")], Box::new(chain)).with_sink(Box::new(Arc::clone(&sink)));

    monitor.run_cycle(&CancellationToken::new()).unwrap();

    let metrics = monitor.metrics();
    assert_eq!(metrics.sources.get("open_meteo").declines, 1);
    assert_eq!(metrics.sources.get("open_meteo").successes, 0);
    assert_eq!(metrics.sources.get("nasa_power").successes, 1);
}
