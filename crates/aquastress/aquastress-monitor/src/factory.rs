//! Wire a `Monitor` from configuration.

use std::time::Duration;

use aquastress_core::config::AquaConfig;
use aquastress_core::errors::AquaResult;
use aquastress_sources::{build_client, build_observation_source, build_water_level_source};

use crate::monitor::Monitor;
use crate::sinks::{DashboardFileSink, TickerSink};

/// Build the production monitor: configured provider chain, optional USGS
/// water levels, ticker and dashboard sinks per `[output]`.
///
/// Creates a blocking HTTP client; call from outside an async context.
pub fn build_monitor(config: &AquaConfig) -> AquaResult<Monitor> {
    let client = build_client(&config.sources)?;
    let source = build_observation_source(
        &config.sources,
        config.polling.missing_data,
        client.clone(),
    );
    tracing::debug!(providers = ?source.names(), "observation chain built");

    let mut monitor = Monitor::new(config.locations(), Box::new(source))
        .with_request_delay(Duration::from_millis(config.polling.request_delay_ms));

    if let Some(levels) = build_water_level_source(&config.sources, client) {
        monitor = monitor.with_water_levels(Box::new(levels));
    }
    if config.output.ticker {
        monitor = monitor.with_sink(Box::new(TickerSink::stdout()));
    }
    if let Some(path) = &config.output.dashboard_path {
        monitor = monitor.with_sink(Box::new(DashboardFileSink::new(path)));
    }
    Ok(monitor)
}
