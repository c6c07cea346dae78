use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context, Result};
use aquastress_core::config::AquaConfig;
use aquastress_core::models::Observation;
use aquastress_monitor::cli::{Cli, Commands};
use aquastress_monitor::render::breakdown_report;
use aquastress_monitor::{build_monitor, CancellationToken, RefreshScheduler};
use aquastress_observability::init_tracing;
use aquastress_scoring::StressEngine;
use clap::Parser;

// The blocking HTTP client must be created and dropped outside the async
// runtime, so main stays synchronous and only `watch` starts a runtime.
fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Commands::Score {
        precipitation,
        temperature,
        humidity,
        population,
        json,
    } = cli.command
    {
        return score(precipitation, temperature, humidity, population, json);
    }

    let config = AquaConfig::load(cli.config.as_deref(), Some(&cli.overrides()))
        .context("loading configuration")?;
    init_tracing(&config.observability);

    match cli.command {
        Commands::Once => once(&config),
        Commands::Watch { .. } => watch(&config),
        Commands::Score { .. } => Ok(()),
    }
}

fn score(
    precipitation: f64,
    temperature: f64,
    humidity: f64,
    population: f64,
    json: bool,
) -> Result<()> {
    let observation = Observation::new(precipitation, temperature, humidity, population);
    let breakdown = StressEngine::new().breakdown(&observation);

    if json {
        println!("{}", serde_json::to_string_pretty(&breakdown)?);
        return Ok(());
    }

    print!("{}", breakdown_report(&breakdown));
    Ok(())
}

fn once(config: &AquaConfig) -> Result<()> {
    let monitor = build_monitor(config)?;
    let report = monitor.run_cycle(&CancellationToken::new())?;
    for error in &report.errors {
        tracing::warn!(location = ?error.location_id, origin = %error.origin, "{}", error.message);
    }
    tracing::info!(
        scored = report.scored,
        unavailable = report.unavailable,
        errors = report.errors.len(),
        "cycle finished"
    );
    Ok(())
}

fn watch(config: &AquaConfig) -> Result<()> {
    let monitor = Arc::new(build_monitor(config)?);
    let interval = Duration::from_secs(config.polling.refresh_interval_secs);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("starting tokio runtime")?;

    let completed = runtime.block_on(async {
        let handle =
            RefreshScheduler::spawn(Arc::clone(&monitor), interval, CancellationToken::new());
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "cannot listen for Ctrl-C; stopping");
        }
        handle.cancel();
        handle.join().await
    })?;

    drop(runtime);
    tracing::info!(cycles = completed, "stopped");
    Ok(())
}
