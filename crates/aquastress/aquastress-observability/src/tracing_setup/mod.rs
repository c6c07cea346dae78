//! Tracing setup: subscriber initialization, span macros and named events.

pub mod events;
pub mod spans;

use aquastress_core::config::ObservabilityConfig;
use tracing_subscriber::EnvFilter;

/// Environment variable holding a filter directive, e.g.
/// `AQUASTRESS_LOG=aquastress_sources=debug,info`.
pub const LOG_ENV_VAR: &str = "AQUASTRESS_LOG";

/// Initialize the global subscriber.
///
/// `AQUASTRESS_LOG` wins over `config.log_level`. Returns false when a
/// subscriber was already installed, so repeated calls are harmless.
pub fn init_tracing(config: &ObservabilityConfig) -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV_VAR)
        .unwrap_or_else(|_| filter_from_level(&config.log_level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    if config.json_logs {
        builder
            .json()
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .try_init()
            .is_ok()
    } else {
        builder.compact().try_init().is_ok()
    }
}

/// Build a filter from a level string, falling back to `info` when the
/// string is not a valid directive.
pub fn filter_from_level(level: &str) -> EnvFilter {
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}
