//! Configuration system for aquastress.
//! TOML-based, layered resolution: CLI > env > file > defaults.

pub mod aqua_config;
pub mod defaults;
pub mod observability_config;
pub mod output_config;
pub mod polling_config;
pub mod sources_config;

pub use aqua_config::{AquaConfig, CliOverrides};
pub use observability_config::ObservabilityConfig;
pub use output_config::OutputConfig;
pub use polling_config::PollingConfig;
pub use sources_config::SourcesConfig;
