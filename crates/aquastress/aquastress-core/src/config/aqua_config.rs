//! Top-level aquastress configuration with layered resolution.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ObservabilityConfig, OutputConfig, PollingConfig, SourcesConfig};
use crate::errors::ConfigError;
use crate::models::{default_locations, Location, MissingDataPolicy};

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`AQUASTRESS_*`)
/// 3. Config file (`--config` or `aquastress.toml` in the working directory)
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AquaConfig {
    pub sources: SourcesConfig,
    pub polling: PollingConfig,
    pub output: OutputConfig,
    pub observability: ObservabilityConfig,
    /// Monitored points. Empty means the built-in list.
    pub locations: Vec<Location>,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub dashboard_path: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub request_delay_ms: Option<u64>,
    pub log_level: Option<String>,
}

impl AquaConfig {
    /// Load configuration with layered resolution.
    ///
    /// An explicit `path` must exist. Without one, `aquastress.toml` in the
    /// working directory is used when present.
    pub fn load(path: Option<&Path>, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(p) => Self::from_file(p)?,
            None => {
                let implicit = Path::new(defaults::DEFAULT_CONFIG_FILENAME);
                if implicit.exists() {
                    Self::from_file(implicit)?
                } else {
                    Self::default()
                }
            }
        };

        config.apply_env_overrides(|key| std::env::var(key).ok())?;

        if let Some(cli) = cli {
            config.apply_cli_overrides(cli);
        }

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Read and parse a TOML file. Unknown keys are ignored.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Apply `AQUASTRESS_*` overrides read through `lookup`.
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(v) = lookup("AQUASTRESS_REQUEST_DELAY_MS") {
            self.polling.request_delay_ms = parse_env("AQUASTRESS_REQUEST_DELAY_MS", &v)?;
        }
        if let Some(v) = lookup("AQUASTRESS_REFRESH_INTERVAL_SECS") {
            self.polling.refresh_interval_secs =
                parse_env("AQUASTRESS_REFRESH_INTERVAL_SECS", &v)?;
        }
        if let Some(v) = lookup("AQUASTRESS_MISSING_DATA") {
            self.polling.missing_data = match v.as_str() {
                "skip" => MissingDataPolicy::Skip,
                "treat_as_zero" | "zero" => MissingDataPolicy::TreatAsZero,
                other => {
                    return Err(ConfigError::ValidationFailed {
                        field: "AQUASTRESS_MISSING_DATA".to_string(),
                        message: format!("expected \"skip\" or \"treat_as_zero\", got {other:?}"),
                    })
                }
            };
        }
        if let Some(v) = lookup("AQUASTRESS_DASHBOARD_PATH") {
            self.output.dashboard_path = Some(v);
        }
        if let Some(v) = lookup("AQUASTRESS_LOG_LEVEL") {
            self.observability.log_level = v;
        }
        Ok(())
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliOverrides) {
        if let Some(ref path) = cli.dashboard_path {
            self.output.dashboard_path = Some(path.clone());
        }
        if let Some(secs) = cli.refresh_interval_secs {
            self.polling.refresh_interval_secs = secs;
        }
        if let Some(ms) = cli.request_delay_ms {
            self.polling.request_delay_ms = ms;
        }
        if let Some(ref level) = cli.log_level {
            self.observability.log_level = level.clone();
        }
    }

    /// Validate the configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.polling.refresh_interval_secs == 0 {
            return Err(invalid("polling.refresh_interval_secs", "must be greater than 0"));
        }
        if self.sources.timeout_secs == 0 {
            return Err(invalid("sources.timeout_secs", "must be greater than 0"));
        }
        if self.sources.providers.is_empty() {
            return Err(invalid("sources.providers", "at least one provider is required"));
        }
        if self.sources.nasa_lookback_days == 0 {
            return Err(invalid("sources.nasa_lookback_days", "must be greater than 0"));
        }

        let mut seen = HashSet::new();
        for loc in &self.locations {
            let field = format!("locations.{}", loc.id);
            if loc.id.is_empty() {
                return Err(invalid("locations.id", "must not be empty"));
            }
            if !seen.insert(loc.id.as_str()) {
                return Err(invalid(&field, "duplicate location id"));
            }
            if !(-90.0..=90.0).contains(&loc.latitude) {
                return Err(invalid(&field, "latitude must be between -90 and 90"));
            }
            if !(-180.0..=180.0).contains(&loc.longitude) {
                return Err(invalid(&field, "longitude must be between -180 and 180"));
            }
            if !(loc.population_millions.is_finite() && loc.population_millions > 0.0) {
                return Err(invalid(&field, "population_millions must be positive"));
            }
        }
        Ok(())
    }

    /// Effective list of monitored points.
    pub fn locations(&self) -> Vec<Location> {
        if self.locations.is_empty() {
            default_locations()
        } else {
            self.locations.clone()
        }
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::ValidationFailed {
        field: key.to_string(),
        message: format!("cannot parse {value:?}"),
    })
}
