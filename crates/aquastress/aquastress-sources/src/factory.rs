//! Build configured sources from `SourcesConfig`.

use std::sync::Arc;

use aquastress_core::config::SourcesConfig;
use aquastress_core::errors::SourceError;
use aquastress_core::models::{MissingDataPolicy, Provider};
use aquastress_core::traits::IObservationSource;

use crate::fallback::FallbackSource;
use crate::providers::{NasaPowerSource, OpenMeteoSource, UsgsWaterLevelSource};
use crate::transport::{HttpClient, HttpClientConfig};

/// Build the provider chain in configured order over one shared client.
pub fn build_observation_source(
    config: &SourcesConfig,
    policy: MissingDataPolicy,
    client: Arc<HttpClient>,
) -> FallbackSource {
    let sources: Vec<Box<dyn IObservationSource>> = config
        .providers
        .iter()
        .map(|provider| -> Box<dyn IObservationSource> {
            match provider {
                Provider::OpenMeteo => Box::new(OpenMeteoSource::new(
                    Arc::clone(&client),
                    config.open_meteo_url.clone(),
                    policy,
                )),
                Provider::NasaPower => Box::new(NasaPowerSource::new(
                    Arc::clone(&client),
                    config.nasa_power_url.clone(),
                    config.nasa_lookback_days,
                    policy,
                )),
            }
        })
        .collect();
    FallbackSource::new(sources)
}

/// Build the USGS water-level source, or `None` when disabled.
pub fn build_water_level_source(
    config: &SourcesConfig,
    client: Arc<HttpClient>,
) -> Option<UsgsWaterLevelSource> {
    config.water_levels.then(|| {
        UsgsWaterLevelSource::new(client, config.usgs_url.clone(), config.usgs_parameter_code.clone())
    })
}

/// Shared HTTP client configured from `SourcesConfig`.
pub fn build_client(config: &SourcesConfig) -> Result<Arc<HttpClient>, SourceError> {
    HttpClient::new(HttpClientConfig::from(config)).map(Arc::new)
}
