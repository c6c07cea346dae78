//! # aquastress-sources
//!
//! Remote observation providers behind the `IObservationSource` seam:
//! Open-Meteo current weather, NASA POWER daily point data, and USGS NWIS
//! instantaneous water levels. A blocking HTTP transport with retry and
//! exponential backoff, and a fallback chain that takes the first provider
//! with a complete reading. Fields are never merged across providers.
//!
//! Response parsing is pure (`parse_*` on JSON text) so it can be tested
//! against fixture payloads without the network.

pub mod factory;
pub mod fallback;
pub mod providers;
pub mod transport;

pub use factory::{build_client, build_observation_source, build_water_level_source};
pub use fallback::FallbackSource;
pub use providers::{NasaPowerSource, OpenMeteoSource, UsgsWaterLevelSource};
pub use transport::{HttpClient, HttpClientConfig};
