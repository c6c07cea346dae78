//! Concrete providers. Each exposes a pure `parse` function and a source
//! type that fetches over `HttpClient`.

pub mod nasa_power;
pub mod open_meteo;
pub mod usgs;

pub use nasa_power::NasaPowerSource;
pub use open_meteo::OpenMeteoSource;
pub use usgs::UsgsWaterLevelSource;

use aquastress_core::errors::SourceError;

pub(crate) fn parse_err(provider: &str, reason: impl Into<String>) -> SourceError {
    SourceError::Parse {
        provider: provider.to_string(),
        reason: reason.into(),
    }
}
