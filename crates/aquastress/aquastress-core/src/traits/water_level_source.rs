use crate::errors::AquaResult;
use crate::models::WaterLevelReading;

/// Fetches the latest gauge water level for a site.
pub trait IWaterLevelSource: Send + Sync {
    fn water_level(&self, site_code: &str) -> AquaResult<Option<WaterLevelReading>>;
}
