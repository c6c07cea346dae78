/// aquastress version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Sentinel USGS NWIS uses for "no value recorded".
pub const USGS_NO_DATA_VALUE: f64 = -999_999.0;

/// Fill value NASA POWER emits for missing daily values.
pub const NASA_POWER_FILL_VALUE: f64 = -999.0;

/// USGS parameter code for depth to water level, feet below land surface.
pub const USGS_PARAM_DEPTH_TO_WATER: &str = "72019";

/// USGS parameter code for gage height, in feet.
pub const USGS_PARAM_GAGE_HEIGHT: &str = "00065";

/// Upper bound of the stress index scale.
pub const MAX_STRESS_INDEX: f64 = 100.0;
