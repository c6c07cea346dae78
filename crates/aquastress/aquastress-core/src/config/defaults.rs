// Single source of truth for all default values.

// --- Config file ---
pub const DEFAULT_CONFIG_FILENAME: &str = "aquastress.toml";

// --- Sources ---
pub const DEFAULT_OPEN_METEO_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_NASA_POWER_URL: &str = "https://power.larc.nasa.gov/api/temporal/daily/point";
pub const DEFAULT_USGS_URL: &str = "https://waterservices.usgs.gov/nwis/iv/";
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_MAX_RETRIES: u32 = 3;
pub const DEFAULT_INITIAL_BACKOFF_MS: u64 = 500;
pub const DEFAULT_MAX_BACKOFF_MS: u64 = 30_000;
pub const DEFAULT_NASA_LOOKBACK_DAYS: u32 = 10;
pub const DEFAULT_USGS_PARAMETER_CODE: &str = crate::constants::USGS_PARAM_GAGE_HEIGHT;

// --- Polling ---
pub const DEFAULT_REQUEST_DELAY_MS: u64 = 1_000; // between locations
pub const DEFAULT_REFRESH_INTERVAL_SECS: u64 = 1_800; // 30 minutes

// --- Output ---
pub const DEFAULT_TICKER_ENABLED: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
