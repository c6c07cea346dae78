use serde::{Deserialize, Serialize};

use super::defaults;

/// Presentation output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Where to write the dashboard JSON after each cycle. None disables it.
    pub dashboard_path: Option<String>,
    /// Print the ticker line to stdout after each cycle.
    pub ticker: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dashboard_path: None,
            ticker: defaults::DEFAULT_TICKER_ENABLED,
        }
    }
}
