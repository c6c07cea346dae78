use std::path::PathBuf;

use aquastress_core::config::CliOverrides;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "aquastress")]
#[command(about = "Water stress monitor for populated locations", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to ./aquastress.toml when present)
    #[arg(long, global = true, env = "AQUASTRESS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Write the dashboard JSON to this path after each cycle
    #[arg(long, global = true)]
    pub dashboard: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Score one set of inputs and print the breakdown
    Score {
        /// Daily precipitation (mm/day)
        #[arg(allow_negative_numbers = true)]
        precipitation: f64,

        /// Air temperature (°C)
        #[arg(allow_negative_numbers = true)]
        temperature: f64,

        /// Relative humidity (%)
        #[arg(allow_negative_numbers = true)]
        humidity: f64,

        /// Served population (millions)
        #[arg(allow_negative_numbers = true)]
        population: f64,

        /// Print the breakdown as JSON
        #[arg(long)]
        json: bool,
    },

    /// Run a single polling cycle and exit
    Once,

    /// Refresh on a schedule until interrupted
    Watch {
        /// Seconds between cycles
        #[arg(long)]
        interval: Option<u64>,

        /// Milliseconds between locations within a cycle
        #[arg(long)]
        request_delay: Option<u64>,
    },
}

impl Cli {
    /// Config overrides carried by the flags.
    pub fn overrides(&self) -> CliOverrides {
        let (refresh_interval_secs, request_delay_ms) = match &self.command {
            Commands::Watch {
                interval,
                request_delay,
            } => (*interval, *request_delay),
            _ => (None, None),
        };
        CliOverrides {
            dashboard_path: self.dashboard.clone(),
            refresh_interval_secs,
            request_delay_ms,
            log_level: self.log_level.clone(),
        }
    }
}
