//! # aquastress-monitor
//!
//! Runs polling cycles over the monitored locations: observe, score, store,
//! present. Hosts the cancellable refresh scheduler, the dashboard renderers
//! (ticker line, cards, GeoJSON markers), and the presentation sinks.

pub mod cancellation;
pub mod cli;
pub mod factory;
pub mod monitor;
pub mod render;
pub mod scheduler;
pub mod sinks;

pub use cancellation::{Cancellable, CancellationToken};
pub use factory::build_monitor;
pub use monitor::{CycleError, CycleReport, Monitor};
pub use scheduler::{RefreshHandle, RefreshScheduler};
