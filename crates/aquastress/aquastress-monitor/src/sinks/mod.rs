//! `IPresentationSink` implementations.

pub mod dashboard_file;
pub mod memory;
pub mod ticker;

pub use dashboard_file::DashboardFileSink;
pub use memory::{MemorySink, SinkEvent};
pub use ticker::TickerSink;
