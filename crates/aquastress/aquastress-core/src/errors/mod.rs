//! Error handling for aquastress.
//! One error enum per subsystem, `thiserror` only, aggregated into `AquaError`.

pub mod aqua_error;
pub mod config_error;
pub mod sink_error;
pub mod source_error;

pub use aqua_error::{AquaError, AquaResult};
pub use config_error::ConfigError;
pub use sink_error::SinkError;
pub use source_error::SourceError;
