use super::{ConfigError, SinkError, SourceError};

/// Top-level error. Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum AquaError {
    #[error("source error: {0}")]
    Source(#[from] SourceError),

    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("sink error: {0}")]
    Sink(#[from] SinkError),

    #[error("refresh cancelled")]
    Cancelled,
}

pub type AquaResult<T> = Result<T, AquaError>;
