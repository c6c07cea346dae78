/// Errors raised while fetching observations from remote providers.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("network error from {provider}: {reason}")]
    Network { provider: String, reason: String },

    #[error("{provider} returned HTTP {status}: {body}")]
    HttpStatus {
        provider: String,
        status: u16,
        body: String,
    },

    #[error("failed to parse {provider} response: {reason}")]
    Parse { provider: String, reason: String },

    #[error("{provider} has no data for {target}")]
    NoData { provider: String, target: String },

    #[error("{provider}: all {attempts} attempts failed: {last_error}")]
    RetriesExhausted {
        provider: String,
        attempts: u32,
        last_error: String,
    },
}

impl SourceError {
    /// Provider name the error originated from.
    pub fn provider(&self) -> &str {
        match self {
            SourceError::Network { provider, .. }
            | SourceError::HttpStatus { provider, .. }
            | SourceError::Parse { provider, .. }
            | SourceError::NoData { provider, .. }
            | SourceError::RetriesExhausted { provider, .. } => provider,
        }
    }
}
