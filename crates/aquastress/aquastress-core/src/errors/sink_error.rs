/// Presentation sink errors.
#[derive(Debug, thiserror::Error)]
pub enum SinkError {
    #[error("I/O error writing {path}: {reason}")]
    Io { path: String, reason: String },

    #[error("serialization failed: {reason}")]
    Serialize { reason: String },
}
