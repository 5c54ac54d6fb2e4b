use thiserror::Error;

/// Errors surfaced by recording session operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CaptureError {
    /// The operation is not valid in the session's current state.
    #[error("invalid state: {0}")]
    InvalidState(String),

    /// The platform lacks the capability the operation needs.
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// Stopping failed; the output may be incomplete.
    #[error("recording error: {0}")]
    Recording(String),

    #[error("configuration failed: {0}")]
    ConfigurationFailed(String),

    #[error("encoder error: {0}")]
    Encoder(#[from] EncoderError),

    #[error("capture pipeline error: {0}")]
    Pipeline(String),
}

/// Faults raised by encoder primitives (prepare, start, pause, resume, stop).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EncoderError {
    /// The encoder was driven out of order, e.g. stopped before it started.
    #[error("illegal encoder state: {0}")]
    IllegalState(String),

    /// Generic hardware fault. Stopping too soon after start raises this.
    #[error("encoder runtime fault: {0}")]
    Runtime(String),

    #[error("encoder I/O failure: {0}")]
    Io(String),
}

impl CaptureError {
    /// Wraps a fault raised by the encoder's stop primitive.
    pub(crate) fn from_stop_failure(error: EncoderError) -> Self {
        match error {
            EncoderError::IllegalState(msg) => {
                Self::Recording(format!("encoder rejected stop: {}", msg))
            }
            EncoderError::Runtime(msg) => Self::Recording(format!(
                "encoder faulted on stop, the take may be too short or the system under load: {}",
                msg
            )),
            EncoderError::Io(msg) => Self::Recording(format!("encoder failed to finalize output: {}", msg)),
        }
    }
}
