use thiserror::Error;

/// Failure modes of the AI-backed estimation path.
///
/// All three are recovered by the broker via fallback to the deterministic
/// engine; none reach the consumer. The deterministic path is total and has
/// no error type of its own.
#[derive(Debug, Error)]
pub enum EstimateError {
    /// Connectivity failure or request timeout.
    #[error("transport failure reaching inference endpoint: {0}")]
    Transport(String),

    /// Non-success HTTP status from the inference endpoint.
    #[error("inference endpoint returned status {status}")]
    Upstream { status: u16 },

    /// The response payload could not be reduced to the canonical shape.
    #[error("malformed inference payload: {0}")]
    Malformed(String),
}

impl From<reqwest::Error> for EstimateError {
    fn from(error: reqwest::Error) -> Self {
        EstimateError::Transport(error.to_string())
    }
}
