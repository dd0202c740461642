use thiserror::Error;

#[derive(Debug, Error)]
pub enum BackendError {
    /// The request could not complete at the transport level.
    #[error("network failure: {0}")]
    Network(String),

    /// The backend answered but reported a non-success status.
    #[error("backend failure: {0}")]
    Application(String),

    /// The response body did not match the expected shape.
    #[error("invalid backend response: {0}")]
    InvalidResponse(String),

    /// The outgoing payload could not be encoded.
    #[error("payload encoding: {0}")]
    Encoding(#[from] serde_json::Error),
}

pub type BackendResult<T> = Result<T, BackendError>;

impl From<reqwest::Error> for BackendError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            BackendError::InvalidResponse(err.to_string())
        } else if err.is_status() {
            BackendError::Application(err.to_string())
        } else {
            BackendError::Network(err.to_string())
        }
    }
}
