use reqwest::StatusCode;
use thiserror::Error;

/// Broad classification of a [`ForecastError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Connectivity, timeout or a non-success HTTP status.
    Network,
    /// The response body did not have the expected JSON shape.
    Decode,
}

#[derive(Debug, Error)]
pub enum ForecastError {
    #[error("Network request to {url} failed")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Forecast request failed with status {status}: {body}")]
    HttpStatus { status: StatusCode, body: String },

    #[error("Failed to decode forecast response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl ForecastError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ForecastError::Network { .. } | ForecastError::HttpStatus { .. } => ErrorKind::Network,
            ForecastError::Decode(_) => ErrorKind::Decode,
        }
    }
}
