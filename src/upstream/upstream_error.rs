use thiserror::Error;

#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("Upstream API token is not configured")]
    MissingCredentials,

    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(String),

    #[error("Network error: {0}")]
    Transport(String),

    #[error("Upstream request failed with status {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Unexpected upstream payload: {0}")]
    Decode(String),

    #[error("Listing {0} not found")]
    NotFound(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        UpstreamError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for UpstreamError {
    fn from(err: serde_json::Error) -> Self {
        UpstreamError::Decode(err.to_string())
    }
}
