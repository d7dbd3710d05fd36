// errors.rs
use crate::upstream::UpstreamError;
use astra::Response;
use thiserror::Error;

/// Errors originating from either the server logic
/// (routing, missing input, etc.) or the upstream listings API.
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Not Found")]
    NotFound,

    #[error("Bad Request: {0}")]
    BadRequest(String),

    #[error(transparent)]
    Upstream(#[from] UpstreamError),

    #[error("Internal Server Error")]
    InternalError,
}

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::Upstream(_) | ServerError::InternalError => 500,
        }
    }

    /// Message shown to the client. Bad requests carry their own text.
    pub fn public_message(&self) -> String {
        match self {
            ServerError::BadRequest(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;
