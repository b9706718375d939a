//! Error types for FEMS client operations

use thiserror::Error;

/// Result type alias for FEMS client operations
pub type Result<T> = std::result::Result<T, FemsError>;

/// Errors that can occur while talking to a FEMS server
#[derive(Error, Debug)]
pub enum FemsError {
    /// The HTTP exchange did not complete (connection refused, reset,
    /// timeout, malformed response stream)
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The exchange completed but the server answered outside the
    /// success range
    #[error("request failed with status {status}")]
    RequestFailed { status: u16 },

    /// The response body was not JSON, or lacked an integer `value` field
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// Invalid URL (malformed host supplied at construction)
    #[error("invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// A metric name outside the closed endpoint set
    #[error("unknown endpoint: {0}")]
    UnknownEndpoint(String),
}

impl FemsError {
    /// The HTTP status code, for failures that carry one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
