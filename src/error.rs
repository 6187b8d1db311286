//! Failures of calls against the activities backend.

use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ApiError {
    /// The request never completed (network failure, aborted fetch).
    Transport(String),
    /// The backend answered with a non-success status.
    Status { status: u16, detail: Option<String> },
    /// A success response whose body could not be decoded.
    Decode(String),
}

impl ApiError {
    /// Transport and decode failures are handled alike: the user gets a
    /// generic message and the error goes to the console.
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Transport(_) | ApiError::Decode(_))
    }

    /// Server-provided detail, or `fallback` when there is none.
    pub fn detail_or(&self, fallback: &str) -> String {
        match self {
            ApiError::Status {
                detail: Some(detail),
                ..
            } => detail.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "network error: {}", msg),
            ApiError::Status {
                status,
                detail: Some(detail),
            } => write!(f, "HTTP {}: {}", status, detail),
            ApiError::Status { status, detail: None } => write!(f, "HTTP {}", status),
            ApiError::Decode(msg) => write!(f, "invalid response body: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<gloo_net::Error> for ApiError {
    fn from(err: gloo_net::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::Decode(err.to_string())
    }
}
