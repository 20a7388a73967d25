//! Errors raised while talking to a fact-checking service.

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur when calling the fact-checking service
///
/// Variants carry rendered messages rather than the underlying transport
/// error so outcomes can be cloned into reports and serialized as JSON.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ServiceError {
    /// The server could not be reached (refused, DNS failure, connect timeout)
    #[error("Failed to connect to the API server: {message}")]
    Connection { message: String },

    /// The request was sent but no response arrived in time
    #[error("Request timed out: {message}")]
    Timeout { message: String },

    /// The server answered with a non-200 status code
    #[error("API returned status code {code}")]
    Status { code: u16, body: String },

    /// The response body could not be decoded
    #[error("Invalid response body: {message}")]
    Decode { message: String },

    /// The health endpoint answered 200 but did not report itself healthy
    #[error("Server returned unexpected response: {body}")]
    Unhealthy { body: String },

    /// Any other failure from the HTTP layer
    #[error("Request failed: {message}")]
    Request { message: String },
}

impl ServiceError {
    /// Returns true if the server could not be reached at all
    ///
    /// Connect timeouts count as connection failures; read timeouts do not.
    pub const fn is_connection(&self) -> bool {
        matches!(self, Self::Connection { .. })
    }

    /// Short machine-friendly label for the error kind
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Connection { .. } => "connection",
            Self::Timeout { .. } => "timeout",
            Self::Status { .. } => "status",
            Self::Decode { .. } => "decode",
            Self::Unhealthy { .. } => "unhealthy",
            Self::Request { .. } => "request",
        }
    }

    /// Response body attached to the error, if the server sent one
    pub fn body(&self) -> Option<&str> {
        match self {
            Self::Status { body, .. } | Self::Unhealthy { body } => Some(body),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ServiceError {
    fn from(err: reqwest::Error) -> Self {
        let message = err.to_string();
        if err.is_connect() {
            Self::Connection { message }
        } else if err.is_timeout() {
            Self::Timeout { message }
        } else if err.is_decode() {
            Self::Decode { message }
        } else {
            Self::Request { message }
        }
    }
}

impl From<serde_json::Error> for ServiceError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode {
            message: err.to_string(),
        }
    }
}
