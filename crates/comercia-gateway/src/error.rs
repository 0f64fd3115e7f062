//! # Gateway Errors
//!
//! Failure surface of the transport layer. The gateway does not interpret
//! HTTP status codes or response envelopes; everything that stops a
//! request/response cycle collapses into one of two variants.

use thiserror::Error;

/// Errors raised while talking to the remote collection API.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GatewayError {
    /// The request never produced a usable response: connection refused,
    /// request build failure or a non-success HTTP status.
    #[error("request failed: {0}")]
    Request(String),

    /// A response arrived but its body was not the expected envelope.
    #[error("malformed response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for GatewayError {
    fn from(error: reqwest::Error) -> Self {
        GatewayError::Request(error.to_string())
    }
}

impl From<serde_json::Error> for GatewayError {
    fn from(error: serde_json::Error) -> Self {
        GatewayError::Decode(error.to_string())
    }
}
