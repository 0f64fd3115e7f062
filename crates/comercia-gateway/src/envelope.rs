//! # Wire Envelope
//!
//! Every endpoint of the collection API wraps its payload in the same
//! envelope: a `success` flag, an optional `data` payload and optional
//! `error`/`message` strings. This module defines the typed counterpart.

use serde::{Deserialize, Serialize};

/// The response envelope shared by every endpoint of the collection API.
///
/// A `success == false` envelope can arrive on a perfectly healthy HTTP
/// response; interpreting it is the caller's concern, not the gateway's.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl<T> ApiResponse<T> {
    /// Builds a successful envelope around `data`.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
            message: None,
        }
    }

    /// Builds a successful envelope with no payload, as returned by
    /// mutation acknowledgements.
    pub fn ok_empty() -> Self {
        Self {
            success: true,
            data: None,
            error: None,
            message: None,
        }
    }

    /// Builds a failed envelope carrying an error description.
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error.into()),
            message: None,
        }
    }

    /// The server-provided detail text, preferring `error` over `message`.
    pub fn detail(&self) -> Option<&str> {
        self.error.as_deref().or(self.message.as_deref())
    }
}
