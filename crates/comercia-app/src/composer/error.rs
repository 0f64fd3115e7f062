//! # Composer Errors
//!
//! Structured failure values for the order-composition workflow. Every
//! operation both returns its error and records it in the observable
//! state, so callers can match on it while passive observers still see
//! the message.

use thiserror::Error;

/// Failure of one composer operation.
///
/// The `Display` text is the user-facing message. Local failures
/// (`Validation`, `ProductNotFound`, `InsufficientStock`) are raised
/// before any network call; `Remote` means the call itself failed and
/// the cause went to the log, not to the user.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ComposerError {
    /// A precondition on local form state failed.
    #[error("{0}")]
    Validation(&'static str),

    /// The chosen product id is absent from the loaded snapshot.
    #[error("Product not found")]
    ProductNotFound,

    /// Requested quantity exceeds the snapshot's on-hand quantity.
    #[error("Insufficient stock. Available: {available}")]
    InsufficientStock { requested: u32, available: u32 },

    /// A remote operation failed; the message is the static
    /// per-operation text.
    #[error("{0}")]
    Remote(&'static str),
}

impl ComposerError {
    /// Whether the failure was raised before reaching the network.
    pub fn is_local(&self) -> bool {
        !matches!(self, ComposerError::Remote(_))
    }
}
