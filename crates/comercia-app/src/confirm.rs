//! # Confirmation Gate
//!
//! Destructive operations ask before acting. The question is a trait so
//! the shell can route it to a real UI and tests can script answers.

use async_trait::async_trait;

/// Yes/no question interposed before a destructive operation.
#[async_trait]
pub trait ConfirmGate: Send + Sync {
    /// Presents `prompt` and returns the decision. `false` aborts the
    /// operation without error.
    async fn confirm(&self, prompt: &str) -> bool;
}

/// Approves every prompt. Used by the demo binary.
pub struct AutoConfirm;

#[async_trait]
impl ConfirmGate for AutoConfirm {
    async fn confirm(&self, _prompt: &str) -> bool {
        true
    }
}

/// Declines every prompt.
pub struct AutoDecline;

#[async_trait]
impl ConfirmGate for AutoDecline {
    async fn confirm(&self, _prompt: &str) -> bool {
        false
    }
}
