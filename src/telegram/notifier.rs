//! Notifier trait definition

use async_trait::async_trait;

use super::NotifyError;

/// Outbound notification channel for a fixed recipient
///
/// The watcher treats delivery as fire-and-forget: failures come back as
/// values, get logged by the caller's guard, and never stop the poll loop.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver one text message to the configured recipient
    async fn send(&self, text: &str) -> Result<(), NotifyError>;
}
