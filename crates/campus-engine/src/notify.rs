//! Notification collaborator

use async_trait::async_trait;

/// Confirmation and notification surface, treated as opaque side effects.
///
/// `confirm` blocks the current flow until the user answers; the rest are
/// fire-and-forget presentations.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn confirm(&self, title: &str, text: &str) -> bool;
    fn info(&self, message: &str);
    fn success(&self, message: &str);
    fn error(&self, message: &str);
    fn warning(&self, message: &str);
}
