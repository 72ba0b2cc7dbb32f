//! Trait abstraction for the message-delivery endpoint to enable mocking in tests

use crate::state::{ContactMessage, SubmissionError, SubmissionOutcome};
use async_trait::async_trait;
use std::time::Duration;

/// Sends a contact message to whatever delivers it as email
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageSender: Send + Sync {
    /// Issue exactly one request carrying `message`
    async fn send(&self, message: &ContactMessage) -> SubmissionOutcome;
}

/// Send `message`, giving up after `deadline`.
///
/// When the deadline fires first the in-flight request future is dropped,
/// which cancels it, and the outcome is [`SubmissionError::TimedOut`].
pub async fn deliver(
    sender: &dyn MessageSender,
    message: &ContactMessage,
    deadline: Duration,
) -> SubmissionOutcome {
    match tokio::time::timeout(deadline, sender.send(message)).await {
        Ok(outcome) => outcome,
        Err(_) => Err(SubmissionError::TimedOut(deadline)),
    }
}
