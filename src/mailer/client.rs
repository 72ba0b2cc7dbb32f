//! HTTP client for the message-delivery endpoint
//!
//! Posts the contact form as JSON and interprets the reply. The body must be
//! JSON whatever the status: a 2xx is a success, any other status is a
//! rejection whose `error` string (if present) is surfaced to the user.

use super::traits::MessageSender;
use crate::state::{ContactMessage, SubmissionError, SubmissionOutcome};
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

/// Client for the message-delivery endpoint
#[derive(Debug, Clone)]
pub struct HttpMailer {
    client: Client,
    endpoint: String,
}

impl HttpMailer {
    /// Create a client posting to `endpoint`
    pub fn new(endpoint: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

fn invalid_body(e: serde_json::Error) -> SubmissionError {
    SubmissionError::Transport(format!("Invalid response body: {e}"))
}

#[async_trait]
impl MessageSender for HttpMailer {
    async fn send(&self, message: &ContactMessage) -> SubmissionOutcome {
        let response = self
            .client
            .post(&self.endpoint)
            .json(message)
            .send()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| SubmissionError::Transport(e.to_string()))?;

        // An unparseable body is a transport failure whatever the status
        let reply: Value = serde_json::from_slice(&body).map_err(invalid_body)?;

        if status.is_success() {
            tracing::debug!("Endpoint accepted message with status {status}");
            Ok(())
        } else {
            Err(SubmissionError::Rejected {
                status: status.as_u16(),
                message: reply
                    .get("error")
                    .and_then(Value::as_str)
                    .map(str::to_string),
            })
        }
    }
}
