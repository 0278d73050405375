//! Webhook forwarding for contact-form submissions.

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::config::ContactConfig;

/// A contact-form submission. Absent fields deserialize to empty strings so
/// validation can report them by name instead of failing in the extractor.
#[derive(Debug, Deserialize)]
pub struct ContactForm {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl ContactForm {
    /// Names of required fields that are missing or blank.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.name.trim().is_empty() {
            missing.push("name");
        }
        if self.email.trim().is_empty() {
            missing.push("email");
        }
        if self.subject.trim().is_empty() {
            missing.push("subject");
        }
        if self.message.trim().is_empty() {
            missing.push("message");
        }
        missing
    }
}

/// Error type for webhook forwarding.
#[derive(Debug, Error)]
pub enum ForwardError {
    #[error("webhook request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("webhook responded with status {0}")]
    Status(reqwest::StatusCode),
}

/// Forwards validated contact messages to the configured messaging webhook.
#[derive(Clone)]
pub struct ContactForwarder {
    client: reqwest::Client,
    webhook_url: String,
}

impl ContactForwarder {
    /// Build the forwarder and its HTTP client. The timeouts here bound the
    /// only outbound call this service makes.
    pub fn new(config: &ContactConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_secs))
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        Ok(Self {
            client,
            webhook_url: config.webhook_url.clone(),
        })
    }

    /// Send one formatted message upstream.
    pub async fn forward(&self, form: &ContactForm) -> Result<(), ForwardError> {
        let text = format!(
            "New contact message\nFrom: {} <{}>\nSubject: {}\n\n{}",
            form.name, form.email, form.subject, form.message
        );

        let response = self
            .client
            .post(&self.webhook_url)
            .json(&serde_json::json!({ "text": text }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ForwardError::Status(status));
        }

        tracing::debug!(status = %status, "Contact message forwarded");
        Ok(())
    }
}
