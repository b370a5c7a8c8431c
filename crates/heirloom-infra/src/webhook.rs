//! HttpWebhookTransport -- concrete [`WebhookTransport`] over reqwest.
//!
//! POSTs the request as JSON to the configured endpoint with a whole-request
//! timeout. Every HTTP status is returned as a reply; only failures to finish
//! the exchange (refused connection, DNS, TLS, timeout) are errors.

use std::time::Duration;

use heirloom_core::webhook::transport::WebhookTransport;
use heirloom_types::config::ChatConfig;
use heirloom_types::error::WebhookError;
use heirloom_types::webhook::{RawReply, WebhookRequest};

/// Webhook transport backed by a pooled `reqwest::Client`.
pub struct HttpWebhookTransport {
    client: reqwest::Client,
    endpoint: String,
    timeout: Duration,
}

impl HttpWebhookTransport {
    /// Create a transport for `endpoint` with a fixed request timeout.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, WebhookError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| WebhookError::Client(e.to_string()))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            timeout,
        })
    }

    /// Create a transport from deployment configuration.
    pub fn from_config(config: &ChatConfig) -> Result<Self, WebhookError> {
        Self::new(config.webhook_url.clone(), config.timeout())
    }

    /// Request timeout applied to every call.
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn classify(&self, err: reqwest::Error) -> WebhookError {
        if err.is_timeout() {
            WebhookError::Timeout(self.timeout.as_secs())
        } else if err.is_connect() {
            WebhookError::Connect(err.to_string())
        } else {
            WebhookError::Request(err.to_string())
        }
    }
}

impl WebhookTransport for HttpWebhookTransport {
    fn endpoint(&self) -> &str {
        &self.endpoint
    }

    async fn send(&self, request: &WebhookRequest) -> Result<RawReply, WebhookError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status().as_u16();
        let bytes = response.bytes().await.map_err(|e| self.classify(e))?;

        Ok(RawReply {
            status,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        })
    }
}
