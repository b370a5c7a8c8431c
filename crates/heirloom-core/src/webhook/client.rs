//! WebhookClient -- asks the remote workflow a question and always returns text.
//!
//! Builds the request body, sends it through a [`WebhookTransport`], and runs
//! the reply through [`normalize`]. Transport failures are rendered into a
//! warning string rather than returned as errors; nothing is retried.

use std::time::Instant;

use heirloom_types::chat::Message;
use heirloom_types::webhook::{WebhookRequest, WebhookResponse};
use tracing::{debug, info, warn};
use uuid::Uuid;

use super::normalize::normalize;
use super::transport::WebhookTransport;

/// Prefix of the reply shown when the webhook could not be reached.
pub const NETWORK_ERROR_PREFIX: &str = "⚠️ Network error reaching webhook:";

/// Client for the question-answering webhook.
///
/// Generic over the transport so tests can substitute an in-memory fake.
pub struct WebhookClient<T: WebhookTransport> {
    transport: T,
    source: String,
}

impl<T: WebhookTransport> WebhookClient<T> {
    /// Create a client that tags every request with `source`.
    pub fn new(transport: T, source: impl Into<String>) -> Self {
        Self {
            transport,
            source: source.into(),
        }
    }

    /// Access the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// The endpoint requests are sent to.
    pub fn endpoint(&self) -> &str {
        self.transport.endpoint()
    }

    /// The `source` tag sent with every request.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Build the request body for one turn.
    ///
    /// `history` must already end with the user message for `question`.
    pub fn build_request(
        &self,
        question: &str,
        history: &[Message],
        session_id: Uuid,
    ) -> WebhookRequest {
        WebhookRequest {
            question: question.to_string(),
            history: history.to_vec(),
            session_id: session_id.to_string(),
            source: self.source.clone(),
        }
    }

    /// Ask the webhook a question and return display text.
    ///
    /// Never fails: a transport error becomes a warning string, and any reply
    /// body is normalized to a string.
    pub async fn ask(&self, question: &str, history: &[Message], session_id: Uuid) -> String {
        let request = self.build_request(question, history, session_id);
        let started = Instant::now();

        debug!(
            session_id = %session_id,
            history_len = request.history.len(),
            endpoint = self.transport.endpoint(),
            "Sending question to webhook"
        );

        let raw = match self.transport.send(&request).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(
                    session_id = %session_id,
                    error = %e,
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "Webhook request failed"
                );
                return format!("{NETWORK_ERROR_PREFIX} {e}");
            }
        };

        let response = WebhookResponse::decode(&raw);
        info!(
            session_id = %session_id,
            status = raw.status,
            shape = response.kind(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Webhook replied"
        );

        normalize(&response)
    }
}
