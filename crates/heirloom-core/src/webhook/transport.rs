//! WebhookTransport trait definition.
//!
//! The transport delivers a request and hands back the raw HTTP status and
//! body. It makes no decisions about the body; that is the normalizer's job.

use heirloom_types::error::WebhookError;
use heirloom_types::webhook::{RawReply, WebhookRequest};

/// Port for delivering a [`WebhookRequest`] to the remote workflow.
///
/// Implementations live in heirloom-infra (e.g., `HttpWebhookTransport`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait WebhookTransport: Send + Sync {
    /// Endpoint the transport posts to, for display and logs.
    fn endpoint(&self) -> &str;

    /// Send one request. Any HTTP status counts as a reply; only failures to
    /// complete the exchange are errors.
    fn send(
        &self,
        request: &WebhookRequest,
    ) -> impl std::future::Future<Output = Result<RawReply, WebhookError>> + Send;
}
