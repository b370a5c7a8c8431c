//! Webhook wire types.
//!
//! The request side is a fixed JSON shape. The response side is whatever the
//! upstream workflow produced, so it is decoded into [`WebhookResponse`], a
//! tagged union the normalizer pattern-matches on.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::chat::Message;

/// Body POSTed to the webhook for every user turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WebhookRequest {
    /// The question just asked.
    pub question: String,
    /// Full history, already including `question` as its last user message.
    pub history: Vec<Message>,
    pub session_id: String,
    /// Fixed tag identifying the client type.
    pub source: String,
}

/// Status and body of a completed HTTP exchange, before interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawReply {
    pub status: u16,
    pub body: String,
}

/// A webhook body classified by shape.
#[derive(Debug, Clone, PartialEq)]
pub enum WebhookResponse {
    /// Nothing but whitespace came back.
    Empty { status: u16 },
    /// The body is not JSON.
    Text(String),
    /// A JSON array (possibly empty).
    Array(Vec<Value>),
    /// A JSON object.
    Object(Map<String, Value>),
    /// A bare JSON string, number, boolean, or null.
    Scalar(Value),
}

impl WebhookResponse {
    /// Classify a raw reply.
    ///
    /// JSON is tried first; a body that fails to parse is kept as text and a
    /// body that is blank becomes [`WebhookResponse::Empty`].
    pub fn decode(reply: &RawReply) -> Self {
        match serde_json::from_str::<Value>(&reply.body) {
            Ok(Value::Array(items)) => WebhookResponse::Array(items),
            Ok(Value::Object(map)) => WebhookResponse::Object(map),
            Ok(scalar) => WebhookResponse::Scalar(scalar),
            Err(_) if reply.body.trim().is_empty() => WebhookResponse::Empty {
                status: reply.status,
            },
            Err(_) => WebhookResponse::Text(reply.body.clone()),
        }
    }

    /// Short label for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            WebhookResponse::Empty { .. } => "empty",
            WebhookResponse::Text(_) => "text",
            WebhookResponse::Array(_) => "array",
            WebhookResponse::Object(_) => "object",
            WebhookResponse::Scalar(_) => "scalar",
        }
    }
}
