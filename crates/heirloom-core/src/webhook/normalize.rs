//! Reply normalization: turn any webhook response into one display string.
//!
//! The upstream workflow does not guarantee a response shape, so replies are
//! resolved through a fixed precedence of rules:
//!
//! 1. Blank body -> placeholder naming the HTTP status.
//! 2. Non-JSON body -> the body, trimmed.
//! 3. Non-empty array -> `output` of the first object element that has one;
//!    otherwise the whole array, pretty-printed.
//! 4. Object with an `output` key -> that value, whatever it is.
//! 5. Object with a truthy `answer`, `reply`, `text`, `message`, `result`, or
//!    `data` (first in that order) -> strings verbatim, anything else
//!    pretty-printed.
//! 6. Anything else -> the parsed JSON, pretty-printed.
//!
//! Rule 4 checks key presence only while rule 5 requires a truthy value.
//! `{"output": null, "answer": "hi"}` therefore normalizes to `null`.

use heirloom_types::webhook::WebhookResponse;
use serde_json::Value;

/// Secondary reply keys, in priority order.
pub const REPLY_KEYS: [&str; 6] = ["answer", "reply", "text", "message", "result", "data"];

/// Key the n8n "Respond to Webhook" node uses for agent output.
pub const OUTPUT_KEY: &str = "output";

/// Resolve a classified webhook response to display text.
pub fn normalize(response: &WebhookResponse) -> String {
    match response {
        WebhookResponse::Empty { status } => empty_body_placeholder(*status),
        WebhookResponse::Text(body) => body.trim().to_string(),
        WebhookResponse::Array(items) if !items.is_empty() => items
            .iter()
            .find_map(|item| item.as_object().and_then(|obj| obj.get(OUTPUT_KEY)))
            .map(coerce_output)
            .unwrap_or_else(|| pretty(&Value::Array(items.clone()))),
        WebhookResponse::Array(items) => pretty(&Value::Array(items.clone())),
        WebhookResponse::Object(map) => {
            if let Some(output) = map.get(OUTPUT_KEY) {
                return coerce_output(output);
            }
            REPLY_KEYS
                .iter()
                .filter_map(|key| map.get(*key))
                .find(|value| is_truthy(value))
                .map(|value| match value {
                    Value::String(s) => s.clone(),
                    other => pretty(other),
                })
                .unwrap_or_else(|| pretty(&Value::Object(map.clone())))
        }
        WebhookResponse::Scalar(value) => pretty(value),
    }
}

/// Placeholder shown when the webhook answered with nothing.
pub fn empty_body_placeholder(status: u16) -> String {
    format!("(No response body; HTTP {status})")
}

/// Whether a JSON value counts as present for the secondary reply keys.
///
/// `null`, `false`, zero, and empty strings, arrays, and objects are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

/// Render an `output` value: strings verbatim, everything else as compact JSON.
pub fn coerce_output(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Two-space indented JSON with non-ASCII characters kept as-is.
pub fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}
