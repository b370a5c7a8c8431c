//! Deployment configuration types for Heirloom.
//!
//! `ChatConfig` represents the `config.toml` in the data directory. It pins
//! the webhook endpoint and request settings for a deployment; nothing in it
//! can be changed from inside a chat session.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// n8n workflow that answers family-history questions.
pub const DEFAULT_WEBHOOK_URL: &str =
    "https://myvillageproject.app.n8n.cloud/webhook/family-history-chatbot";

/// Tag sent as `source` so the workflow can tell which client called it.
pub const DEFAULT_SOURCE: &str = "heirloom-cli";

/// Greeting seeded into the very first session of a process.
pub const DEFAULT_GREETING: &str = "Hi! Ask me anything about your family history.";

/// Top-level configuration for a Heirloom deployment.
///
/// Loaded from `~/.heirloom/config.toml`. All fields have sensible defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatConfig {
    /// Endpoint every question is POSTed to.
    #[serde(default = "default_webhook_url")]
    pub webhook_url: String,

    /// Whole-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Client tag sent in every request body.
    #[serde(default = "default_source")]
    pub source: String,

    /// Directory transcripts are written to. Relative paths resolve against
    /// the working directory.
    #[serde(default = "default_transcript_dir")]
    pub transcript_dir: PathBuf,

    /// Assistant message that opens the first session.
    #[serde(default = "default_greeting")]
    pub greeting: String,
}

fn default_webhook_url() -> String {
    DEFAULT_WEBHOOK_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    25
}

fn default_source() -> String {
    DEFAULT_SOURCE.to_string()
}

fn default_transcript_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

impl ChatConfig {
    /// Request timeout, never shorter than one second.
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            webhook_url: default_webhook_url(),
            timeout_secs: default_timeout_secs(),
            source: default_source(),
            transcript_dir: default_transcript_dir(),
            greeting: default_greeting(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chat_config_default_values() {
        let config = ChatConfig::default();
        assert_eq!(config.webhook_url, DEFAULT_WEBHOOK_URL);
        assert_eq!(config.timeout_secs, 25);
        assert_eq!(config.source, "heirloom-cli");
        assert_eq!(config.transcript_dir, PathBuf::from("."));
        assert_eq!(config.timeout(), Duration::from_secs(25));
    }

    #[test]
    fn test_chat_config_deserialize_with_defaults() {
        let config: ChatConfig = toml::from_str("").unwrap();
        assert_eq!(config, ChatConfig::default());
    }

    #[test]
    fn test_chat_config_deserialize_with_values() {
        let toml_str = r#"
webhook_url = "http://localhost:5678/webhook/test"
timeout_secs = 5
source = "kiosk"
transcript_dir = "/var/lib/heirloom/transcripts"
greeting = "Welcome back!"
"#;
        let config: ChatConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.webhook_url, "http://localhost:5678/webhook/test");
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.source, "kiosk");
        assert_eq!(
            config.transcript_dir,
            PathBuf::from("/var/lib/heirloom/transcripts")
        );
        assert_eq!(config.greeting, "Welcome back!");
    }

    #[test]
    fn test_zero_timeout_is_raised_to_one_second() {
        let config = ChatConfig {
            timeout_secs: 0,
            ..ChatConfig::default()
        };
        assert_eq!(config.timeout(), Duration::from_secs(1));
    }
}
