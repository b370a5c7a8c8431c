//! Application state wiring the core to its infrastructure.
//!
//! The controller is generic over its transport and transcript store; AppState
//! pins it to the reqwest transport and the JSON-file store.

use std::path::PathBuf;

use anyhow::Context;
use heirloom_core::chat::controller::ChatController;
use heirloom_core::transcript::writer::TranscriptWriter;
use heirloom_core::webhook::client::WebhookClient;
use heirloom_infra::config::load_config;
use heirloom_infra::filesystem::resolve_data_dir;
use heirloom_infra::transcript::FileTranscriptStore;
use heirloom_infra::webhook::HttpWebhookTransport;
use heirloom_types::config::ChatConfig;

/// Controller pinned to the concrete infra implementations.
pub type ConcreteChatController = ChatController<HttpWebhookTransport, FileTranscriptStore>;

/// Configuration and paths shared by every command.
pub struct AppState {
    pub config: ChatConfig,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Resolve the data directory and load `config.toml` from it.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        let config = load_config(&data_dir).await;
        tracing::debug!(
            data_dir = %data_dir.display(),
            webhook_url = %config.webhook_url,
            "Configuration loaded"
        );
        Ok(Self { config, data_dir })
    }

    /// Store for the configured transcript directory.
    pub fn transcript_store(&self) -> FileTranscriptStore {
        FileTranscriptStore::new(self.config.transcript_dir.clone())
    }

    /// Build a controller with a fresh session.
    pub fn controller(&self) -> anyhow::Result<ConcreteChatController> {
        let transport = HttpWebhookTransport::from_config(&self.config)
            .context("Failed to set up webhook transport")?;
        let client = WebhookClient::new(transport, self.config.source.clone());
        let transcripts = TranscriptWriter::new(self.transcript_store());
        Ok(ChatController::new(client, transcripts, &self.config.greeting))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use heirloom_types::chat::MessageRole;

    fn state_in(dir: &std::path::Path) -> AppState {
        AppState {
            config: ChatConfig {
                webhook_url: "http://127.0.0.1:9/webhook".to_string(),
                transcript_dir: dir.join("transcripts"),
                ..ChatConfig::default()
            },
            data_dir: dir.to_path_buf(),
        }
    }

    #[tokio::test]
    async fn test_controller_starts_with_configured_greeting() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_in(tmp.path());
        let controller = state.controller().unwrap();

        assert_eq!(controller.client().endpoint(), "http://127.0.0.1:9/webhook");
        assert_eq!(controller.history().len(), 1);
        assert_eq!(controller.history()[0].role, MessageRole::Assistant);
        assert_eq!(controller.history()[0].content, state.config.greeting);
    }

    #[tokio::test]
    async fn test_controller_saves_into_transcript_dir() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_in(tmp.path());
        let controller = state.controller().unwrap();

        let path = controller.save().await.unwrap();
        assert!(path.starts_with(tmp.path().join("transcripts")));

        let listed = controller.saved_transcripts().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].session_id, controller.session_id());
    }
}
