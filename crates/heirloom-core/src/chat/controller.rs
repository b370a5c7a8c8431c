//! Chat controller: the boundary the UI calls into.
//!
//! Owns the live [`SessionStore`] and drives each turn: append the user
//! message, ask the webhook with the updated history, append the reply.

use std::path::PathBuf;

use heirloom_types::chat::{Message, MessageRole};
use heirloom_types::error::TranscriptError;
use heirloom_types::transcript::TranscriptSummary;
use tracing::info;
use uuid::Uuid;

use crate::transcript::store::TranscriptStore;
use crate::transcript::writer::TranscriptWriter;
use crate::webhook::client::WebhookClient;
use crate::webhook::transport::WebhookTransport;

use super::session::SessionStore;

/// Orchestrates one conversation between the UI and the webhook.
///
/// `submit` takes `&mut self`, so a controller can only have one turn in
/// flight at a time.
pub struct ChatController<T: WebhookTransport, S: TranscriptStore> {
    session: SessionStore,
    client: WebhookClient<T>,
    transcripts: TranscriptWriter<S>,
}

impl<T: WebhookTransport, S: TranscriptStore> ChatController<T, S> {
    /// Create a controller with a fresh session seeded with `greeting`.
    pub fn new(client: WebhookClient<T>, transcripts: TranscriptWriter<S>, greeting: &str) -> Self {
        let session = SessionStore::create(greeting);
        info!(session_id = %session.id(), "Session created");
        Self {
            session,
            client,
            transcripts,
        }
    }

    /// Access the webhook client.
    pub fn client(&self) -> &WebhookClient<T> {
        &self.client
    }

    /// Access the transcript writer.
    pub fn transcripts(&self) -> &TranscriptWriter<S> {
        &self.transcripts
    }

    /// Access the live session.
    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    /// Current session id.
    pub fn session_id(&self) -> Uuid {
        self.session.id()
    }

    /// Current history, oldest first.
    pub fn history(&self) -> &[Message] {
        self.session.messages()
    }

    /// Run one turn and return the reply to display.
    ///
    /// Whitespace-only input is ignored and returns `None` without touching
    /// the history or the network.
    pub async fn submit(&mut self, user_text: &str) -> Option<String> {
        if user_text.trim().is_empty() {
            return None;
        }

        self.session.append_message(MessageRole::User, user_text);
        let history = self.session.snapshot();
        let reply = self
            .client
            .ask(user_text, &history, self.session.id())
            .await;
        self.session
            .append_message(MessageRole::Assistant, reply.clone());

        Some(reply)
    }

    /// Start over with a new session id and a fresh greeting.
    pub fn new_session(&mut self) {
        let previous = self.session.id();
        self.session.new_session();
        info!(previous = %previous, session_id = %self.session.id(), "New session started");
    }

    /// Reset the history but keep the session id.
    pub fn clear_chat(&mut self) {
        self.session.clear();
        info!(session_id = %self.session.id(), "Chat cleared");
    }

    /// Write a transcript of the current session.
    pub async fn save(&self) -> Result<PathBuf, TranscriptError> {
        self.transcripts.save(&self.session).await
    }

    /// List saved transcripts, newest first.
    pub async fn saved_transcripts(&self) -> Result<Vec<TranscriptSummary>, TranscriptError> {
        self.transcripts.list().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use heirloom_types::error::WebhookError;

    use crate::chat::session::{CLEARED_GREETING, NEW_SESSION_GREETING};
    use crate::transcript::writer::tests::MemoryTranscriptStore;
    use crate::webhook::client::tests::ScriptedTransport;

    fn controller(
        transport: ScriptedTransport,
    ) -> ChatController<ScriptedTransport, MemoryTranscriptStore> {
        ChatController::new(
            WebhookClient::new(transport, "test"),
            TranscriptWriter::new(MemoryTranscriptStore::default()),
            "Hi!",
        )
    }

    #[tokio::test]
    async fn test_two_turns_keep_order() {
        let mut chat = controller(ScriptedTransport::json(&[
            r#"{"output":"R1"}"#,
            r#"{"output":"R2"}"#,
        ]));

        assert_eq!(chat.submit("Q1").await.as_deref(), Some("R1"));
        assert_eq!(chat.submit("Q2").await.as_deref(), Some("R2"));

        assert_eq!(
            chat.history(),
            &[
                Message::assistant("Hi!"),
                Message::user("Q1"),
                Message::assistant("R1"),
                Message::user("Q2"),
                Message::assistant("R2"),
            ]
        );
    }

    #[tokio::test]
    async fn test_request_history_includes_question_but_not_reply() {
        let mut chat = controller(ScriptedTransport::json(&["R1", "R2"]));
        chat.submit("Q1").await;
        chat.submit("Q2").await;

        let requests = chat.client().transport().requests.lock().unwrap();
        assert_eq!(requests[0].history.len(), 2);
        assert_eq!(requests[0].history.last(), Some(&Message::user("Q1")));
        assert_eq!(requests[1].history.len(), 4);
        assert_eq!(requests[1].history.last(), Some(&Message::user("Q2")));
        assert_eq!(requests[1].session_id, chat.session_id().to_string());
    }

    #[tokio::test]
    async fn test_blank_input_is_ignored() {
        let mut chat = controller(ScriptedTransport::json(&[]));
        assert_eq!(chat.submit("   ").await, None);
        assert_eq!(chat.history().len(), 1);
        assert!(chat.client().transport().requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_transport_failure_becomes_assistant_message() {
        let mut chat = controller(ScriptedTransport::new(vec![Err(WebhookError::Connect(
            "connection refused".to_string(),
        ))]));

        let reply = chat.submit("Q1").await.unwrap();
        assert!(reply.starts_with("⚠️ Network error reaching webhook:"));
        assert_eq!(chat.history().last(), Some(&Message::assistant(reply)));
    }

    #[tokio::test]
    async fn test_new_session_vs_clear_chat() {
        let mut chat = controller(ScriptedTransport::json(&["R1", "R2"]));
        let original = chat.session_id();

        chat.submit("Q1").await;
        chat.clear_chat();
        assert_eq!(chat.session_id(), original);
        assert_eq!(chat.history(), &[Message::assistant(CLEARED_GREETING)]);

        chat.submit("Q2").await;
        chat.new_session();
        assert_ne!(chat.session_id(), original);
        assert_eq!(chat.history(), &[Message::assistant(NEW_SESSION_GREETING)]);
    }

    #[tokio::test]
    async fn test_save_matches_history() {
        let mut chat = controller(ScriptedTransport::json(&[r#"{"answer":"Kumasi"}"#]));
        chat.submit("Where did they live?").await;

        chat.save().await.unwrap();

        let files = chat.transcripts().store().files.lock().unwrap();
        assert_eq!(files.len(), 1);
        let saved = files.values().next().unwrap();
        assert_eq!(saved.messages, chat.history());
        assert_eq!(saved.session_id, chat.session_id());
    }

    #[tokio::test]
    async fn test_rapid_saves_never_fail() {
        let chat = controller(ScriptedTransport::json(&[]));
        let first = chat.save().await.unwrap();
        let second = chat.save().await.unwrap();

        let listed = chat.saved_transcripts().await.unwrap();
        if first == second {
            assert_eq!(listed.len(), 1);
        } else {
            assert_eq!(listed.len(), 2);
        }
    }
}
