//! Session store for the single live conversation.
//!
//! Wraps the session id and ordered history. Every change to conversation
//! data goes through this type; everything else reads snapshots.

use heirloom_types::chat::{Message, MessageRole};
use heirloom_types::transcript::Transcript;
use uuid::Uuid;

/// Greeting seeded when the user starts a new session.
pub const NEW_SESSION_GREETING: &str = "New session started. How can I help?";

/// Greeting seeded when the user clears the chat.
pub const CLEARED_GREETING: &str = "Chat cleared. Ask your next question!";

/// Owns the id and history of one conversation.
///
/// The id is stable until [`SessionStore::new_session`] replaces the whole
/// session; [`SessionStore::clear`] only resets the history.
#[derive(Debug, Clone)]
pub struct SessionStore {
    id: Uuid,
    messages: Vec<Message>,
}

impl SessionStore {
    /// Create a session with a fresh id and a single assistant greeting.
    pub fn create(greeting: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            messages: vec![Message::assistant(greeting)],
        }
    }

    /// The current session id.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Borrow the current history.
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Number of messages in the history.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Append a message to the end of the history.
    pub fn append_message(&mut self, role: MessageRole, content: impl Into<String>) {
        self.messages.push(Message::new(role, content));
    }

    /// Reset the history to a single greeting, keeping the session id.
    pub fn clear(&mut self) {
        self.messages = vec![Message::assistant(CLEARED_GREETING)];
    }

    /// Replace the whole session: new id, history reset to a greeting.
    pub fn new_session(&mut self) {
        *self = Self::create(NEW_SESSION_GREETING);
    }

    /// Owned copy of the history. Later appends are not visible through it.
    pub fn snapshot(&self) -> Vec<Message> {
        self.messages.clone()
    }

    /// Capture the session as a transcript stamped with `saved_at`.
    pub fn to_transcript(&self, saved_at: i64) -> Transcript {
        Transcript {
            session_id: self.id,
            messages: self.snapshot(),
            saved_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_seeds_greeting() {
        let store = SessionStore::create("Hi!");
        assert_eq!(store.messages(), &[Message::assistant("Hi!")]);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_create_generates_unique_ids() {
        let a = SessionStore::create("Hi!");
        let b = SessionStore::create("Hi!");
        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_append_preserves_order() {
        let mut store = SessionStore::create("Hi!");
        store.append_message(MessageRole::User, "Q1");
        store.append_message(MessageRole::Assistant, "R1");
        store.append_message(MessageRole::User, "Q2");

        let roles: Vec<MessageRole> = store.messages().iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::Assistant,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User
            ]
        );
        assert_eq!(store.messages()[3].content, "Q2");
    }

    #[test]
    fn test_clear_keeps_id() {
        let mut store = SessionStore::create("Hi!");
        let id = store.id();
        store.append_message(MessageRole::User, "Q1");

        store.clear();
        assert_eq!(store.id(), id);
        assert_eq!(store.messages(), &[Message::assistant(CLEARED_GREETING)]);
    }

    #[test]
    fn test_new_session_rotates_id() {
        let mut store = SessionStore::create("Hi!");
        let id = store.id();
        store.append_message(MessageRole::User, "Q1");

        store.new_session();
        assert_ne!(store.id(), id);
        assert_eq!(
            store.messages(),
            &[Message::assistant(NEW_SESSION_GREETING)]
        );
    }

    #[test]
    fn test_snapshot_is_detached() {
        let mut store = SessionStore::create("Hi!");
        let snapshot = store.snapshot();
        store.append_message(MessageRole::User, "later");

        assert_eq!(snapshot.len(), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_to_transcript() {
        let mut store = SessionStore::create("Hi!");
        store.append_message(MessageRole::User, "Q1");

        let transcript = store.to_transcript(1_700_000_000);
        assert_eq!(transcript.session_id, store.id());
        assert_eq!(transcript.messages, store.messages());
        assert_eq!(transcript.saved_at, 1_700_000_000);
    }
}
