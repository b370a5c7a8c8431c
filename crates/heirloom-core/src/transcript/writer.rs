//! TranscriptWriter -- snapshots a session into a [`TranscriptStore`].

use std::path::PathBuf;

use chrono::Utc;
use heirloom_types::error::TranscriptError;
use heirloom_types::transcript::TranscriptSummary;
use tracing::info;

use crate::chat::session::SessionStore;

use super::store::TranscriptStore;

/// Saves point-in-time transcripts of a session.
pub struct TranscriptWriter<S: TranscriptStore> {
    store: S,
}

impl<S: TranscriptStore> TranscriptWriter<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Access the transcript store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Save the session stamped with the current unix second.
    pub async fn save(&self, session: &SessionStore) -> Result<PathBuf, TranscriptError> {
        self.save_at(session, Utc::now().timestamp()).await
    }

    /// Save the session stamped with `saved_at`.
    ///
    /// Saving twice with the same `saved_at` overwrites the first document.
    pub async fn save_at(
        &self,
        session: &SessionStore,
        saved_at: i64,
    ) -> Result<PathBuf, TranscriptError> {
        let transcript = session.to_transcript(saved_at);
        let path = self.store.write(&transcript).await?;
        info!(
            session_id = %transcript.session_id,
            messages = transcript.messages.len(),
            path = %path.display(),
            "Transcript saved"
        );
        Ok(path)
    }

    /// List saved transcripts, newest first.
    pub async fn list(&self) -> Result<Vec<TranscriptSummary>, TranscriptError> {
        self.store.list().await
    }
}
