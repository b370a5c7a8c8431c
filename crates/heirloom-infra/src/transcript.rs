//! JSON-file transcript store.
//!
//! Each transcript is one pretty-printed JSON document named
//! `transcript_{saved_at}.json` in a single directory.

use std::path::{Path, PathBuf};

use heirloom_core::transcript::store::TranscriptStore;
use heirloom_types::error::TranscriptError;
use heirloom_types::transcript::{Transcript, TranscriptSummary};

const FILE_PREFIX: &str = "transcript_";
const FILE_SUFFIX: &str = ".json";

/// Filesystem implementation of [`TranscriptStore`].
///
/// All operations go through `tokio::fs` for async I/O.
pub struct FileTranscriptStore {
    dir: PathBuf,
}

impl FileTranscriptStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Directory transcripts are written to.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn is_transcript_file(name: &str) -> bool {
        name.starts_with(FILE_PREFIX) && name.ends_with(FILE_SUFFIX)
    }

    async fn read_summary(path: PathBuf) -> Option<TranscriptSummary> {
        let content = match tokio::fs::read_to_string(&path).await {
            Ok(content) => content,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping unreadable transcript");
                return None;
            }
        };
        match serde_json::from_str::<Transcript>(&content) {
            Ok(transcript) => Some(TranscriptSummary {
                path,
                session_id: transcript.session_id,
                saved_at: transcript.saved_at,
                message_count: transcript.messages.len(),
            }),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Skipping malformed transcript");
                None
            }
        }
    }
}

impl TranscriptStore for FileTranscriptStore {
    async fn write(&self, transcript: &Transcript) -> Result<PathBuf, TranscriptError> {
        let path = self.dir.join(transcript.file_name());
        let content = serde_json::to_string_pretty(transcript)
            .map_err(|e| TranscriptError::Serialize(e.to_string()))?;

        let write_err = |e: std::io::Error| TranscriptError::Write {
            path: path.clone(),
            message: e.to_string(),
        };
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(write_err)?;
        tokio::fs::write(&path, content).await.map_err(write_err)?;

        Ok(path)
    }

    async fn list(&self) -> Result<Vec<TranscriptSummary>, TranscriptError> {
        let read_err = |e: std::io::Error| TranscriptError::Read {
            dir: self.dir.clone(),
            message: e.to_string(),
        };

        let mut entries = match tokio::fs::read_dir(&self.dir).await {
            Ok(entries) => entries,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(read_err(e)),
        };

        let mut summaries = Vec::new();
        while let Some(entry) = entries.next_entry().await.map_err(read_err)? {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if !Self::is_transcript_file(name) {
                continue;
            }
            if let Some(summary) = Self::read_summary(entry.path()).await {
                summaries.push(summary);
            }
        }

        summaries.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));
        Ok(summaries)
    }
}
