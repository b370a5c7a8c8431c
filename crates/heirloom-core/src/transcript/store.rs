//! TranscriptStore trait definition.

use std::path::PathBuf;

use heirloom_types::error::TranscriptError;
use heirloom_types::transcript::{Transcript, TranscriptSummary};

/// Durable storage for transcript documents.
///
/// Implementations live in heirloom-infra (e.g., `FileTranscriptStore`).
/// Uses native async fn in traits (RPITIT, Rust 2024 edition).
pub trait TranscriptStore: Send + Sync {
    /// Write a transcript as a new document and return where it landed.
    ///
    /// A transcript with the same `saved_at` as an earlier one replaces it.
    fn write(
        &self,
        transcript: &Transcript,
    ) -> impl std::future::Future<Output = Result<PathBuf, TranscriptError>> + Send;

    /// List saved transcripts, newest first.
    fn list(
        &self,
    ) -> impl std::future::Future<Output = Result<Vec<TranscriptSummary>, TranscriptError>> + Send;
}
