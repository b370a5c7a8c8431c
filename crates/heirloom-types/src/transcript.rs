//! Transcript artifact types.
//!
//! A transcript is a point-in-time snapshot of one session's history. Each
//! save produces an independent file named after its `saved_at` second.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::chat::Message;

/// On-disk transcript document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transcript {
    pub session_id: Uuid,
    pub messages: Vec<Message>,
    /// Unix timestamp in seconds.
    pub saved_at: i64,
}

impl Transcript {
    /// File name for this transcript: `transcript_{saved_at}.json`.
    ///
    /// Two transcripts saved within the same second share a name.
    pub fn file_name(&self) -> String {
        file_name_for(self.saved_at)
    }
}

/// File name used for a transcript saved at `saved_at`.
pub fn file_name_for(saved_at: i64) -> String {
    format!("transcript_{saved_at}.json")
}

/// Listing entry for a transcript found on disk.
#[derive(Debug, Clone, Serialize)]
pub struct TranscriptSummary {
    pub path: PathBuf,
    pub session_id: Uuid,
    pub saved_at: i64,
    pub message_count: usize,
}

impl TranscriptSummary {
    pub fn saved_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.saved_at, 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_from_timestamp() {
        let transcript = Transcript {
            session_id: Uuid::now_v7(),
            messages: Vec::new(),
            saved_at: 1_760_600_000,
        };
        assert_eq!(transcript.file_name(), "transcript_1760600000.json");
    }

    #[test]
    fn test_transcript_field_names() {
        let id = Uuid::now_v7();
        let transcript = Transcript {
            session_id: id,
            messages: vec![Message::assistant("Hi!")],
            saved_at: 42,
        };
        let json = serde_json::to_value(&transcript).unwrap();
        assert_eq!(json["session_id"], serde_json::json!(id.to_string()));
        assert_eq!(json["saved_at"], serde_json::json!(42));
        assert_eq!(json["messages"][0]["role"], serde_json::json!("assistant"));
    }

    #[test]
    fn test_summary_saved_at_utc() {
        let summary = TranscriptSummary {
            path: PathBuf::from("transcript_0.json"),
            session_id: Uuid::now_v7(),
            saved_at: 0,
            message_count: 1,
        };
        assert_eq!(summary.saved_at_utc().unwrap().timestamp(), 0);
    }
}
