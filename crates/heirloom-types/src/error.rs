use std::path::PathBuf;

use thiserror::Error;

/// Transport-level failures talking to the webhook.
///
/// These never reach the user as errors: the webhook client renders them into
/// a warning string in place of a reply.
#[derive(Debug, Error)]
pub enum WebhookError {
    #[error("request timed out after {0}s")]
    Timeout(u64),

    #[error("connection failed: {0}")]
    Connect(String),

    #[error("{0}")]
    Request(String),

    #[error("failed to build HTTP client: {0}")]
    Client(String),
}

/// Errors from writing or reading transcript files.
#[derive(Debug, Error)]
pub enum TranscriptError {
    #[error("failed to serialize transcript: {0}")]
    Serialize(String),

    #[error("failed to write transcript '{}': {message}", path.display())]
    Write { path: PathBuf, message: String },

    #[error("failed to read transcripts from '{}': {message}", dir.display())]
    Read { dir: PathBuf, message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_webhook_error_display() {
        let err = WebhookError::Timeout(25);
        assert_eq!(err.to_string(), "request timed out after 25s");

        let err = WebhookError::Request("dns error".to_string());
        assert_eq!(err.to_string(), "dns error");
    }

    #[test]
    fn test_transcript_error_display() {
        let err = TranscriptError::Write {
            path: PathBuf::from("/readonly/transcript_1.json"),
            message: "permission denied".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "failed to write transcript '/readonly/transcript_1.json': permission denied"
        );
    }
}
