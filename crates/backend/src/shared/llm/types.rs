use async_trait::async_trait;
use contracts::usecases::u101_summarize_meeting::SummarizeMode;
use thiserror::Error;

/// Summarization pipeline errors
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("Transcription failed: {0}")]
    Transcription(String),

    #[error("Summary generation failed: {0}")]
    Completion(String),

    #[error("Authentication error: {0}")]
    AuthError(String),

    #[error("Rate limit exceeded")]
    RateLimitExceeded,
}

/// Transcript plus generated summary for one uploaded recording.
#[derive(Debug, Clone)]
pub struct MeetingSummary {
    pub transcript: String,
    pub summary: String,
    pub note: Option<String>,
}

/// Seam between the HTTP surface and the summarization pipeline.
#[async_trait]
pub trait MeetingSummarizer: Send + Sync {
    /// Transcribe the uploaded audio and generate a summary of it.
    async fn summarize(
        &self,
        filename: &str,
        audio: Vec<u8>,
    ) -> Result<MeetingSummary, SummarizeError>;

    /// Which response mode this provider reports on the wire.
    fn mode(&self) -> SummarizeMode;
}
