use super::types::{MeetingSummarizer, MeetingSummary, SummarizeError};
use async_trait::async_trait;
use contracts::usecases::u101_summarize_meeting::SummarizeMode;

const MOCK_SUMMARY: &str = "Mock Summary:
1. KEY DISCUSSION POINTS:
- Project timeline review
- Budget planning

2. DECISIONS MADE:
- Approved Q4 budget
- Extended deadlines

3. ACTION ITEMS:
- John: Update project plan
- Jane: Schedule team meeting

Add OPENAI_API_KEY for real AI summaries.";

const MOCK_NOTE: &str = "Using mock data. Add OPENAI_API_KEY for real AI functionality.";

/// Placeholder pipeline used when no OpenAI API key is configured. Returns
/// fixed texts so the full upload flow stays exercisable offline.
pub struct MockSummarizer;

#[async_trait]
impl MeetingSummarizer for MockSummarizer {
    async fn summarize(
        &self,
        filename: &str,
        _audio: Vec<u8>,
    ) -> Result<MeetingSummary, SummarizeError> {
        Ok(MeetingSummary {
            transcript: format!(
                "Mock transcription of {filename}. Add OPENAI_API_KEY for real transcription."
            ),
            summary: MOCK_SUMMARY.to_string(),
            note: Some(MOCK_NOTE.to_string()),
        })
    }

    fn mode(&self) -> SummarizeMode {
        SummarizeMode::Mock
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn mock_mentions_the_uploaded_filename() {
        let summary = MockSummarizer
            .summarize("meeting.mp3", vec![1, 2, 3])
            .await
            .unwrap();
        assert!(summary.transcript.contains("meeting.mp3"));
        assert!(summary.summary.starts_with("Mock Summary:"));
        assert_eq!(summary.note.as_deref(), Some(MOCK_NOTE));
    }

    #[test]
    fn mock_reports_mock_mode() {
        assert_eq!(MockSummarizer.mode(), SummarizeMode::Mock);
    }
}
