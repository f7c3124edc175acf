use super::types::{MeetingSummarizer, MeetingSummary, SummarizeError};
use async_openai::{
    config::OpenAIConfig,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use contracts::usecases::u101_summarize_meeting::SummarizeMode;
use serde::Deserialize;

const TRANSCRIPTION_URL: &str = "https://api.openai.com/v1/audio/transcriptions";
const TRANSCRIPTION_MODEL: &str = "whisper-1";
const SUMMARY_MODEL: &str = "gpt-4o-mini";

/// Real pipeline: Whisper transcription followed by a chat-completion
/// summary over the fixed meeting prompt.
pub struct OpenAiSummarizer {
    client: Client<OpenAIConfig>,
    http: reqwest::Client,
    api_key: String,
}

#[derive(Deserialize)]
struct TranscriptionResponse {
    text: String,
}

impl OpenAiSummarizer {
    pub fn new(api_key: String) -> Self {
        let config = OpenAIConfig::new().with_api_key(api_key.clone());
        Self {
            client: Client::with_config(config),
            http: reqwest::Client::new(),
            api_key,
        }
    }

    fn summary_prompt(transcript: &str) -> String {
        format!(
            "Summarize this meeting transcript:\n\
             {transcript}\n\
             \n\
             Provide:\n\
             1. Key discussion points\n\
             2. Decisions made\n\
             3. Action items with responsible people"
        )
    }

    fn classify(error_text: String, fallback: fn(String) -> SummarizeError) -> SummarizeError {
        if error_text.contains("401") || error_text.contains("authentication") {
            SummarizeError::AuthError(error_text)
        } else if error_text.contains("429") || error_text.contains("rate limit") {
            SummarizeError::RateLimitExceeded
        } else {
            fallback(error_text)
        }
    }

    /// Whisper call. The audio endpoint takes multipart form data, so this
    /// goes over a plain HTTP client rather than the typed chat client.
    async fn transcribe(&self, filename: &str, audio: Vec<u8>) -> Result<String, SummarizeError> {
        let part = reqwest::multipart::Part::bytes(audio)
            .file_name(filename.to_string())
            .mime_str("application/octet-stream")
            .map_err(|e| SummarizeError::Transcription(e.to_string()))?;
        let form = reqwest::multipart::Form::new()
            .part("file", part)
            .text("model", TRANSCRIPTION_MODEL);

        let response = self
            .http
            .post(TRANSCRIPTION_URL)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| Self::classify(e.to_string(), SummarizeError::Transcription))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Self::classify(
                format!("HTTP {status}: {body}"),
                SummarizeError::Transcription,
            ));
        }

        let parsed: TranscriptionResponse = response
            .json()
            .await
            .map_err(|e| SummarizeError::Transcription(e.to_string()))?;
        Ok(parsed.text)
    }

    async fn generate_summary(&self, transcript: &str) -> Result<String, SummarizeError> {
        let messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestUserMessageArgs::default()
                .content(Self::summary_prompt(transcript))
                .build()
                .map_err(|e| SummarizeError::Completion(e.to_string()))?
                .into()];

        let request = CreateChatCompletionRequestArgs::default()
            .model(SUMMARY_MODEL)
            .messages(messages)
            .build()
            .map_err(|e| SummarizeError::Completion(e.to_string()))?;

        let response = self
            .client
            .chat()
            .create(request)
            .await
            .map_err(|e| Self::classify(e.to_string(), SummarizeError::Completion))?;

        let choice = response
            .choices
            .first()
            .ok_or_else(|| SummarizeError::Completion("No response from API".to_string()))?;

        Ok(choice.message.content.clone().unwrap_or_default())
    }
}

#[async_trait]
impl MeetingSummarizer for OpenAiSummarizer {
    async fn summarize(
        &self,
        filename: &str,
        audio: Vec<u8>,
    ) -> Result<MeetingSummary, SummarizeError> {
        let transcript = self.transcribe(filename, audio).await?;
        let summary = self.generate_summary(&transcript).await?;

        Ok(MeetingSummary {
            transcript,
            summary,
            note: None,
        })
    }

    fn mode(&self) -> SummarizeMode {
        SummarizeMode::Real
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prompt_embeds_the_transcript() {
        let prompt = OpenAiSummarizer::summary_prompt("we agreed to ship on friday");
        assert!(prompt.contains("we agreed to ship on friday"));
        assert!(prompt.contains("Key discussion points"));
        assert!(prompt.contains("Action items"));
    }

    #[test]
    fn auth_and_rate_limit_errors_are_classified() {
        let auth = OpenAiSummarizer::classify(
            "HTTP 401 Unauthorized".to_string(),
            SummarizeError::Transcription,
        );
        assert!(matches!(auth, SummarizeError::AuthError(_)));

        let limited = OpenAiSummarizer::classify(
            "rate limit hit".to_string(),
            SummarizeError::Completion,
        );
        assert!(matches!(limited, SummarizeError::RateLimitExceeded));

        let other =
            OpenAiSummarizer::classify("boom".to_string(), SummarizeError::Completion);
        assert!(matches!(other, SummarizeError::Completion(_)));
    }
}
