use serde::{Deserialize, Serialize};

/// Which pipeline produced the response.
///
/// `Mock` signals that the backend answered with placeholder data because no
/// OpenAI API key is configured; `Real` means an actual transcription and
/// summary were generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummarizeMode {
    Real,
    Mock,
}

impl Default for SummarizeMode {
    // A response that does not name its mode must not be presented as real AI
    // output.
    fn default() -> Self {
        SummarizeMode::Mock
    }
}

impl SummarizeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummarizeMode::Real => "real",
            SummarizeMode::Mock => "mock",
        }
    }
}

/// Successful body of `POST /summarize`.
///
/// `summary` and `transcript` default to empty strings when absent, the
/// client renders whatever is present verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummarizeResponse {
    #[serde(default)]
    pub mode: SummarizeMode,

    #[serde(default)]
    pub summary: String,

    #[serde(default)]
    pub transcript: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Error body of a non-2xx `POST /summarize` response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub detail: String,
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub mode: SummarizeMode,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&SummarizeMode::Real).unwrap(), "\"real\"");
        assert_eq!(serde_json::to_string(&SummarizeMode::Mock).unwrap(), "\"mock\"");
    }

    #[test]
    fn full_response_round_trips() {
        let json = r#"{
            "status": "success",
            "mode": "mock",
            "filename": "meeting.mp3",
            "transcript": "T",
            "summary": "S",
            "note": "Using mock data. Add OPENAI_API_KEY for real AI functionality."
        }"#;
        let response: SummarizeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.mode, SummarizeMode::Mock);
        assert_eq!(response.summary, "S");
        assert_eq!(response.transcript, "T");
        assert_eq!(response.filename.as_deref(), Some("meeting.mp3"));

        let back: SummarizeResponse =
            serde_json::from_str(&serde_json::to_string(&response).unwrap()).unwrap();
        assert_eq!(back, response);
    }

    #[test]
    fn absent_summary_and_transcript_deserialize_empty() {
        let response: SummarizeResponse = serde_json::from_str(r#"{"mode": "real"}"#).unwrap();
        assert_eq!(response.mode, SummarizeMode::Real);
        assert_eq!(response.summary, "");
        assert_eq!(response.transcript, "");
        assert_eq!(response.filename, None);
    }

    #[test]
    fn whitespace_in_text_fields_survives() {
        let json = "{\"mode\":\"real\",\"summary\":\"  line one\\n\\nline two  \",\"transcript\":\"\\ta\\nb\\n\"}";
        let response: SummarizeResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.summary, "  line one\n\nline two  ");
        assert_eq!(response.transcript, "\ta\nb\n");
    }

    #[test]
    fn error_body_without_detail_yields_empty_string() {
        let body: ApiErrorBody = serde_json::from_str("{}").unwrap();
        assert_eq!(body.detail, "");

        let body: ApiErrorBody =
            serde_json::from_str(r#"{"detail": "model unavailable"}"#).unwrap();
        assert_eq!(body.detail, "model unavailable");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let response: SummarizeResponse =
            serde_json::from_str(r#"{"mode": "real", "summary": "S", "extra": 42}"#).unwrap();
        assert_eq!(response.summary, "S");
    }
}
