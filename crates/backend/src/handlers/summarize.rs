use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    Json,
};
use contracts::usecases::u101_summarize_meeting::{HealthResponse, SummarizeResponse};
use serde_json::json;

use crate::app_state::AppState;

/// Every failure on this surface is a status plus a `detail` body.
type ApiError = (StatusCode, Json<serde_json::Value>);

fn bad_request(detail: impl Into<String>) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({ "detail": detail.into() })),
    )
}

/// GET /
pub async fn root(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({
        "message": "Meeting Summarizer API",
        "mode": state.summarizer.mode().as_str(),
    }))
}

/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        mode: state.summarizer.mode(),
    })
}

/// POST /summarize
///
/// Handles meeting audio upload -> transcription -> summary generation.
pub async fn summarize(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<SummarizeResponse>, ApiError> {
    let upload = read_file_part(&mut multipart).await?;
    tracing::info!(
        "Summarizing upload '{}' ({} bytes)",
        upload.filename,
        upload.bytes.len()
    );

    let mode = state.summarizer.mode();
    match state.summarizer.summarize(&upload.filename, upload.bytes).await {
        Ok(summary) => Ok(Json(SummarizeResponse {
            mode,
            summary: summary.summary,
            transcript: summary.transcript,
            filename: Some(upload.filename),
            status: Some("success".to_string()),
            note: summary.note,
        })),
        Err(e) => {
            tracing::error!("Summarization failed: {e}");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({ "detail": format!("Processing failed: {e}") })),
            ))
        }
    }
}

#[derive(Debug)]
struct UploadedFile {
    filename: String,
    bytes: Vec<u8>,
}

/// Pull the `"file"` part out of the form and validate it. Parts under any
/// other name are skipped.
async fn read_file_part(multipart: &mut Multipart) -> Result<UploadedFile, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| bad_request(format!("Malformed upload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        if let Some(content_type) = field.content_type() {
            if !(content_type.starts_with("audio/") || content_type == "application/octet-stream")
            {
                return Err(bad_request("Please upload an audio file"));
            }
        }

        let filename = field.file_name().unwrap_or("upload").to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| bad_request(format!("Malformed upload: {e}")))?;
        if bytes.is_empty() {
            return Err(bad_request("Uploaded file is empty"));
        }

        return Ok(UploadedFile {
            filename,
            bytes: bytes.to_vec(),
        });
    }

    Err(bad_request("No file part in upload"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::llm::MockSummarizer;
    use axum::extract::FromRequest;
    use axum::http::Request;
    use contracts::usecases::u101_summarize_meeting::SummarizeMode;
    use std::sync::Arc;

    const BOUNDARY: &str = "test-boundary";

    fn multipart_request(parts: &[(&str, &str, Option<&str>, &[u8])]) -> Request<axum::body::Body> {
        let mut body = Vec::new();
        for (name, filename, content_type, payload) in parts {
            body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
            body.extend_from_slice(
                format!("Content-Disposition: form-data; name=\"{name}\"; filename=\"{filename}\"\r\n")
                    .as_bytes(),
            );
            if let Some(content_type) = content_type {
                body.extend_from_slice(format!("Content-Type: {content_type}\r\n").as_bytes());
            }
            body.extend_from_slice(b"\r\n");
            body.extend_from_slice(payload);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());

        Request::builder()
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(axum::body::Body::from(body))
            .unwrap()
    }

    async fn multipart_from(parts: &[(&str, &str, Option<&str>, &[u8])]) -> Multipart {
        Multipart::from_request(multipart_request(parts), &())
            .await
            .unwrap()
    }

    fn detail_of(error: &ApiError) -> String {
        error.1 .0["detail"].as_str().unwrap_or_default().to_string()
    }

    #[tokio::test]
    async fn accepts_an_audio_part() {
        let mut multipart = multipart_from(&[(
            "file",
            "meeting.mp3",
            Some("audio/mpeg"),
            b"fake-mp3-bytes",
        )])
        .await;
        let upload = read_file_part(&mut multipart).await.unwrap();
        assert_eq!(upload.filename, "meeting.mp3");
        assert_eq!(upload.bytes, b"fake-mp3-bytes");
    }

    #[tokio::test]
    async fn rejects_missing_file_part() {
        let mut multipart =
            multipart_from(&[("other", "meeting.mp3", Some("audio/mpeg"), b"bytes")]).await;
        let error = read_file_part(&mut multipart).await.unwrap_err();
        assert_eq!(error.0, StatusCode::BAD_REQUEST);
        assert_eq!(detail_of(&error), "No file part in upload");
    }

    #[tokio::test]
    async fn rejects_non_audio_content_type() {
        let mut multipart = multipart_from(&[(
            "file",
            "notes.pdf",
            Some("application/pdf"),
            b"%PDF-",
        )])
        .await;
        let error = read_file_part(&mut multipart).await.unwrap_err();
        assert_eq!(error.0, StatusCode::BAD_REQUEST);
        assert_eq!(detail_of(&error), "Please upload an audio file");
    }

    #[tokio::test]
    async fn rejects_empty_payload() {
        let mut multipart =
            multipart_from(&[("file", "meeting.mp3", Some("audio/mpeg"), b"")]).await;
        let error = read_file_part(&mut multipart).await.unwrap_err();
        assert_eq!(error.0, StatusCode::BAD_REQUEST);
        assert_eq!(detail_of(&error), "Uploaded file is empty");
    }

    #[tokio::test]
    async fn octet_stream_passes_the_type_check() {
        let mut multipart = multipart_from(&[(
            "file",
            "meeting.bin",
            Some("application/octet-stream"),
            b"bytes",
        )])
        .await;
        assert!(read_file_part(&mut multipart).await.is_ok());
    }

    #[tokio::test]
    async fn summarize_returns_the_mock_payload() {
        let state = AppState {
            summarizer: Arc::new(MockSummarizer),
        };
        let multipart = Multipart::from_request(
            multipart_request(&[("file", "meeting.mp3", Some("audio/mpeg"), b"bytes")]),
            &(),
        )
        .await
        .unwrap();

        let Json(response) = summarize(State(state), multipart).await.unwrap();
        assert_eq!(response.mode, SummarizeMode::Mock);
        assert!(response.transcript.contains("meeting.mp3"));
        assert!(response.summary.starts_with("Mock Summary:"));
        assert_eq!(response.filename.as_deref(), Some("meeting.mp3"));
        assert_eq!(response.status.as_deref(), Some("success"));
    }

    #[tokio::test]
    async fn health_reports_provider_mode() {
        let state = AppState {
            summarizer: Arc::new(MockSummarizer),
        };
        let Json(health) = health(State(state)).await;
        assert_eq!(health.status, "healthy");
        assert_eq!(health.mode, SummarizeMode::Mock);
    }
}
