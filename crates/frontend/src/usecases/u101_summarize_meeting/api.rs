use contracts::usecases::u101_summarize_meeting::{ApiErrorBody, SummarizeResponse};
use wasm_bindgen::JsCast;
use web_sys::{FormData, RequestInit, RequestMode, Response};

use super::state::UploadError;
use crate::shared::config::ApiConfig;

/// POST the selected audio file to `{base_url}/summarize` as multipart form
/// data under the part name `"file"`.
///
/// No headers are set explicitly; the browser supplies the multipart
/// boundary when the body is a `FormData`.
pub async fn upload_audio(
    config: &ApiConfig,
    file: &web_sys::File,
) -> Result<SummarizeResponse, UploadError> {
    let window =
        web_sys::window().ok_or_else(|| UploadError::Transport("No window object".to_string()))?;

    let form = FormData::new().map_err(|e| UploadError::Transport(format!("{e:?}")))?;
    form.append_with_blob("file", file)
        .map_err(|e| UploadError::Transport(format!("{e:?}")))?;

    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    let request = web_sys::Request::new_with_str_and_init(&config.url("/summarize"), &opts)
        .map_err(|e| UploadError::Transport(format!("Failed to create request: {e:?}")))?;

    let response_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| UploadError::Transport(format!("Fetch failed: {e:?}")))?;

    let response: Response = response_value
        .dyn_into()
        .map_err(|_| UploadError::Transport("Not a Response".to_string()))?;

    if !response.ok() {
        return Err(UploadError::Server {
            detail: error_detail(&response).await,
        });
    }

    let json = wasm_bindgen_futures::JsFuture::from(
        response
            .json()
            .map_err(|e| UploadError::Transport(format!("Failed to parse JSON: {e:?}")))?,
    )
    .await
    .map_err(|e| UploadError::Transport(format!("Failed to get JSON: {e:?}")))?;

    serde_wasm_bindgen::from_value(json).map_err(|e| UploadError::Transport(e.to_string()))
}

/// Best-effort `detail` extraction from a failure body. Anything that is not
/// JSON with a `detail` field collapses to the empty string, which the state
/// machine maps to the generic upload error.
async fn error_detail(response: &Response) -> String {
    let Ok(text_promise) = response.text() else {
        return String::new();
    };
    let text = wasm_bindgen_futures::JsFuture::from(text_promise)
        .await
        .ok()
        .and_then(|value| value.as_string())
        .unwrap_or_default();
    serde_json::from_str::<ApiErrorBody>(&text)
        .map(|body| body.detail)
        .unwrap_or_default()
}
