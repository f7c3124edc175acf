//! Upload/result state machine for the summarize page.
//!
//! The page component owns one [`UploadState`] in a signal and funnels every
//! event through the transitions here; the view is a pure projection of the
//! state via [`UploadState::view`]. Keeping the machine free of DOM types
//! lets the whole contract run under plain `cargo test`.

use contracts::usecases::u101_summarize_meeting::{SummarizeMode, SummarizeResponse};

/// Shown when submit is pressed with no file chosen.
pub const VALIDATION_MESSAGE: &str = "Please select an audio file first";

/// Shown for a server rejection that carried no usable `detail`.
pub const GENERIC_UPLOAD_ERROR: &str = "Upload failed";

pub const MOCK_BANNER: &str = "⚠️ Using mock data - Add OPENAI_API_KEY for real AI";
pub const REAL_BANNER: &str = "✅ Using real AI processing";

/// Banner text for a result's mode.
pub fn mode_banner(mode: SummarizeMode) -> &'static str {
    match mode {
        SummarizeMode::Mock => MOCK_BANNER,
        SummarizeMode::Real => REAL_BANNER,
    }
}

/// Name and size of the file currently sitting in the picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    pub name: String,
    pub size: u64,
}

/// Failure of one submit attempt. All three variants end up in the same
/// error slot; only the text differs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadError {
    /// Submit pressed with nothing selected. Never reaches the network.
    Validation,
    /// Backend answered non-2xx; `detail` comes from the response body and
    /// may be empty.
    Server { detail: String },
    /// The request could not be sent, or a 2xx body could not be parsed.
    Transport(String),
}

impl UploadError {
    /// User-facing text for the error slot.
    pub fn message(&self) -> String {
        match self {
            UploadError::Validation => VALIDATION_MESSAGE.to_string(),
            UploadError::Server { detail } if detail.trim().is_empty() => {
                GENERIC_UPLOAD_ERROR.to_string()
            }
            UploadError::Server { detail } => detail.clone(),
            UploadError::Transport(message) => message.clone(),
        }
    }
}

/// Outcome of [`UploadState::begin_submit`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitGate {
    /// The in-flight flag is up; the caller must dispatch exactly one
    /// request and settle it.
    Dispatch,
    /// No file selected; the validation message has been stored instead.
    Rejected,
    /// A request is already outstanding; this call was a no-op.
    InFlight,
}

/// What the page should render, in priority order.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    Idle,
    Loading,
    Error(String),
    Result(SummarizeResponse),
}

#[derive(Debug, Clone, Default)]
pub struct UploadState {
    selected_file: Option<SelectedFile>,
    is_loading: bool,
    result: Option<SummarizeResponse>,
    error_message: String,
}

impl UploadState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_file(&self) -> Option<&SelectedFile> {
        self.selected_file.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.is_loading
    }

    pub fn result(&self) -> Option<&SummarizeResponse> {
        self.result.as_ref()
    }

    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// A file came out of the picker. Clears any previous outcome; an
    /// outstanding request (if any) stays outstanding.
    pub fn select_file(&mut self, name: impl Into<String>, size: u64) {
        self.selected_file = Some(SelectedFile {
            name: name.into(),
            size,
        });
        self.result = None;
        self.error_message.clear();
    }

    /// Re-entrancy gate for submit. Holds even when invoked
    /// programmatically, independent of the disabled trigger in the view.
    pub fn begin_submit(&mut self) -> SubmitGate {
        if self.is_loading {
            return SubmitGate::InFlight;
        }
        if self.selected_file.is_none() {
            self.error_message = VALIDATION_MESSAGE.to_string();
            return SubmitGate::Rejected;
        }
        self.error_message.clear();
        self.result = None;
        self.is_loading = true;
        SubmitGate::Dispatch
    }

    /// Apply the settlement of the outstanding request. Outcome and the
    /// loading flag change in the same mutation, so the next render sees
    /// them together.
    pub fn settle(&mut self, outcome: Result<SummarizeResponse, UploadError>) {
        match outcome {
            Ok(response) => {
                self.result = Some(response);
                self.error_message.clear();
            }
            Err(error) => {
                self.result = None;
                self.error_message = error.message();
            }
        }
        self.is_loading = false;
    }

    /// Pure projection for rendering: loading > error > result > idle.
    pub fn view(&self) -> ViewState {
        if self.is_loading {
            ViewState::Loading
        } else if !self.error_message.is_empty() {
            ViewState::Error(self.error_message.clone())
        } else if let Some(result) = &self.result {
            ViewState::Result(result.clone())
        } else {
            ViewState::Idle
        }
    }
}
