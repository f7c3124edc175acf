use std::sync::Arc;

use crate::shared::llm::MeetingSummarizer;

/// Shared per-process state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub summarizer: Arc<dyn MeetingSummarizer>,
}
