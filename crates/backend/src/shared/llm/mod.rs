pub mod mock_provider;
pub mod openai_provider;
pub mod types;

pub use mock_provider::MockSummarizer;
pub use openai_provider::OpenAiSummarizer;
pub use types::{MeetingSummarizer, MeetingSummary, SummarizeError};
