pub mod response;

pub use response::{ApiErrorBody, HealthResponse, SummarizeMode, SummarizeResponse};
