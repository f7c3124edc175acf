//! Client-side configuration.

/// Base URL used when `API_BASE_URL` is not set at build time.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Location of the summarization backend.
///
/// Resolved once when the page component is created and handed to the API
/// call explicitly, so tests can point the client anywhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Read the `API_BASE_URL` compile-time environment value, falling back
    /// to [`DEFAULT_BASE_URL`] when unset.
    pub fn from_env() -> Self {
        Self::new(option_env!("API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self { base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an API route. `route` starts with a slash.
    pub fn url(&self, route: &str) -> String {
        format!("{}{}", self.base_url, route)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_localhost() {
        assert_eq!(ApiConfig::default().base_url(), "http://localhost:8000");
    }

    #[test]
    fn trailing_slashes_are_trimmed() {
        let config = ApiConfig::new("https://summarizer.example.com/");
        assert_eq!(config.base_url(), "https://summarizer.example.com");
        assert_eq!(
            config.url("/summarize"),
            "https://summarizer.example.com/summarize"
        );
    }
}
