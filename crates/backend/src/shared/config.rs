use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory the built frontend is served from.
    #[serde(default = "default_static_dir")]
    pub static_dir: String,
}

fn default_static_dir() -> String {
    "dist".to_string()
}

/// Default configuration embedded in the binary
const DEFAULT_CONFIG: &str = r#"
[server]
port = 8000
static_dir = "dist"
"#;

/// Load configuration from config.toml file
///
/// Search order:
/// 1. Next to the executable (for production)
/// 2. Falls back to embedded default config
pub fn load_config() -> anyhow::Result<Config> {
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            let config_path = exe_dir.join("config.toml");

            if config_path.exists() {
                tracing::info!("Loading config from: {}", config_path.display());
                let contents = std::fs::read_to_string(&config_path)?;
                let config: Config = toml::from_str(&contents)?;
                return Ok(config);
            }
        }
    }

    tracing::info!("Using default embedded configuration");
    let config: Config = toml::from_str(DEFAULT_CONFIG)?;
    Ok(config)
}

/// Port the server binds to. A `PORT` environment variable (as set by the
/// usual hosting platforms) overrides the configured value.
pub fn effective_port(config: &Config) -> u16 {
    parse_port(std::env::var("PORT").ok(), config.server.port)
}

fn parse_port(raw: Option<String>, fallback: u16) -> u16 {
    raw.and_then(|value| value.trim().parse().ok())
        .unwrap_or(fallback)
}

/// OpenAI API key from the environment. An empty or whitespace-only value
/// counts as absent, which puts the service in mock mode.
pub fn openai_api_key() -> Option<String> {
    normalize_key(std::env::var("OPENAI_API_KEY").ok())
}

fn normalize_key(raw: Option<String>) -> Option<String> {
    raw.map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
