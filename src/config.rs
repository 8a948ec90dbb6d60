use std::env;

/// Environment variable names consumed by the backend adapters. Kept as
/// constants so ConfigurationMissing errors name the exact variable to set.
pub const OPEN_AI_KEY: &str = "OPEN_AI_KEY";
pub const NVIDIA_LLAMA_URL: &str = "NVIDIA_LLAMA_URL";
pub const NVIDIA_API_KEY: &str = "NVIDIA_API_KEY";
pub const OLLAMA_URL: &str = "OLLAMA_URL";

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub open_ai_key: Option<String>,
    pub nvidia_llama_url: Option<String>,
    pub nvidia_api_key: Option<String>,
    pub ollama_url: Option<String>,
}

impl Config {
    /// Read configuration from the environment once at startup. Backend
    /// credentials are optional here: a missing variable only becomes an
    /// error when the backend that needs it is actually selected.
    pub fn from_env() -> Self {
        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            open_ai_key: non_empty(env::var(OPEN_AI_KEY).ok()),
            nvidia_llama_url: non_empty(env::var(NVIDIA_LLAMA_URL).ok()),
            nvidia_api_key: non_empty(env::var(NVIDIA_API_KEY).ok()),
            ollama_url: non_empty(env::var(OLLAMA_URL).ok()),
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
