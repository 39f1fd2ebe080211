use crate::error::DocsumError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Default chat completion endpoint
pub const DEFAULT_OPENAI_BASE_URL: &str = "https://api.openai.com/v1";

/// Default completion model
pub const DEFAULT_LLM_MODEL: &str = "gpt-4o";

/// docsum application configuration
#[derive(Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// OpenAI API key (read once at startup, may be absent)
    #[serde(skip_serializing)]
    pub openai_api_key: Option<String>,

    /// Chat completion API base URL
    pub openai_base_url: String,

    /// Completion model name
    pub llm_model: String,

    /// Server bind address
    pub server_host: String,

    /// Server port
    pub server_port: u16,

    /// Log directory
    pub log_dir: PathBuf,

    /// Log level
    pub log_level: String,
}

// Hand-written so the API key never reaches a log line
impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_key", &self.openai_api_key.as_ref().map(|_| "***"))
            .field("openai_base_url", &self.openai_base_url)
            .field("llm_model", &self.llm_model)
            .field("server_host", &self.server_host)
            .field("server_port", &self.server_port)
            .field("log_dir", &self.log_dir)
            .field("log_level", &self.log_level)
            .finish()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            openai_api_key: None,
            openai_base_url: DEFAULT_OPENAI_BASE_URL.to_string(),
            llm_model: DEFAULT_LLM_MODEL.to_string(),
            server_host: "0.0.0.0".to_string(),
            server_port: 8080,
            log_dir: PathBuf::from("./log"),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables and .env file
    ///
    /// A missing `OPENAI_API_KEY` is not an error here; it surfaces when a
    /// completion is attempted.
    pub fn from_env() -> Result<Self, DocsumError> {
        // Load .env file (ignore if not exists)
        let _ = dotenv::dotenv();

        let config = Self {
            openai_api_key: std::env::var("OPENAI_API_KEY")
                .ok()
                .filter(|key| !key.trim().is_empty()),
            openai_base_url: std::env::var("OPENAI_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_OPENAI_BASE_URL.to_string()),
            llm_model: std::env::var("LLM_MODEL")
                .unwrap_or_else(|_| DEFAULT_LLM_MODEL.to_string()),
            server_host: std::env::var("SERVER_HOST")
                .unwrap_or_else(|_| "0.0.0.0".to_string()),
            server_port: std::env::var("SERVER_PORT")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(8080),
            log_dir: std::env::var("LOG_DIR")
                .ok()
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("./log")),
            log_level: std::env::var("LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
        };

        config.validate()?;

        Ok(config)
    }

    /// Get server bind address (host:port)
    pub fn server_bind_address(&self) -> String {
        format!("{}:{}", self.server_host, self.server_port)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), DocsumError> {
        if self.llm_model.trim().is_empty() {
            return Err(DocsumError::config("LLM model name cannot be empty"));
        }

        if !self.openai_base_url.starts_with("http://")
            && !self.openai_base_url.starts_with("https://") {
            return Err(DocsumError::config(
                "OpenAI base URL must start with http:// or https://"
            ));
        }

        if self.server_port == 0 {
            return Err(DocsumError::config("Server port cannot be 0"));
        }

        Ok(())
    }
}
