//! Service configuration loaded from the environment.

use crate::services::gemini::DEFAULT_ENDPOINT;
use std::env;
use std::path::PathBuf;

const DEFAULT_PORT: u16 = 8081;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_UPLOAD_DIR: &str = "uploads";
const DEFAULT_MAX_PAYLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("GEMINI_API_KEY environment variable is required")]
    MissingApiKey,

    #[error("invalid value {value:?} for {var}")]
    InvalidValue { var: &'static str, value: String },

    #[error("GEMINI_ENDPOINT is not a valid URL: {0}")]
    InvalidEndpoint(#[from] url::ParseError),
}

/// Log output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub gemini_api_key: String,
    pub gemini_endpoint: String,
    pub host: String,
    pub port: u16,
    pub upload_dir: PathBuf,
    /// Body limit for JSON requests
    pub max_payload_bytes: usize,
    pub metrics_enabled: bool,
    pub log_format: LogFormat,
}

impl AppConfig {
    /// Defaults for everything except the API key.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            gemini_api_key: api_key.into(),
            gemini_endpoint: DEFAULT_ENDPOINT.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            upload_dir: PathBuf::from(DEFAULT_UPLOAD_DIR),
            max_payload_bytes: DEFAULT_MAX_PAYLOAD_BYTES,
            metrics_enabled: true,
            log_format: LogFormat::Text,
        }
    }

    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_key = env::var("GEMINI_API_KEY")
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let mut config = Self::with_api_key(api_key);

        if let Ok(endpoint) = env::var("GEMINI_ENDPOINT") {
            url::Url::parse(&endpoint)?;
            config.gemini_endpoint = endpoint;
        }

        if let Ok(host) = env::var("HOST") {
            config.host = host;
        }

        if let Ok(port) = env::var("PORT") {
            config.port = port
                .parse()
                .map_err(|_| ConfigError::InvalidValue { var: "PORT", value: port.clone() })?;
        }

        if let Ok(dir) = env::var("UPLOAD_DIR") {
            config.upload_dir = PathBuf::from(dir);
        }

        config.max_payload_bytes = env::var("MAX_PAYLOAD_BYTES")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_MAX_PAYLOAD_BYTES);

        config.metrics_enabled = env::var("METRICS_ENABLED")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(true);

        config.log_format = match env::var("LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => LogFormat::Json,
            _ => LogFormat::Text,
        };

        Ok(config)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}
