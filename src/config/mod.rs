//! Process-wide configuration.
//!
//! Everything is read once at startup by [`Config::from_env`] and then shared
//! read-only. A missing API key is a startup error: the server must not bind
//! a listener with a half-built configuration.

use std::env;

use axum::http::HeaderValue;
use thiserror::Error;

/// Environment variable names, public so tests and tooling can refer to them.
pub const ENV_GROQ_API_KEY: &str = "GROQ_API_KEY";
pub const ENV_LLM_MODEL: &str = "LLM_MODEL";
pub const ENV_USER_AGENT: &str = "USER_AGENT";
pub const ENV_GROQ_API_URL: &str = "GROQ_API_URL";
pub const ENV_LLM_MAX_RETRIES: &str = "LLM_MAX_RETRIES";
pub const ENV_BIND_ADDR: &str = "BIND_ADDR";
pub const ENV_ALLOWED_ORIGIN: &str = "ALLOWED_ORIGIN";
pub const ENV_LOG_FORMAT: &str = "LOG_FORMAT";

/// Defaults applied when the matching variable is unset.
pub const DEFAULT_MODEL: &str = "mixtral-8x7b-32768";
pub const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";
pub const DEFAULT_GROQ_API_URL: &str = "https://api.groq.com/openai/v1/chat/completions";
pub const DEFAULT_MAX_RETRIES: u32 = 2;
pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8000";
pub const DEFAULT_ALLOWED_ORIGIN: &str = "https://shivam-portfoliio.vercel.app";

/// Sampling temperature. Summaries must be reproducible, so this is not configurable.
const TEMPERATURE: f32 = 0.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} is required")]
    MissingVar(&'static str),

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: &'static str, reason: String },
}

/// Application runtime configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    api_key: String,
    model: String,
    user_agent: String,
    api_url: String,
    max_retries: u32,
    bind_addr: String,
    allowed_origin: String,
    log_format: LogFormat,
}

impl Config {
    /// Config with the given API key and every other field at its default.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            model: DEFAULT_MODEL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            api_url: DEFAULT_GROQ_API_URL.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            allowed_origin: DEFAULT_ALLOWED_ORIGIN.to_string(),
            log_format: LogFormat::Text,
        }
    }

    /// Load from the process environment (after merging a `.env` file, if any).
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. `from_env` is this over `std::env`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup(ENV_GROQ_API_KEY)
            .filter(|key| !key.trim().is_empty())
            .ok_or(ConfigError::MissingVar(ENV_GROQ_API_KEY))?;

        let mut config = Self::new(api_key);

        if let Some(model) = lookup(ENV_LLM_MODEL) {
            config.model = model;
        }
        if let Some(user_agent) = lookup(ENV_USER_AGENT) {
            HeaderValue::from_str(&user_agent).map_err(|e| ConfigError::InvalidValue {
                field: ENV_USER_AGENT,
                reason: e.to_string(),
            })?;
            config.user_agent = user_agent;
        }
        if let Some(api_url) = lookup(ENV_GROQ_API_URL) {
            url::Url::parse(&api_url).map_err(|e| ConfigError::InvalidValue {
                field: ENV_GROQ_API_URL,
                reason: e.to_string(),
            })?;
            config.api_url = api_url;
        }
        if let Some(raw) = lookup(ENV_LLM_MAX_RETRIES) {
            config.max_retries = raw.parse().map_err(|_| ConfigError::InvalidValue {
                field: ENV_LLM_MAX_RETRIES,
                reason: format!("expected a non-negative integer, got '{raw}'"),
            })?;
        }
        if let Some(bind_addr) = lookup(ENV_BIND_ADDR) {
            config.bind_addr = bind_addr;
        }
        if let Some(origin) = lookup(ENV_ALLOWED_ORIGIN) {
            config.allowed_origin = origin;
        }
        if let Some(format) = lookup(ENV_LOG_FORMAT) {
            config.log_format = match format.to_ascii_lowercase().as_str() {
                "json" => LogFormat::Json,
                "text" | "" => LogFormat::Text,
                other => {
                    return Err(ConfigError::InvalidValue {
                        field: ENV_LOG_FORMAT,
                        reason: format!("expected 'text' or 'json', got '{other}'"),
                    });
                }
            };
        }

        config.allowed_origin_header()?;
        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }
    /// Model identifier sent with every generation request.
    pub fn model(&self) -> &str {
        &self.model
    }
    /// `User-Agent` sent when fetching portfolio pages.
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }
    /// Chat completions endpoint of the inference provider.
    pub fn api_url(&self) -> &str {
        &self.api_url
    }
    pub fn max_retries(&self) -> u32 {
        self.max_retries
    }
    pub fn temperature(&self) -> f32 {
        TEMPERATURE
    }
    /// TCP bind address (host:port) for the HTTP server.
    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }
    pub fn allowed_origin(&self) -> &str {
        &self.allowed_origin
    }
    pub fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// The CORS origin as a header value.
    pub fn allowed_origin_header(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&self.allowed_origin).map_err(|e| ConfigError::InvalidValue {
            field: ENV_ALLOWED_ORIGIN,
            reason: e.to_string(),
        })
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
    pub fn with_api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = api_url.into();
        self
    }
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }
}
