use std::sync::Arc;

use thiserror::Error;

use crate::{
    config::{Config, ConfigError},
    fetcher::PageFetcher,
    llm::GroqClient,
    source::{ContentSource, WebPageSource},
    summarizer::Summarizer,
};

/// Anything that stops the server from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("failed to build http client: {0}")]
    HttpClient(#[from] reqwest::Error),
}

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ContentSource>,
    pub summarizer: Arc<Summarizer>,
}

impl AppState {
    pub fn new(source: Arc<dyn ContentSource>, summarizer: Summarizer) -> Self {
        Self {
            source,
            summarizer: Arc::new(summarizer),
        }
    }

    /// Production wiring: HTTP page source plus the Groq-backed summarizer.
    pub fn from_config(config: &Config) -> Result<Self, StartupError> {
        let fetcher = PageFetcher::new(config.user_agent())?;
        let generator = GroqClient::from_config(config)?;
        Ok(Self::new(
            Arc::new(WebPageSource::new(fetcher)),
            Summarizer::new(Arc::new(generator)),
        ))
    }
}
