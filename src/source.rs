//! Where page text comes from.
//!
//! The request handler only sees [`ContentSource`]; production wires in
//! [`WebPageSource`] and tests substitute doubles.

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, instrument};

#[cfg(test)]
use mockall::automock;

use crate::{
    extractor::{self, PageContent},
    fetcher::{FetchError, PageFetcher},
};

/// A fetch failure tied to the URL that caused it.
#[derive(Debug, Error)]
#[error("failed to fetch {url}: {source}")]
pub struct SourceError {
    pub url: String,
    #[source]
    pub source: FetchError,
}

impl SourceError {
    pub fn new(url: impl Into<String>, source: FetchError) -> Self {
        Self {
            url: url.into(),
            source,
        }
    }
}

#[cfg_attr(test, automock)]
#[async_trait]
pub trait ContentSource: Send + Sync {
    /// Retrieve the text of the page at `url`. Empty pages are an error.
    async fn fetch(&self, url: &str) -> Result<PageContent, SourceError>;
}

/// Downloads a page over HTTP and reduces it to plain text.
#[derive(Debug, Clone)]
pub struct WebPageSource {
    fetcher: PageFetcher,
}

impl WebPageSource {
    pub fn new(fetcher: PageFetcher) -> Self {
        Self { fetcher }
    }
}

#[async_trait]
impl ContentSource for WebPageSource {
    #[instrument(skip(self))]
    async fn fetch(&self, url: &str) -> Result<PageContent, SourceError> {
        let response = self
            .fetcher
            .fetch(url)
            .await
            .map_err(|e| SourceError::new(url, e))?;

        let content = extractor::extract(&response);
        if content.is_empty() {
            return Err(SourceError::new(url, FetchError::NoContent));
        }

        info!(
            charset = response.charset,
            chars = content.text.chars().count(),
            "fetched page content"
        );
        Ok(content)
    }
}
