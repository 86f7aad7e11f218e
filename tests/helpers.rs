#![allow(dead_code)]

use async_trait::async_trait;
use axum::{Router, http::HeaderValue};
use std::{
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
    time::Duration,
};
use url::Url;

use portfolio_summarizer::{
    app_state::AppState,
    extractor::PageContent,
    fetcher::FetchError,
    llm::{GenerationError, TextGenerator},
    router::build_router,
    source::{ContentSource, SourceError},
    summarizer::Summarizer,
};

pub const TEST_ORIGIN: &str = "https://portfolio.example.com";

pub fn test_app(source: Arc<dyn ContentSource>, generator: Arc<dyn TextGenerator>) -> Router {
    let state = AppState::new(source, Summarizer::new(generator));
    build_router(state, HeaderValue::from_static(TEST_ORIGIN))
}

pub fn chat_completion(content: &str) -> serde_json::Value {
    serde_json::json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "mixtral-8x7b-32768",
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }]
    })
}

/// Serves page text after a delay; URLs containing "missing" fail.
pub struct DelayedSource {
    pub delay: Duration,
}

#[async_trait]
impl ContentSource for DelayedSource {
    async fn fetch(&self, url: &str) -> Result<PageContent, SourceError> {
        tokio::time::sleep(self.delay).await;
        if url.contains("missing") {
            return Err(SourceError::new(url, FetchError::NoContent));
        }
        Ok(PageContent {
            url: Url::parse(url).expect("test urls are valid"),
            title: None,
            text: format!("portfolio at {url}"),
            fetched_at: chrono::Utc::now(),
        })
    }
}

/// Echoes the page line of the prompt after a delay and counts calls.
pub struct EchoGenerator {
    pub delay: Duration,
    pub calls: AtomicUsize,
}

impl EchoGenerator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextGenerator for EchoGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        tokio::time::sleep(self.delay).await;
        let page_line = prompt
            .lines()
            .find(|line| line.starts_with("portfolio at "))
            .unwrap_or_default();
        Ok(format!("summary of {page_line}"))
    }
}
