//! Groq chat-completions client.
//!
//! Groq serves an OpenAI-compatible API, so the wire types below follow the
//! OpenAI chat schema. Retries live here, inside the client, so callers see a
//! single call that either produced text or failed for good.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::errors::error_chain;
use crate::llm::{TextGenerator, backoff::calculate_backoff_delay, errors::GenerationError};

const DEFAULT_RETRY_BASE_DELAY: Duration = Duration::from_millis(500);

pub struct GroqClient {
    client: Client,
    api_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_retries: u32,
    retry_base_delay: Duration,
}

impl GroqClient {
    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        Ok(Self {
            client: Client::builder().build()?,
            api_url: config.api_url().to_string(),
            api_key: config.api_key().to_string(),
            model: config.model().to_string(),
            temperature: config.temperature(),
            max_retries: config.max_retries(),
            retry_base_delay: DEFAULT_RETRY_BASE_DELAY,
        })
    }

    /// Base delay of the retry backoff. Zero disables waiting between attempts.
    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    async fn complete_once(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            temperature: self.temperature,
        };

        let response = self
            .client
            .post(&self.api_url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(error_chain(&e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::api(status, &body));
        }

        let chat_response: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::MalformedResponse(error_chain(&e)))?;

        chat_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or(GenerationError::EmptyResponse)
    }
}

#[async_trait]
impl TextGenerator for GroqClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let mut attempt = 0;
        loop {
            match self.complete_once(prompt).await {
                Ok(text) => {
                    debug!(
                        model = %self.model,
                        attempt,
                        chars = text.chars().count(),
                        "completion received"
                    );
                    return Ok(text);
                }
                Err(err) if err.is_retryable() && attempt < self.max_retries => {
                    let delay = calculate_backoff_delay(attempt, self.retry_base_delay);
                    attempt += 1;
                    warn!(
                        model = %self.model,
                        attempt,
                        max_retries = self.max_retries,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "generation request failed, retrying"
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(err) => {
                    if attempt > 0 {
                        info!(
                            model = %self.model,
                            attempts = attempt + 1,
                            "giving up on generation request"
                        );
                    }
                    return Err(err);
                }
            }
        }
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    temperature: f32,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: MessageContent,
}

#[derive(Deserialize)]
struct MessageContent {
    content: Option<String>,
}
