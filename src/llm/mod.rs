pub mod backoff;
pub mod client;
pub mod errors;

pub use client::GroqClient;
pub use errors::GenerationError;

use async_trait::async_trait;

#[cfg(test)]
use mockall::automock;

/// A text-generation backend: one prompt in, one completion out.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
