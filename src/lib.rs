//! HTTP service that fetches a portfolio website and returns an LLM-written
//! summary of it.

pub mod app_state;
pub mod config;
pub mod errors;
pub mod extractor;
pub mod fetcher;
pub mod health;
pub mod llm;
pub mod router;
pub mod source;
pub mod summarizer;
pub mod summary;
pub mod telemetry;
