use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use url::Url;

/// Coarse classification of the body, decided from the Content-Type header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyKind {
    Html,
    PlainText,
}

impl BodyKind {
    pub fn from_content_type(content_type: &str) -> Option<Self> {
        let mime = content_type
            .split(';')
            .next()
            .unwrap_or("")
            .trim()
            .to_ascii_lowercase();
        match mime.as_str() {
            "text/html" | "application/xhtml+xml" => Some(Self::Html),
            "text/plain" => Some(Self::PlainText),
            _ => None,
        }
    }
}

/// A successfully downloaded and decoded page.
#[derive(Debug, Clone)]
pub struct PageResponse {
    pub url_final: Url,
    pub status: StatusCode,
    pub kind: BodyKind,
    pub body_utf8: String,
    /// Name of the encoding the body was decoded from (e.g. `UTF-8`).
    pub charset: &'static str,
    pub fetched_at: DateTime<Utc>,
}
