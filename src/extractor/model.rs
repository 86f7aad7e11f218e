use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static INLINE_SPACE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\u{a0}]+").unwrap());
static BLANK_LINES_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n{3,}").unwrap());

/// Plain text of a portfolio page, ready to be handed to the summarizer.
#[derive(Debug, Clone)]
pub struct PageContent {
    pub url: Url,
    pub title: Option<String>,
    pub text: String,
    pub fetched_at: DateTime<Utc>,
}

impl PageContent {
    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Collapse runs of spaces, trim every line and keep at most one blank line
/// between paragraphs.
pub fn normalize_whitespace(text: &str) -> String {
    let lines: Vec<String> = text
        .lines()
        .map(|line| INLINE_SPACE_REGEX.replace_all(line, " ").trim().to_string())
        .collect();
    let joined = lines.join("\n");
    BLANK_LINES_REGEX
        .replace_all(joined.trim(), "\n\n")
        .into_owned()
}
