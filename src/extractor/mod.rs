//! Turns a downloaded page into the plain text the summarizer reads.

pub mod model;
pub mod reader;

#[cfg(test)]
mod tests;

pub use model::{PageContent, normalize_whitespace};

use crate::fetcher::{BodyKind, PageResponse};

pub fn extract(resp: &PageResponse) -> PageContent {
    let (title, raw_text) = match resp.kind {
        BodyKind::Html => {
            let output = reader::read(&resp.body_utf8);
            (output.title, output.text)
        }
        BodyKind::PlainText => (None, resp.body_utf8.clone()),
    };

    let body = normalize_whitespace(&raw_text);
    let text = match &title {
        Some(title) if !body.is_empty() && !body.starts_with(title.as_str()) => {
            format!("{title}\n\n{body}")
        }
        Some(title) if body.is_empty() => title.clone(),
        _ => body,
    };

    PageContent {
        url: resp.url_final.clone(),
        title,
        text,
        fetched_at: resp.fetched_at,
    }
}
