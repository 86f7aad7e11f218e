use chrono::Utc;
use reqwest::StatusCode;
use url::Url;

use crate::extractor::extract;
use crate::fetcher::types::{BodyKind, PageResponse};

const PORTFOLIO_HTML: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Jane Doe - Software Engineer</title>
  <style>.hero { display: flex; }</style>
  <script>console.log("tracking");</script>
</head>
<body>
  <nav><a href="/">Home</a> <a href="/projects">Projects</a></nav>
  <header><h1>Jane Doe</h1><p>Senior Backend Engineer</p></header>
  <section id="experience">
    <h2>Experience</h2>
    <ul>
      <li>Acme Corp, 2019 - 2024: led the payments platform rewrite</li>
      <li>Initech, 2016 - 2019: built internal data pipelines</li>
    </ul>
  </section>
  <section id="skills"><h2>Skills</h2><p>Rust, Go, PostgreSQL, Kubernetes</p></section>
  <noscript>Please enable JavaScript</noscript>
</body>
</html>"#;

#[test]
fn test_extract_portfolio_page() {
    let response = create_test_response(PORTFOLIO_HTML, BodyKind::Html, "https://jane.dev/");
    let content = extract(&response);

    assert_eq!(content.title.as_deref(), Some("Jane Doe - Software Engineer"));
    assert!(content.text.starts_with("Jane Doe - Software Engineer\n\n"));
    assert!(content.text.contains("Senior Backend Engineer"));
    assert!(content.text.contains("Acme Corp, 2019 - 2024"));
    assert!(content.text.contains("Rust, Go, PostgreSQL, Kubernetes"));
    assert!(!content.text.contains("tracking"));
    assert!(!content.text.contains("display: flex"));
    assert!(!content.text.contains("enable JavaScript"));
    assert!(!content.text.contains("  "));
    assert_eq!(content.url.as_str(), "https://jane.dev/");
}

#[test]
fn test_extract_plain_text() {
    let response = create_test_response(
        "  Jane Doe\n\n\n\nRust   engineer  ",
        BodyKind::PlainText,
        "https://jane.dev/resume.txt",
    );
    let content = extract(&response);

    assert!(content.title.is_none());
    assert_eq!(content.text, "Jane Doe\n\nRust engineer");
}

#[test]
fn test_extract_script_only_page_is_empty() {
    let html = r#"<html><head></head><body><div id="root"></div><script src="/bundle.js"></script></body></html>"#;
    let response = create_test_response(html, BodyKind::Html, "https://spa.example.com/");
    let content = extract(&response);

    assert!(content.is_empty());
}

#[test]
fn test_extract_title_only_page() {
    let html = "<html><head><title>Coming soon</title></head><body></body></html>";
    let response = create_test_response(html, BodyKind::Html, "https://example.com/");
    let content = extract(&response);

    assert_eq!(content.text, "Coming soon");
    assert!(!content.is_empty());
}

#[test]
fn test_malformed_html() {
    let html = "<html><head><title>Broken</title><body><p>Unclosed tags<div>More content";
    let response = create_test_response(html, BodyKind::Html, "https://example.com/broken");
    let content = extract(&response);

    assert_eq!(content.title.as_deref(), Some("Broken"));
    assert!(content.text.contains("Unclosed tags"));
    assert!(content.text.contains("More content"));
}

fn create_test_response(body: &str, kind: BodyKind, url: &str) -> PageResponse {
    PageResponse {
        url_final: Url::parse(url).unwrap(),
        status: StatusCode::OK,
        kind,
        body_utf8: body.to_string(),
        charset: "UTF-8",
        fetched_at: Utc::now(),
    }
}
