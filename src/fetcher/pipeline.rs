use crate::fetcher::{
    errors::FetchError,
    types::{BodyKind, PageResponse},
};
use chrono::Utc;
use encoding_rs::Encoding;
use regex::Regex;
use reqwest::StatusCode;
use std::sync::LazyLock;
use url::Url;

/// How far into the body we look for `<meta>` charset declarations.
const META_SNIFF_LEN: usize = 4096;

static HEADER_CHARSET_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"(?i)charset\s*=\s*["']?([^"'\s;]+)"#).unwrap());

static META_CHARSET_REGEXES: LazyLock<[Regex; 2]> = LazyLock::new(|| {
    [
        // <meta charset="...">
        Regex::new(r#"(?i)<meta\s+[^>]*?charset\s*=\s*["']?([^"'\s/>]+)"#).unwrap(),
        // <meta http-equiv="Content-Type" content="text/html; charset=...">
        Regex::new(r#"(?i)<meta\s+[^>]*?http-equiv\s*=\s*["']?content-type["']?[^>]*?content\s*=\s*["']?[^"'>]*?charset\s*=\s*([^"'\s;/>]+)"#).unwrap(),
    ]
});

pub fn process_response(
    url_final: Url,
    status: StatusCode,
    kind: BodyKind,
    body_bytes: &[u8],
    content_type: &str,
) -> Result<PageResponse, FetchError> {
    let encoding = detect_encoding(content_type, body_bytes);
    let body_utf8 = decode(body_bytes, encoding)?;

    Ok(PageResponse {
        url_final,
        status,
        kind,
        body_utf8,
        charset: encoding.name(),
        fetched_at: Utc::now(),
    })
}

fn label_from(regex: &Regex, haystack: &str) -> Option<&'static Encoding> {
    let label = regex.captures(haystack)?.get(1)?.as_str().to_lowercase();
    Encoding::for_label(label.as_bytes())
}

/// Header charset first, then `<meta>` declarations, then statistical detection.
fn detect_encoding(content_type: &str, body_bytes: &[u8]) -> &'static Encoding {
    if let Some(encoding) = label_from(&HEADER_CHARSET_REGEX, content_type) {
        return encoding;
    }

    let head = &body_bytes[..body_bytes.len().min(META_SNIFF_LEN)];
    let head_str = String::from_utf8_lossy(head);
    if let Some(encoding) = META_CHARSET_REGEXES
        .iter()
        .find_map(|regex| label_from(regex, &head_str))
    {
        return encoding;
    }

    let mut detector = chardetng::EncodingDetector::new();
    detector.feed(head, body_bytes.len() <= META_SNIFF_LEN);
    detector.guess(None, true)
}

fn decode(body_bytes: &[u8], encoding: &'static Encoding) -> Result<String, FetchError> {
    let (decoded, used, had_errors) = encoding.decode(body_bytes);
    if had_errors {
        return Err(FetchError::Charset(format!(
            "failed to decode content as {}",
            used.name()
        )));
    }
    Ok(decoded.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn charset_from_content_type_header() {
        let body = b"<html><head><title>Test</title></head></html>";
        let encoding = detect_encoding("text/html; charset=utf-8", body);
        assert_eq!(encoding, encoding_rs::UTF_8);
    }

    #[test]
    fn charset_from_meta_tag() {
        let body = b"<html><head><meta charset=\"iso-8859-1\"><title>Test</title></head></html>";
        // encoding_rs maps ISO-8859-1 onto its windows-1252 superset
        assert_eq!(detect_encoding("text/html", body), encoding_rs::WINDOWS_1252);
    }

    #[test]
    fn charset_from_meta_http_equiv() {
        let body = b"<html><head><meta http-equiv=\"Content-Type\" content=\"text/html; charset=shift_jis\"></head></html>";
        assert_eq!(detect_encoding("text/html", body), encoding_rs::SHIFT_JIS);
    }

    #[test]
    fn decodes_latin1_body() {
        let body = b"<p>Caf\xe9 owner</p>";
        let page = process_response(
            Url::parse("https://example.com").unwrap(),
            StatusCode::OK,
            BodyKind::Html,
            body,
            "text/html; charset=iso-8859-1",
        )
        .unwrap();
        assert_eq!(page.body_utf8, "<p>Café owner</p>");
        assert_eq!(page.charset, "windows-1252");
    }

    #[test]
    fn invalid_utf8_is_a_charset_error() {
        let body = b"<p>\xff\xfe broken</p>";
        let err = decode(body, encoding_rs::UTF_8).unwrap_err();
        assert!(matches!(err, FetchError::Charset(_)));
    }
}
