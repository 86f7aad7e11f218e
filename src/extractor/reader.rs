use scraper::{ElementRef, Html, Node, Selector};

/// Elements whose text never reaches the reader.
const SKIPPED_ELEMENTS: &[&str] = &[
    "script", "style", "noscript", "template", "svg", "iframe", "head",
];

/// Elements that start a new line in the rendered text.
const BLOCK_ELEMENTS: &[&str] = &[
    "address", "article", "aside", "blockquote", "br", "dd", "div", "dl", "dt", "footer",
    "form", "h1", "h2", "h3", "h4", "h5", "h6", "header", "hr", "li", "main", "nav", "ol",
    "p", "pre", "section", "table", "td", "th", "tr", "ul",
];

/// Title and visible text of an HTML document.
#[derive(Debug, Default)]
pub struct ReaderOutput {
    pub title: Option<String>,
    pub text: String,
}

pub fn read(html: &str) -> ReaderOutput {
    let document = Html::parse_document(html);

    let mut text = String::new();
    match Selector::parse("body")
        .ok()
        .and_then(|selector| document.select(&selector).next())
    {
        Some(body) => collect_text(body, &mut text),
        None => collect_text(document.root_element(), &mut text),
    }

    ReaderOutput {
        title: extract_title(&document),
        text,
    }
}

fn collect_text(element: ElementRef<'_>, out: &mut String) {
    for child in element.children() {
        match child.value() {
            Node::Text(text) => out.push_str(text),
            Node::Element(_) => {
                let Some(child) = ElementRef::wrap(child) else {
                    continue;
                };
                let name = child.value().name();
                if SKIPPED_ELEMENTS.contains(&name) {
                    continue;
                }
                let block = BLOCK_ELEMENTS.contains(&name);
                if block {
                    out.push('\n');
                }
                collect_text(child, out);
                if block {
                    out.push('\n');
                }
            }
            _ => {}
        }
    }
}

fn extract_title(document: &Html) -> Option<String> {
    let first_text = |css: &str| -> Option<String> {
        let selector = Selector::parse(css).ok()?;
        document
            .select(&selector)
            .map(|element| element.text().collect::<String>().trim().to_string())
            .find(|title| !title.is_empty())
    };

    if let Some(title) = first_text("title") {
        return Some(title);
    }

    // og:title carries its value in an attribute
    if let Ok(selector) = Selector::parse("meta[property='og:title']")
        && let Some(content) = document
            .select(&selector)
            .find_map(|element| element.value().attr("content"))
            .map(str::trim)
            .filter(|content| !content.is_empty())
    {
        return Some(content.to_string());
    }

    first_text("h1")
}
