//! Turns page text into an interview-ready portfolio summary.

use std::sync::Arc;

use tracing::{info, instrument, warn};

use crate::llm::{GenerationError, TextGenerator};

/// Returned instead of calling the model when there is nothing to summarize.
pub const NO_CONTENT_SENTINEL: &str = "no valid content available to summarize";

const PAGE_DATA_PLACEHOLDER: &str = "{page_data}";

const PROMPT_TEMPLATE: &str = "\
### SCRAPED TEXT FROM PORTFOLIO WEBSITE:
{page_data}

### INSTRUCTION:
The above text is scraped from a portfolio website. Extract and organize relevant details
in a clear, concise manner for industry-standard interviews. Include:

- **Role**: Current or desired role
- **Experience**: Relevant work experience with duration and achievements
- **Projects**: Notable projects with descriptions and impact
- **Skills**: Technical and soft skills
- **Description**: Summary of professional background and goals

Format as polished, structured text following resume writing best practices.

### FORMATTED OUTPUT (NO PREAMBLE):
";

/// Embed page text into the instruction template.
pub fn render_prompt(page_data: &str) -> String {
    PROMPT_TEMPLATE.replacen(PAGE_DATA_PLACEHOLDER, page_data, 1)
}

pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
}

impl Summarizer {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Summarize `text`. Empty input short-circuits to [`NO_CONTENT_SENTINEL`]
    /// without touching the generator.
    #[instrument(skip_all, fields(chars = text.chars().count()))]
    pub async fn summarize_text(&self, text: &str) -> Result<String, GenerationError> {
        if text.is_empty() {
            warn!("empty content provided for summarization");
            return Ok(NO_CONTENT_SENTINEL.to_string());
        }

        let summary = self.generator.generate(&render_prompt(text)).await?;
        info!("generated summary");
        Ok(summary)
    }
}
