use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use utoipa::{IntoParams, ToSchema};

pub const MIN_URL_LENGTH: usize = 10;

static URL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https?://.*").expect("Failed to compile url regex"));

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    /// URL of the portfolio website to summarize
    #[param(min_length = 10, pattern = r"^https?://.*", example = "https://example.com/portfolio")]
    pub url: String,
}

impl SummaryQuery {
    pub fn validate(&self) -> Result<(), String> {
        if self.url.chars().count() < MIN_URL_LENGTH {
            return Err(format!(
                "url must be at least {MIN_URL_LENGTH} characters long"
            ));
        }
        if !URL_REGEX.is_match(&self.url) {
            return Err("url must start with http:// or https://".to_string());
        }
        Ok(())
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
