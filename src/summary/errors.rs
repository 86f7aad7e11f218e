use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::{llm::GenerationError, source::SourceError, summary::dtos::ErrorResponse};

/// Every way a summary request can fail, as seen by the HTTP client.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),

    #[error("Content fetch failed: {0}")]
    Fetch(#[from] SourceError),

    #[error("Summary generation failed: {0}")]
    Generation(#[from] GenerationError),

    #[error("Internal server error")]
    Unexpected,
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Fetch(_) => StatusCode::BAD_REQUEST,
            Self::Generation(_) | Self::Unexpected => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        (
            status,
            Json(ErrorResponse {
                detail: self.to_string(),
            }),
        )
            .into_response()
    }
}
