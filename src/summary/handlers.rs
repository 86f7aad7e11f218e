use axum::{
    Json,
    extract::{Query, State, rejection::QueryRejection},
};
use tracing::{error, info, warn};

use crate::{
    app_state::AppState,
    summary::{
        dtos::{ErrorResponse, SummaryQuery, SummaryResponse},
        errors::ApiError,
    },
};

#[utoipa::path(
    get,
    path = "/",
    tag = "summary",
    params(SummaryQuery),
    responses(
        (status = 200, description = "Portfolio summary", body = SummaryResponse),
        (
            status = 400,
            description = "Invalid url or page could not be fetched",
            body = ErrorResponse
        ),
        (status = 500, description = "Summary generation failed", body = ErrorResponse)
    )
)]
pub async fn summarize(
    State(state): State<AppState>,
    query: Result<Query<SummaryQuery>, QueryRejection>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let Query(query) = query.map_err(|rejection| {
        warn!(error = %rejection.body_text(), "rejected summary request");
        ApiError::Validation(rejection.body_text())
    })?;

    info!(url = %query.url, "received request to summarize url");
    if let Err(reason) = query.validate() {
        warn!(url = %query.url, %reason, "rejected summary request");
        return Err(ApiError::Validation(reason));
    }
    let url = query.url;

    let content = state.source.fetch(&url).await.map_err(|e| {
        error!(%url, error = %e, "failed to fetch content");
        ApiError::Fetch(e)
    })?;

    let summary = state
        .summarizer
        .summarize_text(&content.text)
        .await
        .map_err(|e| {
            error!(%url, error = %e, "summary generation failed");
            ApiError::Generation(e)
        })?;

    Ok(Json(SummaryResponse { summary }))
}
