use axum::Json;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

pub const HEALTH_MESSAGE: &str = "Portfolio Summarizer API is running";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub message: String,
}

/// Liveness probe. Touches no dependency, so it answers even when the
/// inference provider is down.
#[utoipa::path(
    get,
    path = "/healthcheck",
    tag = "health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn healthcheck() -> Json<HealthResponse> {
    Json(HealthResponse {
        message: HEALTH_MESSAGE.to_string(),
    })
}
