use std::any::Any;

use axum::{
    Json, Router,
    http::{HeaderValue, Method},
    response::{IntoResponse, Response},
    routing::get,
};
use tower::ServiceBuilder;
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::{AllowHeaders, AllowOrigin, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};
use tracing::error;
use utoipa::OpenApi;

use crate::{
    app_state::{AppState, StartupError},
    config::Config,
    health,
    summary::{self, ApiError},
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Summarizer API",
        version = "1.0.0",
        description = "API to summarize portfolio websites"
    ),
    paths(summary::handlers::summarize, health::healthcheck),
    components(schemas(
        summary::dtos::SummaryResponse,
        summary::dtos::ErrorResponse,
        health::HealthResponse
    ))
)]
pub struct ApiDoc;

pub fn cors_layer(allowed_origin: HeaderValue) -> CorsLayer {
    // Credentialed CORS forbids `*`, so request headers are echoed back instead.
    CorsLayer::new()
        .allow_origin(AllowOrigin::list([allowed_origin]))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    error!(panic = message, "unexpected error while handling request");
    ApiError::Unexpected.into_response()
}

pub fn build_router(state: AppState, allowed_origin: HeaderValue) -> Router {
    Router::new()
        .route("/", get(summary::handlers::summarize))
        .route("/healthcheck", get(health::healthcheck))
        .route("/openapi.json", get(|| async { Json(ApiDoc::openapi()) }))
        .with_state(state)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(TraceLayer::new_for_http())
                .layer(cors_layer(allowed_origin))
                .layer(CatchPanicLayer::custom(handle_panic)),
        )
}

/// Build the production application from a validated configuration.
pub fn build_app(config: &Config) -> Result<Router, StartupError> {
    let state = AppState::from_config(config)?;
    Ok(build_router(state, config.allowed_origin_header()?))
}
