//! Top-level router assembly.

use axum::{Router, http::Method, routing::get};
use tower::Layer;
use tower_http::{
    LatencyUnit,
    cors::{Any, CorsLayer},
    normalize_path::{NormalizePath, NormalizePathLayer},
    trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

use crate::api;
use crate::api::handlers::{docs_handler, health_handler, openapi_handler, redirect_handler};
use crate::state::AppState;

/// Builds the complete application router.
///
/// # Routes
///
/// - `GET /{code}`        - Redirect to the original URL
/// - `GET /health`        - Health check
/// - `GET /openapi.json`  - OpenAPI document
/// - `GET /docs`          - Swagger UI
/// - `/api/*`             - REST API (see [`api::routes`])
///
/// Trailing slashes are normalized away so `/api/links/` hits `/api/links`.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(Any);

    let router = Router::new()
        .route("/health", get(health_handler))
        .route("/openapi.json", get(openapi_handler))
        .route("/docs", get(docs_handler))
        .route("/{code}", get(redirect_handler))
        .nest("/api", api::routes::routes())
        .layer(cors)
        .layer(trace_layer())
        .with_state(state);

    NormalizePathLayer::trim_trailing_slash().layer(router)
}

fn trace_layer() -> TraceLayer<tower_http::classify::SharedClassifier<tower_http::classify::ServerErrorsAsFailures>>
{
    TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(LatencyUnit::Millis),
        )
}
