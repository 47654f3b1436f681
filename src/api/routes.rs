//! API route configuration.

use crate::api::handlers::{create_link_handler, link_details_handler, link_events_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// REST API routes, nested under `/api`.
///
/// # Endpoints
///
/// - `POST /links`               - Create a short link
/// - `GET  /links/{code}`        - Link metadata + click count
/// - `GET  /links/{code}/events` - Click events (filterable, paginated)
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/links", post(create_link_handler))
        .route("/links/{code}", get(link_details_handler))
        .route("/links/{code}/events", get(link_events_handler))
}
