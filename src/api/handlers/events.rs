//! Handler for listing click events of a link.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde_json::json;

use crate::api::dto::events::{ClickEventInfo, EventsQueryParams, EventsResponse};
use crate::domain::repositories::ClickQuery;
use crate::error::AppError;
use crate::state::AppState;

/// Lists click events for a link, most recent first.
///
/// # Endpoint
///
/// `GET /api/links/{code}/events`
///
/// # Query Parameters
///
/// - `from`, `to` (optional): inclusive RFC 3339 bounds, independently
///   applicable
/// - `limit` (optional): clamped to `[1, 200]`, default 50
///
/// # Errors
///
/// Returns 404 when the code is unknown, 400 for malformed `from`/`to`.
pub async fn link_events_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
    Query(params): Query<EventsQueryParams>,
) -> Result<Json<EventsResponse>, AppError> {
    let link = state
        .link_service
        .get_link_by_code(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": &code })))?;

    let query = ClickQuery::new(params.requested_limit()).with_date_range(params.from, params.to);

    let clicks = state.analytics_service.list_clicks(link.id, query).await?;

    Ok(Json(EventsResponse {
        code: link.code,
        events: clicks.into_iter().map(ClickEventInfo::from).collect(),
    }))
}
