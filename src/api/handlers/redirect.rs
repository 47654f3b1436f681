//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::domain::click_event::ClickEvent;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::client_ip::client_ip;

/// Redirects a short code to its original URL.
///
/// # Endpoint
///
/// `GET /{code}`
///
/// # Request Flow
///
/// 1. Look up the link; unknown code → 404 plain text
/// 2. Expiry check (inclusive of the expiry instant) → 410 plain text
/// 3. Derive the client IP from proxy headers and hash it
/// 4. Fire a click event into the bounded channel; a full or closed queue
///    drops the event, so recording can never delay or fail the redirect
/// 5. Answer `302 Found` with the original URL
///
/// # Errors
///
/// Only store failures during lookup surface as errors (500); everything on
/// the recording path is swallowed by construction.
pub async fn redirect_handler(
    Path(code): Path<String>,
    State(state): State<AppState>,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let Some(link) = state.link_service.get_link_by_code(&code).await? else {
        return Ok((StatusCode::NOT_FOUND, "not found").into_response());
    };

    if link.is_expired() {
        return Ok((StatusCode::GONE, "expired").into_response());
    }

    let ip = client_ip(&headers);
    let ip_hash = state.ip_hasher.hash(ip.as_deref());

    let event = ClickEvent::new(
        link.id,
        ip_hash,
        headers
            .get(header::USER_AGENT)
            .and_then(|v| v.to_str().ok()),
        headers.get(header::REFERER).and_then(|v| v.to_str().ok()),
    );

    if state.click_sender.try_send(event).is_err() {
        tracing::warn!(link_id = link.id, "click queue full or closed, dropping event");
    }

    Ok((StatusCode::FOUND, [(header::LOCATION, link.original_url)]).into_response())
}
