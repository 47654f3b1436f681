//! Handlers for link creation and lookup.

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, header},
};
use chrono::{DateTime, Utc};
use serde_json::json;
use url::Url;
use validator::Validate;

use crate::api::dto::links::{CreateLinkRequest, CreateLinkResponse, LinkDetailsResponse};
use crate::application::services::LinkService;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com", "expiresAt": "2026-12-31T00:00:00Z" }
/// ```
///
/// `expiresAt` is optional. The short URL is built from the configured base
/// URL, falling back to the request's own origin.
///
/// # Errors
///
/// Returns 400 for a missing/invalid URL, a non-http(s) scheme, or a
/// malformed `expiresAt`. Returns 500 when code allocation is exhausted.
pub async fn create_link_handler(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateLinkRequest>, JsonRejection>,
) -> Result<Json<CreateLinkResponse>, AppError> {
    let Json(payload) = payload.map_err(|rejection| {
        AppError::bad_request("Invalid JSON body", json!({ "reason": rejection.body_text() }))
    })?;

    payload.validate()?;

    let Some(url) = payload.url else {
        return Err(AppError::bad_request(
            "url is required",
            json!({ "field": "url" }),
        ));
    };

    let parsed = Url::parse(&url)
        .map_err(|e| AppError::bad_request("url must be an absolute URL", json!({ "reason": e.to_string() })))?;
    if !matches!(parsed.scheme(), "http" | "https") {
        return Err(AppError::bad_request(
            "url must use the http or https scheme",
            json!({ "scheme": parsed.scheme() }),
        ));
    }

    let expires_at = parse_expiry(payload.expires_at.as_deref())?;

    let link = state.link_service.create_short_link(url, expires_at).await?;

    let base_url = state
        .base_url
        .clone()
        .or_else(|| request_origin(&headers))
        .ok_or_else(|| {
            AppError::internal(
                "Unable to determine base URL for short links",
                json!({ "hint": "set BASE_URL or send a Host header" }),
            )
        })?;

    Ok(Json(CreateLinkResponse {
        short_url: LinkService::short_url(&base_url, &link.code),
        code: link.code,
        original_url: link.original_url,
        expires_at: link.expires_at,
    }))
}

/// Returns link metadata plus its total click count.
///
/// # Endpoint
///
/// `GET /api/links/{code}`
///
/// # Errors
///
/// Returns 404 when the code is unknown.
pub async fn link_details_handler(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<Json<LinkDetailsResponse>, AppError> {
    let link = state
        .link_service
        .get_link_by_code(&code)
        .await?
        .ok_or_else(|| AppError::not_found("Short link not found", json!({ "code": &code })))?;

    let click_count = state.analytics_service.count_clicks(link.id).await?;

    Ok(Json(LinkDetailsResponse {
        code: link.code,
        original_url: link.original_url,
        created_at: link.created_at,
        expires_at: link.expires_at,
        click_count,
    }))
}

fn parse_expiry(raw: Option<&str>) -> Result<Option<DateTime<Utc>>, AppError> {
    match raw {
        None => Ok(None),
        Some(value) => DateTime::parse_from_rfc3339(value)
            .map(|dt| Some(dt.with_timezone(&Utc)))
            .map_err(|e| {
                AppError::bad_request(
                    "expiresAt must be an RFC 3339 datetime",
                    json!({ "reason": e.to_string() }),
                )
            }),
    }
}

/// Reconstructs the request origin from `Host` (and `x-forwarded-proto`).
///
/// Used only when no base URL is configured.
fn request_origin(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(header::HOST)?.to_str().ok()?;
    let proto = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");

    Some(format!("{proto}://{host}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_parse_expiry_absent() {
        assert_eq!(parse_expiry(None).unwrap(), None);
    }

    #[test]
    fn test_parse_expiry_valid() {
        let parsed = parse_expiry(Some("2026-12-31T12:00:00Z")).unwrap().unwrap();
        assert_eq!(parsed.timezone(), Utc);
    }

    #[test]
    fn test_parse_expiry_malformed_is_validation_error() {
        let err = parse_expiry(Some("next tuesday")).unwrap_err();
        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[test]
    fn test_request_origin_from_host() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));

        assert_eq!(
            request_origin(&headers),
            Some("http://s.example.com".to_string())
        );
    }

    #[test]
    fn test_request_origin_respects_forwarded_proto() {
        let mut headers = HeaderMap::new();
        headers.insert(header::HOST, HeaderValue::from_static("s.example.com"));
        headers.insert("x-forwarded-proto", HeaderValue::from_static("https"));

        assert_eq!(
            request_origin(&headers),
            Some("https://s.example.com".to_string())
        );
    }

    #[test]
    fn test_request_origin_without_host() {
        assert_eq!(request_origin(&HeaderMap::new()), None);
    }
}
