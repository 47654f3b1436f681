//! DTOs for link creation and lookup endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to create a short link.
///
/// `url` is optional at the serde level so that a missing field produces a
/// controlled 400 instead of a deserialization rejection; the handler checks
/// presence explicitly. `expiresAt` is taken as a raw string and parsed in
/// the handler for the same reason.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkRequest {
    #[validate(url(message = "url must be an absolute URL"))]
    pub url: Option<String>,

    /// Optional expiry instant, RFC 3339. After this time the link answers
    /// 410 Gone.
    pub expires_at: Option<String>,
}

/// Response for a freshly created short link.
///
/// `expiresAt` is serialized as an explicit `null` when unset.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateLinkResponse {
    pub code: String,
    pub short_url: String,
    pub original_url: String,
    pub expires_at: Option<DateTime<Utc>>,
}

/// Link metadata plus its total click count.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkDetailsResponse {
    pub code: String,
    pub original_url: String,
    pub created_at: DateTime<Utc>,
    pub expires_at: Option<DateTime<Utc>>,
    pub click_count: i64,
}
