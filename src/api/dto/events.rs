//! DTOs for the click event listing endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Click;
use crate::domain::repositories::analytics_repository::DEFAULT_EVENT_LIMIT;

/// Query parameters for listing click events.
///
/// `from`/`to` must be RFC 3339 when present (a malformed value is a 400).
/// `limit` is parsed leniently: non-numeric input falls back to the default
/// rather than failing the request, and the final value is clamped by
/// [`crate::domain::repositories::ClickQuery`].
#[derive(Debug, Deserialize)]
pub struct EventsQueryParams {
    #[serde(default, with = "crate::api::dto::rfc3339_option")]
    pub from: Option<DateTime<Utc>>,

    #[serde(default, with = "crate::api::dto::rfc3339_option")]
    pub to: Option<DateTime<Utc>>,

    #[serde(default)]
    pub limit: Option<String>,
}

impl EventsQueryParams {
    /// The requested limit, or the default when absent or non-numeric.
    pub fn requested_limit(&self) -> i64 {
        self.limit
            .as_deref()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_EVENT_LIMIT)
    }
}

/// Click events for a single link, most recent first.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsResponse {
    pub code: String,
    pub events: Vec<ClickEventInfo>,
}

/// Individual click event information.
///
/// Absent metadata fields serialize as explicit `null`, so every event
/// object carries the same keys.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClickEventInfo {
    pub id: i64,
    pub link_id: i64,
    pub clicked_at: DateTime<Utc>,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub ip_hash: Option<String>,
}

impl From<Click> for ClickEventInfo {
    fn from(click: Click) -> Self {
        Self {
            id: click.id,
            link_id: click.link_id,
            clicked_at: click.clicked_at,
            user_agent: click.user_agent,
            referer: click.referer,
            ip_hash: click.ip_hash,
        }
    }
}
