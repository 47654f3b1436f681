//! Repository trait for click analytics.

use crate::domain::entities::{Click, NewClick};
use crate::error::AppError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Default number of click events returned by a listing query.
pub const DEFAULT_EVENT_LIMIT: i64 = 50;

/// Upper bound on the number of click events a single query may return.
pub const MAX_EVENT_LIMIT: i64 = 200;

/// Filter criteria for click event listings.
///
/// `from` and `to` are inclusive bounds and independently optional. The limit
/// is clamped into `[1, MAX_EVENT_LIMIT]` at construction, so no query can
/// request an out-of-range page size.
#[derive(Debug, Clone)]
pub struct ClickQuery {
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    pub limit: i64,
}

impl ClickQuery {
    /// Creates a query with the given result limit, clamped to `[1, 200]`.
    pub fn new(limit: i64) -> Self {
        Self {
            from: None,
            to: None,
            limit: limit.clamp(1, MAX_EVENT_LIMIT),
        }
    }

    /// Adds inclusive time-range bounds to the query.
    pub fn with_date_range(
        mut self,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Self {
        self.from = from;
        self.to = to;
        self
    }
}

impl Default for ClickQuery {
    fn default() -> Self {
        Self::new(DEFAULT_EVENT_LIMIT)
    }
}

/// Repository interface for recording and querying click events.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAnalyticsRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AnalyticsRepository: Send + Sync {
    /// Records a single click event.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors (including a
    /// dangling `link_id`).
    async fn record_click(&self, new_click: NewClick) -> Result<Click, AppError>;

    /// Counts all click events for a link, unfiltered by time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_clicks(&self, link_id: i64) -> Result<i64, AppError>;

    /// Lists click events for a link, most recent first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn list_clicks(&self, link_id: i64, query: ClickQuery) -> Result<Vec<Click>, AppError>;
}
