//! Click analytics query service.

use std::sync::Arc;

use crate::domain::entities::Click;
use crate::domain::repositories::{AnalyticsRepository, ClickQuery};
use crate::error::AppError;

/// Service for querying recorded click events.
///
/// Recording itself happens in the background worker
/// ([`crate::domain::click_worker`]); this service only reads.
pub struct AnalyticsService {
    analytics_repository: Arc<dyn AnalyticsRepository>,
}

impl AnalyticsService {
    /// Creates a new analytics service.
    pub fn new(analytics_repository: Arc<dyn AnalyticsRepository>) -> Self {
        Self {
            analytics_repository,
        }
    }

    /// Total number of clicks recorded for a link, unfiltered by time.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_clicks(&self, link_id: i64) -> Result<i64, AppError> {
        self.analytics_repository.count_clicks(link_id).await
    }

    /// Lists click events for a link, most recent first.
    ///
    /// The query's time bounds are inclusive and its limit is already
    /// clamped by [`ClickQuery`].
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_clicks(
        &self,
        link_id: i64,
        query: ClickQuery,
    ) -> Result<Vec<Click>, AppError> {
        self.analytics_repository.list_clicks(link_id, query).await
    }
}
