//! Background worker that persists click events.
//!
//! Redirect handlers fire events into a bounded channel and move on; this
//! worker is the only place click rows are written. A failed insert is
//! logged and dropped: analytics loss is acceptable, broken redirects are
//! not, and by construction a recording failure cannot reach the redirect
//! path at all.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::domain::click_event::ClickEvent;
use crate::domain::entities::NewClick;
use crate::domain::repositories::AnalyticsRepository;

/// Consumes click events until the channel closes.
pub async fn run_click_worker(
    mut rx: mpsc::Receiver<ClickEvent>,
    repository: Arc<dyn AnalyticsRepository>,
) {
    while let Some(event) = rx.recv().await {
        let link_id = event.link_id;
        let new_click = NewClick {
            link_id,
            user_agent: event.user_agent,
            referer: event.referer,
            ip_hash: event.ip_hash,
        };

        if let Err(e) = repository.record_click(new_click).await {
            tracing::warn!(link_id, error = %e, "failed to record click event, dropping");
        }
    }

    tracing::info!("click worker stopped: channel closed");
}
