//! Shared application state passed to all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{AnalyticsService, LinkService};
use crate::domain::click_event::ClickEvent;
use crate::utils::ip_hasher::IpHasher;

/// Application state shared across all request handlers.
///
/// Cloning is cheap: every field is an `Arc`, a channel sender, or a small
/// optional string.
#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<LinkService>,
    pub analytics_service: Arc<AnalyticsService>,
    pub ip_hasher: Arc<IpHasher>,
    /// Producer half of the bounded click queue. Handlers only ever
    /// `try_send` on it.
    pub click_sender: mpsc::Sender<ClickEvent>,
    /// Configured base for short URLs. `None` means derive from the request.
    pub base_url: Option<String>,
}
