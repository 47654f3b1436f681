//! Click event model for asynchronous click tracking.

/// An in-flight click event passed from the redirect handler to the
/// background worker via a bounded channel.
///
/// The IP has already been hashed by the time an event is constructed; the
/// raw address never leaves the handler. Decoupling the channel message from
/// [`crate::domain::entities::NewClick`] keeps the HTTP layer free of
/// persistence concerns.
#[derive(Debug, Clone)]
pub struct ClickEvent {
    pub link_id: i64,
    pub user_agent: Option<String>,
    pub referer: Option<String>,
    pub ip_hash: Option<String>,
}

impl ClickEvent {
    /// Creates a new click event.
    pub fn new(
        link_id: i64,
        ip_hash: Option<String>,
        user_agent: Option<&str>,
        referer: Option<&str>,
    ) -> Self {
        Self {
            link_id,
            ip_hash,
            user_agent: user_agent.map(|s| s.to_string()),
            referer: referer.map(|s| s.to_string()),
        }
    }
}
