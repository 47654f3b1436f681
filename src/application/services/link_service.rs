//! Link creation and retrieval service.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde_json::json;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::{CreateLinkError, LinkRepository};
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Upper bound on insert attempts before creation is declared exhausted.
///
/// Repeated exhaustion in production is a signal that the code space or this
/// bound needs widening.
const MAX_CREATE_ATTEMPTS: u32 = 5;

/// Service for creating and looking up shortened links.
///
/// Creation is optimistic: generate a code, attempt an atomic insert, and
/// retry only when the store reports a code collision. There is no
/// pre-flight existence check: the unique constraint is the single source
/// of truth, which also makes concurrent creation race-free.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
}

impl LinkService {
    /// Creates a new link service.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self { link_repository }
    }

    /// Creates a short link for an already-validated URL.
    ///
    /// Retries up to [`MAX_CREATE_ATTEMPTS`] times on code collision. A
    /// collision is the only retried failure; anything else propagates on
    /// the first occurrence.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when every attempt collided
    /// ("creation exhausted") or on any non-collision store failure.
    pub async fn create_short_link(
        &self,
        original_url: String,
        expires_at: Option<DateTime<Utc>>,
    ) -> Result<Link, AppError> {
        for attempt in 1..=MAX_CREATE_ATTEMPTS {
            let new_link = NewLink {
                code: generate_code(),
                original_url: original_url.clone(),
                expires_at,
            };

            match self.link_repository.create(new_link).await {
                Ok(link) => return Ok(link),
                Err(CreateLinkError::CodeTaken) => {
                    tracing::debug!(attempt, "short code collision, retrying with a fresh code");
                }
                Err(CreateLinkError::Store(e)) => return Err(e),
            }
        }

        tracing::error!(
            attempts = MAX_CREATE_ATTEMPTS,
            "exhausted all attempts to allocate a unique short code"
        );
        Err(AppError::internal(
            "Failed to allocate a unique short code",
            json!({ "attempts": MAX_CREATE_ATTEMPTS }),
        ))
    }

    /// Looks up a link by its short code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors. Absence is
    /// `Ok(None)`, not an error; callers decide how to surface it.
    pub async fn get_link_by_code(&self, code: &str) -> Result<Option<Link>, AppError> {
        self.link_repository.find_by_code(code).await
    }

    /// Checks store connectivity (health endpoint).
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    /// Constructs the full short URL from a base URL and code.
    pub fn short_url(base_url: &str, code: &str) -> String {
        format!("{}/{}", base_url.trim_end_matches('/'), code)
    }
}
