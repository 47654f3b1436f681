//! Repository trait for short link data access.

use crate::domain::entities::{Link, NewLink};
use crate::error::AppError;
use async_trait::async_trait;

/// Failure modes of a link insert.
///
/// Creation relies on the store's unique constraint on `code`, so a collision
/// is an expected outcome, not a generic database error. The repository must
/// classify it structurally (constraint inspection, never message matching)
/// so that the service layer can retry collisions and nothing else.
#[derive(Debug, thiserror::Error)]
pub enum CreateLinkError {
    /// The generated code already exists. Benign; the caller retries with a
    /// fresh code.
    #[error("short code already taken")]
    CodeTaken,

    /// Any other store failure. Propagated immediately, never retried.
    #[error(transparent)]
    Store(#[from] AppError),
}

/// Repository interface for managing short links.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgLinkRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkRepository: Send + Sync {
    /// Inserts a new short link atomically.
    ///
    /// # Errors
    ///
    /// Returns [`CreateLinkError::CodeTaken`] when the insert hits the unique
    /// constraint on `code`, and [`CreateLinkError::Store`] for anything else.
    async fn create(&self, new_link: NewLink) -> Result<Link, CreateLinkError>;

    /// Point query for a link by its unique short code.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Link))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn find_by_code(&self, code: &str) -> Result<Option<Link>, AppError>;

    /// Cheap connectivity check used by the health endpoint.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store is unreachable.
    async fn ping(&self) -> Result<(), AppError>;
}
