//! PostgreSQL repository implementations.
//!
//! Concrete implementations of the domain repository traits using sqlx
//! prepared statements.
//!
//! - [`PgLinkRepository`] - Link storage and retrieval
//! - [`PgAnalyticsRepository`] - Click event recording and queries

pub mod pg_analytics_repository;
pub mod pg_link_repository;

pub use pg_analytics_repository::PgAnalyticsRepository;
pub use pg_link_repository::PgLinkRepository;
