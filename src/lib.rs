//! # Shortly
//!
//! A URL shortening service with click analytics.
//!
//! Short codes are 7 random alphanumeric characters; collisions are resolved
//! by retrying with a fresh code. Redirects record click events through a
//! bounded queue drained by a background worker, so analytics can never slow
//! down or fail a redirect. Client IPs are only ever stored as salted SHA-256
//! hashes.
//!
//! ## Architecture
//!
//! - [`domain`] - Entities, repository traits and the click worker
//! - [`application`] - Services orchestrating domain operations
//! - [`infrastructure`] - PostgreSQL repository implementations
//! - [`api`] - HTTP layer: DTOs, handlers and routes
//! - [`utils`] - Code generation, IP extraction and hashing

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod routes;
pub mod server;
pub mod state;
pub mod utils;

pub use error::AppError;
pub use state::AppState;
