//! REST API layer for HTTP request/response handling.
//!
//! Translates HTTP requests into domain operations. This layer never retries
//! store operations and never hashes IPs itself; both belong below it.
//!
//! - [`dto`] - Data Transfer Objects for request/response serialization
//! - [`handlers`] - HTTP request handlers
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod routes;
