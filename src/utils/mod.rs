//! Utility functions shared across the application:
//!
//! - [`code_generator`] - Random short code generation
//! - [`ip_hasher`] - Salted one-way hashing of client IPs
//! - [`client_ip`] - Client IP derivation from proxy headers
//! - [`db_error`] - Structured classification of database errors

pub mod client_ip;
pub mod code_generator;
pub mod db_error;
pub mod ip_hasher;
