//! Domain layer containing business entities and logic.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access trait definitions
//! - [`click_event`] - Click tracking event model
//! - [`click_worker`] - Asynchronous click processing worker
//!
//! # Click Processing Flow
//!
//! 1. Redirect handler resolves the link and hashes the client IP
//! 2. A [`click_event::ClickEvent`] is sent to a bounded channel
//! 3. [`click_worker::run_click_worker`] persists events best-effort
//! 4. Failures are logged and dropped, never surfaced to the redirect

pub mod click_event;
pub mod click_worker;
pub mod entities;
pub mod repositories;
