//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures without business logic, with separate
//! `New*` structs for creation input:
//!
//! - [`Link`] - A shortened URL mapping
//! - [`Click`] - A click event on a shortened link

pub mod click;
pub mod link;

pub use click::{Click, NewClick};
pub use link::{Link, NewLink};
