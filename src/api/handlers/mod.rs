//! HTTP request handlers for API endpoints.

pub mod docs;
pub mod events;
pub mod health;
pub mod links;
pub mod redirect;

pub use docs::{docs_handler, openapi_handler};
pub use events::link_events_handler;
pub use health::health_handler;
pub use links::{create_link_handler, link_details_handler};
pub use redirect::redirect_handler;
