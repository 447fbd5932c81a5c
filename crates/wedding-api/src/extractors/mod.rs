//! Axum extractors for request handling
//!
//! Custom extractors for the admin session guard, the system API key and
//! validated JSON bodies.

mod admin;
mod api_key;
mod validated;

pub use admin::AdminSession;
pub use api_key::{SystemApiKey, API_KEY_HEADER};
pub use validated::ValidatedJson;
