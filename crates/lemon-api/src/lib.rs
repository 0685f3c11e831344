//! # Lemon API
//!
//! Routing table, HTTP handlers, templates, and error pages for the website.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;
pub mod templates;
pub mod views;

pub use error::ApiError;
pub use routes::build_router;
pub use state::AppState;
pub use templates::Templates;

#[cfg(test)]
pub(crate) mod test_support;
