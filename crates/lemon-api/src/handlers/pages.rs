//! Static pages: no data, no side effects.

use axum::{extract::State, response::Html};
use serde_json::json;

use crate::error::ApiError;
use crate::state::AppState;
use crate::templates;

/// GET /
pub async fn home(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.templates.render(templates::HOME, &json!({}))
}

/// GET /about/
pub async fn about(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.templates.render(templates::ABOUT, &json!({}))
}

/// GET /book/ (placeholder, reservations are not taken online)
pub async fn book(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    state.templates.render(templates::BOOK, &json!({}))
}
