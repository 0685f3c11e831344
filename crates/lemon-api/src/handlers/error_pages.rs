//! Replaces the plain-text body of [`ApiError`] responses with the rendered
//! 404 / 500 page.
//!
//! [`ApiError`]: crate::error::ApiError

use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tracing::error;

use crate::error::ErrorPage;
use crate::state::AppState;
use crate::templates;

pub async fn render_error_pages(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    if response.extensions().get::<ErrorPage>().is_none() {
        return response;
    }

    let status = response.status();
    let template = if status == StatusCode::NOT_FOUND {
        templates::NOT_FOUND
    } else {
        templates::SERVER_ERROR
    };

    match state.templates.render(template, &json!({})) {
        Ok(page) => (status, page).into_response(),
        Err(e) => {
            error!("Failed to render {} page: {}", status, e);
            response
        }
    }
}
