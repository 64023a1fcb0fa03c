pub mod auth_pages;
pub mod calculator_pages;
pub mod catalog_pages;
pub mod dashboard_pages;
pub mod form_failure;
pub mod navigation;
pub mod page_session;
pub mod public;
pub mod renderer;

use crate::{ApiError, AppState};

use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
};

use page_session::PageSession;

/// Fallback: JSON 404 under `/api`, the not-found page elsewhere
pub async fn not_found(State(state): State<AppState>, session: PageSession, uri: Uri) -> Response {
    if uri.path().starts_with("/api/") {
        return ApiError::not_found(format!("No route for {}", uri.path())).into_response();
    }

    let context = session.context("Page not found");
    state
        .renderer
        .page(StatusCode::NOT_FOUND, "not_found.html", &context)
}
