use axum::{extract::State, response::Html, Json};
use bytes::Bytes;
use tracing::debug;

use crate::render::PageDocument;
use crate::state::AppState;

/// GET /
pub async fn handle_page(State(state): State<AppState>) -> Html<Bytes> {
    debug!("Serving rendered page ({} bytes)", state.html.len());
    Html(state.html)
}

/// GET /api/v1/resume
pub async fn handle_document(State(state): State<AppState>) -> Json<PageDocument> {
    Json(state.page.as_ref().clone())
}
