pub mod health;
pub mod resume;

use axum::{http::Uri, routing::get, Router};
use tower_http::services::ServeDir;

use crate::errors::AppError;
use crate::icons::ICONS_ROUTE;
use crate::state::AppState;

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(format!("No route for {}", uri.path()))
}

pub fn build_router(state: AppState) -> Router {
    let icons = ServeDir::new(&state.config.icons_dir);

    Router::new()
        .route("/", get(resume::handle_page))
        .route("/health", get(health::health_handler))
        .route("/api/v1/resume", get(resume::handle_document))
        .nest_service(ICONS_ROUTE, icons)
        .fallback(not_found)
        .with_state(state)
}
