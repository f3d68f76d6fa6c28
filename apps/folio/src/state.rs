use std::sync::Arc;

use bytes::Bytes;

use crate::config::Config;
use crate::render::PageDocument;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// The page is built once at startup and only read afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub page: Arc<PageDocument>,
    /// `page` rendered to HTML. Cloning shares the buffer.
    pub html: Bytes,
}

impl AppState {
    pub fn new(config: Config, page: PageDocument) -> Self {
        let html = Bytes::from(crate::render::render_html(&page));
        Self {
            config,
            page: Arc::new(page),
            html,
        }
    }
}
