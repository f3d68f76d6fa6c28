mod config;
mod content;
mod errors;
mod export;
mod github;
mod icons;
mod models;
mod render;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::content::{AuthoredContent, ContentStore, JsonContentStore};
use crate::github::{GithubClient, RepositorySource, StaticRepositorySource};
use crate::icons::IconRegistry;
use crate::render::build_page;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Folio v{}", env!("CARGO_PKG_VERSION"));

    // Content: a JSON file when configured, the authored literal otherwise
    let content: Arc<dyn ContentStore> = match &config.content_path {
        Some(path) => Arc::new(JsonContentStore::load(path).await),
        None => {
            info!("No CONTENT_PATH set, using authored content");
            Arc::new(AuthoredContent)
        }
    };

    // Repositories: GitHub when a token is configured
    let source: Arc<dyn RepositorySource> = match &config.github_token {
        Some(token) => Arc::new(
            GithubClient::new(config.github_graphql_url.clone(), token.clone())
                .context("Failed to build GitHub client")?,
        ),
        None => {
            warn!("GITHUB_TOKEN not set, the repository gallery will be empty");
            Arc::new(StaticRepositorySource::default())
        }
    };

    let icons = IconRegistry::from_dir(&config.icons_dir);
    info!("Icon registry: {} icons from {}", icons.len(), config.icons_dir.display());

    let page = build_page(content.as_ref(), source.as_ref(), &icons, config.seo()).await;

    if let Some(output_dir) = &config.output_dir {
        export::export_site(output_dir, &page, &icons).await?;
        return Ok(());
    }

    let state = AppState::new(config.clone(), page);
    let app = build_router(state).layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
