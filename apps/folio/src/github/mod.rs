//! Repository feed: the GitHub GraphQL client and the `RepositorySource` seam.
//!
//! Page building goes through `Arc<dyn RepositorySource>`: `GithubClient`
//! when a token is configured, `StaticRepositorySource` otherwise.

pub mod client;
pub mod query;

use async_trait::async_trait;
use thiserror::Error;

use crate::models::repository::RepositorySummary;

pub use client::GithubClient;

#[derive(Debug, Error)]
pub enum GithubError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("GraphQL error: {}", .0.join("; "))]
    GraphQl(Vec<String>),

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl GithubError {
    /// Transport failures, rate limiting and server errors may clear up on
    /// a later attempt. Everything else is final.
    pub fn is_retryable(&self) -> bool {
        match self {
            GithubError::Http(_) => true,
            GithubError::Api { status, .. } => *status == 429 || *status >= 500,
            GithubError::GraphQl(_) | GithubError::Parse(_) => false,
        }
    }
}

/// Read-only feed of repository summaries, fetched once per page build.
///
/// Implementations never fail: an unavailable feed is an empty list.
#[async_trait]
pub trait RepositorySource: Send + Sync {
    async fn repositories(&self) -> Vec<RepositorySummary>;
}

/// Serves a fixed list. Used when no GitHub token is configured.
#[derive(Debug, Clone, Default)]
pub struct StaticRepositorySource {
    repositories: Vec<RepositorySummary>,
}

impl StaticRepositorySource {
    #[allow(dead_code)]
    pub fn new(repositories: Vec<RepositorySummary>) -> Self {
        Self { repositories }
    }
}

#[async_trait]
impl RepositorySource for StaticRepositorySource {
    async fn repositories(&self) -> Vec<RepositorySummary> {
        self.repositories.clone()
    }
}
