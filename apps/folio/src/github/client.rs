//! GitHub GraphQL client, the only place that talks to api.github.com.
#![allow(dead_code)]

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, info, warn};

use crate::github::query::{GraphQlRequest, GraphQlResponse, REPOSITORIES_QUERY};
use crate::github::{GithubError, RepositorySource};
use crate::models::repository::RepositorySummary;

pub const DEFAULT_GRAPHQL_URL: &str = "https://api.github.com/graphql";
const USER_AGENT: &str = concat!("folio/", env!("CARGO_PKG_VERSION"));
const MAX_ATTEMPTS: u32 = 3;

#[derive(Clone)]
pub struct GithubClient {
    client: Client,
    endpoint: String,
    token: String,
    retry_base_delay: Duration,
}

impl GithubClient {
    pub fn new(endpoint: String, token: String) -> Result<Self, GithubError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(Self {
            client,
            endpoint,
            token,
            retry_base_delay: Duration::from_secs(1),
        })
    }

    /// Overrides the first backoff delay (doubled on every further retry).
    pub fn with_retry_base_delay(mut self, delay: Duration) -> Self {
        self.retry_base_delay = delay;
        self
    }

    /// Runs the repositories query. Retries transport errors, 429 and 5xx
    /// with exponential backoff, up to `MAX_ATTEMPTS` attempts in total; any
    /// other failure is returned immediately.
    pub async fn fetch_repositories(&self) -> Result<Vec<RepositorySummary>, GithubError> {
        let mut attempt = 1;
        loop {
            match self.send_query().await {
                Ok(repositories) => {
                    debug!("GitHub fetch succeeded: {} repositories", repositories.len());
                    return Ok(repositories);
                }
                Err(e) if e.is_retryable() && attempt < MAX_ATTEMPTS => {
                    let delay = self.retry_base_delay * 2u32.pow(attempt - 1);
                    warn!(
                        "GitHub fetch attempt {} failed ({}), retrying after {}ms...",
                        attempt,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(e) => return Err(e),
            }
        }
    }

    async fn send_query(&self) -> Result<Vec<RepositorySummary>, GithubError> {
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&GraphQlRequest {
                query: REPOSITORIES_QUERY,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(GithubError::Api {
                status: status.as_u16(),
                message: response.text().await.unwrap_or_default(),
            });
        }

        let text = response.text().await?;
        let parsed: GraphQlResponse = serde_json::from_str(&text)?;
        parsed.into_repositories()
    }
}

#[async_trait]
impl RepositorySource for GithubClient {
    async fn repositories(&self) -> Vec<RepositorySummary> {
        match self.fetch_repositories().await {
            Ok(repositories) => {
                info!("Fetched {} repositories from GitHub", repositories.len());
                repositories
            }
            Err(e) => {
                warn!("Repository feed unavailable, rendering an empty gallery: {e}");
                Vec::new()
            }
        }
    }
}
