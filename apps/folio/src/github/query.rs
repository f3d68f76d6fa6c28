//! GraphQL query text and response shapes for the repository feed.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::github::GithubError;
use crate::models::repository::{Language, RepositorySummary};

/// Repositories owned by the token's account. First page only.
pub const REPOSITORIES_QUERY: &str = r#"
query {
  viewer {
    repositories(first: 100, affiliations: [OWNER]) {
      nodes {
        name
        description
        url
        languages(first: 10) {
          nodes {
            color
            name
          }
        }
        pushedAt
        repositoryTopics(first: 100) {
          nodes {
            topic {
              name
            }
          }
        }
      }
    }
  }
}
"#;

#[derive(Debug, Serialize)]
pub struct GraphQlRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse {
    pub data: Option<ViewerData>,
    #[serde(default)]
    pub errors: Vec<GraphQlError>,
}

#[derive(Debug, Deserialize)]
pub struct GraphQlError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct ViewerData {
    pub viewer: Option<Viewer>,
}

#[derive(Debug, Deserialize)]
pub struct Viewer {
    pub repositories: Option<Connection<RepositoryNode>>,
}

/// A GraphQL connection. Both the list and its items are nullable.
#[derive(Debug, Deserialize)]
pub struct Connection<T> {
    pub nodes: Option<Vec<Option<T>>>,
}

impl<T> Connection<T> {
    fn into_items(self) -> impl Iterator<Item = T> {
        self.nodes.unwrap_or_default().into_iter().flatten()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositoryNode {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub languages: Option<Connection<LanguageNode>>,
    pub pushed_at: Option<String>,
    pub repository_topics: Option<Connection<TopicNode>>,
}

#[derive(Debug, Deserialize)]
pub struct LanguageNode {
    pub name: String,
    pub color: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct TopicNode {
    pub topic: Option<Topic>,
}

#[derive(Debug, Deserialize)]
pub struct Topic {
    pub name: String,
}

impl From<RepositoryNode> for RepositorySummary {
    fn from(node: RepositoryNode) -> Self {
        RepositorySummary {
            name: node.name,
            description: node.description.filter(|d| !d.trim().is_empty()),
            url: node.url,
            languages: node
                .languages
                .map(|c| {
                    c.into_items()
                        .map(|l| Language {
                            name: l.name,
                            color: l.color,
                        })
                        .collect()
                })
                .unwrap_or_default(),
            pushed_at: node.pushed_at.unwrap_or_default(),
            repository_topics: node
                .repository_topics
                .map(|c| c.into_items().filter_map(|t| t.topic).map(|t| t.name).collect())
                .unwrap_or_default(),
        }
    }
}

impl GraphQlResponse {
    /// Extracts the repository list, in response order.
    ///
    /// Errors alongside data are logged and the data is kept; errors without
    /// data fail the fetch. A missing viewer or connection is an empty list.
    pub fn into_repositories(self) -> Result<Vec<RepositorySummary>, GithubError> {
        let messages: Vec<String> = self.errors.into_iter().map(|e| e.message).collect();

        let Some(data) = self.data else {
            return Err(GithubError::GraphQl(if messages.is_empty() {
                vec!["response carried neither data nor errors".to_string()]
            } else {
                messages
            }));
        };

        if !messages.is_empty() {
            warn!("GitHub returned partial data with errors: {}", messages.join("; "));
        }

        Ok(data
            .viewer
            .and_then(|v| v.repositories)
            .map(|c| c.into_items().map(RepositorySummary::from).collect())
            .unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> GraphQlResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_full_node_normalized() {
        let response = parse(json!({
            "data": { "viewer": { "repositories": { "nodes": [{
                "name": "folio",
                "description": "My resume",
                "url": "https://github.com/me/folio",
                "languages": { "nodes": [
                    { "name": "Rust", "color": "#dea584" },
                    { "name": "Dockerfile", "color": null }
                ] },
                "pushedAt": "2023-06-01T10:00:00Z",
                "repositoryTopics": { "nodes": [
                    { "topic": { "name": "resume" } },
                    { "topic": { "name": "axum" } }
                ] }
            }] } } }
        }));

        let repos = response.into_repositories().unwrap();
        assert_eq!(repos.len(), 1);
        let repo = &repos[0];
        assert_eq!(repo.description.as_deref(), Some("My resume"));
        assert_eq!(repo.languages[1].color, None);
        assert_eq!(repo.pushed_at, "2023-06-01T10:00:00Z");
        assert_eq!(repo.repository_topics, vec!["resume", "axum"]);
    }

    #[test]
    fn test_missing_fields_become_empty() {
        let response = parse(json!({
            "data": { "viewer": { "repositories": { "nodes": [
                null,
                {
                    "name": "bare",
                    "description": "   ",
                    "url": "https://github.com/me/bare",
                    "languages": null,
                    "repositoryTopics": { "nodes": [null, { "topic": null }] }
                }
            ] } } }
        }));

        let repos = response.into_repositories().unwrap();
        assert_eq!(repos.len(), 1);
        assert_eq!(repos[0].description, None);
        assert!(repos[0].languages.is_empty());
        assert!(repos[0].repository_topics.is_empty());
        assert_eq!(repos[0].pushed_at, "");
    }

    #[test]
    fn test_missing_viewer_is_empty_list() {
        let response = parse(json!({ "data": { "viewer": null } }));
        assert!(response.into_repositories().unwrap().is_empty());
    }

    #[test]
    fn test_errors_without_data_fail() {
        let response = parse(json!({
            "data": null,
            "errors": [{ "message": "Bad credentials" }]
        }));
        match response.into_repositories() {
            Err(GithubError::GraphQl(messages)) => assert_eq!(messages, vec!["Bad credentials"]),
            other => panic!("expected GraphQl error, got {other:?}"),
        }
    }

    #[test]
    fn test_errors_with_data_keep_data() {
        let response = parse(json!({
            "data": { "viewer": { "repositories": { "nodes": [
                { "name": "a", "description": null, "url": "u", "pushedAt": "2023" }
            ] } } },
            "errors": [{ "message": "topics unavailable" }]
        }));
        assert_eq!(response.into_repositories().unwrap().len(), 1);
    }
}
