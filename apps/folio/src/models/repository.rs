#![allow(dead_code)]

use serde::{Deserialize, Serialize};

/// A repository as shown in the gallery, already normalized from the
/// GraphQL response shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepositorySummary {
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    #[serde(default)]
    pub languages: Vec<Language>,
    /// Last push timestamp as sent by the source. Compared as raw text.
    #[serde(default)]
    pub pushed_at: String,
    #[serde(default)]
    pub repository_topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    pub name: String,
    /// GitHub leaves some languages without a color.
    pub color: Option<String>,
}

impl RepositorySummary {
    pub fn new(name: &str, url: &str, pushed_at: &str) -> Self {
        Self {
            name: name.to_string(),
            description: None,
            url: url.to_string(),
            languages: Vec::new(),
            pushed_at: pushed_at.to_string(),
            repository_topics: Vec::new(),
        }
    }
}
