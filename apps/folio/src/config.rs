use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::github::client::DEFAULT_GRAPHQL_URL;
use crate::render::SeoMeta;

/// Application configuration loaded from environment variables.
/// Everything is optional except that `PORT`, when set, must be a valid port.
#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: Option<String>,
    pub github_graphql_url: String,
    pub content_path: Option<PathBuf>,
    pub icons_dir: PathBuf,
    pub site_title: String,
    pub site_description: String,
    pub site_author: String,
    pub site_lang: String,
    pub output_dir: Option<PathBuf>,
    pub port: u16,
    pub rust_log: String,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Ok(Config {
            github_token: optional_env("GITHUB_TOKEN"),
            github_graphql_url: env_or("GITHUB_GRAPHQL_URL", DEFAULT_GRAPHQL_URL),
            content_path: optional_env("CONTENT_PATH").map(PathBuf::from),
            icons_dir: PathBuf::from(env_or("ICONS_DIR", "static/icons")),
            site_title: env_or("SITE_TITLE", "Resume"),
            site_description: env_or("SITE_DESCRIPTION", ""),
            site_author: env_or("SITE_AUTHOR", ""),
            site_lang: env_or("SITE_LANG", "fr"),
            output_dir: optional_env("OUTPUT_DIR").map(PathBuf::from),
            port: parse_port(std::env::var("PORT").ok())?,
            rust_log: env_or("RUST_LOG", "info"),
        })
    }

    pub fn seo(&self) -> SeoMeta {
        SeoMeta {
            title: self.site_title.clone(),
            description: self.site_description.clone(),
            author: self.site_author.clone(),
            lang: self.site_lang.clone(),
        }
    }
}

/// Unset and blank are the same thing.
fn optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_port(raw: Option<String>) -> Result<u16> {
    raw.unwrap_or_else(|| "8080".to_string())
        .parse::<u16>()
        .context("PORT must be a valid port number")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_port_defaults_to_8080() {
        assert_eq!(parse_port(None).unwrap(), 8080);
        assert_eq!(parse_port(Some("3000".to_string())).unwrap(), 3000);
    }

    #[test]
    fn test_invalid_port_rejected() {
        let err = parse_port(Some("http".to_string())).unwrap_err();
        assert!(err.to_string().contains("PORT"));
        assert!(parse_port(Some("70000".to_string())).is_err());
    }
}
