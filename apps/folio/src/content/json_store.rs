use std::path::Path;

use serde_json::Value;
use thiserror::Error;
use tracing::{info, warn};

use crate::content::validation::report_issues;
use crate::content::ContentStore;
use crate::models::content::{ContentPayload, ExperienceEntry};

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Failed to read content file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Content is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Content root must be a JSON object")]
    NotAnObject,
}

/// Content loaded from a JSON file of the form
/// `{"experiences": [...], "education": [...]}`.
///
/// Each collection is parsed on its own, so a broken `education` array does
/// not take `experiences` down with it.
#[derive(Debug, Clone, Default)]
pub struct JsonContentStore {
    payload: ContentPayload,
}

impl JsonContentStore {
    /// Loads content from `path`. Never fails: an unreadable or malformed file
    /// yields empty collections and a warning.
    pub async fn load(path: &Path) -> Self {
        let raw = match tokio::fs::read_to_string(path).await {
            Ok(raw) => raw,
            Err(e) => {
                warn!(path = %path.display(), "{}", ContentError::Io(e));
                return Self::default();
            }
        };

        match Self::from_json(&raw) {
            Ok(store) => {
                info!(
                    path = %path.display(),
                    experiences = store.payload.experiences.len(),
                    education = store.payload.education.len(),
                    "Content loaded"
                );
                store
            }
            Err(e) => {
                warn!(path = %path.display(), "{e}");
                Self::default()
            }
        }
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let doc: Value = serde_json::from_str(raw)?;
        if !doc.is_object() {
            return Err(ContentError::NotAnObject);
        }

        let payload = ContentPayload {
            experiences: parse_collection(&doc, "experiences"),
            education: parse_collection(&doc, "education"),
        };

        report_issues("experiences", &payload.experiences);
        report_issues("education", &payload.education);

        Ok(Self { payload })
    }
}

fn parse_collection(doc: &Value, key: &str) -> Vec<ExperienceEntry> {
    match doc.get(key) {
        None | Some(Value::Null) => {
            warn!(collection = key, "Content collection missing, rendering it empty");
            Vec::new()
        }
        Some(value) => match serde_json::from_value::<Vec<ExperienceEntry>>(value.clone()) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(collection = key, "Malformed content collection, rendering it empty: {e}");
                Vec::new()
            }
        },
    }
}

impl ContentStore for JsonContentStore {
    fn experiences(&self) -> Vec<ExperienceEntry> {
        self.payload.experiences.clone()
    }

    fn education(&self) -> Vec<ExperienceEntry> {
        self.payload.education.clone()
    }
}
