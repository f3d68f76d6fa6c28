//! Icon registry: maps the `icon` key of a content entry to a square image
//! served under `/icons/` and exported to `icons/`.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use reqwest::Url;
use serde::Serialize;
use tracing::{debug, warn};

pub const ICON_SIZE: u32 = 30;
/// Directory name under the site root, both when served and when exported.
pub const ICONS_DIR_NAME: &str = "icons";
pub const ICONS_ROUTE: &str = "/icons";
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "svg", "webp", "gif"];

/// Keys referenced by the authored content, with their file names.
const DEFAULT_ICONS: &[(&str, &str)] = &[
    ("hiresweetImage", "hiresweet.png"),
    ("ayudaImage", "ayuda.png"),
    ("homerezImage", "homerez.png"),
    ("eclImage", "ecl.png"),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconAsset {
    pub key: String,
    pub file_name: String,
    /// Page-relative URL of the image, e.g. `icons/ecl.png`. Relative so an
    /// exported page works from disk or under a subpath.
    pub src: String,
    pub width: u32,
    pub height: u32,
}

impl IconAsset {
    fn new(key: &str, file_name: &str) -> Self {
        Self {
            key: key.to_string(),
            file_name: file_name.to_string(),
            src: format!("{ICONS_DIR_NAME}/{}", encode_path_segment(file_name)),
            width: ICON_SIZE,
            height: ICON_SIZE,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct IconRegistry {
    dir: PathBuf,
    assets: BTreeMap<String, IconAsset>,
}

impl IconRegistry {
    pub fn empty(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            assets: BTreeMap::new(),
        }
    }

    /// Registers the default keys without checking that their files exist.
    pub fn with_defaults(dir: impl Into<PathBuf>) -> Self {
        let mut registry = Self::empty(dir);
        for (key, file_name) in DEFAULT_ICONS {
            registry.register(key, file_name);
        }
        registry
    }

    /// Scans `dir` for images. Defaults are kept only when their file is
    /// present; any other image `foo.png` is registered as `fooImage`.
    /// An unreadable directory yields an empty registry.
    pub fn from_dir(dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let mut registry = Self::empty(dir.clone());

        let entries = match std::fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(dir = %dir.display(), "Icon directory unreadable, no icons will render: {e}");
                return registry;
            }
        };

        let mut files: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .filter(|name| is_image(name))
            .collect();
        files.sort();

        for file_name in &files {
            let key = DEFAULT_ICONS
                .iter()
                .find(|(_, default_file)| *default_file == file_name.as_str())
                .map(|(key, _)| key.to_string())
                .unwrap_or_else(|| format!("{}Image", file_stem(file_name)));
            if let Some(existing) = registry.resolve(&key) {
                warn!(
                    key = %key,
                    kept = %existing.file_name,
                    skipped = %file_name,
                    "Icon key collision, keeping the first file"
                );
                continue;
            }
            registry.register(&key, file_name);
        }

        debug!(dir = %registry.dir.display(), count = registry.len(), "Icon registry built");
        registry
    }

    pub fn register(&mut self, key: &str, file_name: &str) {
        self.assets
            .insert(key.to_string(), IconAsset::new(key, file_name));
    }

    pub fn resolve(&self, key: &str) -> Option<&IconAsset> {
        self.assets.get(key)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn assets(&self) -> impl Iterator<Item = &IconAsset> {
        self.assets.values()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

fn is_image(file_name: &str) -> bool {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| IMAGE_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

fn encode_path_segment(segment: &str) -> String {
    let Ok(mut url) = Url::parse("http://localhost/") else {
        return segment.to_string();
    };
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(segment);
    }
    url.path().trim_start_matches('/').to_string()
}

fn file_stem(file_name: &str) -> &str {
    Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or(file_name)
}
