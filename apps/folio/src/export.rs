//! Static export: writes the rendered page and its icons to a directory.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{info, warn};

use crate::icons::{IconRegistry, ICONS_DIR_NAME};
use crate::render::{render_html, PageDocument};

/// Writes `index.html` and every registered icon file to `output_dir`,
/// creating it if needed. Returns the path of `index.html`.
///
/// An icon that cannot be copied is logged and skipped; the page has
/// already been written and renders without it.
pub async fn export_site(
    output_dir: &Path,
    page: &PageDocument,
    icons: &IconRegistry,
) -> Result<PathBuf> {
    let icons_out = output_dir.join(ICONS_DIR_NAME);
    tokio::fs::create_dir_all(&icons_out)
        .await
        .with_context(|| format!("Failed to create {}", icons_out.display()))?;

    let index = output_dir.join("index.html");
    tokio::fs::write(&index, render_html(page))
        .await
        .with_context(|| format!("Failed to write {}", index.display()))?;
    info!("Wrote {}", index.display());

    for asset in icons.assets() {
        let from = icons.dir().join(&asset.file_name);
        let to = icons_out.join(&asset.file_name);
        match tokio::fs::copy(&from, &to).await {
            Ok(_) => info!("Copied icon {}", to.display()),
            Err(e) => warn!(icon = %asset.key, "Icon file {} not copied: {e}", from.display()),
        }
    }

    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::AuthoredContent;
    use crate::github::StaticRepositorySource;
    use crate::render::{build_page, SeoMeta};

    async fn page_with(icons: &IconRegistry) -> PageDocument {
        build_page(
            &AuthoredContent,
            &StaticRepositorySource::default(),
            icons,
            SeoMeta::default(),
        )
        .await
    }

    #[tokio::test]
    async fn test_export_writes_index_and_icons() {
        let icons_dir = tempfile::tempdir().unwrap();
        std::fs::write(icons_dir.path().join("ecl.png"), b"\x89PNG").unwrap();
        let icons = IconRegistry::from_dir(icons_dir.path());
        let page = page_with(&icons).await;

        let out = tempfile::tempdir().unwrap();
        let site = out.path().join("site");
        let index = export_site(&site, &page, &icons).await.unwrap();

        assert_eq!(index, site.join("index.html"));
        let html = std::fs::read_to_string(&index).unwrap();
        assert!(html.contains("<h2>Expériences</h2>"));
        assert!(html.contains("<h2>Formation</h2>"));
        assert!(html.contains("<h2>Github</h2>"));
        assert!(html.contains("<img src=\"icons/ecl.png\""));
        assert_eq!(std::fs::read(site.join("icons/ecl.png")).unwrap(), b"\x89PNG".to_vec());
    }

    #[tokio::test]
    async fn test_export_skips_missing_icon_files() {
        let icons_dir = tempfile::tempdir().unwrap();
        std::fs::write(icons_dir.path().join("ecl.png"), b"ecl").unwrap();
        std::fs::write(icons_dir.path().join("ayuda.png"), b"ayuda").unwrap();
        let icons = IconRegistry::from_dir(icons_dir.path());
        let page = page_with(&icons).await;
        std::fs::remove_file(icons_dir.path().join("ayuda.png")).unwrap();

        let out = tempfile::tempdir().unwrap();
        let index = export_site(out.path(), &page, &icons).await.unwrap();

        assert!(index.exists());
        assert!(out.path().join("icons/ecl.png").exists());
        assert!(!out.path().join("icons/ayuda.png").exists());
    }
}
