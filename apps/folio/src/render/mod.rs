// Page pipeline: collect content and repositories, order, compose, render.
// Ordering and composition only start once every input is fully resolved.

pub mod html;
pub mod ordering;
pub mod view;

use chrono::Utc;
use tracing::info;

use crate::content::ContentStore;
use crate::github::RepositorySource;
use crate::icons::IconRegistry;

pub use html::render_html;
pub use ordering::order_repositories;
pub use view::{render_resume, PageDocument, SeoMeta};

/// Builds the page once from its three independent inputs.
pub async fn build_page(
    content: &dyn ContentStore,
    source: &dyn RepositorySource,
    icons: &IconRegistry,
    seo: SeoMeta,
) -> PageDocument {
    let experiences = content.experiences();
    let education = content.education();
    let repositories = order_repositories(source.repositories().await);

    info!(
        experiences = experiences.len(),
        education = education.len(),
        repositories = repositories.len(),
        icons = icons.len(),
        "Composing resume page"
    );

    let mut page = render_resume(&experiences, &education, &repositories, icons, seo);
    page.generated_at = Some(Utc::now());
    page
}
