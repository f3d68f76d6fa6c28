//! Content stores: where the experience and education collections come from.
//!
//! `main` picks one `Arc<dyn ContentStore>` at startup (`JsonContentStore`
//! when `CONTENT_PATH` is set, `AuthoredContent` otherwise) and drops it once
//! the page is built.

pub mod authored;
pub mod json_store;
pub mod validation;

use crate::models::content::ExperienceEntry;

pub use authored::AuthoredContent;
pub use json_store::JsonContentStore;

/// Read-only access to the page's static collections.
///
/// Implementations return entries verbatim, in authored order. A store that
/// could not load a collection returns it empty rather than failing.
pub trait ContentStore: Send + Sync {
    fn experiences(&self) -> Vec<ExperienceEntry>;
    fn education(&self) -> Vec<ExperienceEntry>;
}
