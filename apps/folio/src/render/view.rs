//! Page composition: turns resolved content into a `PageDocument`.
//!
//! Everything here is synchronous and free of I/O. Cards are keyed by their
//! position in the source list.
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::warn;

use crate::icons::{IconAsset, IconRegistry};
use crate::models::content::{ExperienceEntry, SkillTag};
use crate::models::repository::RepositorySummary;

pub const EXPERIENCE_HEADING: &str = "Expériences";
pub const EDUCATION_HEADING: &str = "Formation";
pub const REPOSITORIES_HEADING: &str = "Github";

// ────────────────────────────────────────────────────────────────────────────
// Document model
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub author: String,
    pub lang: String,
}

impl Default for SeoMeta {
    fn default() -> Self {
        Self {
            title: "Resume".to_string(),
            description: String::new(),
            author: String::new(),
            lang: "fr".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PageDocument {
    pub seo: SeoMeta,
    pub sections: Vec<Section>,
    /// Set by the build pipeline, not by composition.
    pub generated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKind {
    Experience,
    Education,
    Repositories,
}

#[derive(Debug, Clone, Serialize)]
pub struct Section {
    pub kind: SectionKind,
    pub heading: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Card {
    Entry(EntryCard),
    Repository(RepositoryCard),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryCard {
    pub key: usize,
    pub title: String,
    pub location: String,
    pub link: String,
    /// `None` when the icon key did not resolve.
    pub icon: Option<IconAsset>,
    pub excerpt: String,
    pub skills: Vec<Chip>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chip {
    pub text: String,
    pub background_color: String,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RepositoryCard {
    pub key: usize,
    pub name: String,
    pub description: Option<String>,
    pub url: String,
    pub languages: Vec<LanguageChip>,
    pub topics: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LanguageChip {
    pub name: String,
    pub color: Option<String>,
}

impl PageDocument {
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    pub fn card_count(&self) -> usize {
        self.sections.iter().map(|s| s.cards.len()).sum()
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Cards
// ────────────────────────────────────────────────────────────────────────────

pub fn chip(tag: &SkillTag) -> Chip {
    Chip {
        text: tag.text.clone(),
        background_color: tag.background_color.clone(),
        color: tag.color.clone(),
    }
}

/// Builds an entry card. An unresolved icon leaves the icon region empty.
pub fn entry_card(key: usize, entry: &ExperienceEntry, icons: &IconRegistry) -> EntryCard {
    let icon = icons.resolve(&entry.icon).cloned();
    if icon.is_none() {
        warn!(icon = %entry.icon, title = %entry.title, "Icon not found, rendering without it");
    }

    EntryCard {
        key,
        title: entry.title.clone(),
        location: entry.location.clone(),
        link: entry.company_link.clone(),
        icon,
        excerpt: entry.excerpt.clone(),
        skills: entry.skills.iter().map(chip).collect(),
    }
}

pub fn repository_card(key: usize, repository: &RepositorySummary) -> RepositoryCard {
    RepositoryCard {
        key,
        name: repository.name.clone(),
        description: repository.description.clone(),
        url: repository.url.clone(),
        languages: repository
            .languages
            .iter()
            .map(|l| LanguageChip {
                name: l.name.clone(),
                color: l.color.clone(),
            })
            .collect(),
        topics: repository.repository_topics.clone(),
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Composition
// ────────────────────────────────────────────────────────────────────────────

/// Composes the page: experiences, then education, then the repository
/// gallery. `repositories` must already be ordered; composition keeps the
/// order it is given. Every heading renders even when its list is empty.
pub fn render_resume(
    experiences: &[ExperienceEntry],
    education: &[ExperienceEntry],
    repositories: &[RepositorySummary],
    icons: &IconRegistry,
    seo: SeoMeta,
) -> PageDocument {
    let sections = vec![
        entry_section(SectionKind::Experience, EXPERIENCE_HEADING, experiences, icons),
        entry_section(SectionKind::Education, EDUCATION_HEADING, education, icons),
        Section {
            kind: SectionKind::Repositories,
            heading: REPOSITORIES_HEADING.to_string(),
            cards: repositories
                .iter()
                .enumerate()
                .map(|(key, repository)| Card::Repository(repository_card(key, repository)))
                .collect(),
        },
    ];

    PageDocument {
        seo,
        sections,
        generated_at: None,
    }
}

fn entry_section(
    kind: SectionKind,
    heading: &str,
    entries: &[ExperienceEntry],
    icons: &IconRegistry,
) -> Section {
    Section {
        kind,
        heading: heading.to_string(),
        cards: entries
            .iter()
            .enumerate()
            .map(|(key, entry)| Card::Entry(entry_card(key, entry, icons)))
            .collect(),
    }
}
