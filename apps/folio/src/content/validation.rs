use reqwest::Url;
use serde::Serialize;
use tracing::warn;

use crate::models::content::ExperienceEntry;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContentIssue {
    pub field: &'static str,
    pub reason: String,
}

/// Checks an entry for content that will render poorly.
///
/// Issues are advisory: callers log them and keep the entry.
/// - `title` must not be blank
/// - `companyLink` must parse as an absolute URL
/// - `icon` must not be blank
/// - every skill needs a label
pub fn validate_entry(entry: &ExperienceEntry) -> Vec<ContentIssue> {
    let mut issues = Vec::new();

    if entry.title.trim().is_empty() {
        issues.push(ContentIssue {
            field: "title",
            reason: "title is blank".to_string(),
        });
    }

    if let Err(e) = Url::parse(&entry.company_link) {
        issues.push(ContentIssue {
            field: "companyLink",
            reason: format!("'{}' is not a link: {e}", entry.company_link),
        });
    }

    if entry.icon.trim().is_empty() {
        issues.push(ContentIssue {
            field: "icon",
            reason: "icon key is blank".to_string(),
        });
    }

    let unlabeled = entry.skills.iter().filter(|s| s.text.trim().is_empty()).count();
    if unlabeled > 0 {
        issues.push(ContentIssue {
            field: "skills",
            reason: format!("{unlabeled} skill(s) without a label"),
        });
    }

    issues
}

/// Logs every issue found in `entries`. Returns the number of issues.
pub fn report_issues(collection: &str, entries: &[ExperienceEntry]) -> usize {
    let mut count = 0;
    for (index, entry) in entries.iter().enumerate() {
        for issue in validate_entry(entry) {
            warn!(
                collection,
                index,
                field = issue.field,
                "Content issue: {}",
                issue.reason
            );
            count += 1;
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::content::SkillTag;

    fn entry(title: &str, link: &str) -> ExperienceEntry {
        ExperienceEntry {
            title: title.to_string(),
            location: String::new(),
            company_link: link.to_string(),
            icon: "eclImage".to_string(),
            excerpt: String::new(),
            skills: vec![],
        }
    }

    #[test]
    fn test_valid_entry_has_no_issues() {
        assert!(validate_entry(&entry("ECL", "https://www.ec-lyon.fr/")).is_empty());
    }

    #[test]
    fn test_blank_title_and_bad_link_reported() {
        let issues = validate_entry(&entry("  ", "ec-lyon"));
        let fields: Vec<&str> = issues.iter().map(|i| i.field).collect();
        assert_eq!(fields, vec!["title", "companyLink"]);
    }

    #[test]
    fn test_unlabeled_skills_reported() {
        let mut e = entry("ECL", "https://www.ec-lyon.fr/");
        e.skills = vec![SkillTag::new("", "#000", "white"), SkillTag::new("SQL", "#006cc1", "white")];
        let issues = validate_entry(&e);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].field, "skills");
    }

    #[test]
    fn test_report_issues_counts_across_entries() {
        let entries = vec![entry("", "https://a.dev/"), entry("B", "nope")];
        assert_eq!(report_issues("experiences", &entries), 2);
    }
}
