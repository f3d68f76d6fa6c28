use serde::{Deserialize, Serialize};

/// A single resume entry. Jobs and education share this shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    #[serde(default)]
    pub location: String,
    pub company_link: String,
    /// Key into the icon registry, e.g. `hiresweetImage`.
    pub icon: String,
    #[serde(default)]
    pub excerpt: String,
    /// Left-to-right display order. `null` and absent both mean empty.
    #[serde(default, deserialize_with = "null_as_empty")]
    pub skills: Vec<SkillTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillTag {
    pub text: String,
    pub background_color: String,
    pub color: String,
}

impl SkillTag {
    pub fn new(text: &str, background_color: &str, color: &str) -> Self {
        Self {
            text: text.to_string(),
            background_color: background_color.to_string(),
            color: color.to_string(),
        }
    }
}

/// Both collections of the page, as stored in a content file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContentPayload {
    #[serde(default)]
    pub experiences: Vec<ExperienceEntry>,
    #[serde(default)]
    pub education: Vec<ExperienceEntry>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_entry_reads_camel_case_fields() {
        let entry: ExperienceEntry = serde_json::from_value(json!({
            "title": "Fullstack - Hiresweet",
            "location": "Paris",
            "companyLink": "https://hiresweet.com/",
            "icon": "hiresweetImage",
            "excerpt": "React, Node",
            "skills": [{ "text": "React", "backgroundColor": "#61dafb", "color": "black" }]
        }))
        .unwrap();

        assert_eq!(entry.company_link, "https://hiresweet.com/");
        assert_eq!(entry.skills, vec![SkillTag::new("React", "#61dafb", "black")]);
    }

    #[test]
    fn test_absent_or_null_skills_are_empty() {
        let absent: ExperienceEntry = serde_json::from_value(json!({
            "title": "ECL", "companyLink": "https://www.ec-lyon.fr/", "icon": "eclImage"
        }))
        .unwrap();
        let null: ExperienceEntry = serde_json::from_value(json!({
            "title": "ECL", "companyLink": "https://www.ec-lyon.fr/", "icon": "eclImage",
            "skills": null
        }))
        .unwrap();

        assert!(absent.skills.is_empty());
        assert!(null.skills.is_empty());
        assert_eq!(absent.location, "");
    }
}
