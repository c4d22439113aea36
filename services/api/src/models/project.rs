//! Project model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::{non_blank, require_all};

/// Link stored when a project has none
pub const DEFAULT_LINK: &str = "#";

/// Icon stored when a project has none
pub const DEFAULT_ICON: &str = "📁";

/// Portfolio project
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    /// Comma separated technology names
    pub technologies: String,
    pub link: String,
    pub icon: String,
    pub created_at: DateTime<Utc>,
}

/// Project create/update payload
#[derive(Debug, Clone, Deserialize, Default)]
pub struct ProjectRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub technologies: String,
    pub link: Option<String>,
    pub icon: Option<String>,
}

/// Validated project fields with defaults applied
#[derive(Debug, Clone, PartialEq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub technologies: String,
    pub link: String,
    pub icon: String,
}

impl ProjectRequest {
    pub fn validate(self) -> Result<NewProject, String> {
        let technologies = normalize_technologies(&self.technologies);
        require_all(
            &[&self.title, &self.description, &technologies],
            "Required fields missing",
        )?;

        Ok(NewProject {
            title: self.title.trim().to_string(),
            description: self.description.trim().to_string(),
            technologies,
            link: non_blank(self.link).unwrap_or_else(|| DEFAULT_LINK.to_string()),
            icon: non_blank(self.icon).unwrap_or_else(|| DEFAULT_ICON.to_string()),
        })
    }
}

/// Trim each comma separated entry, drop empty ones and re-join with ", "
pub fn normalize_technologies(raw: &str) -> String {
    raw.split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_technology_list() {
        assert_eq!(
            normalize_technologies(" React,Node.js ,, MySQL "),
            "React, Node.js, MySQL"
        );
        assert_eq!(normalize_technologies(" , ,"), "");
    }

    #[test]
    fn applies_link_and_icon_defaults() {
        let project = ProjectRequest {
            title: "Portfolio".to_string(),
            description: "This site".to_string(),
            technologies: "Rust".to_string(),
            link: Some("  ".to_string()),
            icon: None,
        }
        .validate()
        .unwrap();

        assert_eq!(project.link, DEFAULT_LINK);
        assert_eq!(project.icon, DEFAULT_ICON);
    }

    #[test]
    fn technologies_made_of_separators_count_as_missing() {
        let result = ProjectRequest {
            title: "Portfolio".to_string(),
            description: "This site".to_string(),
            technologies: ", ,".to_string(),
            ..Default::default()
        }
        .validate();

        assert_eq!(result, Err("Required fields missing".to_string()));
    }
}
