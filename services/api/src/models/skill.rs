//! Skill model and category grouping

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::validation::require_all;

/// Skill entity
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, PartialEq)]
pub struct Skill {
    pub id: u64,
    pub category: String,
    pub name: String,
    pub proficiency: i32,
    pub created_at: DateTime<Utc>,
}

/// Skill as listed under its category
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SkillEntry {
    pub id: u64,
    pub name: String,
    pub proficiency: i32,
}

/// Skill create/update payload
#[derive(Debug, Clone, Deserialize, Default)]
pub struct SkillRequest {
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub name: String,
    pub proficiency: Option<i32>,
}

/// Validated skill fields
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewSkill {
    pub category: String,
    pub name: String,
    pub proficiency: i32,
}

impl SkillRequest {
    /// Only presence is checked; the category set and proficiency range are open.
    pub fn validate(self) -> Result<NewSkill, String> {
        const MESSAGE: &str = "All fields are required";

        require_all(&[&self.category, &self.name], MESSAGE)?;
        let proficiency = self.proficiency.ok_or_else(|| MESSAGE.to_string())?;

        Ok(NewSkill {
            category: self.category.trim().to_string(),
            name: self.name.trim().to_string(),
            proficiency,
        })
    }
}

/// Group skills by category, keeping the incoming order inside each category
pub fn group_by_category(skills: Vec<Skill>) -> BTreeMap<String, Vec<SkillEntry>> {
    let mut grouped: BTreeMap<String, Vec<SkillEntry>> = BTreeMap::new();

    for skill in skills {
        grouped.entry(skill.category).or_default().push(SkillEntry {
            id: skill.id,
            name: skill.name,
            proficiency: skill.proficiency,
        });
    }

    grouped
}
