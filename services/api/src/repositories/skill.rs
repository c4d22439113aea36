//! Skill repository for database operations

use anyhow::Result;
use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{NewSkill, Skill};
use crate::repositories::SkillStore;

/// Skill repository
#[derive(Clone)]
pub struct SkillRepository {
    pool: MySqlPool,
}

impl SkillRepository {
    /// Create a new skill repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SkillStore for SkillRepository {
    async fn list(&self) -> Result<Vec<Skill>> {
        let skills = sqlx::query_as::<_, Skill>(
            r#"
            SELECT id, category, name, proficiency, created_at
            FROM skills
            ORDER BY category, name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(skills)
    }

    async fn create(&self, skill: &NewSkill) -> Result<u64> {
        let result = sqlx::query(
            "INSERT INTO skills (category, name, proficiency, created_at) VALUES (?, ?, ?, NOW())",
        )
        .bind(&skill.category)
        .bind(&skill.name)
        .bind(skill.proficiency)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn update(&self, id: u64, skill: &NewSkill) -> Result<bool> {
        let result =
            sqlx::query("UPDATE skills SET category = ?, name = ?, proficiency = ? WHERE id = ?")
                .bind(&skill.category)
                .bind(&skill.name)
                .bind(skill.proficiency)
                .bind(id)
                .execute(&self.pool)
                .await?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }

        let found: Option<u64> = sqlx::query_scalar("SELECT id FROM skills WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(found.is_some())
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM skills WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
