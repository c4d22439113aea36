//! Project repository for database operations

use anyhow::Result;
use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{NewProject, Project};
use crate::repositories::ProjectStore;

/// Project repository
#[derive(Clone)]
pub struct ProjectRepository {
    pool: MySqlPool,
}

impl ProjectRepository {
    /// Create a new project repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ProjectStore for ProjectRepository {
    async fn list(&self) -> Result<Vec<Project>> {
        let projects = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, technologies, link, icon, created_at
            FROM projects
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(projects)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<Project>> {
        let project = sqlx::query_as::<_, Project>(
            r#"
            SELECT id, title, description, technologies, link, icon, created_at
            FROM projects
            WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(project)
    }

    async fn create(&self, project: &NewProject) -> Result<u64> {
        let result = sqlx::query(
            r#"
            INSERT INTO projects (title, description, technologies, link, icon, created_at)
            VALUES (?, ?, ?, ?, ?, NOW())
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.technologies)
        .bind(&project.link)
        .bind(&project.icon)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn update(&self, id: u64, project: &NewProject) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE projects
            SET title = ?, description = ?, technologies = ?, link = ?, icon = ?
            WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(&project.technologies)
        .bind(&project.link)
        .bind(&project.icon)
        .bind(id)
        .execute(&self.pool)
        .await?;

        if result.rows_affected() > 0 {
            return Ok(true);
        }
        Ok(self.find_by_id(id).await?.is_some())
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
