//! Contact message repository for database operations

use anyhow::Result;
use async_trait::async_trait;
use sqlx::MySqlPool;

use crate::models::{ContactMessage, NewContactMessage, PageRequest};
use crate::repositories::ContactStore;

/// Contact message repository
#[derive(Clone)]
pub struct ContactRepository {
    pool: MySqlPool,
}

impl ContactRepository {
    /// Create a new contact repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ContactStore for ContactRepository {
    async fn create(&self, message: &NewContactMessage) -> Result<u64> {
        let result = sqlx::query(
            "INSERT INTO contacts (name, email, message, created_at) VALUES (?, ?, ?, NOW())",
        )
        .bind(&message.name)
        .bind(&message.email)
        .bind(&message.message)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn list_all(&self) -> Result<Vec<ContactMessage>> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, message, created_at
            FROM contacts
            ORDER BY created_at DESC, id DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(messages)
    }

    async fn list_page(&self, page: PageRequest) -> Result<(Vec<ContactMessage>, u64)> {
        let messages = sqlx::query_as::<_, ContactMessage>(
            r#"
            SELECT id, name, email, message, created_at
            FROM contacts
            ORDER BY created_at DESC, id DESC
            LIMIT ? OFFSET ?
            "#,
        )
        .bind(page.limit)
        .bind(page.offset())
        .fetch_all(&self.pool)
        .await?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM contacts")
            .fetch_one(&self.pool)
            .await?;

        Ok((messages, u64::try_from(total).unwrap_or_default()))
    }

    async fn delete(&self, id: u64) -> Result<bool> {
        let result = sqlx::query("DELETE FROM contacts WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
