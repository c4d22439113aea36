//! Admin repository for database operations

use anyhow::Result;
use async_trait::async_trait;
use sqlx::MySqlPool;
use tracing::info;

use crate::models::{AdminAccount, NewAdmin, ProfileUpdate};
use crate::repositories::AdminStore;

const ADMIN_COLUMNS: &str =
    "id, email, password, name, title, bio, phone, location, avatar_url, created_at";

/// Admin repository
#[derive(Clone)]
pub struct AdminRepository {
    pool: MySqlPool,
}

impl AdminRepository {
    /// Create a new admin repository
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    async fn exists(&self, id: u64) -> Result<bool> {
        let found: Option<u64> = sqlx::query_scalar("SELECT id FROM admin_users WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }
}

#[async_trait]
impl AdminStore for AdminRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<AdminAccount>> {
        let admin = sqlx::query_as::<_, AdminAccount>(&format!(
            "SELECT {} FROM admin_users WHERE email = ?",
            ADMIN_COLUMNS
        ))
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    async fn find_by_id(&self, id: u64) -> Result<Option<AdminAccount>> {
        let admin = sqlx::query_as::<_, AdminAccount>(&format!(
            "SELECT {} FROM admin_users WHERE id = ?",
            ADMIN_COLUMNS
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(admin)
    }

    async fn create(&self, admin: &NewAdmin) -> Result<u64> {
        info!("Creating admin: {}", admin.email);

        let result = sqlx::query(
            r#"
            INSERT INTO admin_users (email, password, name, title, created_at)
            VALUES (?, ?, ?, ?, NOW())
            "#,
        )
        .bind(&admin.email)
        .bind(&admin.password_hash)
        .bind(&admin.name)
        .bind(&admin.title)
        .execute(&self.pool)
        .await?;

        Ok(result.last_insert_id())
    }

    async fn update_profile(&self, id: u64, profile: &ProfileUpdate) -> Result<bool> {
        let result = sqlx::query(
            r#"
            UPDATE admin_users
            SET name = ?, title = ?, bio = ?, phone = ?, location = ?, avatar_url = ?
            WHERE id = ?
            "#,
        )
        .bind(&profile.name)
        .bind(&profile.title)
        .bind(&profile.bio)
        .bind(&profile.phone)
        .bind(&profile.location)
        .bind(&profile.avatar_url)
        .bind(id)
        .execute(&self.pool)
        .await?;

        // MySQL reports changed rows, so an identical update affects none.
        if result.rows_affected() > 0 {
            return Ok(true);
        }
        self.exists(id).await
    }

    async fn update_password(&self, id: u64, password_hash: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE admin_users SET password = ? WHERE id = ?")
            .bind(password_hash)
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
