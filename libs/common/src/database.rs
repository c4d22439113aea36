//! Database module for handling MySQL connections
//!
//! This module provides connection settings, pooling and a health check
//! for the MySQL database backing the portfolio service.

use config::{Config, Environment};
use serde::Deserialize;
use sqlx::{
    MySqlPool,
    mysql::{MySqlConnectOptions, MySqlPoolOptions},
};
use tracing::{error, info};

use crate::error::{DatabaseError, DatabaseResult};

/// Database configuration struct
#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseConfig {
    /// MySQL server host
    #[serde(rename = "db_host")]
    pub host: String,
    /// MySQL server port
    #[serde(rename = "db_port")]
    pub port: u16,
    /// Account used to connect
    #[serde(rename = "db_user")]
    pub user: String,
    /// Password for `user`
    #[serde(rename = "db_password")]
    pub password: String,
    /// Schema holding the portfolio tables
    #[serde(rename = "db_name")]
    pub name: String,
    /// Maximum number of connections in the pool
    #[serde(rename = "db_max_connections")]
    pub max_connections: u32,
}

impl DatabaseConfig {
    /// Create a new DatabaseConfig from environment variables
    ///
    /// # Environment Variables
    /// - `DB_HOST`: MySQL host (default: "localhost")
    /// - `DB_PORT`: MySQL port (default: 3306)
    /// - `DB_USER`: MySQL user (default: "root")
    /// - `DB_PASSWORD`: MySQL password (default: empty)
    /// - `DB_NAME`: Database name (default: "portfolio")
    /// - `DB_MAX_CONNECTIONS`: Maximum number of pooled connections (default: 10)
    pub fn from_env() -> DatabaseResult<Self> {
        let config = Config::builder()
            .set_default("db_host", "localhost")?
            .set_default("db_port", 3306)?
            .set_default("db_user", "root")?
            .set_default("db_password", "")?
            .set_default("db_name", "portfolio")?
            .set_default("db_max_connections", 10)?
            .add_source(Environment::default())
            .build()?;

        Ok(config.try_deserialize()?)
    }

    /// Connection options derived from this configuration
    pub fn connect_options(&self) -> MySqlConnectOptions {
        MySqlConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .username(&self.user)
            .password(&self.password)
            .database(&self.name)
    }
}

/// Initialize a MySQL connection pool
///
/// Callers beyond `max_connections` wait for a free connection; no
/// statement timeout is applied.
pub async fn init_pool(config: &DatabaseConfig) -> DatabaseResult<MySqlPool> {
    info!(
        host = %config.host,
        database = %config.name,
        max_connections = config.max_connections,
        "Initializing database connection pool"
    );

    let pool = MySqlPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options())
        .await
        .map_err(DatabaseError::Connection)?;

    info!("Database connection pool initialized successfully");
    Ok(pool)
}

/// Check database connectivity
///
/// Returns `Ok(false)` when the probe query fails so callers can decide
/// whether an unreachable database is fatal.
pub async fn health_check(pool: &MySqlPool) -> DatabaseResult<bool> {
    match sqlx::query("SELECT 1").execute(pool).await {
        Ok(_) => Ok(true),
        Err(e) => {
            error!("Database health check failed: {}", e);
            Ok(false)
        }
    }
}
