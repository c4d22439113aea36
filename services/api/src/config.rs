//! HTTP server and session settings

use config::{Config, ConfigError, Environment};
use serde::Deserialize;

use crate::jwt::JwtConfig;

/// Secret used when `JWT_SECRET` is unset; only fit for local development
pub const DEFAULT_JWT_SECRET: &str = "change-me-in-production";

/// Server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Port the HTTP listener binds on all interfaces
    pub port: u16,
    pub jwt_secret: String,
    pub jwt_expiry_hours: u64,
    /// Apply pending schema migrations at startup
    pub run_migrations: bool,
}

impl ServerConfig {
    /// Create a new ServerConfig from environment variables
    ///
    /// # Environment Variables
    /// - `PORT`: HTTP port (default: 5000)
    /// - `JWT_SECRET`: token signing secret (default: "change-me-in-production")
    /// - `JWT_EXPIRY_HOURS`: session lifetime (default: 24)
    /// - `RUN_MIGRATIONS`: apply migrations on boot (default: true)
    pub fn from_env() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("port", 5000)?
            .set_default("jwt_secret", DEFAULT_JWT_SECRET)?
            .set_default("jwt_expiry_hours", 24)?
            .set_default("run_migrations", true)?
            .add_source(Environment::default())
            .build()?
            .try_deserialize()
    }

    pub fn jwt_config(&self) -> JwtConfig {
        JwtConfig {
            secret: self.jwt_secret.clone(),
            expiry_seconds: self.jwt_expiry_hours.saturating_mul(60 * 60),
        }
    }

    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }
}
