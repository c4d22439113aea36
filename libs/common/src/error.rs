//! Custom error types for the common library
//!
//! Errors raised while configuring, connecting to or migrating the MySQL
//! database. Query failures inside repositories are reported through
//! `anyhow` by the service crates and never reach this type.

use sqlx::{Error as SqlxError, migrate::MigrateError};
use thiserror::Error;

/// Custom error type for database setup
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// The pool could not open a connection
    #[error("Database connection error: {0}")]
    Connection(#[source] SqlxError),

    /// Applying the embedded migrations failed
    #[error("Database migration error: {0}")]
    Migration(#[from] MigrateError),

    /// Connection settings could not be read from the environment
    #[error("Database configuration error: {0}")]
    Configuration(#[from] config::ConfigError),
}

/// Type alias for Result with DatabaseError
pub type DatabaseResult<T> = Result<T, DatabaseError>;
