//! Common library for the portfolio backend
//!
//! This crate provides the pieces shared by the service crates: MySQL
//! connection settings, pool construction and the database error type.
//!
//! ```rust,no_run
//! use portfolio_common::database::{DatabaseConfig, health_check, init_pool};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DatabaseConfig::from_env()?;
//!     let pool = init_pool(&config).await?;
//!     assert!(health_check(&pool).await?);
//!     Ok(())
//! }
//! ```

pub mod database;
pub mod error;

pub use database::{DatabaseConfig, health_check, init_pool};
pub use error::{DatabaseError, DatabaseResult};
