//! Operator tools for the portfolio backend.
//!
//! ```bash
//! # Print an argon2 hash for a password
//! portfolio-admin hash-password 'correct horse'
//!
//! # Create an admin account directly in the database
//! portfolio-admin create-admin -e owner@example.com -n "Owner" -p 'correct horse' -t "Engineer"
//! ```
//!
//! Database settings are read from the same `DB_*` variables as the API.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use portfolio_api::{
    models::NewAdmin,
    password::hash_password,
    repositories::{AdminRepository, AdminStore},
    validation::{validate_email, validate_password},
};
use portfolio_common::database::{DatabaseConfig, init_pool};
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "portfolio-admin")]
#[command(author, version, about = "Portfolio backend admin tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the argon2 hash of a password
    HashPassword {
        password: String,
    },
    /// Create a new admin account
    CreateAdmin {
        /// Login email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        password: String,

        /// Job title shown on the site
        #[arg(short, long)]
        title: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    if let Err(e) = run(Cli::parse()).await {
        error!("Command failed: {:#}", e);
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::HashPassword { password } => {
            println!("{}", hash_password(&password)?);
        }
        Commands::CreateAdmin {
            email,
            name,
            password,
            title,
        } => {
            let email = email.trim().to_string();
            validate_email(&email).map_err(anyhow::Error::msg)?;
            validate_password(&password).map_err(anyhow::Error::msg)?;
            anyhow::ensure!(!name.trim().is_empty(), "Name is required");

            let config = DatabaseConfig::from_env()?;
            let pool = init_pool(&config).await?;
            let admins = AdminRepository::new(pool);

            if admins.find_by_email(&email).await?.is_some() {
                anyhow::bail!("Admin already exists with email: {}", email);
            }

            let id = admins
                .create(&NewAdmin {
                    email: email.clone(),
                    password_hash: hash_password(&password)?,
                    name: name.trim().to_string(),
                    title: title.filter(|t| !t.trim().is_empty()),
                })
                .await
                .context("Failed to create admin")?;

            info!(admin_id = id, "Created admin {}", email);
        }
    }

    Ok(())
}
