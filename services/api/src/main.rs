use anyhow::Result;
use portfolio_api::{config::ServerConfig, jwt::JwtService, routes, state::AppState};
use portfolio_common::{
    DatabaseError,
    database::{DatabaseConfig, health_check, init_pool},
};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    info!("Starting portfolio API");

    let db_config = DatabaseConfig::from_env()?;
    let server_config = ServerConfig::from_env()?;

    if server_config.uses_default_secret() {
        warn!("JWT_SECRET is not set; signing tokens with the development default");
    }

    // Initialize database connection pool
    let pool = init_pool(&db_config).await?;

    // Check database connectivity
    if health_check(&pool).await? {
        info!("Database connection successful");
    } else {
        anyhow::bail!("Failed to connect to database");
    }

    if server_config.run_migrations {
        sqlx::migrate!()
            .run(&pool)
            .await
            .map_err(DatabaseError::from)?;
        info!("Database migrations applied");
    }

    let jwt_service = JwtService::new(&server_config.jwt_config());
    info!(
        expiry_seconds = jwt_service.expiry_seconds(),
        "Session tokens configured"
    );

    let app = routes::create_router(AppState::with_pool(pool, jwt_service));

    let addr = format!("0.0.0.0:{}", server_config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Portfolio API listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
