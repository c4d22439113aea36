//! API service routes

use axum::{Json, Router, response::IntoResponse, routing::get};
use serde_json::json;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

pub mod admin;
pub mod contact;
pub mod projects;
pub mod skills;


/// Create the router for the API service
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health", get(health_check))
        .nest("/admin", admin::router(state.clone()))
        .nest("/contact", contact::router(state.clone()))
        .nest("/projects", projects::router(state.clone()))
        .nest("/skills", skills::router(state.clone()));

    Router::new()
        .nest("/api", api)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness probe
pub async fn health_check() -> impl IntoResponse {
    Json(json!({
        "status": "ok",
        "message": "Backend is running successfully!"
    }))
}
