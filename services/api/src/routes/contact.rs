//! Public contact form and the admin message feed

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::json;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    extract::ApiJson,
    middleware::auth_middleware,
    models::ContactRequest,
    state::AppState,
};

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/messages", get(list_messages))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
        .route("/", post(submit_contact))
}

/// Store a message from the public contact form
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ContactRequest>,
) -> ApiResult<impl IntoResponse> {
    let message = payload.validate().map_err(ApiError::Validation)?;
    let id = state.contact_repository.create(&message).await?;
    info!(contact_id = id, "Contact message received");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Message sent successfully!",
            "data": { "name": message.name, "email": message.email }
        })),
    ))
}

/// Every message, newest first
pub async fn list_messages(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let messages = state.contact_repository.list_all().await?;

    Ok(Json(json!({
        "success": true,
        "count": messages.len(),
        "data": messages
    })))
}
