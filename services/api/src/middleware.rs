//! Authentication middleware for JWT token validation

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::{error::ApiError, state::AppState};

/// Authentication middleware
///
/// Rejects the request with 401 unless it carries a valid bearer token, then
/// exposes the admin identity to the handler as an
/// [`AuthAdmin`](crate::auth::AuthAdmin) extension.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let admin = state.auth_service.authenticate(req.headers())?;

    req.extensions_mut().insert(admin);

    Ok(next.run(req).await)
}

