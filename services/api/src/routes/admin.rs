//! Admin panel endpoints: login, profile, password and contact inbox

use axum::{
    Extension, Json, Router,
    extract::State,
    middleware,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use serde_json::json;
use tracing::info;

use crate::{
    auth::AuthAdmin,
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath, ApiQuery},
    middleware::auth_middleware,
    models::{
        AdminProfile, ChangePasswordRequest, ContactListResponse, LoginRequest, LoginResponse,
        PageQuery, PageRequest, Pagination, UpdateProfileRequest,
    },
    password,
    state::AppState,
};

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/profile", get(get_profile).put(update_profile))
        .route("/change-password", put(change_password))
        .route("/contacts", get(list_contacts))
        .route("/contacts/:id", delete(delete_contact))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
        .route("/login", post(login))
}

fn admin_not_found() -> ApiError {
    ApiError::NotFound("Admin not found".to_string())
}

/// Exchange credentials for a session token
pub async fn login(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<LoginRequest>,
) -> ApiResult<Json<LoginResponse>> {
    let session = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful".to_string(),
        token: session.token,
        admin: session.admin,
    }))
}

/// Profile of the admin behind the token
pub async fn get_profile(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
) -> ApiResult<impl IntoResponse> {
    let account = state
        .admin_repository
        .find_by_id(admin.id)
        .await?
        .ok_or_else(admin_not_found)?;

    Ok(Json(json!({ "admin": AdminProfile::from(account) })))
}

pub async fn update_profile(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ApiJson(payload): ApiJson<UpdateProfileRequest>,
) -> ApiResult<impl IntoResponse> {
    let profile = payload.validate().map_err(ApiError::Validation)?;

    if !state
        .admin_repository
        .update_profile(admin.id, &profile)
        .await?
    {
        return Err(admin_not_found());
    }

    info!(admin_id = admin.id, "Profile updated");
    Ok(Json(json!({ "message": "Profile updated successfully" })))
}

pub async fn change_password(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ApiJson(payload): ApiJson<ChangePasswordRequest>,
) -> ApiResult<impl IntoResponse> {
    payload.validate().map_err(ApiError::Validation)?;

    let account = state
        .admin_repository
        .find_by_id(admin.id)
        .await?
        .ok_or_else(admin_not_found)?;

    if !password::verify_password(&payload.current_password, &account.password_hash) {
        return Err(ApiError::Unauthorized(
            "Current password is incorrect".to_string(),
        ));
    }

    let password_hash = password::hash_password(&payload.new_password)?;
    if !state
        .admin_repository
        .update_password(admin.id, &password_hash)
        .await?
    {
        return Err(admin_not_found());
    }

    info!(admin_id = admin.id, "Password changed");
    Ok(Json(json!({ "message": "Password changed successfully" })))
}

/// Paginated inbox, newest first
pub async fn list_contacts(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PageQuery>,
) -> ApiResult<Json<ContactListResponse>> {
    let page = PageRequest::from(&query);
    let (contacts, total) = state.contact_repository.list_page(page).await?;

    Ok(Json(ContactListResponse {
        contacts,
        pagination: Pagination::new(page, total),
    }))
}

pub async fn delete_contact(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthAdmin>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<impl IntoResponse> {
    if !state.contact_repository.delete(id).await? {
        return Err(ApiError::NotFound("Contact not found".to_string()));
    }

    info!(admin_id = admin.id, contact_id = id, "Contact deleted");
    Ok(Json(json!({ "message": "Contact deleted successfully" })))
}
