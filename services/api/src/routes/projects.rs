//! Project endpoints: public reads, guarded writes

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
};
use serde_json::json;
use tracing::info;

use crate::{
    error::{ApiError, ApiResult},
    extract::{ApiJson, ApiPath},
    middleware::auth_middleware,
    models::ProjectRequest,
    state::AppState,
};

pub fn router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_project))
        .route("/:id", put(update_project).delete(delete_project))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new()
        .route("/", get(list_projects))
        .route("/:id", get(get_project))
        .merge(protected)
}

fn project_not_found() -> ApiError {
    ApiError::NotFound("Project not found".to_string())
}

pub async fn list_projects(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let projects = state.project_repository.list().await?;

    Ok(Json(json!({
        "success": true,
        "count": projects.len(),
        "data": projects
    })))
}

pub async fn get_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<impl IntoResponse> {
    let project = state
        .project_repository
        .find_by_id(id)
        .await?
        .ok_or_else(project_not_found)?;

    Ok(Json(json!({ "success": true, "data": project })))
}

pub async fn create_project(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<ProjectRequest>,
) -> ApiResult<impl IntoResponse> {
    let project = payload.validate().map_err(ApiError::Validation)?;
    let id = state.project_repository.create(&project).await?;
    info!(project_id = id, "Project created");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Project created successfully!",
            "data": { "id": id, "title": project.title, "description": project.description }
        })),
    ))
}

pub async fn update_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(payload): ApiJson<ProjectRequest>,
) -> ApiResult<impl IntoResponse> {
    let project = payload.validate().map_err(ApiError::Validation)?;

    if !state.project_repository.update(id, &project).await? {
        return Err(project_not_found());
    }

    let updated = state
        .project_repository
        .find_by_id(id)
        .await?
        .ok_or_else(project_not_found)?;
    info!(project_id = id, "Project updated");

    Ok(Json(json!({
        "success": true,
        "message": "Project updated successfully!",
        "data": updated
    })))
}

pub async fn delete_project(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<impl IntoResponse> {
    if !state.project_repository.delete(id).await? {
        return Err(project_not_found());
    }

    info!(project_id = id, "Project deleted");
    Ok(Json(json!({
        "success": true,
        "message": "Project deleted successfully!"
    })))
}
