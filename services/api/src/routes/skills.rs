//! Skill endpoints: grouped public listing, guarded writes

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
    models::{SkillRequest, group_by_category},
    state::AppState,
};

pub fn router(state: AppState) -> Router<AppState> {
    let protected = Router::new()
        .route("/", post(create_skill))
        .route("/:id", put(update_skill).delete(delete_skill))
        .route_layer(middleware::from_fn_with_state(state, auth_middleware));

    Router::new().route("/", get(list_skills)).merge(protected)
}

fn skill_not_found() -> ApiError {
    ApiError::NotFound("Skill not found".to_string())
}

/// Skills grouped by category
pub async fn list_skills(State(state): State<AppState>) -> ApiResult<impl IntoResponse> {
    let skills = state.skill_repository.list().await?;

    Ok(Json(json!({
        "success": true,
        "data": group_by_category(skills)
    })))
}

pub async fn create_skill(
    State(state): State<AppState>,
    ApiJson(payload): ApiJson<SkillRequest>,
) -> ApiResult<impl IntoResponse> {
    let skill = payload.validate().map_err(ApiError::Validation)?;
    let id = state.skill_repository.create(&skill).await?;
    info!(skill_id = id, "Skill added");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "message": "Skill added successfully!",
            "data": {
                "id": id,
                "category": skill.category,
                "name": skill.name,
                "proficiency": skill.proficiency
            }
        })),
    ))
}

pub async fn update_skill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
    ApiJson(payload): ApiJson<SkillRequest>,
) -> ApiResult<impl IntoResponse> {
    let skill = payload.validate().map_err(ApiError::Validation)?;

    if !state.skill_repository.update(id, &skill).await? {
        return Err(skill_not_found());
    }

    info!(skill_id = id, "Skill updated");
    Ok(Json(json!({
        "success": true,
        "message": "Skill updated successfully!",
        "data": {
            "id": id,
            "category": skill.category,
            "name": skill.name,
            "proficiency": skill.proficiency
        }
    })))
}

pub async fn delete_skill(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<u64>,
) -> ApiResult<impl IntoResponse> {
    if !state.skill_repository.delete(id).await? {
        return Err(skill_not_found());
    }

    info!(skill_id = id, "Skill deleted");
    Ok(Json(json!({
        "success": true,
        "message": "Skill deleted successfully!"
    })))
}
