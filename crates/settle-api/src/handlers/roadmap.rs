//! Roadmap handlers
//!
//! Endpoints for generating and working through the settlement roadmap.

use axum::{
    extract::{Path, State},
    Json,
};
use settle_service::{RoadmapResponse, RoadmapService, UpdateTaskRequest};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Generate (or extend) the roadmap from the user's profile
///
/// POST /api/v1/roadmap/generate
pub async fn generate(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<RoadmapResponse>> {
    let service = RoadmapService::new(state.service_context());
    let response = service.generate(auth.user_id).await?;
    Ok(Json(response))
}

/// Get the roadmap with progress counts
///
/// GET /api/v1/roadmap
pub async fn get_roadmap(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<RoadmapResponse>> {
    let service = RoadmapService::new(state.service_context());
    let response = service.get_roadmap(auth.user_id).await?;
    Ok(Json(response))
}

/// Update a task's status and/or notes
///
/// PATCH /api/v1/roadmap/tasks/{task_id}
pub async fn update_task(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(task_id): Path<String>,
    ValidatedJson(request): ValidatedJson<UpdateTaskRequest>,
) -> ApiResult<Json<RoadmapResponse>> {
    let task_id = task_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid task_id format"))?;

    let service = RoadmapService::new(state.service_context());
    let response = service.update_task(auth.user_id, task_id, request).await?;
    Ok(Json(response))
}

/// Mark one instruction step as done
///
/// POST /api/v1/roadmap/tasks/{task_id}/steps/{order}
pub async fn complete_step(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((task_id, order)): Path<(String, i32)>,
) -> ApiResult<Json<RoadmapResponse>> {
    let task_id = task_id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid task_id format"))?;

    let service = RoadmapService::new(state.service_context());
    let response = service.complete_step(auth.user_id, task_id, order).await?;
    Ok(Json(response))
}
