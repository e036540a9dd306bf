//! Admin handlers
//!
//! Catalog management endpoints, restricted to the admin role.

use axum::{extract::State, Json};
use settle_service::{
    CreateResourceRequest, CreateTaskTemplateRequest, ResourceResponse, ResourceService,
    RoadmapService, TaskTemplateResponse,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Create a task template
///
/// POST /api/v1/admin/templates
pub async fn create_task_template(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateTaskTemplateRequest>,
) -> ApiResult<Created<Json<TaskTemplateResponse>>> {
    auth.require_admin()?;

    let service = RoadmapService::new(state.service_context());
    let response = service.create_template(request).await?;
    Ok(Created(Json(response)))
}

/// Create a resource directory entry
///
/// POST /api/v1/admin/resources
pub async fn create_resource(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<CreateResourceRequest>,
) -> ApiResult<Created<Json<ResourceResponse>>> {
    auth.require_admin()?;

    let service = ResourceService::new(state.service_context());
    let response = service.create(request).await?;
    Ok(Created(Json(response)))
}
