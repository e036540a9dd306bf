//! Scam shield handlers
//!
//! Endpoints for checking suspicious messages and browsing past checks.

use axum::{
    extract::{Path, State},
    Json,
};
use settle_service::{PaginatedResponse, ScamAssessmentResponse, ScamCheckRequest, ScamService};

use crate::extractors::{AuthUser, Pagination, ValidatedJson};
use crate::response::{ApiError, ApiResult, Created};
use crate::state::AppState;

/// Run a scam check on submitted content
///
/// POST /api/v1/scam-checks
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<ScamCheckRequest>,
) -> ApiResult<Created<Json<ScamAssessmentResponse>>> {
    let service = ScamService::new(state.service_context());
    let response = service.check(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// List the user's past checks, newest first
///
/// GET /api/v1/scam-checks
pub async fn list(
    State(state): State<AppState>,
    auth: AuthUser,
    pagination: Pagination,
) -> ApiResult<Json<PaginatedResponse<ScamAssessmentResponse>>> {
    let service = ScamService::new(state.service_context());
    let response = service
        .list(auth.user_id, pagination.page, pagination.page_size)
        .await?;
    Ok(Json(response))
}

/// Get one assessment
///
/// GET /api/v1/scam-checks/{id}
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ScamAssessmentResponse>> {
    let id = id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid assessment id format"))?;

    let service = ScamService::new(state.service_context());
    let response = service.get(auth.user_id, id).await?;
    Ok(Json(response))
}

/// Mark an assessment as reported to the authorities
///
/// POST /api/v1/scam-checks/{id}/report
pub async fn report(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> ApiResult<Json<ScamAssessmentResponse>> {
    let id = id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid assessment id format"))?;

    let service = ScamService::new(state.service_context());
    let response = service.report(auth.user_id, id).await?;
    Ok(Json(response))
}
