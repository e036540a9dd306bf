//! Profile handlers
//!
//! Endpoints for the onboarding profile (one per user).

use axum::{extract::State, Json};
use settle_service::{OnboardingRequest, ProfileResponse, ProfileService};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created};
use crate::state::AppState;

/// Get the current user's profile
///
/// GET /api/v1/profile
pub async fn get_profile(
    State(state): State<AppState>,
    auth: AuthUser,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.get_profile(auth.user_id).await?;
    Ok(Json(response))
}

/// Create the profile from onboarding answers
///
/// POST /api/v1/profile
pub async fn create_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<OnboardingRequest>,
) -> ApiResult<Created<Json<ProfileResponse>>> {
    let service = ProfileService::new(state.service_context());
    let response = service.create_profile(auth.user_id, request).await?;
    Ok(Created(Json(response)))
}

/// Replace the profile with new onboarding answers
///
/// PUT /api/v1/profile
pub async fn update_profile(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(request): ValidatedJson<OnboardingRequest>,
) -> ApiResult<Json<ProfileResponse>> {
    let service = ProfileService::new(state.service_context());
    let response = service.update_profile(auth.user_id, request).await?;
    Ok(Json(response))
}
