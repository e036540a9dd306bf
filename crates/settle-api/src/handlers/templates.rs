//! Document template handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use settle_core::TemplateDocCategory;
use settle_service::{
    RenderTemplateRequest, RenderedTemplateResponse, TemplateDocResponse, TemplateService,
};

use crate::extractors::AuthUser;
use crate::response::ApiResult;
use crate::state::AppState;

/// Query parameters for listing templates
#[derive(Debug, Deserialize)]
pub struct TemplateListQuery {
    pub category: Option<TemplateDocCategory>,
}

/// List active document templates
///
/// GET /api/v1/templates
pub async fn list(
    State(state): State<AppState>,
    _auth: AuthUser,
    Query(query): Query<TemplateListQuery>,
) -> ApiResult<Json<Vec<TemplateDocResponse>>> {
    let service = TemplateService::new(state.service_context());
    let response = service.list(query.category).await?;
    Ok(Json(response))
}

/// Get one template's metadata
///
/// GET /api/v1/templates/{slug}
pub async fn get(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(slug): Path<String>,
) -> ApiResult<Json<TemplateDocResponse>> {
    let service = TemplateService::new(state.service_context());
    let response = service.get(&slug).await?;
    Ok(Json(response))
}

/// Render a template with caller-supplied values
///
/// POST /api/v1/templates/{slug}/render
pub async fn render(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(slug): Path<String>,
    body: Option<Json<RenderTemplateRequest>>,
) -> ApiResult<Json<RenderedTemplateResponse>> {
    let request = body.map(|b| b.0).unwrap_or_default();

    let service = TemplateService::new(state.service_context());
    let response = service.render(auth.user_id, &slug, request).await?;
    Ok(Json(response))
}
