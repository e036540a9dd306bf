//! Resource directory handlers

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use settle_core::traits::ResourceFilter;
use settle_core::{Region, ResourceCategory};
use settle_service::{ResourceResponse, ResourceService};

use crate::response::{ApiError, ApiResult};
use crate::state::AppState;

/// Query parameters for searching the directory
#[derive(Debug, Deserialize)]
pub struct ResourceListQuery {
    pub category: Option<ResourceCategory>,
    /// Matches entries in this region plus nationwide entries
    pub region: Option<Region>,
}

/// Search the resource directory
///
/// GET /api/v1/resources
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ResourceListQuery>,
) -> ApiResult<Json<Vec<ResourceResponse>>> {
    let filter = ResourceFilter {
        category: query.category,
        region: query.region,
    };

    let service = ResourceService::new(state.service_context());
    let response = service.search(filter).await?;
    Ok(Json(response))
}

/// Get one directory entry
///
/// GET /api/v1/resources/{id}
pub async fn get(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> ApiResult<Json<ResourceResponse>> {
    let id = id
        .parse()
        .map_err(|_| ApiError::invalid_path("Invalid resource id format"))?;

    let service = ResourceService::new(state.service_context());
    let response = service.get(id).await?;
    Ok(Json(response))
}
