//! Health check handlers
//!
//! Liveness and readiness probes, plus the database connectivity probe the
//! dashboard's diagnostics page calls.

use axum::{extract::State, http::StatusCode, Json};
use settle_service::{DbProbeResponse, HealthResponse, ReadinessResponse};

use crate::state::AppState;

/// Basic health check (liveness probe)
///
/// GET /health
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Readiness check with dependency health
///
/// GET /health/ready
pub async fn readiness_check(
    State(state): State<AppState>,
) -> (StatusCode, Json<ReadinessResponse>) {
    // Check database connectivity
    let db_healthy = state
        .service_context()
        .pool()
        .acquire()
        .await
        .map(|_| true)
        .unwrap_or(false);

    // Check Redis connectivity
    let redis_healthy = state
        .service_context()
        .redis_pool()
        .health_check()
        .await
        .is_ok();

    let response = ReadinessResponse::ready(db_healthy, redis_healthy);
    let status = if db_healthy && redis_healthy {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (status, Json(response))
}

/// Database connectivity probe returning the connection state as a string
///
/// GET /api/test-db
pub async fn db_probe(State(state): State<AppState>) -> (StatusCode, Json<DbProbeResponse>) {
    match state.service_context().pool().acquire().await {
        Ok(_) => (
            StatusCode::OK,
            Json(DbProbeResponse {
                success: true,
                status: "connected".to_string(),
                message: "Database connected successfully".to_string(),
            }),
        ),
        Err(e) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(DbProbeResponse {
                success: false,
                status: "error".to_string(),
                message: e.to_string(),
            }),
        ),
    }
}
