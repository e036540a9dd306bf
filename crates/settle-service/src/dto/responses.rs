//! Response DTOs for API endpoints
//!
//! All response DTOs implement `Serialize` for JSON output.
//! Record IDs are serialized as strings for JavaScript compatibility.
//! No response type carries a password hash.

use chrono::{DateTime, Utc};
use serde::Serialize;
use settle_core::roadmap::RoadmapProgress;
use settle_core::{
    BudgetBand, HousingStatus, InputKind, RedFlag, Region, ResourceCategory, RiskLevel,
    ScamCategory, ServiceNeed, SourceType, StatusType, TaskCategory, TaskPriority, TaskStatus,
    TaskStep, TemplateDocCategory, TemplateVariable, UserRole, WorkStatus,
};

// ============================================================================
// Common Response Types
// ============================================================================

/// Page-based paginated response
#[derive(Debug, Serialize)]
pub struct PaginatedResponse<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub page_size: i64,
    pub total_pages: i64,
}

impl<T> PaginatedResponse<T> {
    pub fn new(items: Vec<T>, total: i64, page: i64, page_size: i64) -> Self {
        let total_pages = if page_size > 0 {
            (total + page_size - 1) / page_size
        } else {
            0
        };
        Self {
            items,
            total,
            page,
            page_size,
            total_pages,
        }
    }
}

// ============================================================================
// Auth Responses
// ============================================================================

/// Authentication response with tokens
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    pub expires_in: i64,
    pub user: CurrentUserResponse,
}

impl AuthResponse {
    pub fn new(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        user: CurrentUserResponse,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in,
            user,
        }
    }
}

// ============================================================================
// User Responses
// ============================================================================

/// Current authenticated user response
#[derive(Debug, Clone, Serialize)]
pub struct CurrentUserResponse {
    pub id: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    pub role: UserRole,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_verified: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Profile Responses
// ============================================================================

/// Onboarding profile response
#[derive(Debug, Clone, Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub status_type: StatusType,
    pub region: Region,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode_area: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arrival_date: Option<DateTime<Utc>>,
    pub already_in_uk: bool,
    pub housing_status: HousingStatus,
    pub work_status: WorkStatus,
    pub budget_band: BudgetBand,
    pub available_documents: Vec<String>,
    pub needs: Vec<ServiceNeed>,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================================================
// Roadmap Responses
// ============================================================================

/// Task template data embedded in a roadmap task
#[derive(Debug, Clone, Serialize)]
pub struct TaskTemplateResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: TaskCategory,
    pub description: String,
    pub detailed_instructions: String,
    pub priority: TaskPriority,
    pub estimated_duration: String,
    pub required_documents: Vec<String>,
    pub steps: Vec<TaskStep>,
    pub official_links: Vec<String>,
}

/// One task on a user's roadmap, joined with its template
#[derive(Debug, Serialize)]
pub struct RoadmapTaskResponse {
    pub id: String,
    pub template: TaskTemplateResponse,
    pub status: TaskStatus,
    pub completed_steps: Vec<i32>,
    pub blocked_by: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blocked_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_at: Option<DateTime<Utc>>,
}

/// The whole roadmap plus progress counts
#[derive(Debug, Serialize)]
pub struct RoadmapResponse {
    pub tasks: Vec<RoadmapTaskResponse>,
    pub progress: RoadmapProgress,
}

// ============================================================================
// Scam Shield Responses
// ============================================================================

/// Persisted scam assessment
#[derive(Debug, Clone, Serialize)]
pub struct ScamAssessmentResponse {
    pub id: String,
    pub input_kind: InputKind,
    pub input_content: String,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub category: ScamCategory,
    pub red_flags: Vec<RedFlag>,
    pub safe_next_steps: Vec<String>,
    pub reported_to_authorities: bool,
    pub created_at: DateTime<Utc>,
}

// ============================================================================
// Template Responses
// ============================================================================

/// Document template metadata (content is returned by render)
#[derive(Debug, Clone, Serialize)]
pub struct TemplateDocResponse {
    pub id: String,
    pub title: String,
    pub slug: String,
    pub category: TemplateDocCategory,
    pub description: String,
    pub variables: Vec<TemplateVariable>,
    pub tags: Vec<String>,
    pub usage_count: i64,
}

/// A rendered document
#[derive(Debug, Serialize)]
pub struct RenderedTemplateResponse {
    pub slug: String,
    pub title: String,
    pub content: String,
}

// ============================================================================
// Resource Responses
// ============================================================================

/// Resource directory entry
#[derive(Debug, Clone, Serialize)]
pub struct ResourceResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub category: ResourceCategory,
    pub source_type: SourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<Region>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postcode_area: Option<String>,
    pub is_nationwide: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    pub tags: Vec<String>,
    pub is_verified: bool,
}

// ============================================================================
// Health Responses
// ============================================================================

/// Liveness probe response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

impl HealthResponse {
    #[must_use]
    pub fn healthy() -> Self {
        Self { status: "ok" }
    }
}

/// Readiness probe response with dependency health
#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: &'static str,
    pub database: bool,
    pub cache: bool,
}

impl ReadinessResponse {
    #[must_use]
    pub fn ready(database: bool, cache: bool) -> Self {
        Self {
            status: if database && cache { "ready" } else { "degraded" },
            database,
            cache,
        }
    }
}

/// Database connectivity probe response
#[derive(Debug, Serialize)]
pub struct DbProbeResponse {
    pub success: bool,
    pub status: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_paginated_response_total_pages() {
        let page: PaginatedResponse<i32> = PaginatedResponse::new(vec![1, 2, 3], 10, 1, 3);
        assert_eq!(page.total_pages, 4);

        let exact: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 9, 1, 3);
        assert_eq!(exact.total_pages, 3);

        let empty: PaginatedResponse<i32> = PaginatedResponse::new(vec![], 0, 1, 3);
        assert_eq!(empty.total_pages, 0);
    }

    #[test]
    fn test_readiness_status() {
        assert_eq!(ReadinessResponse::ready(true, true).status, "ready");
        assert_eq!(ReadinessResponse::ready(true, false).status, "degraded");
    }
}
