//! Request DTOs for API endpoints
//!
//! All request DTOs implement `Deserialize`; those with user-typed fields
//! also implement `Validate` for input validation.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use settle_core::{
    BudgetBand, HousingStatus, InputKind, RecordId, Region, ResourceCategory, ServiceNeed,
    SourceType, StatusType, TaskCategory, TaskPriority, TaskStep, WorkStatus,
};
use std::collections::HashMap;
use validator::Validate;

// ============================================================================
// Auth Requests
// ============================================================================

/// User registration request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 8, max = 72, message = "Password must be at least 8 characters"))]
    pub password: String,
}

/// User login request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    pub password: String,
}

/// Token refresh request
#[derive(Debug, Clone, Deserialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Logout request (optional refresh token to revoke)
#[derive(Debug, Clone, Deserialize, Default)]
pub struct LogoutRequest {
    pub refresh_token: Option<String>,
}

// ============================================================================
// User Requests
// ============================================================================

/// Update current user request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, max = 100, message = "Name must be 2-100 characters"))]
    pub name: Option<String>,

    /// Avatar URL or null to remove
    pub image: Option<String>,
}

// ============================================================================
// Profile Requests
// ============================================================================

/// Onboarding answers; used for both profile creation and update
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct OnboardingRequest {
    pub status_type: StatusType,
    pub region: Region,

    #[validate(length(max = 100, message = "City name cannot exceed 100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 10, message = "Postcode area cannot exceed 10 characters"))]
    pub postcode_area: Option<String>,

    pub arrival_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub already_in_uk: bool,

    pub housing_status: HousingStatus,
    pub work_status: WorkStatus,
    pub budget_band: BudgetBand,

    #[serde(default)]
    pub available_documents: Vec<String>,

    #[serde(default)]
    pub needs: Vec<ServiceNeed>,
}

// ============================================================================
// Roadmap Requests
// ============================================================================

/// Requested status transition for a roadmap task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskAction {
    Start,
    Complete,
    Skip,
}

/// Update a roadmap task: apply an action and/or replace the notes
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateTaskRequest {
    pub action: Option<TaskAction>,

    #[validate(length(max = 2000, message = "Notes cannot exceed 2000 characters"))]
    pub notes: Option<String>,
}

// ============================================================================
// Scam Shield Requests
// ============================================================================

/// Submit content for a scam check
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ScamCheckRequest {
    pub input_kind: InputKind,

    #[validate(length(min = 1, max = 10000, message = "Content must be 1-10000 characters"))]
    pub content: String,
}

// ============================================================================
// Template Requests
// ============================================================================

/// Render a document template with caller-supplied variable values
#[derive(Debug, Clone, Deserialize, Default)]
pub struct RenderTemplateRequest {
    #[serde(default)]
    pub values: HashMap<String, String>,
}

// ============================================================================
// Admin Requests
// ============================================================================

/// Create a task template (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateTaskTemplateRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[validate(length(min = 1, max = 100, message = "Slug must be 1-100 characters"))]
    pub slug: String,

    pub category: TaskCategory,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub detailed_instructions: String,

    pub priority: TaskPriority,

    #[serde(default)]
    pub estimated_duration: String,

    #[serde(default)]
    pub region_rules: Vec<Region>,

    #[serde(default)]
    pub status_type_rules: Vec<StatusType>,

    #[serde(default)]
    pub housing_rules: Vec<HousingStatus>,

    #[serde(default)]
    pub work_rules: Vec<WorkStatus>,

    #[serde(default)]
    pub needs_rules: Vec<ServiceNeed>,

    #[serde(default)]
    pub depends_on: Vec<RecordId>,

    #[serde(default)]
    pub required_documents: Vec<String>,

    #[serde(default)]
    pub steps: Vec<TaskStep>,

    #[serde(default)]
    pub official_links: Vec<String>,
}

/// Create a resource directory entry (admin)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateResourceRequest {
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub category: ResourceCategory,
    pub source_type: SourceType,

    pub region: Option<Region>,

    #[validate(length(max = 100, message = "City name cannot exceed 100 characters"))]
    pub city: Option<String>,

    #[validate(length(max = 10, message = "Postcode area cannot exceed 10 characters"))]
    pub postcode_area: Option<String>,

    #[serde(default)]
    pub is_nationwide: bool,

    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,

    #[serde(default)]
    pub tags: Vec<String>,
}
