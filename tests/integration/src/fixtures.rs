//! Test fixtures and data generators
//!
//! Provides reusable test data for integration tests.

use serde::{Deserialize, Serialize};
use serde_json::json;
use std::sync::atomic::{AtomicU64, Ordering};
use uuid::Uuid;

/// Counter for unique test data
static COUNTER: AtomicU64 = AtomicU64::new(1);

/// Get a unique suffix for test data
pub fn unique_suffix() -> String {
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("{n}-{}", Uuid::new_v4().simple())
}

/// Registration request
#[derive(Debug, Clone, Serialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl RegisterRequest {
    pub fn unique() -> Self {
        let suffix = unique_suffix();
        Self {
            name: format!("Test User {suffix}"),
            email: format!("test-{suffix}@example.com"),
            password: "correct-horse-battery".to_string(),
        }
    }
}

/// Login request
#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

impl LoginRequest {
    pub fn from_register(reg: &RegisterRequest) -> Self {
        Self {
            email: reg.email.clone(),
            password: reg.password.clone(),
        }
    }
}

/// Refresh token request
#[derive(Debug, Serialize)]
pub struct RefreshTokenRequest {
    pub refresh_token: String,
}

/// Auth response
#[derive(Debug, Deserialize)]
pub struct AuthResponse {
    pub user: UserResponse,
    pub access_token: String,
    pub refresh_token: String,
}

/// User response
#[derive(Debug, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub role: String,
}

/// Error envelope
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    pub error: ErrorDetail,
}

/// Error detail
#[derive(Debug, Deserialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
}

/// A complete onboarding payload for an England-based skilled worker
pub fn onboarding_payload() -> serde_json::Value {
    json!({
        "status_type": "skilled_worker",
        "region": "england",
        "city": "Leeds",
        "postcode_area": "ls1",
        "already_in_uk": true,
        "housing_status": "renting",
        "work_status": "employed",
        "budget_band": "moderate",
        "available_documents": ["passport", "brp"],
        "needs": ["bank_account", "gp_registration", "national_insurance"]
    })
}

/// Profile response
#[derive(Debug, Deserialize)]
pub struct ProfileResponse {
    pub id: String,
    pub user_id: String,
    pub postcode_area: Option<String>,
    pub onboarding_completed: bool,
}

/// Roadmap response
#[derive(Debug, Deserialize)]
pub struct RoadmapResponse {
    pub tasks: Vec<serde_json::Value>,
    pub progress: ProgressResponse,
}

/// Roadmap progress counts
#[derive(Debug, Deserialize)]
pub struct ProgressResponse {
    pub total: usize,
    pub completed: usize,
    pub blocked: usize,
}

/// Scam assessment response
#[derive(Debug, Deserialize)]
pub struct ScamAssessmentResponse {
    pub id: String,
    pub risk_score: u8,
    pub risk_level: String,
    pub category: String,
    pub red_flags: Vec<serde_json::Value>,
    pub safe_next_steps: Vec<String>,
    pub reported_to_authorities: bool,
}
