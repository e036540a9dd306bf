//! Scam assessment database model

use chrono::{DateTime, Utc};
use settle_core::RedFlag;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for scam_assessments table
#[derive(Debug, Clone, FromRow)]
pub struct ScamAssessmentModel {
    pub id: i64,
    pub user_id: i64,
    pub input_kind: String,
    pub input_content: String,
    pub risk_score: i16,
    pub risk_level: String,
    pub category: String,
    pub red_flags: Json<Vec<RedFlag>>,
    pub safe_next_steps: Vec<String>,
    pub reported_to_authorities: bool,
    pub created_at: DateTime<Utc>,
}
