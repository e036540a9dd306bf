//! User task database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for user_tasks table
#[derive(Debug, Clone, FromRow)]
pub struct UserTaskModel {
    pub id: i64,
    pub user_id: i64,
    pub template_id: i64,
    pub status: String,
    pub completed_steps: Vec<i32>,
    pub blocked_by: Vec<i64>,
    pub blocked_reason: Option<String>,
    pub notes: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
