//! Task template database model

use chrono::{DateTime, Utc};
use settle_core::TaskStep;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for task_templates table
#[derive(Debug, Clone, FromRow)]
pub struct TaskTemplateModel {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    pub detailed_instructions: String,
    pub priority: String,
    pub estimated_duration: String,
    pub region_rules: Vec<String>,
    pub status_type_rules: Vec<String>,
    pub housing_rules: Vec<String>,
    pub work_rules: Vec<String>,
    pub needs_rules: Vec<String>,
    pub depends_on: Vec<i64>,
    pub required_documents: Vec<String>,
    pub steps: Json<Vec<TaskStep>>,
    pub official_links: Vec<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
