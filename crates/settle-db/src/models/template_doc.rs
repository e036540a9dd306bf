//! Template doc database model

use chrono::{DateTime, Utc};
use settle_core::TemplateVariable;
use sqlx::types::Json;
use sqlx::FromRow;

/// Database model for template_docs table
#[derive(Debug, Clone, FromRow)]
pub struct TemplateDocModel {
    pub id: i64,
    pub title: String,
    pub slug: String,
    pub category: String,
    pub description: String,
    pub content: String,
    pub variables: Json<Vec<TemplateVariable>>,
    pub tags: Vec<String>,
    pub usage_count: i64,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
