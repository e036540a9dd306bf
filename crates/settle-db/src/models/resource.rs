//! Resource database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for resources table
#[derive(Debug, Clone, FromRow)]
pub struct ResourceModel {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub source_type: String,
    pub region: Option<String>,
    pub city: Option<String>,
    pub postcode_area: Option<String>,
    pub is_nationwide: bool,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub tags: Vec<String>,
    pub is_verified: bool,
    pub verified_at: Option<DateTime<Utc>>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
