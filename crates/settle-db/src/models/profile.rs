//! Profile database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for profiles table
#[derive(Debug, Clone, FromRow)]
pub struct ProfileModel {
    pub id: i64,
    pub user_id: i64,
    pub status_type: String,
    pub region: String,
    pub city: Option<String>,
    pub postcode_area: Option<String>,
    pub arrival_date: Option<DateTime<Utc>>,
    pub already_in_uk: bool,
    pub housing_status: String,
    pub work_status: String,
    pub budget_band: String,
    pub available_documents: Vec<String>,
    pub needs: Vec<String>,
    pub onboarding_completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
