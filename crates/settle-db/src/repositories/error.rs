//! Error handling utilities for repositories

use settle_core::{DomainError, RecordId};
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Check for unique violation and return appropriate error or fallback
pub fn map_unique_violation<F>(e: SqlxError, on_unique: F) -> DomainError
where
    F: FnOnce() -> DomainError,
{
    if let Some(db_err) = e.as_database_error() {
        if db_err.is_unique_violation() {
            return on_unique();
        }
    }
    DomainError::DatabaseError(e.to_string())
}

/// Create a "user not found" error
pub fn user_not_found(id: RecordId) -> DomainError {
    DomainError::UserNotFound(id)
}

/// Create a "task not found" error
pub fn task_not_found(id: RecordId) -> DomainError {
    DomainError::TaskNotFound(id)
}

/// Create an "assessment not found" error
pub fn assessment_not_found(id: RecordId) -> DomainError {
    DomainError::AssessmentNotFound(id)
}

/// Create a "profile not found" error
pub fn profile_not_found(user_id: RecordId) -> DomainError {
    DomainError::ProfileNotFound(user_id)
}

/// Create a "template not found" error
pub fn template_not_found(slug: &str) -> DomainError {
    DomainError::TemplateNotFound(slug.to_string())
}
