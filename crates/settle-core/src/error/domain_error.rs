//! Domain errors - error types for the domain layer

use thiserror::Error;

use crate::value_objects::{EnumParseError, RecordId};

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("User not found: {0}")]
    UserNotFound(RecordId),

    #[error("Profile not found for user: {0}")]
    ProfileNotFound(RecordId),

    #[error("Task template not found: {0}")]
    TemplateNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(RecordId),

    #[error("Assessment not found: {0}")]
    AssessmentNotFound(RecordId),

    #[error("Document template not found: {0}")]
    TemplateDocNotFound(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(RecordId),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid email format")]
    InvalidEmail,

    #[error("Password too weak: {0}")]
    WeakPassword(String),

    #[error("An account with this email already exists")]
    EmailAlreadyExists,

    #[error("Content too long: max {max} characters")]
    ContentTooLong { max: usize },

    #[error("Missing required template variable: {0}")]
    MissingVariable(String),

    // =========================================================================
    // Authorization Errors
    // =========================================================================
    #[error("Not the owner of this task")]
    NotTaskOwner,

    #[error("Account is disabled")]
    AccountDisabled,

    #[error("Admin access required")]
    AdminRequired,

    // =========================================================================
    // Conflict Errors
    // =========================================================================
    #[error("A profile already exists for this user")]
    ProfileAlreadyExists,

    #[error("Task already on the roadmap")]
    TaskAlreadyOnRoadmap,

    #[error("Template slug already in use: {0}")]
    SlugAlreadyExists(String),

    // =========================================================================
    // Business Rule Violations
    // =========================================================================
    #[error("Onboarding has not been completed")]
    OnboardingIncomplete,

    #[error("Task is blocked: {0}")]
    TaskBlocked(String),

    #[error("Task is already completed")]
    TaskAlreadyCompleted,

    #[error("Invalid step index: {0}")]
    InvalidStep(i32),

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Cache error: {0}")]
    CacheError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl DomainError {
    /// Get an error code string for API responses
    pub fn code(&self) -> &'static str {
        match self {
            // Not Found
            Self::UserNotFound(_) => "UNKNOWN_USER",
            Self::ProfileNotFound(_) => "UNKNOWN_PROFILE",
            Self::TemplateNotFound(_) => "UNKNOWN_TEMPLATE",
            Self::TaskNotFound(_) => "UNKNOWN_TASK",
            Self::AssessmentNotFound(_) => "UNKNOWN_ASSESSMENT",
            Self::TemplateDocNotFound(_) => "UNKNOWN_DOCUMENT_TEMPLATE",
            Self::ResourceNotFound(_) => "UNKNOWN_RESOURCE",

            // Validation
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidEmail => "INVALID_EMAIL",
            Self::WeakPassword(_) => "WEAK_PASSWORD",
            Self::EmailAlreadyExists => "EMAIL_ALREADY_EXISTS",
            Self::ContentTooLong { .. } => "CONTENT_TOO_LONG",
            Self::MissingVariable(_) => "MISSING_VARIABLE",

            // Authorization
            Self::NotTaskOwner => "NOT_TASK_OWNER",
            Self::AccountDisabled => "ACCOUNT_DISABLED",
            Self::AdminRequired => "ADMIN_REQUIRED",

            // Conflict
            Self::ProfileAlreadyExists => "PROFILE_ALREADY_EXISTS",
            Self::TaskAlreadyOnRoadmap => "TASK_ALREADY_ON_ROADMAP",
            Self::SlugAlreadyExists(_) => "SLUG_ALREADY_EXISTS",

            // Business Rules
            Self::OnboardingIncomplete => "ONBOARDING_INCOMPLETE",
            Self::TaskBlocked(_) => "TASK_BLOCKED",
            Self::TaskAlreadyCompleted => "TASK_ALREADY_COMPLETED",
            Self::InvalidStep(_) => "INVALID_STEP",

            // Infrastructure
            Self::DatabaseError(_) => "DATABASE_ERROR",
            Self::CacheError(_) => "CACHE_ERROR",
            Self::InternalError(_) => "INTERNAL_ERROR",
        }
    }

    /// Check if this is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::UserNotFound(_)
                | Self::ProfileNotFound(_)
                | Self::TemplateNotFound(_)
                | Self::TaskNotFound(_)
                | Self::AssessmentNotFound(_)
                | Self::TemplateDocNotFound(_)
                | Self::ResourceNotFound(_)
        )
    }

    /// Check if this is a validation error
    ///
    /// Duplicate email counts as validation: the registration endpoint
    /// reports it as a 400 alongside schema violations.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_)
                | Self::InvalidEmail
                | Self::WeakPassword(_)
                | Self::EmailAlreadyExists
                | Self::ContentTooLong { .. }
                | Self::MissingVariable(_)
                | Self::InvalidStep(_)
                | Self::OnboardingIncomplete
                | Self::TaskBlocked(_)
                | Self::TaskAlreadyCompleted
        )
    }

    /// Check if this is an authorization error
    pub fn is_authorization(&self) -> bool {
        matches!(
            self,
            Self::NotTaskOwner | Self::AccountDisabled | Self::AdminRequired
        )
    }

    /// Check if this is a conflict error
    pub fn is_conflict(&self) -> bool {
        matches!(
            self,
            Self::ProfileAlreadyExists | Self::TaskAlreadyOnRoadmap | Self::SlugAlreadyExists(_)
        )
    }
}

impl From<EnumParseError> for DomainError {
    fn from(err: EnumParseError) -> Self {
        // Enum text in the database comes from our own writes, so a parse
        // failure means corrupt data rather than bad input.
        Self::DatabaseError(err.to_string())
    }
}
