//! Repository traits (ports) - define the interface for data access
//!
//! These traits follow the Repository pattern from Domain-Driven Design.
//! The domain layer defines what it needs, and the infrastructure layer
//! provides the implementation.

use async_trait::async_trait;

use crate::entities::{
    Profile, Resource, ScamAssessment, TaskTemplate, TemplateDoc, User, UserTask,
};
use crate::error::DomainError;
use crate::value_objects::{RecordId, Region, ResourceCategory, TemplateDocCategory};

/// Result type for repository operations
pub type RepoResult<T> = Result<T, DomainError>;

// ============================================================================
// User Repository
// ============================================================================

#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Find user by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<User>>;

    /// Find user by normalized email
    async fn find_by_email(&self, email: &str) -> RepoResult<Option<User>>;

    /// Check if an email is already registered
    async fn email_exists(&self, email: &str) -> RepoResult<bool>;

    /// Create a new user; `password_hash` is None for accounts without
    /// credentials login
    async fn create(&self, user: &User, password_hash: Option<&str>) -> RepoResult<()>;

    /// Update name/image/role/active flag
    async fn update(&self, user: &User) -> RepoResult<()>;

    /// Soft delete a user
    async fn delete(&self, id: RecordId) -> RepoResult<()>;

    /// Get password hash for authentication (None when no hash is stored)
    async fn get_password_hash(&self, id: RecordId) -> RepoResult<Option<String>>;

    /// Update password hash
    async fn update_password(&self, id: RecordId, password_hash: &str) -> RepoResult<()>;

    /// Stamp the last successful login time
    async fn touch_last_login(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Profile Repository
// ============================================================================

#[async_trait]
pub trait ProfileRepository: Send + Sync {
    /// Find the profile belonging to a user
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Option<Profile>>;

    /// Create a profile; fails with `ProfileAlreadyExists` when one exists
    async fn create(&self, profile: &Profile) -> RepoResult<()>;

    /// Update an existing profile
    async fn update(&self, profile: &Profile) -> RepoResult<()>;

    /// Delete the profile belonging to a user
    async fn delete_by_user(&self, user_id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Task Template Repository
// ============================================================================

#[async_trait]
pub trait TaskTemplateRepository: Send + Sync {
    /// Find template by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<TaskTemplate>>;

    /// Find template by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<TaskTemplate>>;

    /// List all active templates
    async fn list_active(&self) -> RepoResult<Vec<TaskTemplate>>;

    /// Create a new template
    async fn create(&self, template: &TaskTemplate) -> RepoResult<()>;

    /// Update an existing template
    async fn update(&self, template: &TaskTemplate) -> RepoResult<()>;
}

// ============================================================================
// User Task Repository
// ============================================================================

#[async_trait]
pub trait UserTaskRepository: Send + Sync {
    /// Find task by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<UserTask>>;

    /// List all tasks on a user's roadmap
    async fn find_by_user(&self, user_id: RecordId) -> RepoResult<Vec<UserTask>>;

    /// Create a new task
    async fn create(&self, task: &UserTask) -> RepoResult<()>;

    /// Update status, blocking info, steps, and notes
    async fn update(&self, task: &UserTask) -> RepoResult<()>;
}

// ============================================================================
// Scam Assessment Repository
// ============================================================================

#[async_trait]
pub trait ScamAssessmentRepository: Send + Sync {
    /// Find assessment by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<ScamAssessment>>;

    /// List a user's assessments, newest first
    async fn find_by_user(
        &self,
        user_id: RecordId,
        limit: i64,
        offset: i64,
    ) -> RepoResult<Vec<ScamAssessment>>;

    /// Count a user's assessments
    async fn count_by_user(&self, user_id: RecordId) -> RepoResult<i64>;

    /// Persist a new assessment
    async fn create(&self, assessment: &ScamAssessment) -> RepoResult<()>;

    /// Flag an assessment as reported to the authorities
    async fn mark_reported(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Template Doc Repository
// ============================================================================

#[async_trait]
pub trait TemplateDocRepository: Send + Sync {
    /// Find document template by slug
    async fn find_by_slug(&self, slug: &str) -> RepoResult<Option<TemplateDoc>>;

    /// List active document templates, optionally by category
    async fn list_active(
        &self,
        category: Option<TemplateDocCategory>,
    ) -> RepoResult<Vec<TemplateDoc>>;

    /// Create a new document template
    async fn create(&self, doc: &TemplateDoc) -> RepoResult<()>;

    /// Increment the usage counter after a render
    async fn increment_usage(&self, id: RecordId) -> RepoResult<()>;
}

// ============================================================================
// Resource Repository
// ============================================================================

/// Search filter for the resource directory
#[derive(Debug, Clone, Default)]
pub struct ResourceFilter {
    pub category: Option<ResourceCategory>,
    /// Matches entries in this region OR nationwide entries
    pub region: Option<Region>,
}

#[async_trait]
pub trait ResourceRepository: Send + Sync {
    /// Find resource by ID
    async fn find_by_id(&self, id: RecordId) -> RepoResult<Option<Resource>>;

    /// Search active resources with the given filter
    async fn search(&self, filter: &ResourceFilter) -> RepoResult<Vec<Resource>>;

    /// Create a new resource
    async fn create(&self, resource: &Resource) -> RepoResult<()>;
}
