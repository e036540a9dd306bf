//! Service context - dependency container for services
//!
//! Holds all repositories, the session store, and other dependencies needed
//! by services.

use std::sync::Arc;

use settle_cache::{RefreshSessionStore, SharedRedisPool};
use settle_common::auth::JwtService;
use settle_core::traits::{
    ProfileRepository, ResourceRepository, ScamAssessmentRepository, TaskTemplateRepository,
    TemplateDocRepository, UserRepository, UserTaskRepository,
};
use settle_core::RecordIdGenerator;
use settle_db::PgPool;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The Redis-backed refresh session store
/// - JWT service for authentication
/// - Record ID generator
#[derive(Clone)]
pub struct ServiceContext {
    // Database pool
    pool: PgPool,

    // Redis pool
    redis_pool: SharedRedisPool,

    // Repositories
    user_repo: Arc<dyn UserRepository>,
    profile_repo: Arc<dyn ProfileRepository>,
    task_template_repo: Arc<dyn TaskTemplateRepository>,
    user_task_repo: Arc<dyn UserTaskRepository>,
    scam_repo: Arc<dyn ScamAssessmentRepository>,
    template_doc_repo: Arc<dyn TemplateDocRepository>,
    resource_repo: Arc<dyn ResourceRepository>,

    // Session store
    session_store: RefreshSessionStore,

    // Services
    jwt_service: Arc<JwtService>,
    id_generator: Arc<RecordIdGenerator>,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        pool: PgPool,
        redis_pool: SharedRedisPool,
        user_repo: Arc<dyn UserRepository>,
        profile_repo: Arc<dyn ProfileRepository>,
        task_template_repo: Arc<dyn TaskTemplateRepository>,
        user_task_repo: Arc<dyn UserTaskRepository>,
        scam_repo: Arc<dyn ScamAssessmentRepository>,
        template_doc_repo: Arc<dyn TemplateDocRepository>,
        resource_repo: Arc<dyn ResourceRepository>,
        jwt_service: Arc<JwtService>,
        id_generator: Arc<RecordIdGenerator>,
    ) -> Self {
        let session_store = RefreshSessionStore::new((*redis_pool).clone());

        Self {
            pool,
            redis_pool,
            user_repo,
            profile_repo,
            task_template_repo,
            user_task_repo,
            scam_repo,
            template_doc_repo,
            resource_repo,
            session_store,
            jwt_service,
            id_generator,
        }
    }

    // === Pools ===

    /// Get the PostgreSQL connection pool
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Get the Redis connection pool
    pub fn redis_pool(&self) -> &SharedRedisPool {
        &self.redis_pool
    }

    // === Repositories ===

    /// Get the user repository
    pub fn user_repo(&self) -> &dyn UserRepository {
        self.user_repo.as_ref()
    }

    /// Get the profile repository
    pub fn profile_repo(&self) -> &dyn ProfileRepository {
        self.profile_repo.as_ref()
    }

    /// Get the task template repository
    pub fn task_template_repo(&self) -> &dyn TaskTemplateRepository {
        self.task_template_repo.as_ref()
    }

    /// Get the user task repository
    pub fn user_task_repo(&self) -> &dyn UserTaskRepository {
        self.user_task_repo.as_ref()
    }

    /// Get the scam assessment repository
    pub fn scam_repo(&self) -> &dyn ScamAssessmentRepository {
        self.scam_repo.as_ref()
    }

    /// Get the template doc repository
    pub fn template_doc_repo(&self) -> &dyn TemplateDocRepository {
        self.template_doc_repo.as_ref()
    }

    /// Get the resource repository
    pub fn resource_repo(&self) -> &dyn ResourceRepository {
        self.resource_repo.as_ref()
    }

    // === Session store ===

    /// Get the refresh session store
    pub fn session_store(&self) -> &RefreshSessionStore {
        &self.session_store
    }

    // === Services ===

    /// Get the JWT service
    pub fn jwt_service(&self) -> &JwtService {
        self.jwt_service.as_ref()
    }

    /// Generate a new RecordId
    pub fn generate_id(&self) -> settle_core::RecordId {
        self.id_generator.generate()
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"PgPool")
            .field("redis_pool", &"SharedRedisPool")
            .field("repositories", &"...")
            .finish()
    }
}

/// Builder for creating ServiceContext with custom configuration
#[derive(Default)]
pub struct ServiceContextBuilder {
    pool: Option<PgPool>,
    redis_pool: Option<SharedRedisPool>,
    user_repo: Option<Arc<dyn UserRepository>>,
    profile_repo: Option<Arc<dyn ProfileRepository>>,
    task_template_repo: Option<Arc<dyn TaskTemplateRepository>>,
    user_task_repo: Option<Arc<dyn UserTaskRepository>>,
    scam_repo: Option<Arc<dyn ScamAssessmentRepository>>,
    template_doc_repo: Option<Arc<dyn TemplateDocRepository>>,
    resource_repo: Option<Arc<dyn ResourceRepository>>,
    jwt_service: Option<Arc<JwtService>>,
    id_generator: Option<Arc<RecordIdGenerator>>,
}

impl ServiceContextBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pool(mut self, pool: PgPool) -> Self {
        self.pool = Some(pool);
        self
    }

    pub fn redis_pool(mut self, redis_pool: SharedRedisPool) -> Self {
        self.redis_pool = Some(redis_pool);
        self
    }

    pub fn user_repo(mut self, repo: Arc<dyn UserRepository>) -> Self {
        self.user_repo = Some(repo);
        self
    }

    pub fn profile_repo(mut self, repo: Arc<dyn ProfileRepository>) -> Self {
        self.profile_repo = Some(repo);
        self
    }

    pub fn task_template_repo(mut self, repo: Arc<dyn TaskTemplateRepository>) -> Self {
        self.task_template_repo = Some(repo);
        self
    }

    pub fn user_task_repo(mut self, repo: Arc<dyn UserTaskRepository>) -> Self {
        self.user_task_repo = Some(repo);
        self
    }

    pub fn scam_repo(mut self, repo: Arc<dyn ScamAssessmentRepository>) -> Self {
        self.scam_repo = Some(repo);
        self
    }

    pub fn template_doc_repo(mut self, repo: Arc<dyn TemplateDocRepository>) -> Self {
        self.template_doc_repo = Some(repo);
        self
    }

    pub fn resource_repo(mut self, repo: Arc<dyn ResourceRepository>) -> Self {
        self.resource_repo = Some(repo);
        self
    }

    pub fn jwt_service(mut self, service: Arc<JwtService>) -> Self {
        self.jwt_service = Some(service);
        self
    }

    pub fn id_generator(mut self, generator: Arc<RecordIdGenerator>) -> Self {
        self.id_generator = Some(generator);
        self
    }

    /// Build the ServiceContext
    ///
    /// # Errors
    /// Returns `ServiceError::Validation` if any required dependency is missing
    pub fn build(self) -> super::error::ServiceResult<ServiceContext> {
        use super::error::ServiceError;

        Ok(ServiceContext::new(
            self.pool
                .ok_or_else(|| ServiceError::validation("pool is required"))?,
            self.redis_pool
                .ok_or_else(|| ServiceError::validation("redis_pool is required"))?,
            self.user_repo
                .ok_or_else(|| ServiceError::validation("user_repo is required"))?,
            self.profile_repo
                .ok_or_else(|| ServiceError::validation("profile_repo is required"))?,
            self.task_template_repo
                .ok_or_else(|| ServiceError::validation("task_template_repo is required"))?,
            self.user_task_repo
                .ok_or_else(|| ServiceError::validation("user_task_repo is required"))?,
            self.scam_repo
                .ok_or_else(|| ServiceError::validation("scam_repo is required"))?,
            self.template_doc_repo
                .ok_or_else(|| ServiceError::validation("template_doc_repo is required"))?,
            self.resource_repo
                .ok_or_else(|| ServiceError::validation("resource_repo is required"))?,
            self.jwt_service
                .ok_or_else(|| ServiceError::validation("jwt_service is required"))?,
            self.id_generator
                .ok_or_else(|| ServiceError::validation("id_generator is required"))?,
        ))
    }
}
