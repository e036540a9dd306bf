//! Server setup and initialization
//!
//! Provides the main application builder and server runner.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use settle_cache::{RedisPool, RedisPoolConfig};
use settle_common::{AppConfig, AppError, JwtService};
use settle_core::RecordIdGenerator;
use settle_db::{
    create_pool, PgProfileRepository, PgResourceRepository, PgScamAssessmentRepository,
    PgTaskTemplateRepository, PgTemplateDocRepository, PgUserRepository, PgUserTaskRepository,
};
use settle_service::ServiceContextBuilder;
use tokio::net::TcpListener;
use tracing::info;

use crate::middleware::{apply_middleware, page_gate};
use crate::routes::{create_router, health_routes, page_routes};
use crate::state::AppState;

/// Build the complete Axum application with all routes and middleware
pub fn create_app(state: AppState) -> Router {
    let config = state.config().clone();

    // Pages sit behind the route gate; the API authenticates per-handler
    let pages = page_routes().layer(axum::middleware::from_fn_with_state(
        state.clone(),
        page_gate,
    ));

    let router = create_router().merge(pages);
    let router = apply_middleware(
        router,
        &config.rate_limit,
        &config.cors,
        config.app.env.is_production(),
    );

    // Health endpoints bypass the rate limiter
    router.merge(health_routes()).with_state(state)
}

/// Initialize all dependencies and create AppState
pub async fn create_app_state(config: AppConfig) -> Result<AppState, AppError> {
    // Create database pool
    info!("Connecting to PostgreSQL...");
    let db_config = settle_db::DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        min_connections: config.database.min_connections,
        ..Default::default()
    };
    let pool = create_pool(&db_config)
        .await
        .map_err(|e| AppError::Database(e.to_string()))?;
    info!("PostgreSQL connection established");

    // Create Redis pool
    info!("Connecting to Redis...");
    let redis_config = RedisPoolConfig::from(&config.redis);
    let redis_pool = RedisPool::new(redis_config).map_err(|e| AppError::Cache(e.to_string()))?;
    let shared_redis = Arc::new(redis_pool);
    info!("Redis connection established");

    // Create JWT service
    let jwt_service = Arc::new(JwtService::new(
        &config.jwt.secret,
        config.jwt.access_token_expiry,
        config.jwt.refresh_token_expiry,
    ));

    // Create record ID generator
    let id_generator = Arc::new(RecordIdGenerator::new(config.id.worker_id));

    // Create repositories
    let user_repo = Arc::new(PgUserRepository::new(pool.clone()));
    let profile_repo = Arc::new(PgProfileRepository::new(pool.clone()));
    let task_template_repo = Arc::new(PgTaskTemplateRepository::new(pool.clone()));
    let user_task_repo = Arc::new(PgUserTaskRepository::new(pool.clone()));
    let scam_repo = Arc::new(PgScamAssessmentRepository::new(pool.clone()));
    let template_doc_repo = Arc::new(PgTemplateDocRepository::new(pool.clone()));
    let resource_repo = Arc::new(PgResourceRepository::new(pool.clone()));

    // Build service context
    let service_context = ServiceContextBuilder::new()
        .pool(pool)
        .redis_pool(shared_redis)
        .user_repo(user_repo)
        .profile_repo(profile_repo)
        .task_template_repo(task_template_repo)
        .user_task_repo(user_task_repo)
        .scam_repo(scam_repo)
        .template_doc_repo(template_doc_repo)
        .resource_repo(resource_repo)
        .jwt_service(jwt_service)
        .id_generator(id_generator)
        .build()
        .map_err(|e| AppError::Config(e.to_string()))?;

    Ok(AppState::new(service_context, config))
}

/// Run the HTTP server
pub async fn run_server(app: Router, addr: SocketAddr) -> Result<(), AppError> {
    info!("Starting HTTP server on {}", addr);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;

    info!("Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Config(format!("Server error: {}", e)))?;

    Ok(())
}

/// Run the complete server with configuration
pub async fn run(config: AppConfig) -> Result<(), AppError> {
    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));

    // Create app state
    let state = create_app_state(config).await?;

    // Build application
    let app = create_app(state);

    // Run server
    run_server(app, addr).await
}
