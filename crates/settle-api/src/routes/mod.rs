//! Route definitions
//!
//! API routes are mounted under /api/v1; pages are served at the root behind
//! the route gate; health endpoints bypass rate limiting.

use axum::{
    routing::{delete, get, patch, post, put},
    Router,
};

use crate::handlers::{
    admin, auth, health, pages, profile, resources, roadmap, scam_checks, templates, users,
};
use crate::state::AppState;

/// Create the API router (everything that goes through the main middleware
/// stack, excluding pages and health)
pub fn create_router() -> Router<AppState> {
    Router::new()
        .nest("/api/v1", api_v1_routes())
        // Connectivity probe kept at its historical path
        .route("/api/test-db", get(health::db_probe))
}

/// Health check routes (exported separately to bypass rate limiting)
pub fn health_routes() -> Router<AppState> {
    Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
}

/// Browser-facing pages; the caller layers the route gate on top
pub fn page_routes() -> Router<AppState> {
    Router::new()
        // Marketing
        .route("/", get(pages::home))
        .route("/pricing", get(pages::pricing))
        .route("/privacy", get(pages::privacy))
        .route("/terms", get(pages::terms))
        // Auth pages
        .route("/login", get(pages::login))
        .route("/register", get(pages::register))
        // Dashboard
        .route("/dashboard", get(pages::dashboard))
        .route("/scam-shield", get(pages::scam_shield))
        .route("/templates", get(pages::templates))
        .route("/vault", get(pages::vault))
        .route("/settings", get(pages::settings))
        // Admin
        .route("/admin", get(pages::admin))
}

/// API v1 routes
fn api_v1_routes() -> Router<AppState> {
    Router::new()
        .merge(auth_routes())
        .merge(user_routes())
        .merge(profile_routes())
        .merge(roadmap_routes())
        .merge(scam_routes())
        .merge(template_routes())
        .merge(resource_routes())
        .merge(admin_routes())
}

/// Authentication routes
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/register", post(auth::register))
        .route("/auth/login", post(auth::login))
        .route("/auth/refresh", post(auth::refresh_token))
        .route("/auth/logout", post(auth::logout))
}

/// User routes
fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users/@me", get(users::get_current_user))
        .route("/users/@me", patch(users::update_current_user))
        .route("/users/@me", delete(users::delete_current_user))
}

/// Profile routes
fn profile_routes() -> Router<AppState> {
    Router::new()
        .route("/profile", get(profile::get_profile))
        .route("/profile", post(profile::create_profile))
        .route("/profile", put(profile::update_profile))
}

/// Roadmap routes
fn roadmap_routes() -> Router<AppState> {
    Router::new()
        .route("/roadmap", get(roadmap::get_roadmap))
        .route("/roadmap/generate", post(roadmap::generate))
        .route("/roadmap/tasks/:task_id", patch(roadmap::update_task))
        .route(
            "/roadmap/tasks/:task_id/steps/:order",
            post(roadmap::complete_step),
        )
}

/// Scam shield routes
fn scam_routes() -> Router<AppState> {
    Router::new()
        .route("/scam-checks", post(scam_checks::create))
        .route("/scam-checks", get(scam_checks::list))
        .route("/scam-checks/:id", get(scam_checks::get))
        .route("/scam-checks/:id/report", post(scam_checks::report))
}

/// Document template routes
fn template_routes() -> Router<AppState> {
    Router::new()
        .route("/templates", get(templates::list))
        .route("/templates/:slug", get(templates::get))
        .route("/templates/:slug/render", post(templates::render))
}

/// Resource directory routes
fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/resources", get(resources::list))
        .route("/resources/:id", get(resources::get))
}

/// Admin catalog routes (role-checked in handlers)
fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/admin/templates", post(admin::create_task_template))
        .route("/admin/resources", post(admin::create_resource))
}
