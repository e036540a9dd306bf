//! # settle-api
//!
//! HTTP server built with Axum: marketing/dashboard pages behind a
//! cookie-based route gate, plus the JSON API under `/api/v1`.

pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod server;
pub mod state;

pub use server::{create_app, create_app_state, run, run_server};
pub use state::AppState;
