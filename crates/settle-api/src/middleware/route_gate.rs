//! Page route gate
//!
//! Redirect rules for browser-facing pages, driven by the session cookie:
//! - an unauthenticated request to a protected page redirects to
//!   `/login?callbackUrl=<original path+query>`
//! - an authenticated request to an auth page redirects to `/dashboard`
//! - `/admin` additionally requires the admin role
//!
//! The gate validates the token locally (signature + expiry); API routes are
//! not gated and authenticate per-handler instead.

use axum::{
    extract::{Request, State},
    http::HeaderMap,
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::CookieJar;
use settle_core::UserRole;

use crate::state::AppState;

/// Page prefixes that require a session
const PROTECTED_PREFIXES: &[&str] = &["/dashboard", "/scam-shield", "/templates", "/vault", "/settings"];

/// Page prefixes that require the admin role
const ADMIN_PREFIXES: &[&str] = &["/admin"];

/// Pages that signed-in users should not see
const AUTH_PAGES: &[&str] = &["/login", "/register"];

fn matches_prefix(path: &str, prefixes: &[&str]) -> bool {
    prefixes.iter().any(|prefix| path.starts_with(prefix))
}

/// Decide whether a request must be redirected.
///
/// Returns the redirect location, or None to let the request through.
/// `session` is the role of a validated session, if any.
pub(crate) fn decide(path: &str, query: Option<&str>, session: Option<UserRole>) -> Option<String> {
    let logged_in = session.is_some();

    // Signed-in users skip the auth pages
    if matches_prefix(path, AUTH_PAGES) && logged_in {
        return Some("/dashboard".to_string());
    }

    // Protected pages bounce anonymous visitors to login, remembering where
    // they were headed
    if matches_prefix(path, PROTECTED_PREFIXES) && !logged_in {
        let target = match query {
            Some(query) => format!("{path}?{query}"),
            None => path.to_string(),
        };
        return Some(format!(
            "/login?callbackUrl={}",
            urlencoding::encode(&target)
        ));
    }

    // Admin pages: anonymous to login, non-admins back to the dashboard
    if matches_prefix(path, ADMIN_PREFIXES) {
        return match session {
            None => Some("/login".to_string()),
            Some(role) if !role.is_admin() => Some("/dashboard".to_string()),
            Some(_) => None,
        };
    }

    None
}

/// Resolve the session cookie to a role; an absent, invalid, or expired
/// token counts as logged out
fn session_role(state: &AppState, headers: &HeaderMap) -> Option<UserRole> {
    let jar = CookieJar::from_headers(headers);
    let token = jar.get(state.session_cookie_name())?.value().to_string();

    state
        .jwt_service()
        .validate_access_token(&token)
        .ok()
        .map(|claims| claims.role)
}

/// Axum middleware applying the gate to the page router
pub async fn page_gate(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let path = request.uri().path().to_string();
    let query = request.uri().query().map(ToString::to_string);
    let session = session_role(&state, request.headers());

    if let Some(location) = decide(&path, query.as_deref(), session) {
        return Redirect::to(&location).into_response();
    }

    next.run(request).await
}
