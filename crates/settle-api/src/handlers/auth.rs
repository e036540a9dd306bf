//! Authentication handlers
//!
//! Endpoints for user registration, login, logout, and token refresh.
//! Successful registration and login also set the session cookie the page
//! route gate reads.

use axum::{extract::State, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use settle_service::{
    AuthResponse, AuthService, LoginRequest, LogoutRequest, RefreshTokenRequest, RegisterRequest,
};

use crate::extractors::{AuthUser, ValidatedJson};
use crate::response::{ApiResult, Created, NoContent};
use crate::state::AppState;

/// Build the session cookie carrying the access token
fn session_cookie(state: &AppState, access_token: &str) -> Cookie<'static> {
    Cookie::build((
        state.session_cookie_name().to_string(),
        access_token.to_string(),
    ))
    .path("/")
    .http_only(true)
    .same_site(SameSite::Lax)
    .secure(state.config().app.env.is_production())
    .build()
}

/// Build an expired session cookie to clear the browser state
fn removal_cookie(state: &AppState) -> Cookie<'static> {
    Cookie::build((state.session_cookie_name().to_string(), String::new()))
        .path("/")
        .build()
}

/// Register a new user
///
/// POST /api/v1/auth/register
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> ApiResult<(CookieJar, Created<Json<AuthResponse>>)> {
    let service = AuthService::new(state.service_context());
    let response = service.register(request).await?;

    let jar = jar.add(session_cookie(&state, &response.access_token));
    Ok((jar, Created(Json(response))))
}

/// Login with email and password
///
/// POST /api/v1/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> ApiResult<(CookieJar, Json<AuthResponse>)> {
    let service = AuthService::new(state.service_context());
    let response = service.login(request).await?;

    let jar = jar.add(session_cookie(&state, &response.access_token));
    Ok((jar, Json(response)))
}

/// Refresh access token
///
/// POST /api/v1/auth/refresh
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(request): Json<RefreshTokenRequest>,
) -> ApiResult<(CookieJar, Json<AuthResponse>)> {
    let service = AuthService::new(state.service_context());
    let response = service.refresh_tokens(request).await?;

    let jar = jar.add(session_cookie(&state, &response.access_token));
    Ok((jar, Json(response)))
}

/// Logout user
///
/// POST /api/v1/auth/logout
pub async fn logout(
    State(state): State<AppState>,
    auth: AuthUser,
    jar: CookieJar,
    body: Option<Json<LogoutRequest>>,
) -> ApiResult<(CookieJar, NoContent)> {
    let service = AuthService::new(state.service_context());
    let refresh_token = body.and_then(|b| b.0.refresh_token);
    service.logout(auth.user_id, refresh_token).await?;

    let jar = jar.remove(removal_cookie(&state));
    Ok((jar, NoContent))
}
