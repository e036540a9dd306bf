//! Authentication extractor
//!
//! Extracts and validates access tokens from the Authorization header or,
//! failing that, the session cookie the page gate also reads. Claims carry
//! the role so handlers can authorize without a database query.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::request::Parts,
};
use axum_extra::extract::CookieJar;
use settle_core::{RecordId, UserRole};

use crate::response::ApiError;
use crate::state::AppState;

/// Authenticated user extracted from an access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// User ID from the token
    pub user_id: RecordId,
    /// Role at token issue time
    pub role: UserRole,
}

impl AuthUser {
    /// Create a new AuthUser
    pub fn new(user_id: RecordId, role: UserRole) -> Self {
        Self { user_id, role }
    }

    /// Require the admin role
    ///
    /// # Errors
    /// Returns `ApiError` mapping to 403 when the user is not an admin
    pub fn require_admin(&self) -> Result<(), ApiError> {
        if self.role.is_admin() {
            Ok(())
        } else {
            Err(ApiError::App(
                settle_common::AppError::InsufficientPermissions,
            ))
        }
    }
}

/// Pull the raw access token out of the request: Authorization header first,
/// session cookie second
fn extract_token(parts: &Parts, cookie_name: &str) -> Option<String> {
    if let Some(value) = parts.headers.get(axum::http::header::AUTHORIZATION) {
        if let Ok(value) = value.to_str() {
            if let Some(token) = value.strip_prefix("Bearer ") {
                return Some(token.to_string());
            }
        }
    }

    let jar = CookieJar::from_headers(&parts.headers);
    jar.get(cookie_name).map(|c| c.value().to_string())
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        let token = extract_token(parts, app_state.session_cookie_name())
            .ok_or(ApiError::MissingAuth)?;

        // Validate the token
        let claims = app_state
            .jwt_service()
            .validate_access_token(&token)
            .map_err(|e| {
                tracing::warn!(error = %e, "Invalid access token");
                ApiError::InvalidAuthFormat
            })?;

        // Extract user ID from claims
        let user_id = claims.user_id().map_err(|e| {
            tracing::warn!(error = %e, "Invalid user ID in token");
            ApiError::InvalidAuthFormat
        })?;

        Ok(AuthUser::new(user_id, claims.role))
    }
}

/// Optional authenticated user
///
/// Returns None if no token is present, or an error if a present token is
/// invalid.
#[derive(Debug, Clone)]
pub struct OptionalAuthUser(pub Option<AuthUser>);

#[async_trait]
impl<S> FromRequestParts<S> for OptionalAuthUser
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);

        match extract_token(parts, app_state.session_cookie_name()) {
            Some(token) => {
                let claims = app_state
                    .jwt_service()
                    .validate_access_token(&token)
                    .map_err(|e| {
                        tracing::warn!(error = %e, "Invalid access token");
                        ApiError::InvalidAuthFormat
                    })?;

                let user_id = claims.user_id().map_err(|e| {
                    tracing::warn!(error = %e, "Invalid user ID in token");
                    ApiError::InvalidAuthFormat
                })?;

                Ok(OptionalAuthUser(Some(AuthUser::new(user_id, claims.role))))
            }
            None => Ok(OptionalAuthUser(None)),
        }
    }
}
