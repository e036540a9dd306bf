//! Authentication service
//!
//! Handles user registration, credentials login, token refresh, and logout.

use settle_cache::RefreshSessionData;
use settle_common::auth::{hash_password, validate_password_policy, verify_password};
use settle_common::AppError;
use settle_core::entities::User;
use settle_core::{DomainError, RecordId};
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::dto::{
    AuthResponse, CurrentUserResponse, LoginRequest, RefreshTokenRequest, RegisterRequest,
};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Authentication service
pub struct AuthService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> AuthService<'a> {
    /// Create a new AuthService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Register a new user.
    ///
    /// The password policy runs before any database access; a duplicate email
    /// is reported as a validation-class failure (400) with a stable message.
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn register(&self, request: RegisterRequest) -> ServiceResult<AuthResponse> {
        // Check the password policy before touching the database
        validate_password_policy(&request.password).map_err(ServiceError::from)?;

        let email = User::normalize_email(&request.email);

        // Check if email already exists
        if self.ctx.user_repo().email_exists(&email).await? {
            return Err(ServiceError::Domain(DomainError::EmailAlreadyExists));
        }

        // Hash password
        let password_hash =
            hash_password(&request.password).map_err(|e| ServiceError::internal(e.to_string()))?;

        // Create user
        let user_id = self.ctx.generate_id();
        let name = request.name.trim().to_string();
        let user = User::new(user_id, email, Some(name));

        // Save to database; the unique index is the backstop against a
        // concurrent registration with the same email
        self.ctx
            .user_repo()
            .create(&user, Some(&password_hash))
            .await?;

        info!(user_id = %user_id, "User registered successfully");

        self.issue_tokens(&user).await
    }

    /// Login with email and password
    #[instrument(skip(self, request), fields(email = %request.email))]
    pub async fn login(&self, request: LoginRequest) -> ServiceResult<AuthResponse> {
        let email = User::normalize_email(&request.email);

        // Find user by email
        let user = self
            .ctx
            .user_repo()
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                warn!("Login failed: user not found");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        if !user.can_login() {
            warn!(user_id = %user.id, "Login failed: account disabled");
            return Err(ServiceError::App(AppError::AccountDisabled));
        }

        // Get password hash; absent for accounts created without credentials
        let password_hash = self
            .ctx
            .user_repo()
            .get_password_hash(user.id)
            .await?
            .ok_or_else(|| {
                warn!(user_id = %user.id, "Login failed: no password hash");
                ServiceError::App(AppError::InvalidCredentials)
            })?;

        // Verify password
        let is_valid = verify_password(&request.password, &password_hash)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        if !is_valid {
            warn!(user_id = %user.id, "Login failed: invalid password");
            return Err(ServiceError::App(AppError::InvalidCredentials));
        }

        // Stamp last login
        self.ctx.user_repo().touch_last_login(user.id).await?;

        info!(user_id = %user.id, "User logged in successfully");

        self.issue_tokens(&user).await
    }

    /// Refresh access token using refresh token
    #[instrument(skip(self, request))]
    pub async fn refresh_tokens(&self, request: RefreshTokenRequest) -> ServiceResult<AuthResponse> {
        // Validate refresh token exists in Redis
        let session = self
            .ctx
            .session_store()
            .validate(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?
            .ok_or(ServiceError::App(AppError::InvalidToken))?;

        // Get user
        let user = self
            .ctx
            .user_repo()
            .find_by_id(session.user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", session.user_id.to_string()))?;

        if !user.can_login() {
            return Err(ServiceError::App(AppError::AccountDisabled));
        }

        // Rotate: revoke old refresh token
        self.ctx
            .session_store()
            .revoke(&request.refresh_token)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %user.id, "Tokens refreshed successfully");

        self.issue_tokens(&user).await
    }

    /// Logout user by revoking refresh token(s)
    #[instrument(skip(self, refresh_token))]
    pub async fn logout(
        &self,
        user_id: RecordId,
        refresh_token: Option<String>,
    ) -> ServiceResult<()> {
        if let Some(token) = refresh_token {
            // Revoke specific refresh token
            self.ctx
                .session_store()
                .revoke(&token)
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))?;
        } else {
            // Revoke all refresh tokens for user
            self.ctx
                .session_store()
                .revoke_all_for_user(user_id)
                .await
                .map_err(|e| ServiceError::internal(e.to_string()))?;
        }

        info!(user_id = %user_id, "User logged out successfully");
        Ok(())
    }

    /// Validate an access token and return the user ID
    #[instrument(skip(self, token))]
    pub async fn validate_token(&self, token: &str) -> ServiceResult<RecordId> {
        let claims = self
            .ctx
            .jwt_service()
            .validate_access_token(token)
            .map_err(ServiceError::from)?;

        claims.user_id().map_err(ServiceError::from)
    }

    /// Get user by access token
    #[instrument(skip(self, token))]
    pub async fn get_user_from_token(&self, token: &str) -> ServiceResult<User> {
        let user_id = self.validate_token(token).await?;

        self.ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))
    }

    /// Generate a token pair and store the refresh session
    async fn issue_tokens(&self, user: &User) -> ServiceResult<AuthResponse> {
        let token_pair = self
            .ctx
            .jwt_service()
            .generate_token_pair(user.id, user.role)
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        let session_id = Uuid::new_v4().to_string();
        let session = RefreshSessionData::new(user.id, session_id);
        self.ctx
            .session_store()
            .store(&token_pair.refresh_token, &session)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        Ok(AuthResponse::new(
            token_pair.access_token,
            token_pair.refresh_token,
            token_pair.expires_in,
            CurrentUserResponse::from(user),
        ))
    }
}

#[cfg(test)]
mod tests {
    // Covered end-to-end by tests/integration/tests/api_tests.rs
}
