//! User service
//!
//! Handles account-level operations for the authenticated user.

use settle_core::RecordId;
use tracing::{info, instrument};

use crate::dto::{CurrentUserResponse, UpdateUserRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// User service
pub struct UserService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> UserService<'a> {
    /// Create a new UserService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Get the current authenticated user
    #[instrument(skip(self))]
    pub async fn get_current_user(&self, user_id: RecordId) -> ServiceResult<CurrentUserResponse> {
        let user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        Ok(CurrentUserResponse::from(&user))
    }

    /// Update the current user's name and/or avatar
    #[instrument(skip(self, request))]
    pub async fn update_user(
        &self,
        user_id: RecordId,
        request: UpdateUserRequest,
    ) -> ServiceResult<CurrentUserResponse> {
        let mut user = self
            .ctx
            .user_repo()
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| ServiceError::not_found("User", user_id.to_string()))?;

        let mut changed = false;

        if let Some(name) = request.name {
            user.set_name(Some(name.trim().to_string()));
            changed = true;
        }

        if let Some(image) = request.image {
            user.set_image(Some(image));
            changed = true;
        }

        if changed {
            self.ctx.user_repo().update(&user).await?;
            info!(user_id = %user_id, "User account updated");
        }

        Ok(CurrentUserResponse::from(&user))
    }

    /// Delete the current user's account (soft delete)
    #[instrument(skip(self))]
    pub async fn delete_user(&self, user_id: RecordId) -> ServiceResult<()> {
        self.ctx.user_repo().delete(user_id).await?;

        // Revoke every outstanding session
        self.ctx
            .session_store()
            .revoke_all_for_user(user_id)
            .await
            .map_err(|e| ServiceError::internal(e.to_string()))?;

        info!(user_id = %user_id, "User account deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    // Covered end-to-end by tests/integration/tests/api_tests.rs
}
