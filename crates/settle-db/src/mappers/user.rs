//! User entity <-> model mapper

use settle_core::{DomainError, RecordId, User};

use crate::models::UserModel;

impl TryFrom<UserModel> for User {
    type Error = DomainError;

    fn try_from(model: UserModel) -> Result<Self, Self::Error> {
        Ok(User {
            id: RecordId::new(model.id),
            email: model.email,
            name: model.name,
            image: model.image,
            email_verified: model.email_verified,
            role: model.role.parse()?,
            is_active: model.is_active,
            last_login_at: model.last_login_at,
            created_at: model.created_at,
            updated_at: model.updated_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use settle_core::UserRole;

    fn model(role: &str) -> UserModel {
        let now = Utc::now();
        UserModel {
            id: 1,
            email: "amira@example.com".to_string(),
            name: None,
            image: None,
            email_verified: None,
            role: role.to_string(),
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
            deleted_at: None,
        }
    }

    #[test]
    fn test_maps_role() {
        let user = User::try_from(model("moderator")).unwrap();
        assert_eq!(user.role, UserRole::Moderator);
    }

    #[test]
    fn test_corrupt_role_is_database_error() {
        let err = User::try_from(model("root")).unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }
}
