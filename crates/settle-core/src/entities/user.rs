//! User entity - a registered account

use chrono::{DateTime, Utc};

use crate::value_objects::{RecordId, UserRole};

/// User account.
///
/// The password hash is deliberately not a field here: it lives only in the
/// persistence layer and is fetched through `UserRepository::get_password_hash`
/// when credentials are checked, so no response path can leak it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: RecordId,
    pub email: String,
    pub name: Option<String>,
    pub image: Option<String>,
    pub email_verified: Option<DateTime<Utc>>,
    pub role: UserRole,
    pub is_active: bool,
    pub last_login_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Create a new active user with the default role
    pub fn new(id: RecordId, email: String, name: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id,
            email,
            name,
            image: None,
            email_verified: None,
            role: UserRole::default(),
            is_active: true,
            last_login_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Normalize an email for storage and lookup: trimmed and lowercased
    #[must_use]
    pub fn normalize_email(email: &str) -> String {
        email.trim().to_lowercase()
    }

    /// Display name: the stored name, or the local part of the email
    #[must_use]
    pub fn display_name(&self) -> &str {
        match &self.name {
            Some(name) if !name.is_empty() => name,
            _ => self.email.split('@').next().unwrap_or(&self.email),
        }
    }

    /// Check if this account may authenticate
    #[inline]
    pub fn can_login(&self) -> bool {
        self.is_active
    }

    /// Update the display name
    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
        self.updated_at = Utc::now();
    }

    /// Update the avatar image URL
    pub fn set_image(&mut self, image: Option<String>) {
        self.image = image;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_user() -> User {
        User::new(
            RecordId::new(1),
            "amira@example.com".to_string(),
            Some("Amira".to_string()),
        )
    }

    #[test]
    fn test_new_user_defaults() {
        let user = test_user();
        assert_eq!(user.role, UserRole::User);
        assert!(user.is_active);
        assert!(user.last_login_at.is_none());
        assert!(user.email_verified.is_none());
    }

    #[test]
    fn test_normalize_email() {
        assert_eq!(
            User::normalize_email("  Amira@Example.COM "),
            "amira@example.com"
        );
    }

    #[test]
    fn test_display_name_falls_back_to_email_local_part() {
        let mut user = test_user();
        assert_eq!(user.display_name(), "Amira");

        user.name = None;
        assert_eq!(user.display_name(), "amira");
    }

    #[test]
    fn test_inactive_user_cannot_login() {
        let mut user = test_user();
        assert!(user.can_login());
        user.is_active = false;
        assert!(!user.can_login());
    }
}
