//! Refresh-token session storage in Redis.
//!
//! Each issued refresh token has a server-side session entry with a TTL, so
//! tokens can be revoked individually (logout) or per-user (logout
//! everywhere) without waiting for JWT expiry.

use crate::pool::{RedisPool, RedisResult};
use redis::AsyncCommands;
use serde::{Deserialize, Serialize};
use settle_core::RecordId;

/// Key prefix for refresh sessions
const SESSION_PREFIX: &str = "session:";

/// Default TTL for refresh sessions (7 days)
const DEFAULT_SESSION_TTL: u64 = 7 * 24 * 60 * 60;

/// Stored refresh session data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshSessionData {
    /// User ID this session belongs to
    pub user_id: RecordId,
    /// Session ID (for tracking multiple sessions per user)
    pub session_id: String,
    /// Session creation timestamp (Unix epoch seconds)
    pub created_at: i64,
    /// Client device info (optional)
    pub device_info: Option<String>,
}

impl RefreshSessionData {
    /// Create new refresh session data
    #[must_use]
    pub fn new(user_id: RecordId, session_id: String) -> Self {
        Self {
            user_id,
            session_id,
            created_at: chrono::Utc::now().timestamp(),
            device_info: None,
        }
    }

    /// Add device info
    #[must_use]
    pub fn with_device_info(mut self, device: impl Into<String>) -> Self {
        self.device_info = Some(device.into());
        self
    }
}

/// Refresh session store for managing authentication sessions
#[derive(Clone)]
pub struct RefreshSessionStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RefreshSessionStore {
    /// Create a new refresh session store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_SESSION_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for a refresh token
    fn key(token: &str) -> String {
        format!("{SESSION_PREFIX}{token}")
    }

    fn user_set_key(user_id: RecordId) -> String {
        format!("user_sessions:{user_id}")
    }

    /// Store a refresh session
    pub async fn store(&self, token: &str, data: &RefreshSessionData) -> RedisResult<()> {
        let key = Self::key(token);
        self.pool.set(&key, data, Some(self.ttl_seconds)).await?;

        // Also add to user's session set for revoke-all
        let user_set_key = Self::user_set_key(data.user_id);
        let mut conn = self.pool.get().await?;
        conn.sadd::<_, _, ()>(&user_set_key, token).await?;
        conn.expire::<_, ()>(&user_set_key, self.ttl_seconds as i64)
            .await?;

        tracing::debug!(
            user_id = %data.user_id,
            session_id = %data.session_id,
            "Stored refresh session"
        );

        Ok(())
    }

    /// Get refresh session data
    pub async fn get(&self, token: &str) -> RedisResult<Option<RefreshSessionData>> {
        let key = Self::key(token);
        self.pool.get_value(&key).await
    }

    /// Validate and return session data (returns None if expired or revoked)
    pub async fn validate(&self, token: &str) -> RedisResult<Option<RefreshSessionData>> {
        self.get(token).await
    }

    /// Revoke (delete) a refresh session
    pub async fn revoke(&self, token: &str) -> RedisResult<bool> {
        // First get the session to find user_id
        if let Some(data) = self.get(token).await? {
            let user_set_key = Self::user_set_key(data.user_id);
            let mut conn = self.pool.get().await?;
            conn.srem::<_, _, ()>(&user_set_key, token).await?;
        }

        let key = Self::key(token);
        let deleted = self.pool.delete(&key).await?;

        if deleted {
            tracing::debug!("Revoked refresh session");
        }

        Ok(deleted)
    }

    /// Revoke all sessions for a user (logout from all devices)
    pub async fn revoke_all_for_user(&self, user_id: RecordId) -> RedisResult<u32> {
        let user_set_key = Self::user_set_key(user_id);
        let mut conn = self.pool.get().await?;

        // Get all tokens for this user
        let tokens: Vec<String> = conn.smembers(&user_set_key).await?;
        let mut revoked = 0u32;

        for token in &tokens {
            let key = Self::key(token);
            let deleted: i32 = conn.del(&key).await?;
            revoked += deleted as u32;
        }

        conn.del::<_, ()>(&user_set_key).await?;

        tracing::debug!(user_id = %user_id, revoked, "Revoked all refresh sessions");

        Ok(revoked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_format() {
        assert_eq!(
            RefreshSessionStore::key("abc123"),
            "session:abc123".to_string()
        );
        assert_eq!(
            RefreshSessionStore::user_set_key(RecordId::new(42)),
            "user_sessions:42".to_string()
        );
    }

    #[test]
    fn test_session_data_builder() {
        let data = RefreshSessionData::new(RecordId::new(1), "sess-1".to_string())
            .with_device_info("firefox/linux");
        assert_eq!(data.user_id, RecordId::new(1));
        assert_eq!(data.device_info.as_deref(), Some("firefox/linux"));
    }
}
