//! Refresh token storage in Redis.
//!
//! One refresh token per member, keyed by member ID with automatic
//! expiration. Reissue verifies the presented token against the stored value
//! and rotates it; logout deletes the key outright.

use crate::pool::{RedisPool, RedisResult};
use mission_core::Snowflake;
use serde::{Deserialize, Serialize};

/// Key prefix for refresh tokens
const REFRESH_TOKEN_PREFIX: &str = "refresh_token:";

/// Default TTL for refresh tokens (7 days)
const DEFAULT_REFRESH_TOKEN_TTL: u64 = 7 * 24 * 60 * 60;

/// Stored refresh token data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefreshTokenData {
    /// Member this token belongs to
    pub member_id: Snowflake,
    /// The refresh token string currently considered valid
    pub token: String,
    /// Token creation timestamp (Unix epoch seconds)
    pub created_at: i64,
}

impl RefreshTokenData {
    /// Create new refresh token data
    #[must_use]
    pub fn new(member_id: Snowflake, token: impl Into<String>) -> Self {
        Self {
            member_id,
            token: token.into(),
            created_at: chrono::Utc::now().timestamp(),
        }
    }
}

/// Refresh token store for managing authentication sessions
#[derive(Clone)]
pub struct RefreshTokenStore {
    pool: RedisPool,
    ttl_seconds: u64,
}

impl RefreshTokenStore {
    /// Create a new refresh token store
    #[must_use]
    pub fn new(pool: RedisPool) -> Self {
        Self {
            pool,
            ttl_seconds: DEFAULT_REFRESH_TOKEN_TTL,
        }
    }

    /// Create with custom TTL
    #[must_use]
    pub fn with_ttl(pool: RedisPool, ttl_seconds: u64) -> Self {
        Self { pool, ttl_seconds }
    }

    /// Generate Redis key for a member's refresh token
    fn key(member_id: Snowflake) -> String {
        format!("{REFRESH_TOKEN_PREFIX}{member_id}")
    }

    /// Store (or rotate) a member's refresh token
    pub async fn store(&self, data: &RefreshTokenData) -> RedisResult<()> {
        let key = Self::key(data.member_id);
        self.pool.set(&key, data, Some(self.ttl_seconds)).await?;

        tracing::debug!(member_id = %data.member_id, "Stored refresh token");

        Ok(())
    }

    /// Get the stored token data for a member
    pub async fn get(&self, member_id: Snowflake) -> RedisResult<Option<RefreshTokenData>> {
        self.pool.get_value(&Self::key(member_id)).await
    }

    /// Check whether the presented token matches the stored one
    pub async fn matches(&self, member_id: Snowflake, token: &str) -> RedisResult<bool> {
        Ok(self
            .get(member_id)
            .await?
            .is_some_and(|data| data.token == token))
    }

    /// Revoke a member's refresh token (logout)
    pub async fn revoke(&self, member_id: Snowflake) -> RedisResult<bool> {
        let deleted = self.pool.delete(&Self::key(member_id)).await?;

        if deleted {
            tracing::debug!(member_id = %member_id, "Revoked refresh token");
        }

        Ok(deleted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_token_data_creation() {
        let member_id = Snowflake::from(12345i64);
        let data = RefreshTokenData::new(member_id, "token-abc");

        assert_eq!(data.member_id, member_id);
        assert_eq!(data.token, "token-abc");
    }

    #[test]
    fn test_key_generation() {
        let key = RefreshTokenStore::key(Snowflake::new(42));
        assert_eq!(key, "refresh_token:42");
    }
}
