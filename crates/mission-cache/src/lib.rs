//! # mission-cache
//!
//! Redis caching layer for authentication sessions.
//!
//! ## Features
//!
//! - **Connection Pool**: Managed Redis connection pool with deadpool
//! - **Session Storage**: Refresh-token storage keyed by member, powering
//!   token reissue and logout

pub mod pool;
pub mod session;

// Re-export pool types
pub use pool::{
    create_shared_pool, RedisPool, RedisPoolConfig, RedisPoolError, RedisResult, SharedRedisPool,
};

// Re-export session types
pub use session::{RefreshTokenData, RefreshTokenStore};
