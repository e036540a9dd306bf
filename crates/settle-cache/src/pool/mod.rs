//! Redis connection pool

mod redis_pool;

use std::sync::Arc;

pub use redis_pool::{RedisPool, RedisPoolConfig, RedisPoolError, RedisResult};

/// Shared, cheaply-clonable handle to a Redis pool
pub type SharedRedisPool = Arc<RedisPool>;

/// Create a shared Redis pool from configuration
///
/// # Errors
/// Returns an error if the pool cannot be created
pub fn create_shared_pool(config: RedisPoolConfig) -> RedisResult<SharedRedisPool> {
    Ok(Arc::new(RedisPool::new(config)?))
}
