//! Cache module for the Redis-backed revocation store
//!
//! Provides the Redis client with connection pooling and retry logic, and
//! the adapter implementing the core `RevocationStore` trait over it.

pub mod redis_client;
pub mod revocation_store;

pub use redis_client::RedisClient;
pub use revocation_store::RedisRevocationStore;

// Re-export commonly used types
pub use crate::config::CacheConfig;

#[cfg(test)]
mod tests;
