//! # TokenKeeper Infrastructure
//!
//! Infrastructure layer for the TokenKeeper session engine. It provides the
//! concrete Redis implementation of the revocation store contract defined in
//! `tk_core`, plus the connection management and configuration around it.
//!
//! All cross-request token state lives in Redis; nothing in this crate keeps
//! long-lived in-process state beyond the multiplexed connection itself.

// Re-export core types for convenience
pub use tk_core::errors::*;

/// Cache module - Redis client and the revocation store adapter
pub mod cache;

/// Configuration module for infrastructure services
pub mod config {
    //! Configuration management for the Redis revocation store.

    use serde::{Deserialize, Serialize};

    /// Redis cache configuration
    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct CacheConfig {
        /// Redis connection URL
        pub url: String,
        /// Connection pool size
        pub pool_size: u32,
        /// Default TTL for entries without an explicit one, in seconds
        pub default_ttl: u64,
    }

    impl Default for CacheConfig {
        fn default() -> Self {
            Self {
                url: "redis://localhost:6379".to_string(),
                pool_size: 10,
                default_ttl: 3600,
            }
        }
    }

    impl CacheConfig {
        /// Create a new cache configuration with the given URL
        pub fn new(url: impl Into<String>) -> Self {
            Self {
                url: url.into(),
                ..Default::default()
            }
        }

        /// Load configuration from environment variables.
        ///
        /// Reads `REDIS_URL` and `REDIS_POOL_SIZE`, falling back to defaults.
        pub fn from_env() -> Self {
            dotenvy::dotenv().ok();

            let url = std::env::var("REDIS_URL")
                .unwrap_or_else(|_| "redis://localhost:6379".to_string());
            let pool_size = std::env::var("REDIS_POOL_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10);

            Self {
                url,
                pool_size,
                ..Default::default()
            }
        }
    }
}

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Redis cache error
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
