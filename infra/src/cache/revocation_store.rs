//! Redis implementation of the revocation store contract.
//!
//! Key patterns are owned by the core token service:
//! - `refresh:{user_id}` - the user's single live refresh token
//! - `blacklist:{signature}` - revoked access tokens, until natural expiry
//!
//! Redis SETEX/GET/DEL/EXISTS map one-to-one onto the trait operations, and
//! a single Redis instance provides the read-your-writes visibility the
//! contract requires. TTL enforcement is entirely Redis's job, so neither
//! keyspace grows unbounded.

use async_trait::async_trait;
use tracing::debug;

use tk_core::errors::StoreError;
use tk_core::stores::RevocationStore;

use crate::cache::RedisClient;
use crate::InfrastructureError;

/// Revocation store backed by Redis
#[derive(Clone)]
pub struct RedisRevocationStore {
    client: RedisClient,
}

impl RedisRevocationStore {
    /// Create a new store over an existing Redis client
    pub fn new(client: RedisClient) -> Self {
        Self { client }
    }
}

fn unavailable(err: InfrastructureError) -> StoreError {
    StoreError::Unavailable {
        message: err.to_string(),
    }
}

#[async_trait]
impl RevocationStore for RedisRevocationStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), StoreError> {
        self.client
            .set_with_expiry(key, value, ttl_seconds)
            .await
            .map_err(unavailable)
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        self.client.get(key).await.map_err(unavailable)
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        // DEL of an absent key returns 0; the contract treats that as success.
        let existed = self.client.delete(key).await.map_err(unavailable)?;
        debug!(key = %key, existed = existed, "deleted revocation entry");
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        self.client.exists(key).await.map_err(unavailable)
    }
}
