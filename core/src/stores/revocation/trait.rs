//! Revocation store trait defining the key-value contract for token state.

use async_trait::async_trait;

use crate::errors::StoreError;

/// Key-value abstraction over the external store backing token state.
///
/// The store owns physical storage and TTL enforcement; the token service
/// owns the lifecycle rules layered on top. Implementations must provide
/// read-your-writes visibility across the whole store: a `put` completed by
/// any caller is observed by a subsequent `get` or `exists` from any other.
/// An eventually consistent backend is out of contract.
///
/// Every operation may fail with `StoreError::Unavailable`; no operation
/// retries beyond the latency of its own round trip.
#[async_trait]
pub trait RevocationStore: Send + Sync {
    /// Upsert a value with an expiry.
    ///
    /// Overwrites any existing value under `key`. This overwrite semantic is
    /// what enforces the single-live-refresh-token-per-user policy.
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), StoreError>;

    /// Fetch the value under `key`, or `None` if absent or expired.
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Remove `key`. Idempotent: deleting an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// Membership check for `key`. Must be O(1) and observe a `put` issued
    /// earlier in the same logical sequence of calls.
    async fn exists(&self, key: &str) -> Result<bool, StoreError>;
}
