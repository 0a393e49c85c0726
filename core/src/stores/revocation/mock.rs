//! In-memory implementation of RevocationStore for testing

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::errors::StoreError;

use super::r#trait::RevocationStore;

#[derive(Debug, Clone)]
struct Entry {
    value: String,
    expires_at: DateTime<Utc>,
}

impl Entry {
    fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

/// Mock revocation store backed by a HashMap.
///
/// TTLs are honored logically: expired entries read as absent rather than
/// being evicted eagerly.
pub struct MemoryRevocationStore {
    entries: Arc<RwLock<HashMap<String, Entry>>>,
}

impl MemoryRevocationStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for MemoryRevocationStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RevocationStore for MemoryRevocationStore {
    async fn put(&self, key: &str, value: &str, ttl_seconds: u64) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.insert(
            key.to_string(),
            Entry {
                value: value.to_string(),
                expires_at: Utc::now() + Duration::seconds(ttl_seconds as i64),
            },
        );
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries
            .get(key)
            .filter(|entry| !entry.is_expired())
            .map(|entry| entry.value.clone()))
    }

    async fn delete(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        entries.remove(key);
        Ok(())
    }

    async fn exists(&self, key: &str) -> Result<bool, StoreError> {
        let entries = self.entries.read().await;
        Ok(entries.get(key).map_or(false, |entry| !entry.is_expired()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_put_is_visible_to_get_and_exists() {
        let store = MemoryRevocationStore::new();

        store.put("refresh:u1", "token", 60).await.unwrap();

        assert_eq!(store.get("refresh:u1").await.unwrap(), Some("token".to_string()));
        assert!(store.exists("refresh:u1").await.unwrap());
    }

    #[tokio::test]
    async fn test_put_overwrites_existing_value() {
        let store = MemoryRevocationStore::new();

        store.put("refresh:u1", "old", 60).await.unwrap();
        store.put("refresh:u1", "new", 60).await.unwrap();

        assert_eq!(store.get("refresh:u1").await.unwrap(), Some("new".to_string()));
    }

    #[tokio::test]
    async fn test_expired_entry_reads_as_absent() {
        let store = MemoryRevocationStore::new();

        store.put("blacklist:sig", "revoked", 0).await.unwrap();

        assert_eq!(store.get("blacklist:sig").await.unwrap(), None);
        assert!(!store.exists("blacklist:sig").await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryRevocationStore::new();

        store.put("refresh:u1", "token", 60).await.unwrap();
        store.delete("refresh:u1").await.unwrap();
        store.delete("refresh:u1").await.unwrap();

        assert_eq!(store.get("refresh:u1").await.unwrap(), None);
    }
}
