//! Integration tests for the Redis revocation store
//!
//! These tests require a running Redis instance to execute.
//! Run with: cargo test -p tk_infra --test redis_integration -- --ignored

use uuid::Uuid;

use tk_core::domain::entities::identity::{Identity, Role};
use tk_core::errors::{DomainError, TokenError};
use tk_core::services::token::{TokenService, TokenServiceConfig};
use tk_core::stores::RevocationStore;

use tk_infra::cache::{CacheConfig, RedisClient, RedisRevocationStore};

async fn connect() -> RedisRevocationStore {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("tk_infra=debug")
        .try_init();

    let config = CacheConfig::new(
        std::env::var("REDIS_URL").unwrap_or_else(|_| "redis://localhost:6379".to_string()),
    );

    let client = RedisClient::new(config)
        .await
        .expect("Failed to connect to Redis");
    RedisRevocationStore::new(client)
}

fn test_identity() -> Identity {
    Identity::new(
        format!("it-{}", Uuid::new_v4()),
        "user@example.com",
        "Integration User",
        Role::User,
    )
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_store_round_trip() {
    let store = connect().await;
    let key = format!("refresh:{}", Uuid::new_v4());

    store.put(&key, "token-value", 60).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), Some("token-value".to_string()));
    assert!(store.exists(&key).await.unwrap());

    store.delete(&key).await.unwrap();
    assert_eq!(store.get(&key).await.unwrap(), None);

    // Deleting again is not an error.
    store.delete(&key).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_put_overwrites_previous_value() {
    let store = connect().await;
    let key = format!("refresh:{}", Uuid::new_v4());

    store.put(&key, "first", 60).await.unwrap();
    store.put(&key, "second", 60).await.unwrap();

    assert_eq!(store.get(&key).await.unwrap(), Some("second".to_string()));

    store.delete(&key).await.unwrap();
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_entry_expires() {
    let store = connect().await;
    let key = format!("blacklist:{}", Uuid::new_v4());

    store.put(&key, "revoked", 1).await.unwrap();
    assert!(store.exists(&key).await.unwrap());

    tokio::time::sleep(std::time::Duration::from_secs(2)).await;
    assert!(!store.exists(&key).await.unwrap());
}

#[tokio::test]
#[ignore] // Requires Redis server
async fn test_full_session_lifecycle() {
    let store = connect().await;
    let service = TokenService::new(store, TokenServiceConfig::default());
    let identity = test_identity();

    // Issue and verify.
    let pair = service.issue(&identity).await.unwrap();
    let claims = service.verify(&pair.access_token).await.unwrap();
    assert_eq!(claims.sub, identity.user_id);

    // Rotate; the old refresh token is superseded.
    let rotated = service.refresh(&pair.refresh_token).await.unwrap();
    let reused = service.refresh(&pair.refresh_token).await;
    assert!(matches!(
        reused,
        Err(DomainError::Token(TokenError::Revoked))
    ));

    // Logout blacklists the access token and drops the session.
    service
        .revoke(&rotated.access_token, &identity.user_id)
        .await
        .unwrap();

    let verify_after = service.verify(&rotated.access_token).await;
    assert!(matches!(
        verify_after,
        Err(DomainError::Token(TokenError::Revoked))
    ));

    let refresh_after = service.refresh(&rotated.refresh_token).await;
    assert!(matches!(
        refresh_after,
        Err(DomainError::Token(TokenError::Revoked))
    ));
}
