//! Session boundary consumed by the request-handling layer.

use async_trait::async_trait;

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{AccessClaims, TokenPair};
use crate::errors::DomainResult;
use crate::stores::RevocationStore;

use super::token::TokenService;

/// The thin interface the HTTP layer drives.
///
/// Callers hand over an already-authenticated identity or raw token strings;
/// everything else stays inside the engine. `revoke` never rejects on
/// token-validity grounds - an expired or garbled access token still clears
/// the user's refresh session - but store outages do surface so the caller
/// cannot mistake an unrecorded logout for a completed one.
#[async_trait]
pub trait SessionBoundary: Send + Sync {
    /// Mint an access/refresh pair for a verified identity
    async fn issue(&self, identity: &Identity) -> DomainResult<TokenPair>;

    /// Validate an access token and return its claims
    async fn verify(&self, access_token: &str) -> DomainResult<AccessClaims>;

    /// Rotate a refresh token into a new pair, invalidating the old one
    async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair>;

    /// End the session behind the given access token and user id
    async fn revoke(&self, access_token: &str, user_id: &str) -> DomainResult<()>;
}

#[async_trait]
impl<S: RevocationStore> SessionBoundary for TokenService<S> {
    async fn issue(&self, identity: &Identity) -> DomainResult<TokenPair> {
        TokenService::issue(self, identity).await
    }

    async fn verify(&self, access_token: &str) -> DomainResult<AccessClaims> {
        TokenService::verify(self, access_token).await
    }

    async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        TokenService::refresh(self, refresh_token).await
    }

    async fn revoke(&self, access_token: &str, user_id: &str) -> DomainResult<()> {
        TokenService::revoke(self, access_token, user_id).await
    }
}
