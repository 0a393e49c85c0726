//! Main token service implementation

use chrono::Utc;
use tracing::{debug, warn};

use crate::domain::entities::identity::Identity;
use crate::domain::entities::token::{AccessClaims, RefreshClaims, TokenPair};
use crate::errors::{DomainResult, TokenError};
use crate::stores::RevocationStore;

use super::codec::TokenCodec;
use super::config::TokenServiceConfig;

/// Store key holding a user's single live refresh token.
///
/// The format is compatibility-significant when sharing a store with an
/// existing deployment.
pub fn refresh_key(user_id: &str) -> String {
    format!("refresh:{}", user_id)
}

/// Store key marking a revoked access token, addressed by signature fragment.
pub fn blacklist_key(signature: &str) -> String {
    format!("blacklist:{}", signature)
}

/// Value stored under blacklist keys; only presence matters.
const BLACKLIST_MARKER: &str = "revoked";

/// Service orchestrating issuance, validation, refresh rotation, and
/// revocation over a codec and a revocation store.
///
/// The service holds no cross-request mutable state and needs no internal
/// locking: conflicting operations (two concurrent refreshes of the same
/// token, refresh racing logout) serialize through the atomicity of the
/// store's put/get. A refresh racing a later put resolves last-writer-wins;
/// at most one of the produced pairs stays live.
pub struct TokenService<S: RevocationStore> {
    pub(crate) store: S,
    pub(crate) codec: TokenCodec,
    config: TokenServiceConfig,
}

impl<S: RevocationStore> TokenService<S> {
    /// Creates a new token service over the given store
    pub fn new(store: S, config: TokenServiceConfig) -> Self {
        let codec = TokenCodec::new(&config.jwt_secret);
        Self {
            store,
            codec,
            config,
        }
    }

    /// Issues a fresh access/refresh pair for an authenticated identity.
    ///
    /// The refresh token is stored under `refresh:{user_id}` with a TTL of
    /// the refresh lifetime, overwriting any previously active refresh token
    /// for that user. The overwrite enforces one live session per account.
    /// The only failure path is store unavailability.
    pub async fn issue(&self, identity: &Identity) -> DomainResult<TokenPair> {
        let access_claims = AccessClaims::new(identity, self.config.access_token_ttl_secs);
        let refresh_claims = RefreshClaims::new(identity, self.config.refresh_token_ttl_secs);

        let access_token = self.codec.encode_access(&access_claims)?;
        let refresh_token = self.codec.encode_refresh(&refresh_claims)?;

        self.store
            .put(
                &refresh_key(&identity.user_id),
                &refresh_token,
                self.config.refresh_token_ttl_secs as u64,
            )
            .await?;

        debug!(user_id = %identity.user_id, "issued token pair");

        Ok(TokenPair::new(
            access_token,
            refresh_token,
            self.config.access_token_ttl_secs,
            self.config.refresh_token_ttl_secs,
        ))
    }

    /// Verifies an access token and returns its claims.
    ///
    /// Order: MAC and structure via the codec, blacklist membership, then
    /// expiry. A pure read path with a single store lookup; never mutates.
    pub async fn verify(&self, access_token: &str) -> DomainResult<AccessClaims> {
        let claims = self.codec.decode_access(access_token)?;

        let signature = TokenCodec::signature_fragment(access_token);
        if self.store.exists(&blacklist_key(&signature)).await? {
            return Err(TokenError::Revoked.into());
        }

        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(TokenError::Expired.into());
        }

        Ok(claims)
    }

    /// Rotates a refresh token into a brand-new pair.
    ///
    /// The presented token must exactly match the stored value under
    /// `refresh:{sub}`; a token superseded by a later issue or refresh no
    /// longer matches and is rejected as revoked even before its natural
    /// expiry. The identity is rebuilt from the snapshot cached in the
    /// refresh claims, so no external identity lookup happens here. Writing
    /// the new refresh token is what revokes the old one.
    pub async fn refresh(&self, refresh_token: &str) -> DomainResult<TokenPair> {
        let claims = self.codec.decode_refresh(refresh_token)?;

        if claims.is_expired_at(Utc::now().timestamp()) {
            return Err(TokenError::Expired.into());
        }

        match self.store.get(&refresh_key(&claims.sub)).await? {
            Some(ref active) if active == refresh_token => {}
            // Superseded by a later issue/refresh, or deleted on logout.
            _ => return Err(TokenError::Revoked.into()),
        }

        let identity = claims.identity();
        self.issue(&identity).await
    }

    /// Revokes a session: deletes the user's refresh token and blacklists
    /// the access token for the remainder of its lifetime.
    ///
    /// Decoding the access token is best-effort; a malformed or already
    /// expired token still leaves the refresh deletion in effect, since
    /// logout must not fail on a stale credential. Idempotent. Store
    /// failures are the only errors that propagate.
    pub async fn revoke(&self, access_token: &str, user_id: &str) -> DomainResult<()> {
        self.store.delete(&refresh_key(user_id)).await?;

        match self.codec.decode_access(access_token) {
            Ok(claims) => {
                let remaining = claims.exp - Utc::now().timestamp();
                if remaining > 0 {
                    let signature = TokenCodec::signature_fragment(access_token);
                    self.store
                        .put(&blacklist_key(&signature), BLACKLIST_MARKER, remaining as u64)
                        .await?;
                }
            }
            Err(_) => {
                warn!(user_id = %user_id, "access token undecodable on revoke, cleared refresh session only");
            }
        }

        debug!(user_id = %user_id, "revoked session");
        Ok(())
    }
}
