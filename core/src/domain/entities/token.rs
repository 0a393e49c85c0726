//! Token entities: access/refresh claims and the encoded pair.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::identity::{Identity, Role};

/// Claims structure for an access token payload.
///
/// Timestamps are unix seconds. The validity interval is closed-open:
/// a token is live for `iat <= now < exp`, so `now == exp` counts as expired.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Subject (user ID)
    pub sub: String,

    /// E-mail address of the subject
    pub email: String,

    /// Display name of the subject
    pub name: String,

    /// Role granted at authentication time
    pub role: Role,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique token identifier.
    ///
    /// Timestamps are second-granular, so without this two tokens minted
    /// for the same identity in the same second would encode identically.
    pub jti: String,
}

impl AccessClaims {
    /// Creates claims for a fresh access token expiring `ttl_secs` from now
    pub fn new(identity: &Identity, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: identity.user_id.clone(),
            email: identity.email.clone(),
            name: identity.display_name.clone(),
            role: identity.role,
            iat: now,
            exp: now + ttl_secs,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks whether the claims are expired at the given instant
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }
}

/// Claims structure for a refresh token payload.
///
/// Carries the same identity snapshot as the access claims so that rotation
/// can mint a full new pair without an external identity lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (user ID)
    pub sub: String,

    /// Cached e-mail address for rotation
    pub email: String,

    /// Cached display name for rotation
    pub name: String,

    /// Cached role for rotation
    pub role: Role,

    /// Issued at timestamp
    pub iat: i64,

    /// Expiration timestamp
    pub exp: i64,

    /// Unique token identifier.
    ///
    /// Guarantees that rotation mints a token distinct from the one it
    /// supersedes even within the same second, so the exact-match check
    /// against the store actually invalidates the old token.
    pub jti: String,
}

impl RefreshClaims {
    /// Creates claims for a fresh refresh token expiring `ttl_secs` from now
    pub fn new(identity: &Identity, ttl_secs: i64) -> Self {
        let now = Utc::now().timestamp();

        Self {
            sub: identity.user_id.clone(),
            email: identity.email.clone(),
            name: identity.display_name.clone(),
            role: identity.role,
            iat: now,
            exp: now + ttl_secs,
            jti: Uuid::new_v4().to_string(),
        }
    }

    /// Checks whether the claims are expired at the given instant
    pub fn is_expired_at(&self, now: i64) -> bool {
        now >= self.exp
    }

    /// Rebuilds the identity from the cached snapshot
    pub fn identity(&self) -> Identity {
        Identity {
            user_id: self.sub.clone(),
            email: self.email.clone(),
            display_name: self.name.clone(),
            role: self.role,
        }
    }
}

/// Token pair returned to the client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Encoded access token
    pub access_token: String,

    /// Encoded refresh token
    pub refresh_token: String,

    /// Access token lifetime in seconds
    pub access_expires_in: i64,

    /// Refresh token lifetime in seconds
    pub refresh_expires_in: i64,
}

impl TokenPair {
    /// Creates a new token pair with the configured lifetimes
    pub fn new(
        access_token: String,
        refresh_token: String,
        access_ttl_secs: i64,
        refresh_ttl_secs: i64,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            access_expires_in: access_ttl_secs,
            refresh_expires_in: refresh_ttl_secs,
        }
    }
}
