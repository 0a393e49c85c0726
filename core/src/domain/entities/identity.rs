//! Authenticated identity as handed over by the external user store.

use serde::{Deserialize, Serialize};

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

/// An authenticated identity.
///
/// Produced by the external credential-verification step and treated as
/// immutable from that point on. The token service caches a snapshot of these
/// fields inside the refresh claims so rotation never needs a second lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable user identifier, sourced externally
    pub user_id: String,

    /// E-mail address
    pub email: String,

    /// Human-readable display name
    pub display_name: String,

    /// Role granted at authentication time
    pub role: Role,
}

impl Identity {
    /// Creates a new identity
    pub fn new(
        user_id: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            display_name: display_name.into(),
            role,
        }
    }
}
