//! Domain-specific error types and error handling.

use thiserror::Error;

/// Token validity errors.
///
/// All four kinds are terminal: the request is rejected and nothing is
/// retried internally. `Malformed` and `InvalidSignature` are distinct
/// variants for tests and logs, but carry no detail that would let an
/// external caller tell tampering apart from garbage.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Invalid token signature")]
    InvalidSignature,

    #[error("Token expired")]
    Expired,

    #[error("Token revoked")]
    Revoked,
}

/// Revocation store errors, distinct from all token-validity errors.
///
/// Surfaced as-is; retry policy belongs to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Revocation store unavailable: {message}")]
    Unavailable { message: String },
}

/// Core domain errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Token(#[from] TokenError),

    #[error(transparent)]
    Store(#[from] StoreError),
}

pub type DomainResult<T> = Result<T, DomainError>;
