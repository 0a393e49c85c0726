//! Signing codec for access and refresh tokens.
//!
//! The codec is pure and stateless: it verifies the MAC before trusting any
//! payload field, but never checks expiry. Expiry is a policy decision made
//! by the token service, which keeps the codec testable independent of the
//! wall clock.

use jsonwebtoken::{
    decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{de::DeserializeOwned, Serialize};
use sha2::{Digest, Sha256};

use crate::domain::entities::token::{AccessClaims, RefreshClaims};
use crate::errors::{DomainError, TokenError};

/// Codec for HS256-signed token payloads
pub struct TokenCodec {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec signing and verifying with the given symmetric secret
    pub fn new(secret: &str) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        // Expiry is checked by the service, not the codec.
        validation.validate_exp = false;
        validation.validate_nbf = false;
        validation.required_spec_claims.clear();

        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    /// Encodes access claims into a signed compact token
    pub fn encode_access(&self, claims: &AccessClaims) -> Result<String, DomainError> {
        self.encode(claims)
    }

    /// Encodes refresh claims into a signed compact token
    pub fn encode_refresh(&self, claims: &RefreshClaims) -> Result<String, DomainError> {
        self.encode(claims)
    }

    /// Decodes and MAC-verifies an access token without checking expiry
    pub fn decode_access(&self, token: &str) -> Result<AccessClaims, DomainError> {
        self.decode(token)
    }

    /// Decodes and MAC-verifies a refresh token without checking expiry
    pub fn decode_refresh(&self, token: &str) -> Result<RefreshClaims, DomainError> {
        self.decode(token)
    }

    /// Deterministic fragment identifying a token in the blacklist.
    ///
    /// A SHA-256 over the full encoded token, hex form. Hashing the whole
    /// token rather than truncating its signature keeps enough entropy to
    /// rule out cross-user collisions.
    pub fn signature_fragment(token: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(token.as_bytes());
        hex::encode(hasher.finalize())
    }

    fn encode<C: Serialize>(&self, claims: &C) -> Result<String, DomainError> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key).map_err(|e| {
            DomainError::Internal {
                message: format!("Token encoding failed: {}", e),
            }
        })
    }

    fn decode<C: DeserializeOwned>(&self, token: &str) -> Result<C, DomainError> {
        decode::<C>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                if e.kind() == &jsonwebtoken::errors::ErrorKind::InvalidSignature {
                    DomainError::Token(TokenError::InvalidSignature)
                } else {
                    DomainError::Token(TokenError::Malformed)
                }
            })
    }
}
