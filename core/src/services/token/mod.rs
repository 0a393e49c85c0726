//! Token service module for the session lifecycle
//!
//! This module handles all token-related operations including:
//! - Signed access/refresh token encoding and decoding
//! - Issuance of token pairs with a single live session per user
//! - Sliding-session refresh with rotation
//! - Revocation via refresh-key deletion and access-token blacklisting

mod codec;
mod config;
mod service;


pub use codec::TokenCodec;
pub use config::TokenServiceConfig;
pub use service::{blacklist_key, refresh_key, TokenService};
