//! Domain entities for the token lifecycle engine.

pub mod entities;

pub use entities::identity::{Identity, Role};
pub use entities::token::{AccessClaims, RefreshClaims, TokenPair};
