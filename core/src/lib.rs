//! # TokenKeeper Core
//!
//! Core domain layer for the TokenKeeper session engine. This crate contains
//! the token entities, the signing codec, the revocation-store contract, and
//! the token lifecycle service that ties them together. Concrete storage
//! technology lives behind the `RevocationStore` trait in the infrastructure
//! layer; the core holds no cross-request state of its own.

pub mod domain;
pub mod errors;
pub mod services;
pub mod stores;

// Re-export commonly used types for convenience
pub use domain::*;
pub use errors::*;
pub use services::*;
pub use stores::*;
