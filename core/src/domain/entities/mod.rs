//! Entity definitions shared across services and stores.

pub mod identity;
pub mod token;
