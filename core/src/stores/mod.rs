//! Store contracts consumed by the domain services.

pub mod revocation;

pub use revocation::RevocationStore;

#[cfg(test)]
pub use revocation::MemoryRevocationStore;
