//! Business services containing the token lifecycle logic.

pub mod session;
pub mod token;

// Re-export commonly used types
pub use session::SessionBoundary;
pub use token::{TokenCodec, TokenService, TokenServiceConfig};
