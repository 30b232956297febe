//! Transport Implementations
//!
//! ## Available Transports
//!
//! | Transport | Type | Description |
//! |-----------|------|-------------|
//! | [`LocalTransport`] | Local | In-process cache service for development and tests |

#[cfg(feature = "transport-local")]
pub mod local;

#[cfg(feature = "transport-local")]
pub use local::LocalTransport;
