//! Domain Port Interfaces
//!
//! Contracts implemented by outer layers. The client depends only on these
//! traits, never on a concrete transport.

/// Transport to the cache service
pub mod transport;

pub use transport::CacheTransport;
