//! # Nimbus - Transport Implementations
//!
//! Implementations of the [`CacheTransport`] port defined in
//! `nimbus-domain`. Each transport registers itself in the linkme registry
//! of `nimbus-application` so it can be selected by name from
//! configuration.
//!
//! | Transport | Name | Description |
//! |-----------|------|-------------|
//! | [`LocalTransport`](transport::LocalTransport) | `local` | In-process emulation of the cache service |
//!
//! ## Feature Flags
//!
//! ```toml
//! [dependencies]
//! nimbus-providers = { version = "0.1", default-features = false, features = ["transport-local"] }
//! ```

pub use nimbus_domain::error::{Error, Result};
pub use nimbus_domain::ports::CacheTransport;

/// Provider-specific constants
pub mod constants;

/// Transport implementations
pub mod transport;
