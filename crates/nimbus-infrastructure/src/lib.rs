//! Infrastructure Layer - Nimbus cache client
//!
//! Cross-cutting concerns around the client:
//!
//! - [`config`]: layered configuration (defaults, `nimbus.toml`, `NIMBUS_*`
//!   environment variables) loaded with figment
//! - [`logging`]: tracing subscriber setup
//! - [`error_ext`]: context helpers turning foreign errors into domain errors
//! - [`factory`]: builds a ready [`CacheClient`](nimbus_application::CacheClient)
//!   from configuration, resolving the transport from the registry

// Force linkme registration of the bundled transports
extern crate nimbus_providers;

/// Configuration types and loader
pub mod config;
/// Infrastructure constants
pub mod constants;
/// Error context extensions
pub mod error_ext;
/// Client construction from configuration
pub mod factory;
/// Structured logging with tracing
pub mod logging;

pub use config::{AppConfig, ConfigLoader};
pub use error_ext::ErrorContext;
pub use factory::ClientFactory;
