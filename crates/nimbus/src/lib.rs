//! # Nimbus
//!
//! Async client for a serverless cache service holding scalar items and
//! collections (sets, lists, dictionaries and sorted sets) under
//! per-item TTLs.
//!
//! ## Example
//!
//! ```ignore
//! use nimbus::{CacheClient, ClientConfiguration};
//! use nimbus::transport::LocalTransport;
//! use std::{sync::Arc, time::Duration};
//!
//! let client = CacheClient::builder()
//!     .configuration(ClientConfiguration::in_region())
//!     .default_ttl(Duration::from_secs(60))
//!     .transport(Arc::new(LocalTransport::new().with_cache("orders")))
//!     .build()
//!     .await?;
//!
//! client.set("orders", "order-1", "shipped").await?;
//! ```
//!
//! Or from `nimbus.toml` and `NIMBUS_*` environment variables:
//!
//! ```ignore
//! let client = nimbus::ClientFactory::from_loader(&nimbus::ConfigLoader::new())?
//!     .build()
//!     .await?;
//! ```
//!
//! ## Architecture
//!
//! - `domain` - error model, wire messages, responses and the transport port
//! - `application` - client, typed requests, retry strategies and middleware
//! - `infrastructure` - configuration, logging and client wiring
//! - `transport` - bundled transport implementations

/// Domain layer - errors, values, responses and the transport port
///
/// Re-exports from the domain crate for convenience
pub mod domain {
    pub use nimbus_domain::*;
}

/// Application layer - client, requests, retry and middleware
///
/// Re-exports from the application crate for convenience
pub mod application {
    pub use nimbus_application::*;
}

/// Infrastructure layer - configuration, logging and factory
///
/// Re-exports from the infrastructure crate for convenience
pub mod infrastructure {
    pub use nimbus_infrastructure::*;
}

/// Bundled transports
pub mod transport {
    pub use nimbus_providers::transport::*;
}

// Re-export commonly used types at the crate root
pub use domain::{Error, ErrorCode, Result, Value};
pub use domain::{CacheTransport, Status, StatusCode};
pub use application::{CacheClient, CacheClientBuilder, CacheRequest, ClientConfiguration};
pub use application::{batch, middleware, requests, retry};
pub use infrastructure::{AppConfig, ClientFactory, ConfigLoader, ErrorContext};
pub use infrastructure::logging::init_logging;
