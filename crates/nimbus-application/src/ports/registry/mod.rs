//! Provider Registry System
//!
//! Transport implementations register themselves at link time with
//! `linkme` and are resolved by name at runtime.
//!
//! ## Usage
//!
//! ### Registering a transport (in nimbus-providers)
//!
//! ```ignore
//! use nimbus_application::ports::registry::{TRANSPORT_PROVIDERS, TransportProviderEntry};
//!
//! #[linkme::distributed_slice(TRANSPORT_PROVIDERS)]
//! static LOCAL_TRANSPORT: TransportProviderEntry = TransportProviderEntry {
//!     name: "local",
//!     description: "In-process cache service",
//!     factory: |config| Ok(Arc::new(LocalTransport::from_config(config)?)),
//! };
//! ```
//!
//! ### Resolving a transport (in nimbus-infrastructure)
//!
//! ```ignore
//! use nimbus_application::ports::registry::{TransportProviderConfig, resolve_transport};
//!
//! let transport = resolve_transport(&TransportProviderConfig::new("local"))?;
//! ```

pub mod transport;

pub use transport::{
    TRANSPORT_PROVIDERS, TransportProviderConfig, TransportProviderEntry,
    list_transport_providers, resolve_transport,
};
