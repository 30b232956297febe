//! Application Ports
//!
//! Registration points for components supplied by outer layers. The
//! transport port itself lives in `nimbus-domain`; this module only
//! indexes its implementations.

/// Provider registries
pub mod registry;

pub use registry::{
    TRANSPORT_PROVIDERS, TransportProviderConfig, TransportProviderEntry,
    list_transport_providers, resolve_transport,
};
