//! Transport Provider Registry

use std::sync::Arc;

use nimbus_domain::CacheTransport;

/// Configuration for transport creation
#[derive(Debug, Clone, Default)]
pub struct TransportProviderConfig {
    /// Provider name (e.g., "local")
    pub provider: String,
    /// Caches created when the transport starts
    pub caches: Vec<String>,
}

impl TransportProviderConfig {
    /// Create a new config with the given provider name
    pub fn new(provider: impl Into<String>) -> Self {
        Self {
            provider: provider.into(),
            ..Default::default()
        }
    }

    /// Add a cache to create at startup
    pub fn with_cache(mut self, cache_name: impl Into<String>) -> Self {
        self.caches.push(cache_name.into());
        self
    }
}

/// Registry entry for transports
pub struct TransportProviderEntry {
    /// Unique provider name
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// Factory function to create a transport instance
    pub factory: fn(&TransportProviderConfig) -> Result<Arc<dyn CacheTransport>, String>,
}

#[linkme::distributed_slice]
pub static TRANSPORT_PROVIDERS: [TransportProviderEntry] = [..];

/// Resolve a transport by name from the registry
///
/// # Returns
/// * `Ok(Arc<dyn CacheTransport>)` - Created transport
/// * `Err(String)` - Provider not found or creation failed
pub fn resolve_transport(
    config: &TransportProviderConfig,
) -> Result<Arc<dyn CacheTransport>, String> {
    let provider_name = &config.provider;

    if let Some(entry) = TRANSPORT_PROVIDERS.iter().find(|e| e.name == provider_name) {
        return (entry.factory)(config);
    }

    let available: Vec<&str> = TRANSPORT_PROVIDERS.iter().map(|e| e.name).collect();
    Err(format!(
        "Unknown transport provider '{provider_name}'. Available providers: {available:?}"
    ))
}

/// List all registered transports as (name, description) pairs
pub fn list_transport_providers() -> Vec<(&'static str, &'static str)> {
    TRANSPORT_PROVIDERS
        .iter()
        .map(|e| (e.name, e.description))
        .collect()
}
