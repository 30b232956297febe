//! Transport configuration types

use crate::constants::DEFAULT_TRANSPORT_PROVIDER;
use nimbus_application::ports::registry::TransportProviderConfig;
use serde::{Deserialize, Serialize};

/// Which registered transport to use and how to set it up
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransportConfig {
    /// Registered provider name
    pub provider: String,

    /// Caches to create when the transport starts
    pub caches: Vec<String>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            provider: DEFAULT_TRANSPORT_PROVIDER.to_string(),
            caches: Vec::new(),
        }
    }
}

impl From<&TransportConfig> for TransportProviderConfig {
    fn from(config: &TransportConfig) -> Self {
        Self {
            provider: config.provider.clone(),
            caches: config.caches.clone(),
        }
    }
}
