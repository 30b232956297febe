//! Top-level configuration

use super::{ClientConfig, LoggingConfig, TransportConfig};
use serde::{Deserialize, Serialize};

/// Everything needed to build a client and set up logging
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Client settings
    pub client: ClientConfig,

    /// Transport selection
    pub transport: TransportConfig,

    /// Logging settings
    pub logging: LoggingConfig,
}
