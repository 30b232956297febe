//! Cache description returned by `list_caches`

use serde::{Deserialize, Serialize};

/// A cache known to the service
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CacheInfo {
    /// Cache name
    pub name: String,
}

impl CacheInfo {
    /// Describe a cache by name
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self { name: name.into() }
    }
}
