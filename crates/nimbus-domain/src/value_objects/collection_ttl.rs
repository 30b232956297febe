//! Collection TTL policy
//!
//! A collection write carries a TTL for the collection and a flag telling the
//! service whether the write refreshes an existing collection's TTL.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Time-to-live policy applied to a collection on mutation
///
/// # Example
///
/// ```ignore
/// use nimbus_domain::value_objects::CollectionTtl;
/// use std::time::Duration;
///
/// // Expire five minutes after the last write
/// let ttl = CollectionTtl::of(Duration::from_secs(300));
///
/// // Keep whatever TTL the collection already has
/// let ttl = CollectionTtl::of(Duration::from_secs(300)).with_no_refresh_ttl_on_updates();
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionTtl {
    /// TTL to apply; `None` resolves to the client default TTL
    pub ttl: Option<Duration>,
    /// Whether a write to an existing collection resets its TTL
    pub refresh_ttl: bool,
}

impl CollectionTtl {
    /// Use the client default TTL and refresh it on every write
    pub fn from_cache_ttl() -> Self {
        Self {
            ttl: None,
            refresh_ttl: true,
        }
    }

    /// Use the given TTL and refresh it on every write
    pub fn of(ttl: Duration) -> Self {
        Self {
            ttl: Some(ttl),
            refresh_ttl: true,
        }
    }

    /// Refresh only when a TTL is supplied; otherwise the default TTL applies
    /// to newly created collections and existing ones keep theirs
    pub fn refresh_ttl_if_provided(ttl: Option<Duration>) -> Self {
        Self {
            ttl,
            refresh_ttl: ttl.is_some(),
        }
    }

    /// Same TTL, refreshed on updates
    pub fn with_refresh_ttl_on_updates(self) -> Self {
        Self {
            refresh_ttl: true,
            ..self
        }
    }

    /// Same TTL, not refreshed on updates
    pub fn with_no_refresh_ttl_on_updates(self) -> Self {
        Self {
            refresh_ttl: false,
            ..self
        }
    }

    /// TTL to apply, falling back to `default_ttl`
    pub fn effective_ttl(&self, default_ttl: Duration) -> Duration {
        self.ttl.unwrap_or(default_ttl)
    }
}

impl Default for CollectionTtl {
    fn default() -> Self {
        Self::from_cache_ttl()
    }
}
