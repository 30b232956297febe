//! Cache lifecycle responses

use crate::value_objects::CacheInfo;

/// Result of `create_cache`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateCacheResponse {
    /// The cache was created
    Created,
    /// A cache with that name already existed
    AlreadyExists,
}

/// Result of `delete_cache`; deleting a missing cache also succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteCacheResponse {
    Deleted,
}

/// Result of `list_caches`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListCachesResponse {
    /// Caches in the account
    pub caches: Vec<CacheInfo>,
    /// Token for the next page, if any
    pub next_token: Option<String>,
}

impl ListCachesResponse {
    /// Names of the listed caches
    pub fn cache_names(&self) -> Vec<&str> {
        self.caches.iter().map(|c| c.name.as_str()).collect()
    }
}

/// Result of `ping`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PingResponse;
