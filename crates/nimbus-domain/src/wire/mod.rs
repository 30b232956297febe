//! Wire Model
//!
//! Messages exchanged with the cache service through a
//! [`CacheTransport`](crate::ports::CacheTransport), plus the status returned
//! on failure.

/// Control-plane messages
pub mod control;
/// Data-plane messages
pub mod data;
/// Failure status and its normalization
pub mod status;

pub use control::{ControlRequest, ControlResponse};
pub use data::{
    Bytes, DataRequest, DataResponse, SetCondition, SortedSetRange, TtlUpdate, UpdateTtlResult,
    WireCollectionTtl,
};
pub use status::{Status, StatusCode};

use crate::constants::CACHE_METADATA_KEY;
use std::collections::BTreeMap;

/// Headers sent alongside a data request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestMetadata {
    headers: BTreeMap<String, String>,
}

impl RequestMetadata {
    /// Metadata targeting `cache_name`
    pub fn for_cache<S: Into<String>>(cache_name: S) -> Self {
        let mut headers = BTreeMap::new();
        headers.insert(CACHE_METADATA_KEY.to_string(), cache_name.into());
        Self { headers }
    }

    /// Target cache, if set
    pub fn cache_name(&self) -> Option<&str> {
        self.get(CACHE_METADATA_KEY)
    }

    /// Header value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    /// Add or replace a header
    pub fn insert<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.headers.insert(key.into(), value.into());
    }

    /// All headers in key order
    pub fn headers(&self) -> &BTreeMap<String, String> {
        &self.headers
    }
}
