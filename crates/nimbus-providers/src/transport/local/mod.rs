//! In-process cache service
//!
//! Emulates the cache service in memory so clients can be developed and
//! tested without a network. Caches must be created before use; items
//! expire by wall clock (the tokio clock, so paused-time tests can advance
//! it).
//!
//! ## Example
//!
//! ```ignore
//! use nimbus_providers::transport::LocalTransport;
//!
//! let transport = LocalTransport::new().with_cache("my-cache");
//! ```

mod dictionary;
mod list;
mod scalar;
mod set;
mod sorted_set;
mod store;

use crate::constants::LOCAL_TRANSPORT_NAME;
use async_trait::async_trait;
use dashmap::DashMap;
use nimbus_application::ports::registry::{
    TRANSPORT_PROVIDERS, TransportProviderConfig, TransportProviderEntry,
};
use nimbus_domain::error::Result;
use nimbus_domain::wire::{
    ControlRequest, ControlResponse, DataRequest, DataResponse, RequestMetadata, Status, StatusCode,
};
use nimbus_domain::{CacheInfo, CacheTransport, Error};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use store::CacheStore;
use tokio::time::Instant;
use tracing::{debug, trace};

/// Cache service running inside the current process
#[derive(Debug, Default)]
pub struct LocalTransport {
    caches: DashMap<String, Arc<CacheStore>>,
    closed: AtomicBool,
}

impl LocalTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a cache up front
    pub fn with_cache<S: Into<String>>(self, cache_name: S) -> Self {
        self.caches
            .entry(cache_name.into())
            .or_insert_with(|| Arc::new(CacheStore::new()));
        self
    }

    /// Build from registry configuration, creating the listed caches
    pub fn from_config(config: &TransportProviderConfig) -> Self {
        config
            .caches
            .iter()
            .fold(Self::new(), |transport, name| transport.with_cache(name.as_str()))
    }

    /// Number of live and not yet evicted items in a cache
    pub fn item_count(&self, cache_name: &str) -> Option<usize> {
        self.caches.get(cache_name).map(|c| c.items.len())
    }

    fn ensure_open(&self) -> std::result::Result<(), Status> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(Status::new(
                StatusCode::Unavailable,
                "the local transport has been closed",
            ));
        }
        Ok(())
    }

    fn cache(&self, metadata: &RequestMetadata) -> std::result::Result<Arc<CacheStore>, Status> {
        let name = metadata.cache_name().ok_or_else(|| {
            Status::new(StatusCode::InvalidArgument, "request is missing the cache header")
        })?;
        self.caches
            .get(name)
            .map(|c| Arc::clone(c.value()))
            .ok_or_else(|| Status::new(StatusCode::NotFound, format!("cache '{name}' not found")))
    }
}

#[async_trait]
impl CacheTransport for LocalTransport {
    async fn data(
        &self,
        metadata: &RequestMetadata,
        request: DataRequest,
    ) -> std::result::Result<DataResponse, Status> {
        self.ensure_open()?;
        let cache = self.cache(metadata)?;
        trace!(rpc = request.rpc_name(), "Handling data request");
        cache.handle(request, Instant::now())
    }

    async fn control(&self, request: ControlRequest) -> std::result::Result<ControlResponse, Status> {
        self.ensure_open()?;
        match request {
            ControlRequest::CreateCache { cache_name } => {
                if self.caches.contains_key(&cache_name) {
                    return Err(Status::new(
                        StatusCode::AlreadyExists,
                        format!("cache '{cache_name}' already exists"),
                    ));
                }
                self.caches
                    .entry(cache_name.clone())
                    .or_insert_with(|| Arc::new(CacheStore::new()));
                debug!(cache = %cache_name, "Created cache");
                Ok(ControlResponse::CreateCache)
            }
            ControlRequest::DeleteCache { cache_name } => {
                if self.caches.remove(&cache_name).is_none() {
                    return Err(Status::new(
                        StatusCode::NotFound,
                        format!("cache '{cache_name}' not found"),
                    ));
                }
                debug!(cache = %cache_name, "Deleted cache");
                Ok(ControlResponse::DeleteCache)
            }
            ControlRequest::ListCaches { .. } => {
                let mut caches: Vec<CacheInfo> = self
                    .caches
                    .iter()
                    .map(|c| CacheInfo::new(c.key().as_str()))
                    .collect();
                caches.sort_by(|a, b| a.name.cmp(&b.name));
                Ok(ControlResponse::ListCaches {
                    caches,
                    next_token: None,
                })
            }
        }
    }

    async fn ping(&self) -> std::result::Result<(), Status> {
        self.ensure_open()
    }

    async fn connect(&self, _timeout: Duration) -> Result<()> {
        if self.closed.load(Ordering::SeqCst) {
            return Err(Error::connection("the local transport has been closed"));
        }
        debug!("Local transport ready");
        Ok(())
    }

    async fn close(&self) {
        self.closed.store(true, Ordering::SeqCst);
        debug!("Local transport closed");
    }

    fn transport_name(&self) -> &str {
        LOCAL_TRANSPORT_NAME
    }
}

// ============================================================================
// Auto-registration via linkme distributed slice
// ============================================================================

#[linkme::distributed_slice(TRANSPORT_PROVIDERS)]
static LOCAL_TRANSPORT: TransportProviderEntry = TransportProviderEntry {
    name: LOCAL_TRANSPORT_NAME,
    description: "In-process cache service for development and tests",
    factory: |config: &TransportProviderConfig| Ok(Arc::new(LocalTransport::from_config(config))),
};
