//! Cache Transport Port
//!
//! Boundary between the client pipeline and whatever carries requests to the
//! cache service. A transport only moves messages: validation, retries,
//! timeouts and error normalization all live on the client side.

use crate::error::Result;
use crate::wire::{ControlRequest, ControlResponse, DataRequest, DataResponse, RequestMetadata, Status};
use async_trait::async_trait;
use std::time::Duration;

/// Transport to the cache service
///
/// # Example
///
/// ```ignore
/// use nimbus_domain::ports::CacheTransport;
/// use nimbus_domain::wire::{DataRequest, RequestMetadata};
///
/// let metadata = RequestMetadata::for_cache("my-cache");
/// let response = transport
///     .data(&metadata, DataRequest::Get { key: b"k".to_vec() })
///     .await?;
/// ```
#[async_trait]
pub trait CacheTransport: Send + Sync + std::fmt::Debug {
    /// Send a data-plane request
    async fn data(
        &self,
        metadata: &RequestMetadata,
        request: DataRequest,
    ) -> std::result::Result<DataResponse, Status>;

    /// Send a control-plane request
    async fn control(&self, request: ControlRequest) -> std::result::Result<ControlResponse, Status>;

    /// Check that the service answers
    async fn ping(&self) -> std::result::Result<(), Status>;

    /// Establish the underlying connection, failing after `timeout`
    ///
    /// Returns a `Connection` error when the service cannot be reached.
    async fn connect(&self, timeout: Duration) -> Result<()>;

    /// Release the underlying connection
    async fn close(&self);

    /// Name of this transport implementation (e.g., "local")
    fn transport_name(&self) -> &str;
}
