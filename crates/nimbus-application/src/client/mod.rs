//! Cache Client
//!
//! [`CacheClient`] is the entry point for every operation. Each public
//! method builds a typed request and hands it to [`CacheClient::send`],
//! which runs the shared pipeline:
//!
//! ```text
//! cache name ─► to_wire ─► on_request* ─► transport (timeout, retry) ─► on_response* ─► interpret
//! ```
//!
//! Operations are grouped by item kind across the submodules; they all add
//! `impl CacheClient` blocks.

/// Client builder
pub mod builder;
/// Cache lifecycle operations
mod control;
/// Dictionary operations
mod dictionary;
/// List operations
mod list;
/// Scalar item operations
mod scalar;
/// Set operations
mod set;
/// Sorted set operations
mod sorted_set;

pub use builder::CacheClientBuilder;

use crate::config::ClientConfiguration;
use crate::middleware::{Middleware, RequestInfo};
use crate::requests::validation::validate_cache_name;
use crate::requests::{CacheRequest, RequestContext};
use crate::retry::RetryProps;
use nimbus_domain::wire::{DataRequest, DataResponse};
use nimbus_domain::{CacheTransport, Error, RequestMetadata, Result, Status, StatusCode};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Client for the data and control planes of the cache service
///
/// Cloning is cheap; clones share the transport.
///
/// # Example
///
/// ```ignore
/// let client = CacheClient::builder()
///     .default_ttl(Duration::from_secs(60))
///     .transport(transport)
///     .build()
///     .await?;
///
/// client.set("my-cache", "key", "value").await?;
/// if let GetResponse::Hit { value } = client.get("my-cache", "key").await? {
///     println!("{value}");
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CacheClient {
    transport: Arc<dyn CacheTransport>,
    configuration: ClientConfiguration,
    default_ttl: Duration,
    default_cache_name: Option<String>,
}

impl CacheClient {
    /// Start building a client
    pub fn builder() -> CacheClientBuilder {
        CacheClientBuilder::new()
    }

    pub(crate) fn from_parts(
        transport: Arc<dyn CacheTransport>,
        configuration: ClientConfiguration,
        default_ttl: Duration,
        default_cache_name: Option<String>,
    ) -> Self {
        Self {
            transport,
            configuration,
            default_ttl,
            default_cache_name,
        }
    }

    /// TTL applied to writes that do not carry one
    pub fn default_ttl(&self) -> Duration {
        self.default_ttl
    }

    /// Cache used when a request names none
    pub fn default_cache_name(&self) -> Option<&str> {
        self.default_cache_name.as_deref()
    }

    pub fn configuration(&self) -> &ClientConfiguration {
        &self.configuration
    }

    /// Name of the underlying transport
    pub fn transport_name(&self) -> &str {
        self.transport.transport_name()
    }

    /// Send a typed data-plane request
    ///
    /// Every convenience method on the client goes through here; call it
    /// directly to set options the conveniences do not expose (TTLs,
    /// truncation, ranges).
    pub async fn send<R: CacheRequest>(&self, request: R) -> Result<R::Response> {
        let cache_name = self.resolve_cache_name(request.cache_name())?;
        let context = RequestContext {
            default_ttl: self.default_ttl,
        };
        let wire = request.to_wire(&context)?;
        let response = self.execute(&cache_name, wire).await?;
        request.interpret(response)
    }

    /// Pick the request's cache, falling back to the client default
    fn resolve_cache_name(&self, requested: &str) -> Result<String> {
        let name = match (requested.trim().is_empty(), &self.default_cache_name) {
            (true, Some(default)) => default.as_str(),
            _ => requested,
        };
        validate_cache_name(name)?;
        Ok(name.to_string())
    }

    async fn execute(&self, cache_name: &str, request: DataRequest) -> Result<DataResponse> {
        let rpc_name = request.rpc_name();
        let info = RequestInfo::new(rpc_name, cache_name);
        let mut metadata = RequestMetadata::for_cache(cache_name);
        for middleware in self.configuration.middlewares() {
            middleware.on_request(&info, &mut metadata);
        }
        let hooks = ResponseHooks {
            middlewares: self.configuration.middlewares(),
            info: &info,
            finished: false,
        };

        let timeout = self.configuration.request_timeout();
        let result =
            match tokio::time::timeout(timeout, self.invoke_with_retry(&metadata, request)).await {
                Ok(result) => result,
                Err(_) => Err(Status::new(
                    StatusCode::DeadlineExceeded,
                    format!("{rpc_name} request did not complete within {timeout:?}"),
                )),
            };

        hooks.finish(&result);
        result.map_err(Error::from)
    }

    async fn invoke_with_retry(
        &self,
        metadata: &RequestMetadata,
        request: DataRequest,
    ) -> std::result::Result<DataResponse, Status> {
        let rpc_name = request.rpc_name();
        let mut attempt_number = 0;
        loop {
            attempt_number += 1;
            let status = match self.transport.data(metadata, request.clone()).await {
                Ok(response) => return Ok(response),
                Err(status) => status,
            };

            let props = RetryProps {
                status_code: status.code,
                rpc_name,
                attempt_number,
            };
            let Some(delay) = self.configuration.retry_strategy().determine_when_to_retry(&props)
            else {
                debug!(rpc = rpc_name, attempt = attempt_number, status = %status, "Giving up");
                return Err(status);
            };

            warn!(
                rpc = rpc_name,
                attempt = attempt_number,
                status = %status,
                delay = ?delay,
                "Request failed; retrying"
            );
            if !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
        }
    }

    /// Release the transport
    pub async fn close(&self) {
        self.transport.close().await;
    }
}

/// Runs the `on_response` hooks once per request, in reverse order
///
/// A request dropped by its caller before completing is reported to the
/// hooks as `Cancelled`.
struct ResponseHooks<'a> {
    middlewares: &'a [Arc<dyn Middleware>],
    info: &'a RequestInfo,
    finished: bool,
}

impl ResponseHooks<'_> {
    fn finish(mut self, result: &std::result::Result<DataResponse, Status>) {
        self.finished = true;
        self.run(result);
    }

    fn run(&self, result: &std::result::Result<DataResponse, Status>) {
        for middleware in self.middlewares.iter().rev() {
            middleware.on_response(self.info, result);
        }
    }
}

impl Drop for ResponseHooks<'_> {
    fn drop(&mut self) {
        if !self.finished {
            debug!(rpc = self.info.rpc_name, "Request dropped before completing");
            self.run(&Err(Status::new(
                StatusCode::Cancelled,
                format!("{} request was dropped before completing", self.info.rpc_name),
            )));
        }
    }
}
