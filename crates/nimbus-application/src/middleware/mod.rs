//! Middleware
//!
//! Hooks run around every data-plane request. `on_request` runs in
//! registration order before the first attempt and may add headers;
//! `on_response` runs in reverse order once the final outcome is known.

/// Active and total request counters
pub mod in_flight;
/// Request and response logging
pub mod logging;

pub use in_flight::InFlightRequestCountMiddleware;
pub use logging::LoggingMiddleware;

use nimbus_domain::wire::DataResponse;
use nimbus_domain::{RequestMetadata, Status};
use uuid::Uuid;

/// Identity of a request as seen by middleware
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestInfo {
    /// Correlation id, unique per request
    pub request_id: Uuid,
    /// RPC method of the request
    pub rpc_name: &'static str,
    /// Target cache
    pub cache_name: String,
}

impl RequestInfo {
    /// Describe a new request with a fresh correlation id
    pub fn new<S: Into<String>>(rpc_name: &'static str, cache_name: S) -> Self {
        Self {
            request_id: Uuid::new_v4(),
            rpc_name,
            cache_name: cache_name.into(),
        }
    }
}

/// Interceptor around data-plane requests
pub trait Middleware: Send + Sync + std::fmt::Debug {
    /// Called before the request is sent
    fn on_request(&self, _info: &RequestInfo, _metadata: &mut RequestMetadata) {}

    /// Called with the final outcome of the request
    fn on_response(&self, _info: &RequestInfo, _result: &Result<DataResponse, Status>) {}
}
