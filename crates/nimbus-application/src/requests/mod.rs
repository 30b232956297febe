//! Typed Requests
//!
//! One struct per client operation. Each request validates its own
//! arguments, builds the wire message and interprets the wire response.
//! The client pipeline handles everything in between.

/// Dictionary requests
pub mod dictionary;
/// List requests
pub mod list;
/// Scalar item requests
pub mod scalar;
/// Set requests
pub mod set;
/// Sorted set requests
pub mod sorted_set;
/// TTL requests
pub mod ttl;
/// Argument validation helpers
pub mod validation;

pub use dictionary::*;
pub use list::*;
pub use scalar::*;
pub use set::*;
pub use sorted_set::*;
pub use ttl::*;

use nimbus_domain::wire::{DataRequest, DataResponse};
use nimbus_domain::{Error, Result, Value};
use std::time::Duration;

/// Client-side values requests may need while building wire messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestContext {
    /// TTL applied when a request does not carry one
    pub default_ttl: Duration,
}

/// A data-plane operation
pub trait CacheRequest: Send + Sync {
    /// Typed result of the operation
    type Response: Send;

    /// Operation name used in error messages
    const NAME: &'static str;

    /// Target cache; empty selects the client default
    fn cache_name(&self) -> &str;

    /// Validate arguments and build the wire message
    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest>;

    /// Turn the wire response into the typed result
    fn interpret(&self, response: DataResponse) -> Result<Self::Response>;
}

/// Error for a response variant the request does not expect
pub(crate) fn unexpected_response(name: &str, response: &DataResponse) -> Error {
    Error::internal_server(format!(
        "{name} request got an unexpected response {}",
        response.rpc_name()
    ))
}

/// Convert caller-supplied elements into values
pub(crate) fn into_values<I, V>(values: I) -> Vec<Value>
where
    I: IntoIterator<Item = V>,
    V: Into<Value>,
{
    values.into_iter().map(Into::into).collect()
}
