//! Logging middleware

use super::{Middleware, RequestInfo};
use crate::constants::REQUEST_ID_HEADER;
use nimbus_domain::wire::DataResponse;
use nimbus_domain::{RequestMetadata, Status};
use tracing::debug;

/// Logs every request and its outcome at debug level
///
/// Also stamps the correlation id onto the request headers so the service
/// side can be matched with client logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingMiddleware;

impl Middleware for LoggingMiddleware {
    fn on_request(&self, info: &RequestInfo, metadata: &mut RequestMetadata) {
        metadata.insert(REQUEST_ID_HEADER, info.request_id.to_string());
        debug!(
            request_id = %info.request_id,
            rpc = info.rpc_name,
            cache = %info.cache_name,
            headers = ?metadata.headers(),
            "Issuing request"
        );
    }

    fn on_response(&self, info: &RequestInfo, result: &Result<DataResponse, Status>) {
        match result {
            Ok(response) => debug!(
                request_id = %info.request_id,
                rpc = info.rpc_name,
                response = ?response,
                "Request succeeded"
            ),
            Err(status) => debug!(
                request_id = %info.request_id,
                rpc = info.rpc_name,
                status = %status,
                "Request failed"
            ),
        }
    }
}
