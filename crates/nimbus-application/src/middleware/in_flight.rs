//! In-flight request counting

use super::{Middleware, RequestInfo};
use nimbus_domain::wire::DataResponse;
use nimbus_domain::{RequestMetadata, Status};
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::info;

/// Counts requests currently in flight and requests issued overall
#[derive(Debug, Default)]
pub struct InFlightRequestCountMiddleware {
    in_flight: AtomicU64,
    total: AtomicU64,
}

impl InFlightRequestCountMiddleware {
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests started but not yet completed
    pub fn in_flight(&self) -> u64 {
        self.in_flight.load(Ordering::SeqCst)
    }

    /// Requests started since creation
    pub fn total(&self) -> u64 {
        self.total.load(Ordering::SeqCst)
    }
}

impl Middleware for InFlightRequestCountMiddleware {
    fn on_request(&self, _info: &RequestInfo, _metadata: &mut RequestMetadata) {
        self.in_flight.fetch_add(1, Ordering::SeqCst);
        self.total.fetch_add(1, Ordering::SeqCst);
    }

    fn on_response(&self, info: &RequestInfo, _result: &Result<DataResponse, Status>) {
        let remaining = self
            .in_flight
            .fetch_sub(1, Ordering::SeqCst)
            .saturating_sub(1);
        info!(
            rpc = info.rpc_name,
            in_flight = remaining,
            total = self.total(),
            "Request completed"
        );
    }
}
