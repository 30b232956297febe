//! Application layer constants

use std::time::Duration;

// ============================================================================
// CLIENT DEFAULTS
// ============================================================================

/// Default timeout for the eager connection made when a client is built
pub const DEFAULT_EAGER_CONNECTION_TIMEOUT: Duration = Duration::from_secs(30);

/// Request timeout of the laptop preset
pub const LAPTOP_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

/// Request timeout of the in-region preset
pub const IN_REGION_REQUEST_TIMEOUT: Duration = Duration::from_millis(1100);

/// Request timeout of the lambda preset
pub const LAMBDA_REQUEST_TIMEOUT: Duration = Duration::from_millis(1100);

// ============================================================================
// RETRY DEFAULTS
// ============================================================================

/// Retries allowed by the fixed count strategy
pub const DEFAULT_MAX_RETRY_ATTEMPTS: u32 = 3;

/// First backoff delay, in milliseconds
pub const DEFAULT_INITIAL_DELAY_MILLIS: f64 = 0.5;

/// Backoff growth factor between attempts
pub const DEFAULT_GROWTH_FACTOR: f64 = 2.0;

/// Backoff ceiling, in milliseconds
pub const DEFAULT_MAX_BACKOFF_MILLIS: f64 = 8.0;

// ============================================================================
// REQUEST DEFAULTS
// ============================================================================

/// Elements removed by `set_pop` when no count is given
pub const DEFAULT_SET_POP_COUNT: u32 = 1;

/// Concurrent requests issued by the batch helpers
pub const DEFAULT_BATCH_CONCURRENCY: usize = 5;

/// Header carrying the request correlation id
pub const REQUEST_ID_HEADER: &str = "request-id";
