//! Client Configuration
//!
//! Timeouts, retry strategy and middleware used by a [`CacheClient`].
//! Presets tune the timeouts for common deployment shapes.
//!
//! [`CacheClient`]: crate::client::CacheClient

use crate::constants::{
    DEFAULT_EAGER_CONNECTION_TIMEOUT, IN_REGION_REQUEST_TIMEOUT, LAMBDA_REQUEST_TIMEOUT,
    LAPTOP_REQUEST_TIMEOUT,
};
use crate::middleware::Middleware;
use crate::retry::{FixedCountRetryStrategy, RetryStrategy};
use nimbus_domain::{Error, Result};
use std::sync::Arc;
use std::time::Duration;

/// Settings applied to every request a client sends
///
/// # Example
///
/// ```ignore
/// use nimbus_application::config::ClientConfiguration;
/// use nimbus_application::middleware::LoggingMiddleware;
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// let config = ClientConfiguration::in_region()
///     .with_request_timeout(Duration::from_secs(2))
///     .with_middleware(Arc::new(LoggingMiddleware));
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfiguration {
    request_timeout: Duration,
    eager_connection_timeout: Duration,
    retry_strategy: Arc<dyn RetryStrategy>,
    middlewares: Vec<Arc<dyn Middleware>>,
}

impl ClientConfiguration {
    /// Configuration with the given request timeout and default settings
    pub fn new(request_timeout: Duration) -> Self {
        Self {
            request_timeout,
            eager_connection_timeout: DEFAULT_EAGER_CONNECTION_TIMEOUT,
            retry_strategy: Arc::new(FixedCountRetryStrategy::new()),
            middlewares: Vec::new(),
        }
    }

    /// Development from a laptop, tolerating higher latency
    pub fn laptop() -> Self {
        Self::new(LAPTOP_REQUEST_TIMEOUT)
    }

    /// Clients running in the same region as the service
    pub fn in_region() -> Self {
        Self::new(IN_REGION_REQUEST_TIMEOUT)
    }

    /// Short-lived functions; connects lazily on the first request
    pub fn lambda() -> Self {
        Self::new(LAMBDA_REQUEST_TIMEOUT).with_eager_connection_timeout(Duration::ZERO)
    }

    /// Replace the request timeout
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Replace the eager connection timeout; zero disables eager connection
    pub fn with_eager_connection_timeout(mut self, timeout: Duration) -> Self {
        self.eager_connection_timeout = timeout;
        self
    }

    /// Replace the retry strategy
    pub fn with_retry_strategy(mut self, strategy: Arc<dyn RetryStrategy>) -> Self {
        self.retry_strategy = strategy;
        self
    }

    /// Append a middleware
    pub fn with_middleware(mut self, middleware: Arc<dyn Middleware>) -> Self {
        self.middlewares.push(middleware);
        self
    }

    /// Replace all middleware
    pub fn with_middlewares(mut self, middlewares: Vec<Arc<dyn Middleware>>) -> Self {
        self.middlewares = middlewares;
        self
    }

    pub fn request_timeout(&self) -> Duration {
        self.request_timeout
    }

    pub fn eager_connection_timeout(&self) -> Duration {
        self.eager_connection_timeout
    }

    pub fn retry_strategy(&self) -> &Arc<dyn RetryStrategy> {
        &self.retry_strategy
    }

    pub fn middlewares(&self) -> &[Arc<dyn Middleware>] {
        &self.middlewares
    }

    /// Check the configuration can drive a client
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout.is_zero() {
            return Err(Error::invalid_argument(
                "request timeout must be greater than 0",
            ));
        }
        Ok(())
    }
}

impl Default for ClientConfiguration {
    fn default() -> Self {
        Self::laptop()
    }
}
