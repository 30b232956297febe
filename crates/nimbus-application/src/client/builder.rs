//! Cache client builder

use super::CacheClient;
use crate::config::ClientConfiguration;
use crate::requests::validation::{ttl_millis, validate_cache_name};
use nimbus_domain::{CacheTransport, Error, Result};
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info};

/// Builder for [`CacheClient`]
///
/// A transport and a non-zero default TTL are required. The configuration
/// defaults to [`ClientConfiguration::laptop`].
#[derive(Debug, Default)]
pub struct CacheClientBuilder {
    configuration: Option<ClientConfiguration>,
    default_ttl: Option<Duration>,
    default_cache_name: Option<String>,
    eager_connection_timeout: Option<Duration>,
    transport: Option<Arc<dyn CacheTransport>>,
}

impl CacheClientBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Timeouts, retry strategy and middleware
    pub fn configuration(mut self, configuration: ClientConfiguration) -> Self {
        self.configuration = Some(configuration);
        self
    }

    /// TTL applied to writes that do not carry one
    pub fn default_ttl(mut self, ttl: Duration) -> Self {
        self.default_ttl = Some(ttl);
        self
    }

    /// Cache used by requests whose cache name is empty
    pub fn default_cache_name<S: Into<String>>(mut self, cache_name: S) -> Self {
        self.default_cache_name = Some(cache_name.into());
        self
    }

    /// Override the configuration's eager connection timeout; zero connects
    /// lazily on the first request
    pub fn eager_connection_timeout(mut self, timeout: Duration) -> Self {
        self.eager_connection_timeout = Some(timeout);
        self
    }

    pub fn transport(mut self, transport: Arc<dyn CacheTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Validate the settings and, unless disabled, connect eagerly
    pub async fn build(self) -> Result<CacheClient> {
        let configuration = self.configuration.unwrap_or_default();
        configuration.validate()?;

        let default_ttl = self
            .default_ttl
            .ok_or_else(|| Error::invalid_argument("default TTL must be given"))?;
        if ttl_millis(default_ttl) == 0 {
            return Err(Error::invalid_argument(
                "default TTL must be a positive duration of at least 1ms",
            ));
        }

        if let Some(name) = &self.default_cache_name {
            validate_cache_name(name)?;
        }

        let transport = self
            .transport
            .ok_or_else(|| Error::configuration("a transport must be given"))?;

        let eager_timeout = self
            .eager_connection_timeout
            .unwrap_or_else(|| configuration.eager_connection_timeout());
        if eager_timeout.is_zero() {
            debug!(
                transport = transport.transport_name(),
                "Eager connection disabled"
            );
        } else {
            transport.connect(eager_timeout).await.map_err(|e| {
                Error::connection(format!(
                    "Unable to connect within the eager connection timeout of {eager_timeout:?}: {}",
                    e.message()
                ))
            })?;
            info!(
                transport = transport.transport_name(),
                "Connected to cache service"
            );
        }

        Ok(CacheClient::from_parts(
            transport,
            configuration,
            default_ttl,
            self.default_cache_name,
        ))
    }
}
