//! Client Factory
//!
//! Bridges configuration and a ready client:
//!
//! ```text
//! AppConfig { client, transport }
//!        │
//!        ├── client    → ClientConfiguration (preset, overrides, retry, middleware)
//!        └── transport → resolve_transport() → Arc<dyn CacheTransport>
//!                                     │
//!                                     ▼
//!                     CacheClient::builder().build()
//! ```
//!
//! ## Usage
//!
//! ```ignore
//! let config = ConfigLoader::new().load()?;
//! let client = ClientFactory::new(config).build().await?;
//! ```

use crate::config::{AppConfig, ClientConfig, ConfigPreset, ConfigLoader, RetryConfig, RetryKind};
use crate::error_ext::registry_error;
use nimbus_application::middleware::LoggingMiddleware;
use nimbus_application::ports::registry::{TransportProviderConfig, resolve_transport};
use nimbus_application::retry::{
    ExponentialBackoffRetryStrategy, FixedCountRetryStrategy, NeverRetryStrategy, RetryStrategy,
};
use nimbus_application::{CacheClient, ClientConfiguration};
use nimbus_domain::{CacheTransport, Result};
use std::sync::Arc;
use tracing::info;

/// Builds clients from an [`AppConfig`]
#[derive(Debug, Clone, Default)]
pub struct ClientFactory {
    config: AppConfig,
}

impl ClientFactory {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }

    /// Load configuration with the given loader
    pub fn from_loader(loader: &ConfigLoader) -> Result<Self> {
        Ok(Self::new(loader.load()?))
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Client configuration derived from the `client` section
    pub fn client_configuration(&self) -> ClientConfiguration {
        let client = &self.config.client;
        let mut configuration = match client.preset {
            ConfigPreset::Laptop => ClientConfiguration::laptop(),
            ConfigPreset::InRegion => ClientConfiguration::in_region(),
            ConfigPreset::Lambda => ClientConfiguration::lambda(),
        };

        if let Some(timeout) = client.request_timeout {
            configuration = configuration.with_request_timeout(timeout);
        }
        if let Some(timeout) = client.eager_connection_timeout {
            configuration = configuration.with_eager_connection_timeout(timeout);
        }
        configuration = configuration.with_retry_strategy(retry_strategy(&client.retry));
        if client.log_requests {
            configuration = configuration.with_middleware(Arc::new(LoggingMiddleware));
        }
        configuration
    }

    /// Resolve the configured transport from the registry
    pub fn transport(&self) -> Result<Arc<dyn CacheTransport>> {
        let provider_config = TransportProviderConfig::from(&self.config.transport);
        resolve_transport(&provider_config).map_err(registry_error)
    }

    /// Resolve the transport and build a client, connecting eagerly unless
    /// the configuration disables it
    pub async fn build(&self) -> Result<CacheClient> {
        let transport = self.transport()?;
        let client = client_builder(&self.config.client)
            .configuration(self.client_configuration())
            .transport(transport)
            .build()
            .await?;

        info!(
            transport = client.transport_name(),
            preset = ?self.config.client.preset,
            "Cache client ready"
        );
        Ok(client)
    }
}

fn client_builder(client: &ClientConfig) -> nimbus_application::CacheClientBuilder {
    let builder = CacheClient::builder().default_ttl(client.default_ttl);
    match &client.default_cache_name {
        Some(name) => builder.default_cache_name(name.clone()),
        None => builder,
    }
}

/// Strategy for the `retry` section
pub fn retry_strategy(retry: &RetryConfig) -> Arc<dyn RetryStrategy> {
    match retry.strategy {
        RetryKind::FixedCount => {
            let mut strategy = FixedCountRetryStrategy::new();
            if let Some(max) = retry.max_attempts {
                strategy = strategy.with_max_attempts(max);
            }
            Arc::new(strategy)
        }
        RetryKind::ExponentialBackoff => {
            let mut strategy = ExponentialBackoffRetryStrategy::new();
            if let Some(delay) = retry.initial_delay {
                strategy = strategy.with_initial_delay(delay);
            }
            if let Some(factor) = retry.growth_factor {
                strategy = strategy.with_growth_factor(factor);
            }
            if let Some(max) = retry.max_backoff {
                strategy = strategy.with_max_backoff(max);
            }
            Arc::new(strategy)
        }
        RetryKind::Never => Arc::new(NeverRetryStrategy),
    }
}
