//! Client configuration types

use super::duration;
use crate::constants::DEFAULT_ITEM_TTL_SECS;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Named starting point for client timeouts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConfigPreset {
    /// Development machine talking to a remote region
    #[default]
    Laptop,
    /// Server in the same region as the cache service
    InRegion,
    /// Short-lived function; connects lazily
    Lambda,
}

/// Retry strategy selection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetryKind {
    #[default]
    FixedCount,
    ExponentialBackoff,
    Never,
}

/// Retry settings; unset fields keep the strategy's defaults
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryConfig {
    /// Which strategy to use
    pub strategy: RetryKind,

    /// Retries allowed by `fixed_count`
    pub max_attempts: Option<u32>,

    /// First backoff delay for `exponential_backoff`
    #[serde(with = "duration::option", skip_serializing_if = "Option::is_none")]
    pub initial_delay: Option<Duration>,

    /// Backoff multiplier for `exponential_backoff`
    pub growth_factor: Option<f64>,

    /// Backoff ceiling for `exponential_backoff`
    #[serde(with = "duration::option", skip_serializing_if = "Option::is_none")]
    pub max_backoff: Option<Duration>,
}

/// Client configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Timeout preset
    pub preset: ConfigPreset,

    /// Overrides the preset's request timeout
    #[serde(with = "duration::option", skip_serializing_if = "Option::is_none")]
    pub request_timeout: Option<Duration>,

    /// Overrides the preset's eager connection timeout; `0s` connects lazily
    #[serde(with = "duration::option", skip_serializing_if = "Option::is_none")]
    pub eager_connection_timeout: Option<Duration>,

    /// TTL applied to writes that do not carry one
    #[serde(with = "duration")]
    pub default_ttl: Duration,

    /// Cache used when a request names none
    pub default_cache_name: Option<String>,

    /// Log every request and response at debug level
    pub log_requests: bool,

    /// Retry settings
    pub retry: RetryConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            preset: ConfigPreset::default(),
            request_timeout: None,
            eager_connection_timeout: None,
            default_ttl: Duration::from_secs(DEFAULT_ITEM_TTL_SECS),
            default_cache_name: None,
            log_requests: false,
            retry: RetryConfig::default(),
        }
    }
}
