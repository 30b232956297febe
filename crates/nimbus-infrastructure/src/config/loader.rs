//! Configuration loader
//!
//! Merges built-in defaults, a TOML file and prefixed environment variables
//! into an [`AppConfig`], then validates the result.

use crate::config::AppConfig;
use crate::constants::*;
use crate::error_ext::ErrorContext;
use crate::logging::{log_config_loaded, parse_log_level};
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use nimbus_application::requests::validation::{ttl_millis, validate_cache_name};
use nimbus_domain::{Error, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Configuration loader service
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    /// Configuration file path
    config_path: Option<PathBuf>,

    /// Environment prefix
    env_prefix: String,
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigLoader {
    /// Create a loader that searches the default locations
    pub fn new() -> Self {
        Self {
            config_path: None,
            env_prefix: CONFIG_ENV_PREFIX.to_string(),
        }
    }

    /// Set the configuration file path
    pub fn with_config_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.config_path = Some(path.as_ref().to_path_buf());
        self
    }

    /// Set the environment variable prefix
    pub fn with_env_prefix<S: Into<String>>(mut self, prefix: S) -> Self {
        self.env_prefix = prefix.into();
        self
    }

    /// Load configuration from all sources
    ///
    /// Later sources override earlier ones:
    /// 1. `AppConfig::default()`
    /// 2. the TOML file, if it exists
    /// 3. environment variables, e.g. `NIMBUS_CLIENT__DEFAULT_TTL=5m`
    pub fn load(&self) -> Result<AppConfig> {
        let mut figment = Figment::new().merge(Serialized::defaults(AppConfig::default()));

        let path = self
            .config_path
            .clone()
            .or_else(Self::find_default_config_path);
        if let Some(path) = path {
            if path.exists() {
                figment = figment.merge(Toml::file(&path));
                log_config_loaded(&path, true);
            } else {
                log_config_loaded(&path, false);
            }
        }

        figment = figment.merge(
            Env::prefixed(&format!("{}_", self.env_prefix)).split(CONFIG_ENV_SEPARATOR),
        );

        let config: AppConfig = figment
            .extract()
            .config_context("Failed to extract configuration")?;

        validate_app_config(&config)?;
        Ok(config)
    }

    /// Write the configuration as pretty TOML
    pub fn save_to_file<P: AsRef<Path>>(&self, config: &AppConfig, path: P) -> Result<()> {
        let toml_string =
            toml::to_string_pretty(config).config_context("Failed to serialize config to TOML")?;

        std::fs::write(path.as_ref(), toml_string)
            .config_context(format!("Failed to write {}", path.as_ref().display()))?;

        Ok(())
    }

    /// Get the configured file path
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// First existing file among the conventional locations
    fn find_default_config_path() -> Option<PathBuf> {
        let current_dir = env::current_dir().ok()?;

        let candidates = [
            Some(current_dir.join(DEFAULT_CONFIG_FILENAME)),
            Some(
                current_dir
                    .join(DEFAULT_CONFIG_DIR)
                    .join(DEFAULT_CONFIG_FILENAME),
            ),
            dirs::config_dir().map(|d| d.join(DEFAULT_CONFIG_DIR).join(DEFAULT_CONFIG_FILENAME)),
            dirs::home_dir().map(|d| {
                d.join(format!(".{DEFAULT_CONFIG_DIR}"))
                    .join(DEFAULT_CONFIG_FILENAME)
            }),
        ];

        candidates.into_iter().flatten().find(|path| path.exists())
    }
}

/// Validate every section of the configuration
pub fn validate_app_config(config: &AppConfig) -> Result<()> {
    validate_client_config(config)?;
    validate_transport_config(config)?;
    parse_log_level(&config.logging.level)?;
    Ok(())
}

fn validate_client_config(config: &AppConfig) -> Result<()> {
    let client = &config.client;
    if ttl_millis(client.default_ttl) == 0 {
        return Err(Error::configuration(
            "Default TTL cannot be 0 or below one millisecond",
        ));
    }
    if client.request_timeout.is_some_and(|t| t.is_zero()) {
        return Err(Error::configuration("Request timeout cannot be 0"));
    }
    if let Some(name) = &client.default_cache_name {
        validate_cache_name(name).map_err(|e| {
            Error::configuration(format!("Invalid default cache name: {}", e.message()))
        })?;
    }
    if client.retry.growth_factor.is_some_and(|g| !g.is_finite() || g <= 0.0) {
        return Err(Error::configuration(
            "Retry growth factor must be a positive number",
        ));
    }
    Ok(())
}

fn validate_transport_config(config: &AppConfig) -> Result<()> {
    if config.transport.provider.trim().is_empty() {
        return Err(Error::configuration("Transport provider cannot be empty"));
    }
    if config.transport.caches.iter().any(|c| c.trim().is_empty()) {
        return Err(Error::configuration("Transport cache names cannot be empty"));
    }
    Ok(())
}
