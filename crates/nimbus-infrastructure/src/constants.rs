//! Infrastructure layer constants

// ============================================================================
// CONFIGURATION
// ============================================================================

/// Prefix of configuration environment variables
pub const CONFIG_ENV_PREFIX: &str = "NIMBUS";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

/// Configuration file looked up when no path is given
pub const DEFAULT_CONFIG_FILENAME: &str = "nimbus.toml";

/// Directory holding the configuration file under config and home dirs
pub const DEFAULT_CONFIG_DIR: &str = "nimbus";

/// Default TTL applied to writes, in seconds
pub const DEFAULT_ITEM_TTL_SECS: u64 = 60;

/// Transport used when none is configured
pub const DEFAULT_TRANSPORT_PROVIDER: &str = "local";

// ============================================================================
// LOGGING
// ============================================================================

/// Environment variable holding an `EnvFilter` directive
pub const LOG_ENV_VAR: &str = "NIMBUS_LOG";

/// Log level used when nothing else is configured
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// File name prefix of rolling log files
pub const DEFAULT_LOG_FILE_PREFIX: &str = "nimbus";
