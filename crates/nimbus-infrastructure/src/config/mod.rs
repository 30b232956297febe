//! Configuration
//!
//! Typed configuration for building clients, loaded in layers:
//!
//! 1. built-in defaults
//! 2. a TOML file (`nimbus.toml`)
//! 3. `NIMBUS_*` environment variables, `__` separating nested keys
//!    (e.g. `NIMBUS_CLIENT__REQUEST_TIMEOUT=2s`)
//!
//! Durations are written in humantime form: `"5s"`, `"1100ms"`, `"1m 30s"`.

/// Configuration loader
pub mod loader;
/// Configuration data types
pub mod types;

pub use loader::ConfigLoader;
pub use types::*;
