//! Configuration data types

/// Top-level configuration
pub mod app;
/// Client settings
pub mod client;
/// Humantime (de)serialization for durations
pub mod duration;
/// Logging settings
pub mod logging;
/// Transport settings
pub mod transport;

pub use app::AppConfig;
pub use client::{ClientConfig, ConfigPreset, RetryConfig, RetryKind};
pub use logging::LoggingConfig;
pub use transport::TransportConfig;
