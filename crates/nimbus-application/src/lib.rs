//! Application Layer - Nimbus cache client
//!
//! Turns typed requests into wire messages, drives them through a
//! [`CacheTransport`](nimbus_domain::CacheTransport) and interprets the
//! results.
//!
//! ## Request lifecycle
//!
//! 1. resolve the cache name (empty falls back to the client default)
//! 2. validate arguments and build the wire message
//! 3. run middleware `on_request` hooks
//! 4. invoke the transport under the request timeout, retrying per strategy
//! 5. run middleware `on_response` hooks in reverse order
//! 6. normalize failures into [`Error`](nimbus_domain::Error) and interpret
//!    the response
//!
//! ## Dependencies
//!
//! This crate depends only on:
//! - `nimbus-domain`: error model, wire messages and the transport port
//! - Pure Rust libraries for async, logging and registration

/// Batch helpers fanning out scalar operations
pub mod batch;
/// Cache client and its builder
pub mod client;
/// Client configuration and presets
pub mod config;
/// Application-level constants
pub mod constants;
/// Request interceptors
pub mod middleware;
/// Registries for pluggable components
pub mod ports;
/// Typed requests with validation and interpretation
pub mod requests;
/// Retry strategies
pub mod retry;

pub use client::{CacheClient, CacheClientBuilder};
pub use config::ClientConfiguration;
pub use requests::CacheRequest;
