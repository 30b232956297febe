//! # Nimbus Domain
//!
//! Core types shared by every layer of the Nimbus cache client: the error
//! model, value objects, the wire messages exchanged with the service, the
//! transport port and the typed responses returned to callers.
//!
//! This crate has no runtime behavior of its own beyond status
//! normalization; it depends only on `serde`, `thiserror` and `async-trait`.

/// Domain-level constants
pub mod constants;
/// Error types and codes
pub mod error;
/// Port interfaces implemented by outer layers
pub mod ports;
/// Typed operation results
pub mod responses;
/// Immutable value types
pub mod value_objects;
/// Messages exchanged with the cache service
pub mod wire;

pub use error::{Error, ErrorCode, Result};
pub use ports::CacheTransport;
pub use value_objects::{CacheInfo, CollectionTtl, ItemType, SortedSetElement, SortedSetOrder, Value};
pub use wire::{RequestMetadata, Status, StatusCode};
