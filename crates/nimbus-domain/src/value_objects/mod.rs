//! Value Objects
//!
//! Immutable types exchanged between the client surface and the wire model.

/// Cache keys, values and fields
pub mod value;

/// Time-to-live policy for collections
pub mod collection_ttl;

/// Sorted set element and ordering
pub mod sorted_set;

/// Item type reported by the service
pub mod item_type;

/// Cache descriptions returned by the control plane
pub mod cache_info;

pub use cache_info::CacheInfo;
pub use collection_ttl::CollectionTtl;
pub use item_type::ItemType;
pub use sorted_set::{SortedSetElement, SortedSetOrder};
pub use value::Value;
