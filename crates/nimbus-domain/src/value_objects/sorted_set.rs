//! Sorted set element and ordering

use super::value::Value;
use serde::{Deserialize, Serialize};

/// A sorted set member with its score
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortedSetElement {
    /// Member value
    pub value: Value,
    /// Score used for ordering
    pub score: f64,
}

impl SortedSetElement {
    /// Create an element
    pub fn new<V: Into<Value>>(value: V, score: f64) -> Self {
        Self {
            value: value.into(),
            score,
        }
    }
}

/// Order in which sorted set elements are returned
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortedSetOrder {
    /// Lowest score first
    #[default]
    Ascending,
    /// Highest score first
    Descending,
}
