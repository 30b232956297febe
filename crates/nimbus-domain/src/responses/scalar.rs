//! Scalar item responses

use crate::value_objects::{ItemType, Value};
use std::collections::HashMap;
use std::time::Duration;

/// Result of `get`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GetResponse {
    Hit { value: Value },
    Miss,
}

impl GetResponse {
    /// True on a hit
    pub fn is_hit(&self) -> bool {
        matches!(self, Self::Hit { .. })
    }

    /// The value on a hit
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Hit { value } => Some(value),
            Self::Miss => None,
        }
    }

    /// The value as a string on a hit, replacing invalid UTF-8
    pub fn value_string(&self) -> Option<String> {
        self.value().map(Value::to_string_lossy)
    }

    /// Take the value on a hit
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Hit { value } => Some(value),
            Self::Miss => None,
        }
    }
}

/// Result of `set`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetResponse;

/// Result of the conditional `set_if_*` operations
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetIfResponse {
    /// The condition held and the value was written
    Stored,
    /// The condition did not hold
    NotStored,
}

/// Result of `delete`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResponse;

/// Result of `increment`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IncrementResponse {
    /// Value after the increment
    pub value: i64,
}

/// Result of `get_batch`, one lookup per requested key in request order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBatchResponse {
    /// Requested keys paired with their lookup results
    pub results: Vec<(Value, GetResponse)>,
}

impl GetBatchResponse {
    /// Lookup result for `key`
    pub fn get(&self, key: &[u8]) -> Option<&GetResponse> {
        self.results
            .iter()
            .find(|(k, _)| k.as_bytes() == key)
            .map(|(_, r)| r)
    }

    /// Hits keyed by string, replacing invalid UTF-8
    pub fn value_map(&self) -> HashMap<String, String> {
        self.results
            .iter()
            .filter_map(|(k, r)| r.value().map(|v| (k.to_string_lossy(), v.to_string_lossy())))
            .collect()
    }
}

/// Result of `set_batch`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetBatchResponse;

/// Result of `keys_exist`, in request order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysExistResponse {
    /// Requested keys paired with whether they exist
    pub exists: Vec<(Value, bool)>,
}

impl KeysExistResponse {
    /// Existence flags in request order
    pub fn exists(&self) -> Vec<bool> {
        self.exists.iter().map(|(_, e)| *e).collect()
    }

    /// Existence flags keyed by string
    pub fn exists_map(&self) -> HashMap<String, bool> {
        self.exists
            .iter()
            .map(|(k, e)| (k.to_string_lossy(), *e))
            .collect()
    }
}

/// Result of `item_get_type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemGetTypeResponse {
    Hit { item_type: ItemType },
    Miss,
}

/// Result of `item_get_ttl`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemGetTtlResponse {
    Hit { remaining_ttl: Duration },
    Miss,
}

impl ItemGetTtlResponse {
    /// Remaining TTL on a hit
    pub fn remaining_ttl(&self) -> Option<Duration> {
        match self {
            Self::Hit { remaining_ttl } => Some(*remaining_ttl),
            Self::Miss => None,
        }
    }
}
