//! Dictionary responses

use crate::value_objects::Value;
use std::collections::HashMap;

/// Result of `dictionary_set_fields` and `dictionary_set_field`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionarySetFieldsResponse;

/// Result of `dictionary_remove_fields` and `dictionary_remove_field`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryRemoveFieldsResponse;

/// Result of `dictionary_get_field`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryGetFieldResponse {
    Hit { field: Value, value: Value },
    Miss { field: Value },
}

impl DictionaryGetFieldResponse {
    /// The value on a hit
    pub fn value(&self) -> Option<&Value> {
        match self {
            Self::Hit { value, .. } => Some(value),
            Self::Miss { .. } => None,
        }
    }
}

/// Result of `dictionary_get_fields`
///
/// A hit means the dictionary exists; each requested field then carries its
/// own hit or miss, in request order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryGetFieldsResponse {
    Hit {
        responses: Vec<DictionaryGetFieldResponse>,
    },
    Miss,
}

impl DictionaryGetFieldsResponse {
    /// Found fields keyed by string, replacing invalid UTF-8
    pub fn value_map(&self) -> HashMap<String, String> {
        match self {
            Self::Hit { responses } => responses
                .iter()
                .filter_map(|r| match r {
                    DictionaryGetFieldResponse::Hit { field, value } => {
                        Some((field.to_string_lossy(), value.to_string_lossy()))
                    }
                    DictionaryGetFieldResponse::Miss { .. } => None,
                })
                .collect(),
            Self::Miss => HashMap::new(),
        }
    }
}

/// Result of `dictionary_fetch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DictionaryFetchResponse {
    Hit { items: Vec<(Value, Value)> },
    Miss,
}

impl DictionaryFetchResponse {
    /// Items keyed by string on a hit, replacing invalid UTF-8
    pub fn value_map(&self) -> Option<HashMap<String, String>> {
        match self {
            Self::Hit { items } => Some(
                items
                    .iter()
                    .map(|(f, v)| (f.to_string_lossy(), v.to_string_lossy()))
                    .collect(),
            ),
            Self::Miss => None,
        }
    }
}

/// Result of `dictionary_increment`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DictionaryIncrementResponse {
    /// Field value after the increment
    pub value: i64,
}

/// Result of `dictionary_length`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DictionaryLengthResponse {
    Hit { length: u32 },
    Miss,
}
