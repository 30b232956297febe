//! List responses

use crate::value_objects::Value;

/// Result of `list_push_front`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPushFrontResponse {
    /// Length of the list after the push
    pub list_length: u32,
}

/// Result of `list_push_back`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListPushBackResponse {
    /// Length of the list after the push
    pub list_length: u32,
}

/// Result of `list_concatenate_front`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConcatenateFrontResponse {
    /// Length of the list after the concatenation
    pub list_length: u32,
}

/// Result of `list_concatenate_back`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListConcatenateBackResponse {
    /// Length of the list after the concatenation
    pub list_length: u32,
}

/// Result of `list_pop_front`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPopFrontResponse {
    Hit { value: Value },
    Miss,
}

/// Result of `list_pop_back`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListPopBackResponse {
    Hit { value: Value },
    Miss,
}

/// Result of `list_fetch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListFetchResponse {
    Hit { values: Vec<Value> },
    Miss,
}

impl ListFetchResponse {
    /// Values on a hit
    pub fn values(&self) -> Option<&[Value]> {
        match self {
            Self::Hit { values } => Some(values),
            Self::Miss => None,
        }
    }

    /// Values as strings on a hit, replacing invalid UTF-8
    pub fn value_strings(&self) -> Option<Vec<String>> {
        self.values()
            .map(|v| v.iter().map(Value::to_string_lossy).collect())
    }
}

/// Result of `list_length`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListLengthResponse {
    Hit { length: u32 },
    Miss,
}

/// Result of `list_remove_value`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListRemoveValueResponse;
