//! Set responses

use crate::value_objects::Value;

/// Result of `set_add_elements` and `set_add_element`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetAddElementsResponse;

/// Result of `set_remove_elements` and `set_remove_element`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetRemoveElementsResponse;

/// Result of `set_fetch`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetFetchResponse {
    Hit { elements: Vec<Value> },
    Miss,
}

impl SetFetchResponse {
    /// Elements on a hit
    pub fn elements(&self) -> Option<&[Value]> {
        match self {
            Self::Hit { elements } => Some(elements),
            Self::Miss => None,
        }
    }

    /// Elements as strings on a hit, replacing invalid UTF-8
    pub fn value_strings(&self) -> Option<Vec<String>> {
        self.elements()
            .map(|e| e.iter().map(Value::to_string_lossy).collect())
    }
}

/// Result of `set_length`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SetLengthResponse {
    Hit { length: u32 },
    Miss,
}

/// Result of `set_contains_elements`, flags in request order
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetContainsElementsResponse {
    Hit { contains: Vec<bool> },
    Miss,
}

/// Result of `set_pop`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetPopResponse {
    Hit { elements: Vec<Value> },
    Miss,
}
