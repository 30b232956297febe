//! Sorted set responses

use crate::value_objects::{SortedSetElement, Value};

/// Result of `sorted_set_put_elements` and `sorted_set_put_element`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortedSetPutElementsResponse;

/// Result of `sorted_set_remove_elements` and `sorted_set_remove_element`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortedSetRemoveElementsResponse;

/// Result of `sorted_set_fetch_by_rank` and `sorted_set_fetch_by_score`
#[derive(Debug, Clone, PartialEq)]
pub enum SortedSetFetchResponse {
    Hit { elements: Vec<SortedSetElement> },
    Miss,
}

impl SortedSetFetchResponse {
    /// Elements on a hit
    pub fn elements(&self) -> Option<&[SortedSetElement]> {
        match self {
            Self::Hit { elements } => Some(elements),
            Self::Miss => None,
        }
    }
}

/// Result of `sorted_set_get_score`
#[derive(Debug, Clone, PartialEq)]
pub enum SortedSetGetScoreResponse {
    Hit { value: Value, score: f64 },
    Miss { value: Value },
}

impl SortedSetGetScoreResponse {
    /// Score on a hit
    pub fn score(&self) -> Option<f64> {
        match self {
            Self::Hit { score, .. } => Some(*score),
            Self::Miss { .. } => None,
        }
    }
}

/// Result of `sorted_set_get_scores`
///
/// A hit means the sorted set exists; each requested value then carries its
/// own hit or miss, in request order.
#[derive(Debug, Clone, PartialEq)]
pub enum SortedSetGetScoresResponse {
    Hit {
        responses: Vec<SortedSetGetScoreResponse>,
    },
    Miss,
}

/// Result of `sorted_set_get_rank`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortedSetGetRankResponse {
    Hit { rank: u64 },
    Miss,
}

/// Result of `sorted_set_length`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortedSetLengthResponse {
    Hit { length: u32 },
    Miss,
}

/// Result of `sorted_set_length_by_score`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortedSetLengthByScoreResponse {
    Hit { length: u32 },
    Miss,
}

/// Result of `sorted_set_increment_score`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortedSetIncrementScoreResponse {
    /// Score after the increment
    pub score: f64,
}
