//! Retry eligibility

use super::RetryProps;
use nimbus_domain::StatusCode;

/// RPCs that are safe to repeat
const IDEMPOTENT_RPCS: &[&str] = &[
    "Get",
    "GetBatch",
    "Set",
    "SetBatch",
    "Delete",
    "KeysExist",
    "ItemGetTtl",
    "ItemGetType",
    "DictionaryGet",
    "DictionaryFetch",
    "DictionarySet",
    "DictionaryDelete",
    "DictionaryLength",
    "SetFetch",
    "SetUnion",
    "SetDifference",
    "SetContains",
    "SetLength",
    "ListRemove",
    "ListFetch",
    "ListLength",
    "SortedSetPut",
    "SortedSetFetch",
    "SortedSetGetScore",
    "SortedSetRemove",
    "SortedSetGetRank",
    "SortedSetLength",
    "SortedSetLengthByScore",
];

/// Decides whether a failed attempt may be retried at all
pub trait EligibilityStrategy: Send + Sync + std::fmt::Debug {
    fn is_eligible_for_retry(&self, props: &RetryProps) -> bool;
}

/// Retries transient server failures of idempotent RPCs
///
/// Increments, pops, pushes, conditional sets and TTL updates are never
/// retried since repeating them can change the outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultEligibilityStrategy;

impl DefaultEligibilityStrategy {
    /// Whether `rpc_name` is safe to repeat
    pub fn is_idempotent(rpc_name: &str) -> bool {
        IDEMPOTENT_RPCS.contains(&rpc_name)
    }
}

impl EligibilityStrategy for DefaultEligibilityStrategy {
    fn is_eligible_for_retry(&self, props: &RetryProps) -> bool {
        matches!(
            props.status_code,
            StatusCode::Internal | StatusCode::Unavailable
        ) && Self::is_idempotent(props.rpc_name)
    }
}
