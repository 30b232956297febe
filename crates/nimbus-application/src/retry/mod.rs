//! Retry Strategies
//!
//! A strategy looks at a failed attempt and decides whether to try again
//! and after what delay. Eligibility (which statuses and which RPCs may be
//! retried at all) is a separate, swappable policy.
//!
//! | Strategy | Delay | Stops after |
//! |----------|-------|-------------|
//! | [`FixedCountRetryStrategy`] | none | `max_attempts` retries |
//! | [`ExponentialBackoffRetryStrategy`] | jittered, growing | request timeout |
//! | [`NeverRetryStrategy`] | - | first failure |

/// Which failures may be retried
pub mod eligibility;
/// Jittered exponential backoff
pub mod exponential_backoff;
/// Immediate retries up to a fixed count
pub mod fixed_count;
/// No retries
pub mod never;

pub use eligibility::{DefaultEligibilityStrategy, EligibilityStrategy};
pub use exponential_backoff::ExponentialBackoffRetryStrategy;
pub use fixed_count::FixedCountRetryStrategy;
pub use never::NeverRetryStrategy;

use nimbus_domain::StatusCode;
use std::time::Duration;

/// Facts about a failed attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryProps {
    /// Status the attempt failed with
    pub status_code: StatusCode,
    /// RPC method of the request
    pub rpc_name: &'static str,
    /// Attempts made so far, starting at 1
    pub attempt_number: u32,
}

/// Decides whether and when a failed request is retried
pub trait RetryStrategy: Send + Sync + std::fmt::Debug {
    /// Delay before the next attempt, or `None` to give up
    fn determine_when_to_retry(&self, props: &RetryProps) -> Option<Duration>;
}
