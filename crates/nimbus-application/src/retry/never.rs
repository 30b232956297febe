//! Strategy that never retries

use super::{RetryProps, RetryStrategy};
use std::time::Duration;

/// Surfaces the first failure unchanged
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverRetryStrategy;

impl RetryStrategy for NeverRetryStrategy {
    fn determine_when_to_retry(&self, _props: &RetryProps) -> Option<Duration> {
        None
    }
}
