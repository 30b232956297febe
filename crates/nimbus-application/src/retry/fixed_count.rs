//! Fixed count retry strategy

use super::{DefaultEligibilityStrategy, EligibilityStrategy, RetryProps, RetryStrategy};
use crate::constants::DEFAULT_MAX_RETRY_ATTEMPTS;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Retries eligible failures immediately, up to `max_attempts` times
#[derive(Debug, Clone)]
pub struct FixedCountRetryStrategy {
    eligibility: Arc<dyn EligibilityStrategy>,
    max_attempts: u32,
}

impl FixedCountRetryStrategy {
    /// Strategy with the default eligibility and attempt count
    pub fn new() -> Self {
        Self {
            eligibility: Arc::new(DefaultEligibilityStrategy),
            max_attempts: DEFAULT_MAX_RETRY_ATTEMPTS,
        }
    }

    /// Set the number of retries
    pub fn with_max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    /// Replace the eligibility policy
    pub fn with_eligibility_strategy(mut self, eligibility: Arc<dyn EligibilityStrategy>) -> Self {
        self.eligibility = eligibility;
        self
    }

    /// Configured number of retries
    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }
}

impl Default for FixedCountRetryStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryStrategy for FixedCountRetryStrategy {
    fn determine_when_to_retry(&self, props: &RetryProps) -> Option<Duration> {
        if !self.eligibility.is_eligible_for_retry(props) {
            debug!(
                rpc = props.rpc_name,
                status = %props.status_code,
                "Request is not retryable"
            );
            return None;
        }

        if props.attempt_number > self.max_attempts {
            debug!(
                rpc = props.rpc_name,
                status = %props.status_code,
                attempt = props.attempt_number,
                max_attempts = self.max_attempts,
                "Exceeded max retry attempts; not retrying"
            );
            return None;
        }

        debug!(
            rpc = props.rpc_name,
            status = %props.status_code,
            attempt = props.attempt_number,
            max_attempts = self.max_attempts,
            "Retrying request"
        );
        Some(Duration::ZERO)
    }
}
