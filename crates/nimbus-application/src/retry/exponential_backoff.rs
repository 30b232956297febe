//! Exponential backoff with jitter
//!
//! The base delay for attempt `n` (0-based) is
//! `initial_delay * growth_factor^n`, capped at `max_backoff`. The actual
//! delay is drawn uniformly from `[base, 3 * base / growth_factor)`, so it
//! never drops below the base and stays within three times the previous
//! base. The strategy never gives up on its own; the request timeout bounds
//! the total time spent retrying.

use super::{DefaultEligibilityStrategy, EligibilityStrategy, RetryProps, RetryStrategy};
use crate::constants::{
    DEFAULT_GROWTH_FACTOR, DEFAULT_INITIAL_DELAY_MILLIS, DEFAULT_MAX_BACKOFF_MILLIS,
};
use rand::Rng;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Retries eligible failures with jittered, exponentially growing delays
#[derive(Debug, Clone)]
pub struct ExponentialBackoffRetryStrategy {
    eligibility: Arc<dyn EligibilityStrategy>,
    initial_delay_millis: f64,
    growth_factor: f64,
    max_backoff_millis: f64,
}

impl ExponentialBackoffRetryStrategy {
    /// Strategy with the default delays and eligibility
    pub fn new() -> Self {
        Self {
            eligibility: Arc::new(DefaultEligibilityStrategy),
            initial_delay_millis: DEFAULT_INITIAL_DELAY_MILLIS,
            growth_factor: DEFAULT_GROWTH_FACTOR,
            max_backoff_millis: DEFAULT_MAX_BACKOFF_MILLIS,
        }
    }

    /// Set the first delay
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay_millis = delay.as_secs_f64() * 1000.0;
        self
    }

    /// Set the growth factor; values below 1 are treated as 1
    pub fn with_growth_factor(mut self, growth_factor: f64) -> Self {
        self.growth_factor = growth_factor.max(1.0);
        self
    }

    /// Set the delay ceiling
    pub fn with_max_backoff(mut self, max_backoff: Duration) -> Self {
        self.max_backoff_millis = max_backoff.as_secs_f64() * 1000.0;
        self
    }

    /// Replace the eligibility policy
    pub fn with_eligibility_strategy(mut self, eligibility: Arc<dyn EligibilityStrategy>) -> Self {
        self.eligibility = eligibility;
        self
    }

    /// Base delay in milliseconds for a 0-based attempt
    pub fn base_delay_millis(&self, attempt: u32) -> f64 {
        let exponent = i32::try_from(attempt).unwrap_or(i32::MAX);
        let base = self.initial_delay_millis * self.growth_factor.powi(exponent);
        base.min(self.max_backoff_millis)
    }

    /// Jitter bounds in milliseconds for a 0-based attempt
    pub fn delay_range_millis(&self, attempt: u32) -> (f64, f64) {
        let base = self.base_delay_millis(attempt);
        let max = (base / self.growth_factor) * 3.0;
        (base, max.max(base))
    }
}

impl Default for ExponentialBackoffRetryStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl RetryStrategy for ExponentialBackoffRetryStrategy {
    fn determine_when_to_retry(&self, props: &RetryProps) -> Option<Duration> {
        if !self.eligibility.is_eligible_for_retry(props) {
            debug!(
                rpc = props.rpc_name,
                status = %props.status_code,
                "Request is not eligible for retry"
            );
            return None;
        }

        let attempt = props.attempt_number.saturating_sub(1);
        let (min, max) = self.delay_range_millis(attempt);
        let jittered = if max > min {
            rand::rng().random_range(min..max)
        } else {
            min
        };

        debug!(
            rpc = props.rpc_name,
            attempt,
            base_delay_ms = min,
            max_delay_ms = max,
            delay_ms = jittered,
            "Backing off before retry"
        );
        Some(Duration::from_secs_f64(jittered / 1000.0))
    }
}
