//! Tests for retry strategies and eligibility

use nimbus_application::retry::*;
use nimbus_domain::StatusCode;
use std::sync::Arc;
use std::time::Duration;

fn props(status_code: StatusCode, rpc_name: &'static str, attempt_number: u32) -> RetryProps {
    RetryProps {
        status_code,
        rpc_name,
        attempt_number,
    }
}

/// Eligibility that accepts every failure
#[derive(Debug)]
struct AlwaysEligible;

impl EligibilityStrategy for AlwaysEligible {
    fn is_eligible_for_retry(&self, _props: &RetryProps) -> bool {
        true
    }
}

#[test]
fn test_default_eligibility() {
    let eligibility = DefaultEligibilityStrategy;

    assert!(eligibility.is_eligible_for_retry(&props(StatusCode::Unavailable, "Get", 1)));
    assert!(eligibility.is_eligible_for_retry(&props(StatusCode::Internal, "SetBatch", 1)));

    // Non-idempotent RPCs are never retried
    for rpc in ["Increment", "SetIf", "ListPushFront", "SetPop", "UpdateTtl"] {
        assert!(!eligibility.is_eligible_for_retry(&props(StatusCode::Unavailable, rpc, 1)));
    }

    for code in [
        StatusCode::InvalidArgument,
        StatusCode::NotFound,
        StatusCode::DeadlineExceeded,
        StatusCode::PermissionDenied,
    ] {
        assert!(!eligibility.is_eligible_for_retry(&props(code, "Get", 1)));
    }
}

#[test]
fn test_fixed_count_retries_immediately_up_to_max() {
    let strategy = FixedCountRetryStrategy::new().with_max_attempts(2);
    assert_eq!(strategy.max_attempts(), 2);

    assert_eq!(
        strategy.determine_when_to_retry(&props(StatusCode::Unavailable, "Get", 1)),
        Some(Duration::ZERO)
    );
    assert_eq!(
        strategy.determine_when_to_retry(&props(StatusCode::Unavailable, "Get", 2)),
        Some(Duration::ZERO)
    );
    assert_eq!(
        strategy.determine_when_to_retry(&props(StatusCode::Unavailable, "Get", 3)),
        None
    );
    assert_eq!(
        strategy.determine_when_to_retry(&props(StatusCode::NotFound, "Get", 1)),
        None
    );
}

#[test]
fn test_fixed_count_custom_eligibility() {
    let strategy = FixedCountRetryStrategy::default()
        .with_eligibility_strategy(Arc::new(AlwaysEligible));
    assert!(
        strategy
            .determine_when_to_retry(&props(StatusCode::NotFound, "Increment", 1))
            .is_some()
    );
}

#[test]
fn test_never_retries() {
    let strategy = NeverRetryStrategy;
    assert_eq!(
        strategy.determine_when_to_retry(&props(StatusCode::Unavailable, "Get", 1)),
        None
    );
}

#[test]
fn test_exponential_base_delays() {
    let strategy = ExponentialBackoffRetryStrategy::new()
        .with_initial_delay(Duration::from_millis(10))
        .with_growth_factor(2.0)
        .with_max_backoff(Duration::from_millis(100));

    assert!((strategy.base_delay_millis(0) - 10.0).abs() < 1e-9);
    assert!((strategy.base_delay_millis(1) - 20.0).abs() < 1e-9);
    assert!((strategy.base_delay_millis(3) - 80.0).abs() < 1e-9);
    assert!((strategy.base_delay_millis(4) - 100.0).abs() < 1e-9);
    assert!((strategy.base_delay_millis(40) - 100.0).abs() < 1e-9);

    let (min, max) = strategy.delay_range_millis(1);
    assert!((min - 20.0).abs() < 1e-9);
    assert!((max - 30.0).abs() < 1e-9);
}

#[test]
fn test_exponential_jitter_stays_in_range() {
    let strategy = ExponentialBackoffRetryStrategy::new()
        .with_initial_delay(Duration::from_millis(10))
        .with_max_backoff(Duration::from_secs(1));

    for attempt_number in 1..=5 {
        let (min, max) = strategy.delay_range_millis(attempt_number - 1);
        for _ in 0..50 {
            let delay = strategy
                .determine_when_to_retry(&props(StatusCode::Unavailable, "Get", attempt_number))
                .expect("eligible failure should be retried");
            let millis = delay.as_secs_f64() * 1000.0;
            assert!(
                millis >= min - 1e-6 && millis <= max + 1e-6,
                "attempt {attempt_number}: {millis} outside [{min}, {max}]"
            );
        }
    }
}

#[test]
fn test_exponential_never_gives_up_on_eligible_failures() {
    let strategy = ExponentialBackoffRetryStrategy::default();
    assert!(
        strategy
            .determine_when_to_retry(&props(StatusCode::Internal, "Get", 1000))
            .is_some()
    );
    assert!(
        strategy
            .determine_when_to_retry(&props(StatusCode::Internal, "Increment", 1))
            .is_none()
    );
}

#[test]
fn test_growth_factor_below_one_is_clamped() {
    let strategy = ExponentialBackoffRetryStrategy::new()
        .with_initial_delay(Duration::from_millis(4))
        .with_growth_factor(0.5);
    assert!((strategy.base_delay_millis(3) - 4.0).abs() < 1e-9);
}
