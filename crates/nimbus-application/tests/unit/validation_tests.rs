//! Tests for argument validation helpers

use nimbus_application::requests::validation::*;
use nimbus_domain::{CollectionTtl, ErrorCode, Value};
use std::time::Duration;

#[test]
fn test_blank_names_are_rejected() {
    for name in ["", "   ", "\t"] {
        let err = validate_cache_name(name).unwrap_err();
        assert_eq!(err.code(), ErrorCode::InvalidArgument);
        assert!(err.message().contains("Cache name cannot be empty"));
    }
    assert!(validate_cache_name("cache").is_ok());

    let err = prepare_name("", "List name").unwrap_err();
    assert!(err.message().contains("List name cannot be empty"));
}

#[test]
fn test_empty_keys_and_values() {
    assert!(prepare_key(&Value::from("")).is_err());
    assert!(prepare_value(&Value::from("")).is_err());
    assert!(prepare_field(&Value::from("")).is_err());
    assert_eq!(prepare_key(&Value::from("k")).unwrap(), b"k".to_vec());

    assert!(prepare_keys(&[]).is_err());
    assert!(prepare_keys(&[Value::from("a"), Value::from("")]).is_err());
}

#[test]
fn test_ttl_resolution() {
    let default_ttl = Duration::from_secs(60);
    assert_eq!(prepare_ttl(None, default_ttl).unwrap(), 60_000);
    assert_eq!(
        prepare_ttl(Some(Duration::from_millis(1500)), default_ttl).unwrap(),
        1500
    );

    let err = prepare_ttl(Some(Duration::ZERO), default_ttl).unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
    // Sub-millisecond TTLs round down to zero on the wire
    assert!(prepare_ttl(Some(Duration::from_micros(500)), default_ttl).is_err());

    assert!(prepare_update_ttl(Duration::ZERO).is_err());
    assert_eq!(prepare_update_ttl(Duration::from_secs(2)).unwrap(), 2000);
}

#[test]
fn test_collection_ttl_resolution() {
    let default_ttl = Duration::from_secs(60);

    let wire = prepare_collection_ttl(&CollectionTtl::from_cache_ttl(), default_ttl).unwrap();
    assert_eq!(wire.ttl_milliseconds, 60_000);
    assert!(wire.refresh_ttl);

    let wire = prepare_collection_ttl(
        &CollectionTtl::of(Duration::from_secs(5)).with_no_refresh_ttl_on_updates(),
        default_ttl,
    )
    .unwrap();
    assert_eq!(wire.ttl_milliseconds, 5000);
    assert!(!wire.refresh_ttl);

    let wire = prepare_collection_ttl(&CollectionTtl::refresh_ttl_if_provided(None), default_ttl)
        .unwrap();
    assert_eq!(wire.ttl_milliseconds, 60_000);
    assert!(!wire.refresh_ttl);

    assert!(prepare_collection_ttl(&CollectionTtl::of(Duration::ZERO), default_ttl).is_err());
}

#[test]
fn test_amounts() {
    assert!(validate_amount_i64(0).is_err());
    assert!(validate_amount_i64(-3).is_ok());
    assert!(validate_amount_f64(0.0).is_err());
    assert!(validate_amount_f64(f64::NAN).is_err());
    assert!(validate_amount_f64(f64::INFINITY).is_err());
    assert!(validate_amount_f64(0.25).is_ok());
}

#[test]
fn test_index_ranges() {
    assert!(validate_index_range(None, None, "index").is_ok());
    assert!(validate_index_range(Some(1), Some(3), "index").is_ok());
    assert!(validate_index_range(Some(-3), Some(-1), "index").is_ok());
    // Mixed signs depend on the length and are resolved by the service
    assert!(validate_index_range(Some(2), Some(-1), "index").is_ok());

    let err = validate_index_range(Some(3), Some(3), "rank").unwrap_err();
    assert!(err.message().contains("start rank must be less than end rank"));
    assert!(validate_index_range(Some(-1), Some(-2), "index").is_err());
}

#[test]
fn test_score_ranges() {
    assert!(validate_score_range(Some(1.0), Some(1.0)).is_ok());
    assert!(validate_score_range(None, Some(-5.0)).is_ok());
    assert!(validate_score_range(Some(2.0), Some(1.0)).is_err());
}
