//! Tests for the bundled middleware

use nimbus_application::constants::REQUEST_ID_HEADER;
use nimbus_application::middleware::*;
use nimbus_domain::wire::DataResponse;
use nimbus_domain::{RequestMetadata, Status, StatusCode};

#[test]
fn test_request_info_ids_are_unique() {
    let a = RequestInfo::new("Get", "cache");
    let b = RequestInfo::new("Get", "cache");
    assert_ne!(a.request_id, b.request_id);
    assert_eq!(a.rpc_name, "Get");
    assert_eq!(a.cache_name, "cache");
}

#[test]
fn test_logging_middleware_stamps_request_id() {
    let info = RequestInfo::new("Set", "cache");
    let mut metadata = RequestMetadata::for_cache("cache");

    LoggingMiddleware.on_request(&info, &mut metadata);

    let expected = info.request_id.to_string();
    assert_eq!(metadata.get(REQUEST_ID_HEADER), Some(expected.as_str()));
    assert_eq!(metadata.cache_name(), Some("cache"));

    LoggingMiddleware.on_response(&info, &Ok(DataResponse::Set));
    LoggingMiddleware.on_response(&info, &Err(Status::new(StatusCode::Internal, "boom")));
}

#[test]
fn test_in_flight_counts() {
    let middleware = InFlightRequestCountMiddleware::new();
    let first = RequestInfo::new("Get", "cache");
    let second = RequestInfo::new("Get", "cache");
    let mut metadata = RequestMetadata::default();

    middleware.on_request(&first, &mut metadata);
    middleware.on_request(&second, &mut metadata);
    assert_eq!(middleware.in_flight(), 2);
    assert_eq!(middleware.total(), 2);

    middleware.on_response(&first, &Ok(DataResponse::Get(None)));
    assert_eq!(middleware.in_flight(), 1);

    middleware.on_response(&second, &Err(Status::new(StatusCode::Unavailable, "")));
    assert_eq!(middleware.in_flight(), 0);
    assert_eq!(middleware.total(), 2);
}
