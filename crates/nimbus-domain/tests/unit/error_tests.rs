//! Unit tests for domain error types

use nimbus_domain::{Error, ErrorCode, Status, StatusCode};

#[test]
fn test_invalid_argument_error() {
    let error = Error::invalid_argument("key cannot be empty");
    match &error {
        Error::InvalidArgument { message, details } => {
            assert_eq!(message, "key cannot be empty");
            assert!(details.is_none());
        }
        _ => panic!("Expected InvalidArgument error"),
    }
    assert_eq!(error.code(), ErrorCode::InvalidArgument);
    assert_eq!(error.to_string(), "InvalidArgumentError: key cannot be empty");
}

#[test]
fn test_connection_error_with_source() {
    let io = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
    let error = Error::connection_with_source("could not connect", io);
    assert_eq!(error.code(), ErrorCode::Connection);
    assert_eq!(error.message(), "could not connect");
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn test_configuration_error() {
    let error = Error::configuration("request timeout must be greater than zero");
    assert_eq!(error.code(), ErrorCode::Configuration);
    assert!(error.to_string().starts_with("ConfigurationError: "));
}

#[test]
fn test_with_code_keeps_status() {
    let status = Status::new(StatusCode::NotFound, "no such cache");
    let error = Error::with_code(ErrorCode::NotFound, "missing", Some(status.clone()));
    assert_eq!(error.code(), ErrorCode::NotFound);
    assert_eq!(error.details(), Some(&status));
}

#[test]
fn test_with_code_drops_status_for_local_codes() {
    let status = Status::new(StatusCode::Internal, "boom");
    let error = Error::with_code(ErrorCode::ClientSdk, "boom", Some(status));
    assert_eq!(error.code(), ErrorCode::ClientSdk);
    assert!(error.details().is_none());
}

#[test]
fn test_error_code_strings() {
    assert_eq!(ErrorCode::InvalidArgument.as_str(), "InvalidArgumentError");
    assert_eq!(ErrorCode::NotFound.to_string(), "NotFoundError");
    assert_eq!(ErrorCode::PermissionDenied.as_str(), "PermissionError");
    assert_eq!(ErrorCode::ServerUnavailable.as_str(), "ServerUnavailable");
    assert_eq!(ErrorCode::LimitExceeded.as_str(), "LimitExceededError");
}
