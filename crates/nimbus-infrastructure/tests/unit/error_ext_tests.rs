//! Tests for error context helpers

use nimbus_domain::ErrorCode;
use nimbus_infrastructure::ErrorContext;
use nimbus_infrastructure::error_ext::registry_error;
use std::error::Error as _;
use std::io;

fn io_failure() -> Result<(), io::Error> {
    Err(io::Error::new(io::ErrorKind::NotFound, "no such file"))
}

#[test]
fn test_config_context_keeps_source() {
    let err = io_failure().config_context("Loading nimbus.toml").unwrap_err();
    assert_eq!(err.code(), ErrorCode::Configuration);
    assert_eq!(err.message(), "Loading nimbus.toml: no such file");
    assert!(err.source().is_some());
}

#[test]
fn test_config_context_passes_success_through() {
    let ok: Result<u8, io::Error> = Ok(7);
    assert_eq!(ok.config_context("unused").unwrap(), 7);
}

#[test]
fn test_registry_error_is_configuration() {
    let err = registry_error("Unknown transport provider 'x'".to_string());
    assert_eq!(err.code(), ErrorCode::Configuration);
    assert_eq!(err.message(), "Unknown transport provider 'x'");
}
