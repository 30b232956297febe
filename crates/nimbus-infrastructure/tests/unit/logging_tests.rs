//! Tests for logging setup

use nimbus_domain::ErrorCode;
use nimbus_infrastructure::config::LoggingConfig;
use nimbus_infrastructure::logging::{init_logging, parse_log_level};
use tracing::Level;

#[test]
fn test_parse_log_level() {
    assert_eq!(parse_log_level("trace").unwrap(), Level::TRACE);
    assert_eq!(parse_log_level("DEBUG").unwrap(), Level::DEBUG);
    assert_eq!(parse_log_level("info").unwrap(), Level::INFO);
    assert_eq!(parse_log_level("warning").unwrap(), Level::WARN);
    assert_eq!(parse_log_level("error").unwrap(), Level::ERROR);

    let err = parse_log_level("verbose").unwrap_err();
    assert_eq!(err.code(), ErrorCode::Configuration);
    assert!(err.to_string().contains("Invalid log level: verbose"));
}

#[test]
fn test_init_rejects_invalid_level() {
    let config = LoggingConfig {
        level: "chatty".to_string(),
        ..LoggingConfig::default()
    };
    assert!(init_logging(&config).is_err());
}

// The only test that installs the global subscriber
#[test]
fn test_init_with_file_output_installs_once() {
    let dir = tempfile::tempdir().unwrap();
    let config = LoggingConfig {
        level: "debug".to_string(),
        json_format: true,
        file_output: Some(dir.path().join("client.log")),
    };

    init_logging(&config).unwrap();
    tracing::info!("written to the rolling file");

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().into_owned())
        .collect();
    assert!(names.iter().any(|name| name.starts_with("client")), "{names:?}");

    let err = init_logging(&LoggingConfig::default()).unwrap_err();
    assert_eq!(err.code(), ErrorCode::Configuration);
}
