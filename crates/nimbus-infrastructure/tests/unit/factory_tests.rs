//! Tests for building clients from configuration

use nimbus_application::retry::RetryProps;
use nimbus_domain::responses::GetResponse;
use nimbus_domain::{ErrorCode, StatusCode, Value};
use nimbus_infrastructure::ClientFactory;
use nimbus_infrastructure::config::{AppConfig, ConfigPreset, RetryConfig, RetryKind};
use nimbus_infrastructure::factory::retry_strategy;
use std::time::Duration;

fn unavailable(attempt_number: u32) -> RetryProps {
    RetryProps {
        status_code: StatusCode::Unavailable,
        rpc_name: "Get",
        attempt_number,
    }
}

#[test]
fn test_presets_map_to_client_configuration() {
    let mut config = AppConfig::default();
    let laptop = ClientFactory::new(config.clone()).client_configuration();
    assert_eq!(laptop.request_timeout(), Duration::from_secs(5));
    assert_eq!(laptop.eager_connection_timeout(), Duration::from_secs(30));
    assert!(laptop.middlewares().is_empty());

    config.client.preset = ConfigPreset::InRegion;
    let in_region = ClientFactory::new(config.clone()).client_configuration();
    assert_eq!(in_region.request_timeout(), Duration::from_millis(1100));

    config.client.preset = ConfigPreset::Lambda;
    let lambda = ClientFactory::new(config).client_configuration();
    assert_eq!(lambda.request_timeout(), Duration::from_millis(1100));
    assert_eq!(lambda.eager_connection_timeout(), Duration::ZERO);
}

#[test]
fn test_overrides_and_logging_middleware() {
    let mut config = AppConfig::default();
    config.client.request_timeout = Some(Duration::from_millis(250));
    config.client.eager_connection_timeout = Some(Duration::from_secs(2));
    config.client.log_requests = true;

    let configuration = ClientFactory::new(config).client_configuration();
    assert_eq!(configuration.request_timeout(), Duration::from_millis(250));
    assert_eq!(
        configuration.eager_connection_timeout(),
        Duration::from_secs(2)
    );
    assert_eq!(configuration.middlewares().len(), 1);
}

#[test]
fn test_retry_strategy_selection() {
    let fixed = retry_strategy(&RetryConfig {
        max_attempts: Some(1),
        ..RetryConfig::default()
    });
    assert_eq!(
        fixed.determine_when_to_retry(&unavailable(1)),
        Some(Duration::ZERO)
    );
    assert_eq!(fixed.determine_when_to_retry(&unavailable(2)), None);

    let never = retry_strategy(&RetryConfig {
        strategy: RetryKind::Never,
        ..RetryConfig::default()
    });
    assert_eq!(never.determine_when_to_retry(&unavailable(1)), None);

    let backoff = retry_strategy(&RetryConfig {
        strategy: RetryKind::ExponentialBackoff,
        initial_delay: Some(Duration::from_millis(2)),
        max_backoff: Some(Duration::from_millis(4)),
        ..RetryConfig::default()
    });
    let delay = backoff
        .determine_when_to_retry(&unavailable(10))
        .expect("backoff keeps retrying");
    // base capped at 4ms, jitter up to 3 * base / growth factor
    assert!(delay >= Duration::from_millis(4), "{delay:?}");
    assert!(delay <= Duration::from_millis(6), "{delay:?}");
}

#[test]
fn test_unknown_provider_is_a_configuration_error() {
    let mut config = AppConfig::default();
    config.transport.provider = "carrier-pigeon".to_string();

    let err = ClientFactory::new(config).transport().unwrap_err();
    assert_eq!(err.code(), ErrorCode::Configuration);
    assert!(err.message().contains("carrier-pigeon"));
    assert!(err.message().contains("local"));
}

#[tokio::test]
async fn test_build_local_client_from_config() {
    let mut config = AppConfig::default();
    config.client.default_cache_name = Some("orders".to_string());
    config.client.default_ttl = Duration::from_secs(120);
    config.transport.caches = vec!["orders".to_string()];

    let factory = ClientFactory::new(config);
    assert_eq!(factory.config().client.default_ttl, Duration::from_secs(120));

    let client = factory.build().await.unwrap();
    assert_eq!(client.transport_name(), "local");
    assert_eq!(client.default_ttl(), Duration::from_secs(120));
    assert_eq!(client.default_cache_name(), Some("orders"));

    client.set("", "order-1", "shipped").await.unwrap();
    assert_eq!(
        client.get("orders", "order-1").await.unwrap(),
        GetResponse::Hit {
            value: Value::from("shipped")
        }
    );
}

#[tokio::test]
async fn test_build_rejects_invalid_client_settings() {
    let mut config = AppConfig::default();
    config.client.default_ttl = Duration::ZERO;

    let err = ClientFactory::new(config).build().await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
}
