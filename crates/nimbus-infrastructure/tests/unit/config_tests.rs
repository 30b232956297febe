//! Tests for configuration loading

use figment::Jail;
use nimbus_domain::ErrorCode;
use nimbus_infrastructure::config::{
    AppConfig, ClientConfig, ConfigLoader, ConfigPreset, RetryKind,
};
use std::time::Duration;

fn load_in_jail(loader: &ConfigLoader) -> figment::error::Result<AppConfig> {
    loader.load().map_err(|e| e.to_string().into())
}

#[test]
fn test_default_config() {
    let config = AppConfig::default();
    assert_eq!(config.client.preset, ConfigPreset::Laptop);
    assert_eq!(config.client.default_ttl, Duration::from_secs(60));
    assert_eq!(config.client.request_timeout, None);
    assert_eq!(config.client.retry.strategy, RetryKind::FixedCount);
    assert!(!config.client.log_requests);
    assert_eq!(config.transport.provider, "local");
    assert!(config.transport.caches.is_empty());
    assert_eq!(config.logging.level, "info");
    assert!(!config.logging.json_format);
}

#[test]
fn test_load_without_file_uses_defaults() {
    Jail::expect_with(|_jail| {
        let config = load_in_jail(&ConfigLoader::new())?;
        assert_eq!(config, AppConfig::default());
        Ok(())
    });
}

#[test]
fn test_missing_explicit_file_falls_back_to_defaults() {
    Jail::expect_with(|_jail| {
        let loader = ConfigLoader::new().with_config_path("absent.toml");
        let config = load_in_jail(&loader)?;
        assert_eq!(config.client.default_ttl, Duration::from_secs(60));
        Ok(())
    });
}

#[test]
fn test_load_from_toml_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "custom.toml",
            r#"
            [client]
            preset = "in_region"
            request_timeout = "2s"
            default_ttl = "10m"
            default_cache_name = "orders"

            [client.retry]
            strategy = "exponential_backoff"
            initial_delay = "1ms"
            growth_factor = 3.0
            max_backoff = "50ms"

            [transport]
            provider = "local"
            caches = ["orders", "sessions"]

            [logging]
            level = "debug"
            json_format = true
            "#,
        )?;

        let loader = ConfigLoader::new().with_config_path("custom.toml");
        let config = load_in_jail(&loader)?;

        assert_eq!(config.client.preset, ConfigPreset::InRegion);
        assert_eq!(config.client.request_timeout, Some(Duration::from_secs(2)));
        assert_eq!(config.client.default_ttl, Duration::from_secs(600));
        assert_eq!(config.client.default_cache_name.as_deref(), Some("orders"));
        assert_eq!(config.client.retry.strategy, RetryKind::ExponentialBackoff);
        assert_eq!(config.client.retry.initial_delay, Some(Duration::from_millis(1)));
        assert_eq!(config.client.retry.growth_factor, Some(3.0));
        assert_eq!(config.client.retry.max_backoff, Some(Duration::from_millis(50)));
        assert_eq!(config.transport.caches, vec!["orders", "sessions"]);
        assert_eq!(config.logging.level, "debug");
        assert!(config.logging.json_format);
        Ok(())
    });
}

#[test]
fn test_default_file_is_discovered_in_working_directory() {
    Jail::expect_with(|jail| {
        jail.create_file("nimbus.toml", "[client]\ndefault_ttl = \"90s\"\n")?;
        let config = load_in_jail(&ConfigLoader::new())?;
        assert_eq!(config.client.default_ttl, Duration::from_secs(90));
        Ok(())
    });
}

#[test]
fn test_env_overrides_file() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "nimbus.toml",
            "[client]\ndefault_ttl = \"90s\"\nrequest_timeout = \"3s\"\n",
        )?;
        jail.set_env("NIMBUS_CLIENT__DEFAULT_TTL", "5m");
        jail.set_env("NIMBUS_CLIENT__PRESET", "lambda");
        jail.set_env("NIMBUS_CLIENT__RETRY__MAX_ATTEMPTS", "5");
        jail.set_env("NIMBUS_TRANSPORT__PROVIDER", "local");

        let config = load_in_jail(&ConfigLoader::new())?;
        assert_eq!(config.client.default_ttl, Duration::from_secs(300));
        assert_eq!(config.client.request_timeout, Some(Duration::from_secs(3)));
        assert_eq!(config.client.preset, ConfigPreset::Lambda);
        assert_eq!(config.client.retry.max_attempts, Some(5));
        assert_eq!(config.transport.provider, "local");
        Ok(())
    });
}

#[test]
fn test_custom_env_prefix() {
    Jail::expect_with(|jail| {
        jail.set_env("MYAPP_CLIENT__DEFAULT_TTL", "2h");
        jail.set_env("NIMBUS_CLIENT__DEFAULT_TTL", "1s");

        let config = load_in_jail(&ConfigLoader::new().with_env_prefix("MYAPP"))?;
        assert_eq!(config.client.default_ttl, Duration::from_secs(7200));
        Ok(())
    });
}

#[test]
fn test_malformed_duration_is_a_configuration_error() {
    Jail::expect_with(|jail| {
        jail.set_env("NIMBUS_CLIENT__REQUEST_TIMEOUT", "soon");

        let err = ConfigLoader::new().load().unwrap_err();
        assert_eq!(err.code(), ErrorCode::Configuration);
        assert!(err.to_string().contains("Failed to extract configuration"));
        Ok(())
    });
}

#[test]
fn test_validation_rejects_bad_values() {
    let cases = [
        ("[client]\ndefault_ttl = \"0s\"\n", "Default TTL cannot be 0"),
        ("[client]\ndefault_ttl = \"500us\"\n", "below one millisecond"),
        ("[client]\nrequest_timeout = \"0s\"\n", "Request timeout cannot be 0"),
        ("[client]\ndefault_cache_name = \"  \"\n", "Invalid default cache name"),
        ("[client.retry]\ngrowth_factor = -1.0\n", "growth factor"),
        ("[transport]\nprovider = \"\"\n", "Transport provider cannot be empty"),
        ("[transport]\ncaches = [\"a\", \"\"]\n", "cache names cannot be empty"),
        ("[logging]\nlevel = \"loud\"\n", "Invalid log level"),
    ];

    for (toml, expected) in cases {
        Jail::expect_with(|jail| {
            jail.create_file("nimbus.toml", toml)?;
            let err = ConfigLoader::new().load().unwrap_err();
            assert!(
                err.to_string().contains(expected),
                "{toml:?}: unexpected error {err}"
            );
            Ok(())
        });
    }
}

#[test]
fn test_save_to_file_and_reload() {
    Jail::expect_with(|_jail| {
        let mut config = AppConfig::default();
        config.client.preset = ConfigPreset::InRegion;
        config.client.eager_connection_timeout = Some(Duration::ZERO);
        config.client.default_ttl = Duration::from_secs(90);
        config.client.retry.strategy = RetryKind::Never;
        config.transport.caches = vec!["orders".to_string()];

        let loader = ConfigLoader::new().with_config_path("saved.toml");
        loader.save_to_file(&config, "saved.toml").unwrap();
        assert_eq!(
            loader.config_path(),
            Some(std::path::Path::new("saved.toml"))
        );

        let written = std::fs::read_to_string("saved.toml").unwrap();
        assert!(written.contains("default_ttl = \"1m 30s\""));
        assert!(written.contains("preset = \"in_region\""));
        assert!(!written.contains("request_timeout"));

        let reloaded = load_in_jail(&loader)?;
        assert_eq!(reloaded, config);
        Ok(())
    });
}

#[test]
fn test_save_to_missing_directory_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("nimbus.toml");

    let err = ConfigLoader::new()
        .save_to_file(&AppConfig::default(), &path)
        .unwrap_err();
    assert!(err.to_string().contains("Failed to write"));
}

#[test]
fn test_client_config_serializes_durations_as_text() {
    let text = toml::to_string(&ClientConfig::default()).unwrap();
    assert!(text.contains("default_ttl = \"1m\""));
}
