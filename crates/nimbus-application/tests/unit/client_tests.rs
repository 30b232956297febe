//! Tests for the client request pipeline

use crate::common::{CACHE, DEFAULT_TTL, ScriptedTransport, scripted_client};
use nimbus_application::middleware::{
    InFlightRequestCountMiddleware, Middleware, RequestInfo,
};
use nimbus_application::retry::{ExponentialBackoffRetryStrategy, NeverRetryStrategy};
use nimbus_application::{CacheClient, ClientConfiguration};
use nimbus_domain::responses::{CreateCacheResponse, DeleteCacheResponse, GetResponse};
use nimbus_domain::wire::{ControlResponse, DataRequest, DataResponse};
use nimbus_domain::{CacheInfo, ErrorCode, RequestMetadata, Status, StatusCode, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn unavailable() -> Status {
    Status::new(StatusCode::Unavailable, "try again")
}

fn lazy() -> ClientConfiguration {
    ClientConfiguration::laptop().with_eager_connection_timeout(Duration::ZERO)
}

// ============================================================================
// Builder
// ============================================================================

#[tokio::test]
async fn test_builder_requires_default_ttl() {
    let err = CacheClient::builder()
        .transport(Arc::new(ScriptedTransport::new()))
        .build()
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
    assert!(err.message().contains("default TTL must be given"));

    let err = CacheClient::builder()
        .default_ttl(Duration::ZERO)
        .transport(Arc::new(ScriptedTransport::new()))
        .build()
        .await
        .unwrap_err();
    assert!(err.message().contains("positive duration"));
}

#[tokio::test]
async fn test_builder_rejects_sub_millisecond_default_ttl() {
    let err = CacheClient::builder()
        .default_ttl(Duration::from_micros(500))
        .transport(Arc::new(ScriptedTransport::new()))
        .build()
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
    assert!(err.message().contains("at least 1ms"));

    let client = CacheClient::builder()
        .configuration(lazy())
        .default_ttl(Duration::from_millis(1))
        .transport(Arc::new(ScriptedTransport::new()))
        .build()
        .await
        .unwrap();
    assert_eq!(client.default_ttl(), Duration::from_millis(1));
}

#[tokio::test]
async fn test_builder_requires_transport() {
    let err = CacheClient::builder()
        .default_ttl(DEFAULT_TTL)
        .build()
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Configuration);
}

#[tokio::test]
async fn test_builder_rejects_invalid_settings() {
    let err = CacheClient::builder()
        .default_ttl(DEFAULT_TTL)
        .default_cache_name("  ")
        .transport(Arc::new(ScriptedTransport::new()))
        .build()
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);

    let err = CacheClient::builder()
        .configuration(ClientConfiguration::laptop().with_request_timeout(Duration::ZERO))
        .default_ttl(DEFAULT_TTL)
        .transport(Arc::new(ScriptedTransport::new()))
        .build()
        .await
        .unwrap_err();
    assert!(err.message().contains("request timeout"));
}

#[tokio::test]
async fn test_eager_connection_failure() {
    let transport = Arc::new(ScriptedTransport::new().with_connect_error("refused"));
    let err = CacheClient::builder()
        .default_ttl(DEFAULT_TTL)
        .eager_connection_timeout(Duration::from_secs(1))
        .transport(transport.clone())
        .build()
        .await
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::Connection);
    assert!(err.message().contains("eager connection timeout"));
    assert!(err.message().contains("refused"));

    // A zero timeout skips the eager connection
    let client = CacheClient::builder()
        .default_ttl(DEFAULT_TTL)
        .eager_connection_timeout(Duration::ZERO)
        .transport(transport)
        .build()
        .await
        .unwrap();
    assert_eq!(client.transport_name(), "scripted");
}

// ============================================================================
// Data pipeline
// ============================================================================

#[tokio::test]
async fn test_request_carries_cache_header_and_default_ttl() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_data(Ok(DataResponse::Set));
    let client = scripted_client(transport.clone(), lazy()).await;

    client.set(CACHE, "k", "v").await.unwrap();

    let sent = transport.sent();
    assert_eq!(sent.len(), 1);
    let (metadata, request) = &sent[0];
    assert_eq!(metadata.cache_name(), Some(CACHE));
    assert_eq!(
        request,
        &DataRequest::Set {
            key: b"k".to_vec(),
            value: b"v".to_vec(),
            ttl_milliseconds: 60_000,
        }
    );
}

#[tokio::test]
async fn test_empty_cache_name_uses_default() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_data(Ok(DataResponse::Get(Some(b"v".to_vec()))));
    let client = CacheClient::builder()
        .configuration(lazy())
        .default_ttl(DEFAULT_TTL)
        .default_cache_name("fallback")
        .transport(transport.clone())
        .build()
        .await
        .unwrap();
    assert_eq!(client.default_cache_name(), Some("fallback"));

    let response = client.get("", "k").await.unwrap();
    assert_eq!(
        response,
        GetResponse::Hit {
            value: Value::from("v")
        }
    );
    assert_eq!(transport.sent()[0].0.cache_name(), Some("fallback"));
}

#[tokio::test]
async fn test_blank_cache_name_uses_default() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_data(Ok(DataResponse::Get(None)));
    let client = CacheClient::builder()
        .configuration(lazy())
        .default_ttl(DEFAULT_TTL)
        .default_cache_name("fallback")
        .transport(transport.clone())
        .build()
        .await
        .unwrap();

    assert_eq!(client.get("   ", "k").await.unwrap(), GetResponse::Miss);
    assert_eq!(transport.sent()[0].0.cache_name(), Some("fallback"));
}

#[tokio::test]
async fn test_empty_cache_name_without_default_fails_before_sending() {
    let transport = Arc::new(ScriptedTransport::new());
    let client = scripted_client(transport.clone(), lazy()).await;

    let err = client.get("", "k").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
    assert_eq!(transport.attempts(), 0);
}

#[tokio::test]
async fn test_retries_eligible_failures() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_data(Err(unavailable()));
    transport.push_data(Err(unavailable()));
    transport.push_data(Ok(DataResponse::Get(None)));
    let client = scripted_client(transport.clone(), lazy()).await;

    assert_eq!(client.get(CACHE, "k").await.unwrap(), GetResponse::Miss);
    assert_eq!(transport.attempts(), 3);
}

#[tokio::test]
async fn test_retries_stop_after_max_attempts() {
    let transport = Arc::new(ScriptedTransport::new());
    for _ in 0..4 {
        transport.push_data(Err(unavailable()));
    }
    let client = scripted_client(transport.clone(), lazy()).await;

    let err = client.get(CACHE, "k").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ServerUnavailable);
    assert_eq!(err.details().map(|s| s.code), Some(StatusCode::Unavailable));
    // One attempt plus three retries
    assert_eq!(transport.attempts(), 4);
}

#[tokio::test]
async fn test_non_idempotent_requests_are_not_retried() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_data(Err(unavailable()));
    let client = scripted_client(transport.clone(), lazy()).await;

    let err = client.increment(CACHE, "n", 1).await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::ServerUnavailable);
    assert_eq!(transport.attempts(), 1);
}

#[tokio::test]
async fn test_never_retry_strategy() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_data(Err(unavailable()));
    let config = lazy().with_retry_strategy(Arc::new(NeverRetryStrategy));
    let client = scripted_client(transport.clone(), config).await;

    assert!(client.get(CACHE, "k").await.is_err());
    assert_eq!(transport.attempts(), 1);
}

#[tokio::test(start_paused = true)]
async fn test_request_timeout() {
    let transport = Arc::new(ScriptedTransport::new().with_latency(Duration::from_secs(10)));
    transport.push_data(Ok(DataResponse::Get(None)));
    let config = lazy().with_request_timeout(Duration::from_secs(1));
    let client = scripted_client(transport, config).await;

    let err = client.get(CACHE, "k").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Timeout);
    assert_eq!(
        err.details().map(|s| s.code),
        Some(StatusCode::DeadlineExceeded)
    );
}

#[tokio::test(start_paused = true)]
async fn test_request_timeout_bounds_backoff() {
    let transport = Arc::new(ScriptedTransport::new().with_latency(Duration::from_millis(400)));
    for _ in 0..10 {
        transport.push_data(Err(unavailable()));
    }
    let strategy = ExponentialBackoffRetryStrategy::new()
        .with_initial_delay(Duration::from_millis(100))
        .with_max_backoff(Duration::from_millis(100));
    let config = lazy()
        .with_request_timeout(Duration::from_secs(1))
        .with_retry_strategy(Arc::new(strategy));
    let client = scripted_client(transport.clone(), config).await;

    let err = client.get(CACHE, "k").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::Timeout);
    assert!(transport.attempts() >= 2);
    assert!(transport.attempts() < 10);
}

#[tokio::test]
async fn test_status_is_normalized() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_data(Err(Status::new(StatusCode::NotFound, "no such cache")));
    let client = scripted_client(transport, lazy()).await;

    let err = client.get(CACHE, "k").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::NotFound);
    assert!(err.message().contains("no such cache"));
}

#[tokio::test]
async fn test_unexpected_response_variant() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_data(Ok(DataResponse::Delete));
    let client = scripted_client(transport, lazy()).await;

    let err = client.get(CACHE, "k").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InternalServer);
}

// ============================================================================
// Middleware
// ============================================================================

/// Records hook invocations into a shared journal
#[derive(Debug)]
struct Journal {
    name: &'static str,
    entries: Arc<Mutex<Vec<String>>>,
}

impl Middleware for Journal {
    fn on_request(&self, info: &RequestInfo, metadata: &mut RequestMetadata) {
        metadata.insert(format!("x-{}", self.name), info.rpc_name);
        self.entries
            .lock()
            .unwrap()
            .push(format!("{}:request", self.name));
    }

    fn on_response(&self, _info: &RequestInfo, result: &Result<DataResponse, Status>) {
        let outcome = if result.is_ok() { "ok" } else { "err" };
        self.entries
            .lock()
            .unwrap()
            .push(format!("{}:{outcome}", self.name));
    }
}

#[tokio::test]
async fn test_middleware_order_and_headers() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    let config = lazy()
        .with_middleware(Arc::new(Journal {
            name: "outer",
            entries: entries.clone(),
        }))
        .with_middleware(Arc::new(Journal {
            name: "inner",
            entries: entries.clone(),
        }));
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_data(Err(unavailable()));
    transport.push_data(Ok(DataResponse::Get(None)));
    let client = scripted_client(transport.clone(), config).await;

    client.get(CACHE, "k").await.unwrap();

    // Hooks run once per request, not once per attempt
    assert_eq!(
        *entries.lock().unwrap(),
        ["outer:request", "inner:request", "inner:ok", "outer:ok"]
    );
    let sent = transport.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].0.get("x-outer"), Some("Get"));
    assert_eq!(sent[1].0.get("x-inner"), Some("Get"));
}

#[tokio::test]
async fn test_middleware_sees_failures() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    let config = lazy().with_middleware(Arc::new(Journal {
        name: "only",
        entries: entries.clone(),
    }));
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_data(Err(Status::new(StatusCode::PermissionDenied, "")));
    let client = scripted_client(transport, config).await;

    let err = client.get(CACHE, "k").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PermissionDenied);
    assert_eq!(*entries.lock().unwrap(), ["only:request", "only:err"]);
}

#[tokio::test(start_paused = true)]
async fn test_dropped_request_completes_middleware() {
    let counter = Arc::new(InFlightRequestCountMiddleware::new());
    let entries = Arc::new(Mutex::new(Vec::new()));
    let config = lazy()
        .with_middleware(counter.clone())
        .with_middleware(Arc::new(Journal {
            name: "only",
            entries: entries.clone(),
        }));
    let transport = Arc::new(ScriptedTransport::new().with_latency(Duration::from_secs(2)));
    transport.push_data(Ok(DataResponse::Get(None)));
    let client = scripted_client(transport, config).await;

    let outcome =
        tokio::time::timeout(Duration::from_millis(100), client.get(CACHE, "k")).await;
    assert!(outcome.is_err());

    assert_eq!(counter.in_flight(), 0);
    assert_eq!(counter.total(), 1);
    assert_eq!(*entries.lock().unwrap(), ["only:request", "only:err"]);
}

#[tokio::test]
async fn test_completed_request_runs_response_hooks_once() {
    let counter = Arc::new(InFlightRequestCountMiddleware::new());
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_data(Ok(DataResponse::Get(None)));
    transport.push_data(Err(unavailable()));
    let config = lazy()
        .with_retry_strategy(Arc::new(NeverRetryStrategy))
        .with_middleware(counter.clone());
    let client = scripted_client(transport, config).await;

    client.get(CACHE, "k").await.unwrap();
    assert!(client.get(CACHE, "k").await.is_err());

    assert_eq!(counter.in_flight(), 0);
    assert_eq!(counter.total(), 2);
}

// ============================================================================
// Control plane
// ============================================================================

#[tokio::test]
async fn test_create_and_delete_are_forgiving() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_control(Ok(ControlResponse::CreateCache));
    transport.push_control(Err(Status::new(StatusCode::AlreadyExists, "exists")));
    transport.push_control(Err(Status::new(StatusCode::NotFound, "missing")));
    let client = scripted_client(transport, lazy()).await;

    assert_eq!(
        client.create_cache("c").await.unwrap(),
        CreateCacheResponse::Created
    );
    assert_eq!(
        client.create_cache("c").await.unwrap(),
        CreateCacheResponse::AlreadyExists
    );
    assert_eq!(
        client.delete_cache("c").await.unwrap(),
        DeleteCacheResponse::Deleted
    );
}

#[tokio::test]
async fn test_list_caches_and_control_errors() {
    let transport = Arc::new(ScriptedTransport::new());
    transport.push_control(Ok(ControlResponse::ListCaches {
        caches: vec![CacheInfo::new("a"), CacheInfo::new("b")],
        next_token: Some("page-2".to_string()),
    }));
    transport.push_control(Err(Status::new(StatusCode::PermissionDenied, "")));
    let client = scripted_client(transport, lazy()).await;

    let listed = client.list_caches().await.unwrap();
    assert_eq!(listed.cache_names(), ["a", "b"]);
    assert_eq!(listed.next_token.as_deref(), Some("page-2"));

    let err = client.create_cache("c").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::PermissionDenied);

    let err = client.delete_cache("").await.unwrap_err();
    assert_eq!(err.code(), ErrorCode::InvalidArgument);
}

#[tokio::test]
async fn test_ping() {
    let client = scripted_client(Arc::new(ScriptedTransport::new()), lazy()).await;
    assert!(client.ping().await.is_ok());
}
