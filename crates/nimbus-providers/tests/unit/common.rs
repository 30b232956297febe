//! Shared fixtures

use nimbus_application::CacheClient;
use nimbus_providers::transport::LocalTransport;
use std::sync::Arc;
use std::time::Duration;

pub const CACHE: &str = "test-cache";
pub const DEFAULT_TTL: Duration = Duration::from_secs(60);

/// Client over a fresh local transport holding [`CACHE`]
pub async fn local_client() -> (CacheClient, Arc<LocalTransport>) {
    let transport = Arc::new(LocalTransport::new().with_cache(CACHE));
    let client = CacheClient::builder()
        .default_ttl(DEFAULT_TTL)
        .transport(transport.clone())
        .build()
        .await
        .expect("local client should build");
    (client, transport)
}
