//! Cache lifecycle operations and health checks

use super::CacheClient;
use crate::requests::validation::validate_cache_name;
use nimbus_domain::responses::{
    CreateCacheResponse, DeleteCacheResponse, ListCachesResponse, PingResponse,
};
use nimbus_domain::wire::{ControlRequest, ControlResponse};
use nimbus_domain::{Error, Result, Status, StatusCode};
use tracing::debug;

impl CacheClient {
    /// Create a cache; an existing cache is reported, not an error
    pub async fn create_cache<S: AsRef<str>>(&self, cache_name: S) -> Result<CreateCacheResponse> {
        let cache_name = cache_name.as_ref();
        validate_cache_name(cache_name)?;
        let request = ControlRequest::CreateCache {
            cache_name: cache_name.to_string(),
        };
        match self.control(request).await {
            Ok(ControlResponse::CreateCache) => Ok(CreateCacheResponse::Created),
            Ok(other) => Err(unexpected_control_response("CreateCache", &other)),
            Err(status) if status.code == StatusCode::AlreadyExists => {
                debug!(cache = cache_name, "Cache already exists");
                Ok(CreateCacheResponse::AlreadyExists)
            }
            Err(status) => Err(Error::from(status)),
        }
    }

    /// Delete a cache; deleting a missing cache succeeds
    pub async fn delete_cache<S: AsRef<str>>(&self, cache_name: S) -> Result<DeleteCacheResponse> {
        let cache_name = cache_name.as_ref();
        validate_cache_name(cache_name)?;
        let request = ControlRequest::DeleteCache {
            cache_name: cache_name.to_string(),
        };
        match self.control(request).await {
            Ok(ControlResponse::DeleteCache) => Ok(DeleteCacheResponse::Deleted),
            Ok(other) => Err(unexpected_control_response("DeleteCache", &other)),
            Err(status) if status.code == StatusCode::NotFound => {
                debug!(cache = cache_name, "Cache to delete does not exist");
                Ok(DeleteCacheResponse::Deleted)
            }
            Err(status) => Err(Error::from(status)),
        }
    }

    /// List the caches of the account
    pub async fn list_caches(&self) -> Result<ListCachesResponse> {
        self.list_caches_page(None).await
    }

    /// List one page of caches, continuing from a previous `next_token`
    pub async fn list_caches_page(&self, next_token: Option<String>) -> Result<ListCachesResponse> {
        match self.control(ControlRequest::ListCaches { next_token }).await {
            Ok(ControlResponse::ListCaches { caches, next_token }) => {
                Ok(ListCachesResponse { caches, next_token })
            }
            Ok(other) => Err(unexpected_control_response("ListCaches", &other)),
            Err(status) => Err(Error::from(status)),
        }
    }

    /// Check the service answers within the request timeout
    pub async fn ping(&self) -> Result<PingResponse> {
        let timeout = self.configuration.request_timeout();
        match tokio::time::timeout(timeout, self.transport.ping()).await {
            Ok(Ok(())) => Ok(PingResponse),
            Ok(Err(status)) => Err(Error::from(status)),
            Err(_) => Err(Error::from(Status::new(
                StatusCode::DeadlineExceeded,
                format!("Ping did not complete within {timeout:?}"),
            ))),
        }
    }

    async fn control(&self, request: ControlRequest) -> std::result::Result<ControlResponse, Status> {
        let rpc_name = request.rpc_name();
        let timeout = self.configuration.request_timeout();
        debug!(rpc = rpc_name, "Issuing control request");
        tokio::time::timeout(timeout, self.transport.control(request))
            .await
            .unwrap_or_else(|_| {
                Err(Status::new(
                    StatusCode::DeadlineExceeded,
                    format!("{rpc_name} request did not complete within {timeout:?}"),
                ))
            })
    }
}

fn unexpected_control_response(name: &str, response: &ControlResponse) -> Error {
    Error::internal_server(format!(
        "{name} request got an unexpected response {}",
        response.rpc_name()
    ))
}
