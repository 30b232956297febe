//! TTL update requests

use super::validation::{prepare_key, prepare_update_ttl};
use super::{CacheRequest, RequestContext, unexpected_response};
use nimbus_domain::responses::{DecreaseTtlResponse, IncreaseTtlResponse, UpdateTtlResponse};
use nimbus_domain::wire::{DataRequest, DataResponse, TtlUpdate, UpdateTtlResult};
use nimbus_domain::{Result, Value};
use std::time::Duration;

/// Overwrite the TTL of an item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTtlRequest {
    pub cache_name: String,
    pub key: Value,
    pub ttl: Duration,
}

impl UpdateTtlRequest {
    pub fn new<C: Into<String>, K: Into<Value>>(cache_name: C, key: K, ttl: Duration) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
            ttl,
        }
    }
}

impl CacheRequest for UpdateTtlRequest {
    type Response = UpdateTtlResponse;
    const NAME: &'static str = "UpdateTtl";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::UpdateTtl {
            key: prepare_key(&self.key)?,
            update: TtlUpdate::OverwriteTo(prepare_update_ttl(self.ttl)?),
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<UpdateTtlResponse> {
        match response {
            DataResponse::UpdateTtl(UpdateTtlResult::Set) => Ok(UpdateTtlResponse::Set),
            DataResponse::UpdateTtl(UpdateTtlResult::Missing) => Ok(UpdateTtlResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Extend the TTL of an item, never shortening it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncreaseTtlRequest {
    pub cache_name: String,
    pub key: Value,
    pub ttl: Duration,
}

impl IncreaseTtlRequest {
    pub fn new<C: Into<String>, K: Into<Value>>(cache_name: C, key: K, ttl: Duration) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
            ttl,
        }
    }
}

impl CacheRequest for IncreaseTtlRequest {
    type Response = IncreaseTtlResponse;
    const NAME: &'static str = "IncreaseTtl";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::UpdateTtl {
            key: prepare_key(&self.key)?,
            update: TtlUpdate::IncreaseTo(prepare_update_ttl(self.ttl)?),
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<IncreaseTtlResponse> {
        match response {
            DataResponse::UpdateTtl(UpdateTtlResult::Set) => Ok(IncreaseTtlResponse::Set),
            DataResponse::UpdateTtl(UpdateTtlResult::NotSet) => Ok(IncreaseTtlResponse::NotSet),
            DataResponse::UpdateTtl(UpdateTtlResult::Missing) => Ok(IncreaseTtlResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Shorten the TTL of an item, never extending it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecreaseTtlRequest {
    pub cache_name: String,
    pub key: Value,
    pub ttl: Duration,
}

impl DecreaseTtlRequest {
    pub fn new<C: Into<String>, K: Into<Value>>(cache_name: C, key: K, ttl: Duration) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
            ttl,
        }
    }
}

impl CacheRequest for DecreaseTtlRequest {
    type Response = DecreaseTtlResponse;
    const NAME: &'static str = "DecreaseTtl";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::UpdateTtl {
            key: prepare_key(&self.key)?,
            update: TtlUpdate::DecreaseTo(prepare_update_ttl(self.ttl)?),
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<DecreaseTtlResponse> {
        match response {
            DataResponse::UpdateTtl(UpdateTtlResult::Set) => Ok(DecreaseTtlResponse::Set),
            DataResponse::UpdateTtl(UpdateTtlResult::NotSet) => Ok(DecreaseTtlResponse::NotSet),
            DataResponse::UpdateTtl(UpdateTtlResult::Missing) => Ok(DecreaseTtlResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}
