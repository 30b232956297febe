//! Batch Helpers
//!
//! Fan scalar operations out over many keys with bounded concurrency.
//! Failures are collected per key instead of aborting the batch.

use crate::client::CacheClient;
use crate::constants::DEFAULT_BATCH_CONCURRENCY;
use crate::requests::SetRequest;
use futures::stream::{self, StreamExt};
use nimbus_domain::responses::{DeleteResponse, GetResponse, KeysExistResponse, SetResponse};
use nimbus_domain::{Error, ErrorCode, Result, Value};
use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Per-key failures of a batch
#[derive(Debug, Error)]
#[error("errors occurred during batch {operation} for {} key(s)", errors.len())]
pub struct BatchError {
    /// Batch operation name
    pub operation: &'static str,
    /// Error of each failed key
    pub errors: HashMap<Value, Error>,
}

/// Results of a batch: responses for keys that succeeded, errors for the rest
#[derive(Debug)]
pub struct BatchOutcome<T> {
    operation: &'static str,
    /// Response of each successful key
    pub responses: HashMap<Value, T>,
    /// Error of each failed key
    pub errors: HashMap<Value, Error>,
}

impl<T> BatchOutcome<T> {
    /// True when every key succeeded
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// The responses, or every per-key error when any key failed
    pub fn into_result(self) -> std::result::Result<HashMap<Value, T>, BatchError> {
        if self.errors.is_empty() {
            Ok(self.responses)
        } else {
            Err(BatchError {
                operation: self.operation,
                errors: self.errors,
            })
        }
    }
}

/// Concurrency and TTL for a batch
#[derive(Debug, Clone, Copy)]
pub struct BatchOptions {
    /// Requests in flight at once
    pub max_concurrency: usize,
    /// TTL for batch writes; `None` uses the client default
    pub ttl: Option<Duration>,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            max_concurrency: DEFAULT_BATCH_CONCURRENCY,
            ttl: None,
        }
    }
}

impl BatchOptions {
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.max_concurrency = max_concurrency;
        self
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

async fn fan_out<A, T, F, Fut>(
    operation: &'static str,
    items: Vec<(Value, A)>,
    max_concurrency: usize,
    op: F,
) -> BatchOutcome<T>
where
    F: Fn(Value, A) -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let total = items.len();
    let results: Vec<(Value, Result<T>)> = stream::iter(items)
        .map(|(key, arg)| {
            let pending = op(key.clone(), arg);
            async move { (key, pending.await) }
        })
        .buffer_unordered(max_concurrency.max(1))
        .collect()
        .await;

    let mut outcome = BatchOutcome {
        operation,
        responses: HashMap::with_capacity(total),
        errors: HashMap::new(),
    };
    for (key, result) in results {
        match result {
            Ok(response) => {
                outcome.responses.insert(key, response);
            }
            Err(e) => {
                outcome.errors.insert(key, e);
            }
        }
    }

    if outcome.errors.is_empty() {
        debug!(operation, keys = total, "Batch completed");
    } else {
        warn!(
            operation,
            keys = total,
            failed = outcome.errors.len(),
            "Batch completed with errors"
        );
    }
    outcome
}

fn keyed<I, K>(keys: I) -> Vec<(Value, ())>
where
    I: IntoIterator<Item = K>,
    K: Into<Value>,
{
    keys.into_iter().map(|k| (k.into(), ())).collect()
}

/// Get many keys
pub async fn batch_get<I, K>(
    client: &CacheClient,
    cache_name: &str,
    keys: I,
    options: BatchOptions,
) -> BatchOutcome<GetResponse>
where
    I: IntoIterator<Item = K>,
    K: Into<Value>,
{
    fan_out("get", keyed(keys), options.max_concurrency, |key, ()| {
        client.get(cache_name, key)
    })
    .await
}

/// Delete many keys
pub async fn batch_delete<I, K>(
    client: &CacheClient,
    cache_name: &str,
    keys: I,
    options: BatchOptions,
) -> BatchOutcome<DeleteResponse>
where
    I: IntoIterator<Item = K>,
    K: Into<Value>,
{
    fan_out("delete", keyed(keys), options.max_concurrency, |key, ()| {
        client.delete(cache_name, key)
    })
    .await
}

/// Store many items
pub async fn batch_set<I, K, V>(
    client: &CacheClient,
    cache_name: &str,
    items: I,
    options: BatchOptions,
) -> BatchOutcome<SetResponse>
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<Value>,
    V: Into<Value>,
{
    let items = items
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    fan_out("set", items, options.max_concurrency, |key, value: Value| {
        let mut request = SetRequest::new(cache_name, key, value);
        request.ttl = options.ttl;
        client.send(request)
    })
    .await
}

/// Store many items only if none of their keys exist yet
///
/// Fails with `AlreadyExists` before writing anything when any key is
/// present. The check and the writes are not atomic.
pub async fn batch_set_if_absent<K, V>(
    client: &CacheClient,
    cache_name: &str,
    items: Vec<(K, V)>,
    options: BatchOptions,
) -> Result<BatchOutcome<SetResponse>>
where
    K: Into<Value>,
    V: Into<Value>,
{
    let items: Vec<(Value, Value)> = items
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect();
    let keys = items.iter().map(|(k, _)| k.clone());
    let KeysExistResponse { exists } = client.keys_exist(cache_name, keys).await?;
    if exists.iter().any(|(_, present)| *present) {
        return Err(Error::with_code(
            ErrorCode::AlreadyExists,
            "At least one key already exists",
            None,
        ));
    }
    Ok(batch_set(client, cache_name, items, options).await)
}
