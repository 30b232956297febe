//! Scalar item operations

use super::CacheClient;
use crate::requests::{
    DecreaseTtlRequest, DeleteRequest, GetBatchRequest, GetRequest, IncreaseTtlRequest,
    IncrementRequest, ItemGetTtlRequest, ItemGetTypeRequest, KeysExistRequest, SetBatchRequest,
    SetIfCondition, SetIfRequest, SetRequest, UpdateTtlRequest,
};
use nimbus_domain::responses::{
    DecreaseTtlResponse, DeleteResponse, GetBatchResponse, GetResponse, IncreaseTtlResponse,
    IncrementResponse, ItemGetTtlResponse, ItemGetTypeResponse, KeysExistResponse,
    SetBatchResponse, SetIfResponse, SetResponse, UpdateTtlResponse,
};
use nimbus_domain::{Result, Value};
use std::time::Duration;

impl CacheClient {
    pub async fn get<C, K>(&self, cache_name: C, key: K) -> Result<GetResponse>
    where
        C: Into<String>,
        K: Into<Value>,
    {
        self.send(GetRequest::new(cache_name, key)).await
    }

    /// Store a value with the default TTL
    pub async fn set<C, K, V>(&self, cache_name: C, key: K, value: V) -> Result<SetResponse>
    where
        C: Into<String>,
        K: Into<Value>,
        V: Into<Value>,
    {
        self.send(SetRequest::new(cache_name, key, value)).await
    }

    pub async fn delete<C, K>(&self, cache_name: C, key: K) -> Result<DeleteResponse>
    where
        C: Into<String>,
        K: Into<Value>,
    {
        self.send(DeleteRequest::new(cache_name, key)).await
    }

    /// Add to an integer value, treating a missing item as zero
    pub async fn increment<C, K>(&self, cache_name: C, key: K, amount: i64) -> Result<IncrementResponse>
    where
        C: Into<String>,
        K: Into<Value>,
    {
        self.send(IncrementRequest::new(cache_name, key, amount)).await
    }

    pub async fn get_batch<C, I, K>(&self, cache_name: C, keys: I) -> Result<GetBatchResponse>
    where
        C: Into<String>,
        I: IntoIterator<Item = K>,
        K: Into<Value>,
    {
        self.send(GetBatchRequest::new(cache_name, keys)).await
    }

    pub async fn set_batch<C, I, K, V>(&self, cache_name: C, items: I) -> Result<SetBatchResponse>
    where
        C: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        self.send(SetBatchRequest::new(cache_name, items)).await
    }

    pub async fn keys_exist<C, I, K>(&self, cache_name: C, keys: I) -> Result<KeysExistResponse>
    where
        C: Into<String>,
        I: IntoIterator<Item = K>,
        K: Into<Value>,
    {
        self.send(KeysExistRequest::new(cache_name, keys)).await
    }

    pub async fn item_get_type<C, K>(&self, cache_name: C, key: K) -> Result<ItemGetTypeResponse>
    where
        C: Into<String>,
        K: Into<Value>,
    {
        self.send(ItemGetTypeRequest::new(cache_name, key)).await
    }

    /// Remaining TTL of an item
    pub async fn item_get_ttl<C, K>(&self, cache_name: C, key: K) -> Result<ItemGetTtlResponse>
    where
        C: Into<String>,
        K: Into<Value>,
    {
        self.send(ItemGetTtlRequest::new(cache_name, key)).await
    }

    /// Overwrite the TTL of an item
    pub async fn update_ttl<C, K>(&self, cache_name: C, key: K, ttl: Duration) -> Result<UpdateTtlResponse>
    where
        C: Into<String>,
        K: Into<Value>,
    {
        self.send(UpdateTtlRequest::new(cache_name, key, ttl)).await
    }

    /// Raise the TTL of an item; a lower TTL leaves it unchanged
    pub async fn increase_ttl<C, K>(
        &self,
        cache_name: C,
        key: K,
        ttl: Duration,
    ) -> Result<IncreaseTtlResponse>
    where
        C: Into<String>,
        K: Into<Value>,
    {
        self.send(IncreaseTtlRequest::new(cache_name, key, ttl)).await
    }

    /// Lower the TTL of an item; a higher TTL leaves it unchanged
    pub async fn decrease_ttl<C, K>(
        &self,
        cache_name: C,
        key: K,
        ttl: Duration,
    ) -> Result<DecreaseTtlResponse>
    where
        C: Into<String>,
        K: Into<Value>,
    {
        self.send(DecreaseTtlRequest::new(cache_name, key, ttl)).await
    }
}

// Conditional writes
impl CacheClient {
    async fn set_if<C, K, V>(
        &self,
        cache_name: C,
        key: K,
        value: V,
        condition: SetIfCondition,
    ) -> Result<SetIfResponse>
    where
        C: Into<String>,
        K: Into<Value>,
        V: Into<Value>,
    {
        self.send(SetIfRequest::new(cache_name, key, value, condition))
            .await
    }

    /// Store only when the key is missing
    pub async fn set_if_absent<C, K, V>(&self, cache_name: C, key: K, value: V) -> Result<SetIfResponse>
    where
        C: Into<String>,
        K: Into<Value>,
        V: Into<Value>,
    {
        self.set_if(cache_name, key, value, SetIfCondition::Absent)
            .await
    }

    /// Store only when the key exists
    pub async fn set_if_present<C, K, V>(
        &self,
        cache_name: C,
        key: K,
        value: V,
    ) -> Result<SetIfResponse>
    where
        C: Into<String>,
        K: Into<Value>,
        V: Into<Value>,
    {
        self.set_if(cache_name, key, value, SetIfCondition::Present)
            .await
    }

    /// Store only when the current value equals `equal`
    pub async fn set_if_equal<C, K, V, E>(
        &self,
        cache_name: C,
        key: K,
        value: V,
        equal: E,
    ) -> Result<SetIfResponse>
    where
        C: Into<String>,
        K: Into<Value>,
        V: Into<Value>,
        E: Into<Value>,
    {
        self.set_if(cache_name, key, value, SetIfCondition::Equal(equal.into()))
            .await
    }

    /// Store unless the current value equals `not_equal`; a missing key is stored
    pub async fn set_if_not_equal<C, K, V, E>(
        &self,
        cache_name: C,
        key: K,
        value: V,
        not_equal: E,
    ) -> Result<SetIfResponse>
    where
        C: Into<String>,
        K: Into<Value>,
        V: Into<Value>,
        E: Into<Value>,
    {
        self.set_if(
            cache_name,
            key,
            value,
            SetIfCondition::NotEqual(not_equal.into()),
        )
        .await
    }

    /// Store only when the key exists with a value other than `not_equal`
    pub async fn set_if_present_and_not_equal<C, K, V, E>(
        &self,
        cache_name: C,
        key: K,
        value: V,
        not_equal: E,
    ) -> Result<SetIfResponse>
    where
        C: Into<String>,
        K: Into<Value>,
        V: Into<Value>,
        E: Into<Value>,
    {
        self.set_if(
            cache_name,
            key,
            value,
            SetIfCondition::PresentAndNotEqual(not_equal.into()),
        )
        .await
    }

    /// Store when the key is missing or its value equals `equal`
    pub async fn set_if_absent_or_equal<C, K, V, E>(
        &self,
        cache_name: C,
        key: K,
        value: V,
        equal: E,
    ) -> Result<SetIfResponse>
    where
        C: Into<String>,
        K: Into<Value>,
        V: Into<Value>,
        E: Into<Value>,
    {
        self.set_if(
            cache_name,
            key,
            value,
            SetIfCondition::AbsentOrEqual(equal.into()),
        )
        .await
    }
}
