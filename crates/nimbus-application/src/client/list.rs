//! List operations

use super::CacheClient;
use crate::requests::{
    ListConcatenateBackRequest, ListConcatenateFrontRequest, ListFetchRequest, ListLengthRequest,
    ListPopBackRequest, ListPopFrontRequest, ListPushBackRequest, ListPushFrontRequest,
    ListRemoveValueRequest,
};
use nimbus_domain::responses::{
    ListConcatenateBackResponse, ListConcatenateFrontResponse, ListFetchResponse,
    ListLengthResponse, ListPopBackResponse, ListPopFrontResponse, ListPushBackResponse,
    ListPushFrontResponse, ListRemoveValueResponse,
};
use nimbus_domain::{Result, Value};

impl CacheClient {
    pub async fn list_push_front<C, L, V>(
        &self,
        cache_name: C,
        list_name: L,
        value: V,
    ) -> Result<ListPushFrontResponse>
    where
        C: Into<String>,
        L: Into<String>,
        V: Into<Value>,
    {
        self.send(ListPushFrontRequest::new(cache_name, list_name, value))
            .await
    }

    pub async fn list_push_back<C, L, V>(
        &self,
        cache_name: C,
        list_name: L,
        value: V,
    ) -> Result<ListPushBackResponse>
    where
        C: Into<String>,
        L: Into<String>,
        V: Into<Value>,
    {
        self.send(ListPushBackRequest::new(cache_name, list_name, value))
            .await
    }

    /// Prepend values, keeping their order
    pub async fn list_concatenate_front<C, L, I, V>(
        &self,
        cache_name: C,
        list_name: L,
        values: I,
    ) -> Result<ListConcatenateFrontResponse>
    where
        C: Into<String>,
        L: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.send(ListConcatenateFrontRequest::new(
            cache_name, list_name, values,
        ))
        .await
    }

    pub async fn list_concatenate_back<C, L, I, V>(
        &self,
        cache_name: C,
        list_name: L,
        values: I,
    ) -> Result<ListConcatenateBackResponse>
    where
        C: Into<String>,
        L: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.send(ListConcatenateBackRequest::new(
            cache_name, list_name, values,
        ))
        .await
    }

    pub async fn list_pop_front<C, L>(&self, cache_name: C, list_name: L) -> Result<ListPopFrontResponse>
    where
        C: Into<String>,
        L: Into<String>,
    {
        self.send(ListPopFrontRequest::new(cache_name, list_name)).await
    }

    pub async fn list_pop_back<C, L>(&self, cache_name: C, list_name: L) -> Result<ListPopBackResponse>
    where
        C: Into<String>,
        L: Into<String>,
    {
        self.send(ListPopBackRequest::new(cache_name, list_name)).await
    }

    /// Fetch the whole list; send a [`ListFetchRequest`] to fetch a slice
    pub async fn list_fetch<C, L>(&self, cache_name: C, list_name: L) -> Result<ListFetchResponse>
    where
        C: Into<String>,
        L: Into<String>,
    {
        self.send(ListFetchRequest::new(cache_name, list_name)).await
    }

    pub async fn list_length<C, L>(&self, cache_name: C, list_name: L) -> Result<ListLengthResponse>
    where
        C: Into<String>,
        L: Into<String>,
    {
        self.send(ListLengthRequest::new(cache_name, list_name)).await
    }

    /// Remove every occurrence of a value
    pub async fn list_remove_value<C, L, V>(
        &self,
        cache_name: C,
        list_name: L,
        value: V,
    ) -> Result<ListRemoveValueResponse>
    where
        C: Into<String>,
        L: Into<String>,
        V: Into<Value>,
    {
        self.send(ListRemoveValueRequest::new(cache_name, list_name, value))
            .await
    }
}
