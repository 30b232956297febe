//! Set operations

use super::CacheClient;
use crate::requests::{
    SetAddElementsRequest, SetContainsElementsRequest, SetFetchRequest, SetLengthRequest,
    SetPopRequest, SetRemoveElementsRequest,
};
use nimbus_domain::responses::{
    SetAddElementsResponse, SetContainsElementsResponse, SetFetchResponse, SetLengthResponse,
    SetPopResponse, SetRemoveElementsResponse,
};
use nimbus_domain::{Result, Value};

impl CacheClient {
    /// Add elements, creating the set when absent
    pub async fn set_add_elements<C, S, I, V>(
        &self,
        cache_name: C,
        set_name: S,
        elements: I,
    ) -> Result<SetAddElementsResponse>
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.send(SetAddElementsRequest::new(cache_name, set_name, elements))
            .await
    }

    pub async fn set_add_element<C, S, V>(
        &self,
        cache_name: C,
        set_name: S,
        element: V,
    ) -> Result<SetAddElementsResponse>
    where
        C: Into<String>,
        S: Into<String>,
        V: Into<Value>,
    {
        self.set_add_elements(cache_name, set_name, [element]).await
    }

    pub async fn set_remove_elements<C, S, I, V>(
        &self,
        cache_name: C,
        set_name: S,
        elements: I,
    ) -> Result<SetRemoveElementsResponse>
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.send(SetRemoveElementsRequest::new(cache_name, set_name, elements))
            .await
    }

    pub async fn set_remove_element<C, S, V>(
        &self,
        cache_name: C,
        set_name: S,
        element: V,
    ) -> Result<SetRemoveElementsResponse>
    where
        C: Into<String>,
        S: Into<String>,
        V: Into<Value>,
    {
        self.set_remove_elements(cache_name, set_name, [element])
            .await
    }

    pub async fn set_fetch<C, S>(&self, cache_name: C, set_name: S) -> Result<SetFetchResponse>
    where
        C: Into<String>,
        S: Into<String>,
    {
        self.send(SetFetchRequest::new(cache_name, set_name)).await
    }

    pub async fn set_length<C, S>(&self, cache_name: C, set_name: S) -> Result<SetLengthResponse>
    where
        C: Into<String>,
        S: Into<String>,
    {
        self.send(SetLengthRequest::new(cache_name, set_name)).await
    }

    /// Membership of each element, in the order given
    pub async fn set_contains_elements<C, S, I, V>(
        &self,
        cache_name: C,
        set_name: S,
        elements: I,
    ) -> Result<SetContainsElementsResponse>
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.send(SetContainsElementsRequest::new(
            cache_name, set_name, elements,
        ))
        .await
    }

    /// Remove and return one arbitrary element
    pub async fn set_pop<C, S>(&self, cache_name: C, set_name: S) -> Result<SetPopResponse>
    where
        C: Into<String>,
        S: Into<String>,
    {
        self.send(SetPopRequest::new(cache_name, set_name)).await
    }
}
