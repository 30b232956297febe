//! Dictionary operations

use super::CacheClient;
use crate::requests::{
    DictionaryFetchRequest, DictionaryGetFieldsRequest, DictionaryIncrementRequest,
    DictionaryLengthRequest, DictionaryRemoveFieldsRequest, DictionarySetFieldsRequest,
};
use nimbus_domain::responses::{
    DictionaryFetchResponse, DictionaryGetFieldResponse, DictionaryGetFieldsResponse,
    DictionaryIncrementResponse, DictionaryLengthResponse, DictionaryRemoveFieldsResponse,
    DictionarySetFieldsResponse,
};
use nimbus_domain::{Error, Result, Value};

impl CacheClient {
    /// Set fields, creating the dictionary when absent
    pub async fn dictionary_set_fields<C, D, I, F, V>(
        &self,
        cache_name: C,
        dictionary_name: D,
        items: I,
    ) -> Result<DictionarySetFieldsResponse>
    where
        C: Into<String>,
        D: Into<String>,
        I: IntoIterator<Item = (F, V)>,
        F: Into<Value>,
        V: Into<Value>,
    {
        self.send(DictionarySetFieldsRequest::new(
            cache_name,
            dictionary_name,
            items,
        ))
        .await
    }

    pub async fn dictionary_set_field<C, D, F, V>(
        &self,
        cache_name: C,
        dictionary_name: D,
        field: F,
        value: V,
    ) -> Result<DictionarySetFieldsResponse>
    where
        C: Into<String>,
        D: Into<String>,
        F: Into<Value>,
        V: Into<Value>,
    {
        self.dictionary_set_fields(cache_name, dictionary_name, [(field, value)])
            .await
    }

    pub async fn dictionary_get_fields<C, D, I, F>(
        &self,
        cache_name: C,
        dictionary_name: D,
        fields: I,
    ) -> Result<DictionaryGetFieldsResponse>
    where
        C: Into<String>,
        D: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<Value>,
    {
        self.send(DictionaryGetFieldsRequest::new(
            cache_name,
            dictionary_name,
            fields,
        ))
        .await
    }

    /// Look up one field; a missing dictionary is a miss on the field
    pub async fn dictionary_get_field<C, D, F>(
        &self,
        cache_name: C,
        dictionary_name: D,
        field: F,
    ) -> Result<DictionaryGetFieldResponse>
    where
        C: Into<String>,
        D: Into<String>,
        F: Into<Value>,
    {
        let field = field.into();
        let response = self
            .dictionary_get_fields(cache_name, dictionary_name, [field.clone()])
            .await?;
        match response {
            DictionaryGetFieldsResponse::Hit { responses } => responses
                .into_iter()
                .next()
                .ok_or_else(|| Error::internal_server("DictionaryGetField request got no field")),
            DictionaryGetFieldsResponse::Miss => Ok(DictionaryGetFieldResponse::Miss { field }),
        }
    }

    pub async fn dictionary_fetch<C, D>(
        &self,
        cache_name: C,
        dictionary_name: D,
    ) -> Result<DictionaryFetchResponse>
    where
        C: Into<String>,
        D: Into<String>,
    {
        self.send(DictionaryFetchRequest::new(cache_name, dictionary_name))
            .await
    }

    /// Add to an integer field, treating a missing field as zero
    pub async fn dictionary_increment<C, D, F>(
        &self,
        cache_name: C,
        dictionary_name: D,
        field: F,
        amount: i64,
    ) -> Result<DictionaryIncrementResponse>
    where
        C: Into<String>,
        D: Into<String>,
        F: Into<Value>,
    {
        self.send(DictionaryIncrementRequest::new(
            cache_name,
            dictionary_name,
            field,
            amount,
        ))
        .await
    }

    pub async fn dictionary_remove_fields<C, D, I, F>(
        &self,
        cache_name: C,
        dictionary_name: D,
        fields: I,
    ) -> Result<DictionaryRemoveFieldsResponse>
    where
        C: Into<String>,
        D: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<Value>,
    {
        self.send(DictionaryRemoveFieldsRequest::new(
            cache_name,
            dictionary_name,
            fields,
        ))
        .await
    }

    pub async fn dictionary_remove_field<C, D, F>(
        &self,
        cache_name: C,
        dictionary_name: D,
        field: F,
    ) -> Result<DictionaryRemoveFieldsResponse>
    where
        C: Into<String>,
        D: Into<String>,
        F: Into<Value>,
    {
        self.dictionary_remove_fields(cache_name, dictionary_name, [field])
            .await
    }

    pub async fn dictionary_length<C, D>(
        &self,
        cache_name: C,
        dictionary_name: D,
    ) -> Result<DictionaryLengthResponse>
    where
        C: Into<String>,
        D: Into<String>,
    {
        self.send(DictionaryLengthRequest::new(cache_name, dictionary_name))
            .await
    }
}
