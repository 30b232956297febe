//! Dictionary requests

use super::validation::{
    prepare_collection_ttl, prepare_field, prepare_fields, prepare_name, validate_amount_i64,
};
use super::{CacheRequest, RequestContext, into_values, unexpected_response};
use nimbus_domain::responses::{
    DictionaryFetchResponse, DictionaryGetFieldResponse, DictionaryGetFieldsResponse,
    DictionaryIncrementResponse, DictionaryLengthResponse, DictionaryRemoveFieldsResponse,
    DictionarySetFieldsResponse,
};
use nimbus_domain::wire::{DataRequest, DataResponse};
use nimbus_domain::{CollectionTtl, Result, Value};

const DICTIONARY_NAME: &str = "Dictionary name";

/// Set fields of a dictionary, creating it when absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionarySetFieldsRequest {
    pub cache_name: String,
    pub dictionary_name: String,
    pub items: Vec<(Value, Value)>,
    pub ttl: CollectionTtl,
}

impl DictionarySetFieldsRequest {
    pub fn new<C, D, I, F, V>(cache_name: C, dictionary_name: D, items: I) -> Self
    where
        C: Into<String>,
        D: Into<String>,
        I: IntoIterator<Item = (F, V)>,
        F: Into<Value>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            dictionary_name: dictionary_name.into(),
            items: items
                .into_iter()
                .map(|(f, v)| (f.into(), v.into()))
                .collect(),
            ttl: CollectionTtl::default(),
        }
    }

    pub fn with_ttl(mut self, ttl: CollectionTtl) -> Self {
        self.ttl = ttl;
        self
    }
}

impl CacheRequest for DictionarySetFieldsRequest {
    type Response = DictionarySetFieldsResponse;
    const NAME: &'static str = "DictionarySetFields";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        let dictionary_name = prepare_name(&self.dictionary_name, DICTIONARY_NAME)?;
        let items = self
            .items
            .iter()
            .map(|(field, value)| Ok((prepare_field(field)?, value.as_bytes().to_vec())))
            .collect::<Result<Vec<_>>>()?;
        Ok(DataRequest::DictionarySet {
            dictionary_name,
            items,
            ttl: prepare_collection_ttl(&self.ttl, context.default_ttl)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<DictionarySetFieldsResponse> {
        match response {
            DataResponse::DictionarySet => Ok(DictionarySetFieldsResponse),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Look up several fields of a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryGetFieldsRequest {
    pub cache_name: String,
    pub dictionary_name: String,
    pub fields: Vec<Value>,
}

impl DictionaryGetFieldsRequest {
    pub fn new<C, D, I, F>(cache_name: C, dictionary_name: D, fields: I) -> Self
    where
        C: Into<String>,
        D: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            dictionary_name: dictionary_name.into(),
            fields: into_values(fields),
        }
    }
}

impl CacheRequest for DictionaryGetFieldsRequest {
    type Response = DictionaryGetFieldsResponse;
    const NAME: &'static str = "DictionaryGetFields";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::DictionaryGet {
            dictionary_name: prepare_name(&self.dictionary_name, DICTIONARY_NAME)?,
            fields: prepare_fields(&self.fields)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<DictionaryGetFieldsResponse> {
        match response {
            DataResponse::DictionaryGet(Some(values)) if values.len() == self.fields.len() => {
                let responses = self
                    .fields
                    .iter()
                    .cloned()
                    .zip(values)
                    .map(|(field, value)| match value {
                        Some(v) => DictionaryGetFieldResponse::Hit {
                            field,
                            value: Value::new(v),
                        },
                        None => DictionaryGetFieldResponse::Miss { field },
                    })
                    .collect();
                Ok(DictionaryGetFieldsResponse::Hit { responses })
            }
            DataResponse::DictionaryGet(None) => Ok(DictionaryGetFieldsResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Fetch every field of a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryFetchRequest {
    pub cache_name: String,
    pub dictionary_name: String,
}

impl DictionaryFetchRequest {
    pub fn new<C: Into<String>, D: Into<String>>(cache_name: C, dictionary_name: D) -> Self {
        Self {
            cache_name: cache_name.into(),
            dictionary_name: dictionary_name.into(),
        }
    }
}

impl CacheRequest for DictionaryFetchRequest {
    type Response = DictionaryFetchResponse;
    const NAME: &'static str = "DictionaryFetch";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::DictionaryFetch {
            dictionary_name: prepare_name(&self.dictionary_name, DICTIONARY_NAME)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<DictionaryFetchResponse> {
        match response {
            DataResponse::DictionaryFetch(Some(items)) => Ok(DictionaryFetchResponse::Hit {
                items: items
                    .into_iter()
                    .map(|(f, v)| (Value::new(f), Value::new(v)))
                    .collect(),
            }),
            DataResponse::DictionaryFetch(None) => Ok(DictionaryFetchResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Add to an integer field of a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryIncrementRequest {
    pub cache_name: String,
    pub dictionary_name: String,
    pub field: Value,
    pub amount: i64,
    pub ttl: CollectionTtl,
}

impl DictionaryIncrementRequest {
    pub fn new<C, D, F>(cache_name: C, dictionary_name: D, field: F, amount: i64) -> Self
    where
        C: Into<String>,
        D: Into<String>,
        F: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            dictionary_name: dictionary_name.into(),
            field: field.into(),
            amount,
            ttl: CollectionTtl::default(),
        }
    }

    pub fn with_ttl(mut self, ttl: CollectionTtl) -> Self {
        self.ttl = ttl;
        self
    }
}

impl CacheRequest for DictionaryIncrementRequest {
    type Response = DictionaryIncrementResponse;
    const NAME: &'static str = "DictionaryIncrement";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        let dictionary_name = prepare_name(&self.dictionary_name, DICTIONARY_NAME)?;
        let field = prepare_field(&self.field)?;
        let ttl = prepare_collection_ttl(&self.ttl, context.default_ttl)?;
        validate_amount_i64(self.amount)?;
        Ok(DataRequest::DictionaryIncrement {
            dictionary_name,
            field,
            amount: self.amount,
            ttl,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<DictionaryIncrementResponse> {
        match response {
            DataResponse::DictionaryIncrement(value) => Ok(DictionaryIncrementResponse { value }),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Remove fields from a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryRemoveFieldsRequest {
    pub cache_name: String,
    pub dictionary_name: String,
    pub fields: Vec<Value>,
}

impl DictionaryRemoveFieldsRequest {
    pub fn new<C, D, I, F>(cache_name: C, dictionary_name: D, fields: I) -> Self
    where
        C: Into<String>,
        D: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            dictionary_name: dictionary_name.into(),
            fields: into_values(fields),
        }
    }
}

impl CacheRequest for DictionaryRemoveFieldsRequest {
    type Response = DictionaryRemoveFieldsResponse;
    const NAME: &'static str = "DictionaryRemoveFields";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::DictionaryDelete {
            dictionary_name: prepare_name(&self.dictionary_name, DICTIONARY_NAME)?,
            fields: prepare_fields(&self.fields)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<DictionaryRemoveFieldsResponse> {
        match response {
            DataResponse::DictionaryDelete => Ok(DictionaryRemoveFieldsResponse),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Count the fields of a dictionary
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DictionaryLengthRequest {
    pub cache_name: String,
    pub dictionary_name: String,
}

impl DictionaryLengthRequest {
    pub fn new<C: Into<String>, D: Into<String>>(cache_name: C, dictionary_name: D) -> Self {
        Self {
            cache_name: cache_name.into(),
            dictionary_name: dictionary_name.into(),
        }
    }
}

impl CacheRequest for DictionaryLengthRequest {
    type Response = DictionaryLengthResponse;
    const NAME: &'static str = "DictionaryLength";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::DictionaryLength {
            dictionary_name: prepare_name(&self.dictionary_name, DICTIONARY_NAME)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<DictionaryLengthResponse> {
        match response {
            DataResponse::DictionaryLength(Some(length)) => {
                Ok(DictionaryLengthResponse::Hit { length })
            }
            DataResponse::DictionaryLength(None) => Ok(DictionaryLengthResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}
