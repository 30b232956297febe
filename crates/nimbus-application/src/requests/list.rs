//! List requests

use super::validation::{
    prepare_collection_ttl, prepare_name, prepare_value, prepare_values, validate_index_range,
};
use super::{CacheRequest, RequestContext, into_values, unexpected_response};
use nimbus_domain::responses::{
    ListConcatenateBackResponse, ListConcatenateFrontResponse, ListFetchResponse,
    ListLengthResponse, ListPopBackResponse, ListPopFrontResponse, ListPushBackResponse,
    ListPushFrontResponse, ListRemoveValueResponse,
};
use nimbus_domain::wire::{DataRequest, DataResponse};
use nimbus_domain::{CollectionTtl, Result, Value};

const LIST_NAME: &str = "List name";

/// Push a value onto the front of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPushFrontRequest {
    pub cache_name: String,
    pub list_name: String,
    pub value: Value,
    /// Drop values from the back until the list has at most this many
    pub truncate_back_to_size: Option<u32>,
    pub ttl: CollectionTtl,
}

impl ListPushFrontRequest {
    pub fn new<C, L, V>(cache_name: C, list_name: L, value: V) -> Self
    where
        C: Into<String>,
        L: Into<String>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            list_name: list_name.into(),
            value: value.into(),
            truncate_back_to_size: None,
            ttl: CollectionTtl::default(),
        }
    }

    pub fn with_truncate_back_to_size(mut self, size: u32) -> Self {
        self.truncate_back_to_size = Some(size);
        self
    }

    pub fn with_ttl(mut self, ttl: CollectionTtl) -> Self {
        self.ttl = ttl;
        self
    }
}

impl CacheRequest for ListPushFrontRequest {
    type Response = ListPushFrontResponse;
    const NAME: &'static str = "ListPushFront";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::ListPushFront {
            list_name: prepare_name(&self.list_name, LIST_NAME)?,
            value: prepare_value(&self.value)?,
            truncate_back_to_size: self.truncate_back_to_size,
            ttl: prepare_collection_ttl(&self.ttl, context.default_ttl)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<ListPushFrontResponse> {
        match response {
            DataResponse::ListPushFront(list_length) => Ok(ListPushFrontResponse { list_length }),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Push a value onto the back of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPushBackRequest {
    pub cache_name: String,
    pub list_name: String,
    pub value: Value,
    /// Drop values from the front until the list has at most this many
    pub truncate_front_to_size: Option<u32>,
    pub ttl: CollectionTtl,
}

impl ListPushBackRequest {
    pub fn new<C, L, V>(cache_name: C, list_name: L, value: V) -> Self
    where
        C: Into<String>,
        L: Into<String>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            list_name: list_name.into(),
            value: value.into(),
            truncate_front_to_size: None,
            ttl: CollectionTtl::default(),
        }
    }

    pub fn with_truncate_front_to_size(mut self, size: u32) -> Self {
        self.truncate_front_to_size = Some(size);
        self
    }

    pub fn with_ttl(mut self, ttl: CollectionTtl) -> Self {
        self.ttl = ttl;
        self
    }
}

impl CacheRequest for ListPushBackRequest {
    type Response = ListPushBackResponse;
    const NAME: &'static str = "ListPushBack";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::ListPushBack {
            list_name: prepare_name(&self.list_name, LIST_NAME)?,
            value: prepare_value(&self.value)?,
            truncate_front_to_size: self.truncate_front_to_size,
            ttl: prepare_collection_ttl(&self.ttl, context.default_ttl)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<ListPushBackResponse> {
        match response {
            DataResponse::ListPushBack(list_length) => Ok(ListPushBackResponse { list_length }),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Prepend several values to a list, keeping their order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConcatenateFrontRequest {
    pub cache_name: String,
    pub list_name: String,
    pub values: Vec<Value>,
    pub truncate_back_to_size: Option<u32>,
    pub ttl: CollectionTtl,
}

impl ListConcatenateFrontRequest {
    pub fn new<C, L, I, V>(cache_name: C, list_name: L, values: I) -> Self
    where
        C: Into<String>,
        L: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            list_name: list_name.into(),
            values: into_values(values),
            truncate_back_to_size: None,
            ttl: CollectionTtl::default(),
        }
    }

    pub fn with_truncate_back_to_size(mut self, size: u32) -> Self {
        self.truncate_back_to_size = Some(size);
        self
    }

    pub fn with_ttl(mut self, ttl: CollectionTtl) -> Self {
        self.ttl = ttl;
        self
    }
}

impl CacheRequest for ListConcatenateFrontRequest {
    type Response = ListConcatenateFrontResponse;
    const NAME: &'static str = "ListConcatenateFront";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::ListConcatenateFront {
            list_name: prepare_name(&self.list_name, LIST_NAME)?,
            values: prepare_values(&self.values)?,
            truncate_back_to_size: self.truncate_back_to_size,
            ttl: prepare_collection_ttl(&self.ttl, context.default_ttl)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<ListConcatenateFrontResponse> {
        match response {
            DataResponse::ListConcatenateFront(list_length) => {
                Ok(ListConcatenateFrontResponse { list_length })
            }
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Append several values to a list, keeping their order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListConcatenateBackRequest {
    pub cache_name: String,
    pub list_name: String,
    pub values: Vec<Value>,
    pub truncate_front_to_size: Option<u32>,
    pub ttl: CollectionTtl,
}

impl ListConcatenateBackRequest {
    pub fn new<C, L, I, V>(cache_name: C, list_name: L, values: I) -> Self
    where
        C: Into<String>,
        L: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            list_name: list_name.into(),
            values: into_values(values),
            truncate_front_to_size: None,
            ttl: CollectionTtl::default(),
        }
    }

    pub fn with_truncate_front_to_size(mut self, size: u32) -> Self {
        self.truncate_front_to_size = Some(size);
        self
    }

    pub fn with_ttl(mut self, ttl: CollectionTtl) -> Self {
        self.ttl = ttl;
        self
    }
}

impl CacheRequest for ListConcatenateBackRequest {
    type Response = ListConcatenateBackResponse;
    const NAME: &'static str = "ListConcatenateBack";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::ListConcatenateBack {
            list_name: prepare_name(&self.list_name, LIST_NAME)?,
            values: prepare_values(&self.values)?,
            truncate_front_to_size: self.truncate_front_to_size,
            ttl: prepare_collection_ttl(&self.ttl, context.default_ttl)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<ListConcatenateBackResponse> {
        match response {
            DataResponse::ListConcatenateBack(list_length) => {
                Ok(ListConcatenateBackResponse { list_length })
            }
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Remove and return the first value of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPopFrontRequest {
    pub cache_name: String,
    pub list_name: String,
}

impl ListPopFrontRequest {
    pub fn new<C: Into<String>, L: Into<String>>(cache_name: C, list_name: L) -> Self {
        Self {
            cache_name: cache_name.into(),
            list_name: list_name.into(),
        }
    }
}

impl CacheRequest for ListPopFrontRequest {
    type Response = ListPopFrontResponse;
    const NAME: &'static str = "ListPopFront";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::ListPopFront {
            list_name: prepare_name(&self.list_name, LIST_NAME)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<ListPopFrontResponse> {
        match response {
            DataResponse::ListPopFront(Some(value)) => Ok(ListPopFrontResponse::Hit {
                value: Value::new(value),
            }),
            DataResponse::ListPopFront(None) => Ok(ListPopFrontResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Remove and return the last value of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListPopBackRequest {
    pub cache_name: String,
    pub list_name: String,
}

impl ListPopBackRequest {
    pub fn new<C: Into<String>, L: Into<String>>(cache_name: C, list_name: L) -> Self {
        Self {
            cache_name: cache_name.into(),
            list_name: list_name.into(),
        }
    }
}

impl CacheRequest for ListPopBackRequest {
    type Response = ListPopBackResponse;
    const NAME: &'static str = "ListPopBack";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::ListPopBack {
            list_name: prepare_name(&self.list_name, LIST_NAME)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<ListPopBackResponse> {
        match response {
            DataResponse::ListPopBack(Some(value)) => Ok(ListPopBackResponse::Hit {
                value: Value::new(value),
            }),
            DataResponse::ListPopBack(None) => Ok(ListPopBackResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Fetch a slice of a list
///
/// `start_index` is inclusive and `end_index` exclusive; negative indexes
/// count from the end. Missing bounds are unbounded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListFetchRequest {
    pub cache_name: String,
    pub list_name: String,
    pub start_index: Option<i32>,
    pub end_index: Option<i32>,
}

impl ListFetchRequest {
    pub fn new<C: Into<String>, L: Into<String>>(cache_name: C, list_name: L) -> Self {
        Self {
            cache_name: cache_name.into(),
            list_name: list_name.into(),
            start_index: None,
            end_index: None,
        }
    }

    pub fn with_start_index(mut self, start: i32) -> Self {
        self.start_index = Some(start);
        self
    }

    pub fn with_end_index(mut self, end: i32) -> Self {
        self.end_index = Some(end);
        self
    }
}

impl CacheRequest for ListFetchRequest {
    type Response = ListFetchResponse;
    const NAME: &'static str = "ListFetch";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        let list_name = prepare_name(&self.list_name, LIST_NAME)?;
        validate_index_range(self.start_index, self.end_index, "index")?;
        Ok(DataRequest::ListFetch {
            list_name,
            start_index: self.start_index,
            end_index: self.end_index,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<ListFetchResponse> {
        match response {
            DataResponse::ListFetch(Some(values)) => Ok(ListFetchResponse::Hit {
                values: values.into_iter().map(Value::new).collect(),
            }),
            DataResponse::ListFetch(None) => Ok(ListFetchResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Count the values of a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListLengthRequest {
    pub cache_name: String,
    pub list_name: String,
}

impl ListLengthRequest {
    pub fn new<C: Into<String>, L: Into<String>>(cache_name: C, list_name: L) -> Self {
        Self {
            cache_name: cache_name.into(),
            list_name: list_name.into(),
        }
    }
}

impl CacheRequest for ListLengthRequest {
    type Response = ListLengthResponse;
    const NAME: &'static str = "ListLength";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::ListLength {
            list_name: prepare_name(&self.list_name, LIST_NAME)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<ListLengthResponse> {
        match response {
            DataResponse::ListLength(Some(length)) => Ok(ListLengthResponse::Hit { length }),
            DataResponse::ListLength(None) => Ok(ListLengthResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Remove every occurrence of a value from a list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRemoveValueRequest {
    pub cache_name: String,
    pub list_name: String,
    pub value: Value,
}

impl ListRemoveValueRequest {
    pub fn new<C, L, V>(cache_name: C, list_name: L, value: V) -> Self
    where
        C: Into<String>,
        L: Into<String>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            list_name: list_name.into(),
            value: value.into(),
        }
    }
}

impl CacheRequest for ListRemoveValueRequest {
    type Response = ListRemoveValueResponse;
    const NAME: &'static str = "ListRemoveValue";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::ListRemove {
            list_name: prepare_name(&self.list_name, LIST_NAME)?,
            value: prepare_value(&self.value)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<ListRemoveValueResponse> {
        match response {
            DataResponse::ListRemove => Ok(ListRemoveValueResponse),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}
