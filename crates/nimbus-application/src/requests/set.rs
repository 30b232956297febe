//! Set requests

use super::validation::{prepare_collection_ttl, prepare_name, prepare_values};
use super::{CacheRequest, RequestContext, into_values, unexpected_response};
use crate::constants::DEFAULT_SET_POP_COUNT;
use nimbus_domain::responses::{
    SetAddElementsResponse, SetContainsElementsResponse, SetFetchResponse, SetLengthResponse,
    SetPopResponse, SetRemoveElementsResponse,
};
use nimbus_domain::wire::{DataRequest, DataResponse};
use nimbus_domain::{CollectionTtl, Error, Result, Value};

const SET_NAME: &str = "Set name";

/// Add elements to a set, creating it when absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetAddElementsRequest {
    pub cache_name: String,
    pub set_name: String,
    pub elements: Vec<Value>,
    pub ttl: CollectionTtl,
}

impl SetAddElementsRequest {
    pub fn new<C, S, I, V>(cache_name: C, set_name: S, elements: I) -> Self
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            elements: into_values(elements),
            ttl: CollectionTtl::default(),
        }
    }

    pub fn with_ttl(mut self, ttl: CollectionTtl) -> Self {
        self.ttl = ttl;
        self
    }
}

impl CacheRequest for SetAddElementsRequest {
    type Response = SetAddElementsResponse;
    const NAME: &'static str = "SetAddElements";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::SetUnion {
            set_name: prepare_name(&self.set_name, SET_NAME)?,
            elements: prepare_values(&self.elements)?,
            ttl: prepare_collection_ttl(&self.ttl, context.default_ttl)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SetAddElementsResponse> {
        match response {
            DataResponse::SetUnion => Ok(SetAddElementsResponse),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Remove elements from a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRemoveElementsRequest {
    pub cache_name: String,
    pub set_name: String,
    pub elements: Vec<Value>,
}

impl SetRemoveElementsRequest {
    pub fn new<C, S, I, V>(cache_name: C, set_name: S, elements: I) -> Self
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            elements: into_values(elements),
        }
    }
}

impl CacheRequest for SetRemoveElementsRequest {
    type Response = SetRemoveElementsResponse;
    const NAME: &'static str = "SetRemoveElements";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::SetDifference {
            set_name: prepare_name(&self.set_name, SET_NAME)?,
            elements: prepare_values(&self.elements)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SetRemoveElementsResponse> {
        match response {
            DataResponse::SetDifference => Ok(SetRemoveElementsResponse),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Fetch every element of a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetFetchRequest {
    pub cache_name: String,
    pub set_name: String,
}

impl SetFetchRequest {
    pub fn new<C: Into<String>, S: Into<String>>(cache_name: C, set_name: S) -> Self {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
        }
    }
}

impl CacheRequest for SetFetchRequest {
    type Response = SetFetchResponse;
    const NAME: &'static str = "SetFetch";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::SetFetch {
            set_name: prepare_name(&self.set_name, SET_NAME)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SetFetchResponse> {
        match response {
            DataResponse::SetFetch(Some(elements)) => Ok(SetFetchResponse::Hit {
                elements: elements.into_iter().map(Value::new).collect(),
            }),
            DataResponse::SetFetch(None) => Ok(SetFetchResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Count the elements of a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetLengthRequest {
    pub cache_name: String,
    pub set_name: String,
}

impl SetLengthRequest {
    pub fn new<C: Into<String>, S: Into<String>>(cache_name: C, set_name: S) -> Self {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
        }
    }
}

impl CacheRequest for SetLengthRequest {
    type Response = SetLengthResponse;
    const NAME: &'static str = "SetLength";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::SetLength {
            set_name: prepare_name(&self.set_name, SET_NAME)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SetLengthResponse> {
        match response {
            DataResponse::SetLength(Some(length)) => Ok(SetLengthResponse::Hit { length }),
            DataResponse::SetLength(None) => Ok(SetLengthResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Test membership of several elements
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetContainsElementsRequest {
    pub cache_name: String,
    pub set_name: String,
    pub elements: Vec<Value>,
}

impl SetContainsElementsRequest {
    pub fn new<C, S, I, V>(cache_name: C, set_name: S, elements: I) -> Self
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            elements: into_values(elements),
        }
    }
}

impl CacheRequest for SetContainsElementsRequest {
    type Response = SetContainsElementsResponse;
    const NAME: &'static str = "SetContainsElements";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::SetContains {
            set_name: prepare_name(&self.set_name, SET_NAME)?,
            elements: prepare_values(&self.elements)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SetContainsElementsResponse> {
        match response {
            DataResponse::SetContains(Some(contains)) if contains.len() == self.elements.len() => {
                Ok(SetContainsElementsResponse::Hit { contains })
            }
            DataResponse::SetContains(None) => Ok(SetContainsElementsResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Remove and return arbitrary elements of a set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetPopRequest {
    pub cache_name: String,
    pub set_name: String,
    /// Elements to pop; `None` pops one
    pub count: Option<u32>,
}

impl SetPopRequest {
    pub fn new<C: Into<String>, S: Into<String>>(cache_name: C, set_name: S) -> Self {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            count: None,
        }
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

impl CacheRequest for SetPopRequest {
    type Response = SetPopResponse;
    const NAME: &'static str = "SetPop";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        let set_name = prepare_name(&self.set_name, SET_NAME)?;
        let count = self.count.unwrap_or(DEFAULT_SET_POP_COUNT);
        if count == 0 {
            return Err(Error::invalid_argument("count must be greater than 0"));
        }
        Ok(DataRequest::SetPop { set_name, count })
    }

    fn interpret(&self, response: DataResponse) -> Result<SetPopResponse> {
        match response {
            DataResponse::SetPop(Some(elements)) => Ok(SetPopResponse::Hit {
                elements: elements.into_iter().map(Value::new).collect(),
            }),
            DataResponse::SetPop(None) => Ok(SetPopResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}
