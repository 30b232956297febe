//! Scalar item requests

use super::validation::{prepare_key, prepare_keys, prepare_ttl, prepare_value};
use super::{CacheRequest, RequestContext, unexpected_response};
use nimbus_domain::responses::{
    DeleteResponse, GetBatchResponse, GetResponse, IncrementResponse, ItemGetTtlResponse,
    ItemGetTypeResponse, KeysExistResponse, SetBatchResponse, SetIfResponse, SetResponse,
};
use nimbus_domain::wire::{DataRequest, DataResponse, SetCondition};
use nimbus_domain::{Error, Result, Value};
use std::time::Duration;

/// Fetch a scalar item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetRequest {
    pub cache_name: String,
    pub key: Value,
}

impl GetRequest {
    pub fn new<C: Into<String>, K: Into<Value>>(cache_name: C, key: K) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
        }
    }
}

impl CacheRequest for GetRequest {
    type Response = GetResponse;
    const NAME: &'static str = "Get";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::Get {
            key: prepare_key(&self.key)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<GetResponse> {
        match response {
            DataResponse::Get(Some(value)) => Ok(GetResponse::Hit {
                value: Value::new(value),
            }),
            DataResponse::Get(None) => Ok(GetResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Store a scalar item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetRequest {
    pub cache_name: String,
    pub key: Value,
    pub value: Value,
    /// Item TTL; `None` uses the client default
    pub ttl: Option<Duration>,
}

impl SetRequest {
    pub fn new<C: Into<String>, K: Into<Value>, V: Into<Value>>(
        cache_name: C,
        key: K,
        value: V,
    ) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
            value: value.into(),
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

impl CacheRequest for SetRequest {
    type Response = SetResponse;
    const NAME: &'static str = "Set";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::Set {
            key: prepare_key(&self.key)?,
            value: prepare_value(&self.value)?,
            ttl_milliseconds: prepare_ttl(self.ttl, context.default_ttl)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SetResponse> {
        match response {
            DataResponse::Set => Ok(SetResponse),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Condition guarding a conditional write
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetIfCondition {
    Absent,
    Present,
    Equal(Value),
    NotEqual(Value),
    PresentAndNotEqual(Value),
    AbsentOrEqual(Value),
}

impl SetIfCondition {
    fn to_wire(&self) -> Result<SetCondition> {
        Ok(match self {
            Self::Absent => SetCondition::Absent,
            Self::Present => SetCondition::Present,
            Self::Equal(v) => SetCondition::Equal(prepare_value(v)?),
            Self::NotEqual(v) => SetCondition::NotEqual(prepare_value(v)?),
            Self::PresentAndNotEqual(v) => SetCondition::PresentAndNotEqual(prepare_value(v)?),
            Self::AbsentOrEqual(v) => SetCondition::AbsentOrEqual(prepare_value(v)?),
        })
    }
}

/// Store a scalar item only when a condition holds
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetIfRequest {
    pub cache_name: String,
    pub key: Value,
    pub value: Value,
    pub condition: SetIfCondition,
    pub ttl: Option<Duration>,
}

impl SetIfRequest {
    pub fn new<C: Into<String>, K: Into<Value>, V: Into<Value>>(
        cache_name: C,
        key: K,
        value: V,
        condition: SetIfCondition,
    ) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
            value: value.into(),
            condition,
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

impl CacheRequest for SetIfRequest {
    type Response = SetIfResponse;
    const NAME: &'static str = "SetIf";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::SetIf {
            key: prepare_key(&self.key)?,
            value: prepare_value(&self.value)?,
            ttl_milliseconds: prepare_ttl(self.ttl, context.default_ttl)?,
            condition: self.condition.to_wire()?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SetIfResponse> {
        match response {
            DataResponse::SetIf(true) => Ok(SetIfResponse::Stored),
            DataResponse::SetIf(false) => Ok(SetIfResponse::NotStored),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Remove a scalar item or collection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub cache_name: String,
    pub key: Value,
}

impl DeleteRequest {
    pub fn new<C: Into<String>, K: Into<Value>>(cache_name: C, key: K) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
        }
    }
}

impl CacheRequest for DeleteRequest {
    type Response = DeleteResponse;
    const NAME: &'static str = "Delete";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::Delete {
            key: prepare_key(&self.key)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<DeleteResponse> {
        match response {
            DataResponse::Delete => Ok(DeleteResponse),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Add to an integer item, creating it at zero when absent
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncrementRequest {
    pub cache_name: String,
    pub key: Value,
    pub amount: i64,
    pub ttl: Option<Duration>,
}

impl IncrementRequest {
    pub fn new<C: Into<String>, K: Into<Value>>(cache_name: C, key: K, amount: i64) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
            amount,
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

impl CacheRequest for IncrementRequest {
    type Response = IncrementResponse;
    const NAME: &'static str = "Increment";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::Increment {
            key: prepare_key(&self.key)?,
            amount: self.amount,
            ttl_milliseconds: prepare_ttl(self.ttl, context.default_ttl)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<IncrementResponse> {
        match response {
            DataResponse::Increment(value) => Ok(IncrementResponse { value }),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Fetch several scalar items in one call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetBatchRequest {
    pub cache_name: String,
    pub keys: Vec<Value>,
}

impl GetBatchRequest {
    pub fn new<C, I, K>(cache_name: C, keys: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = K>,
        K: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl CacheRequest for GetBatchRequest {
    type Response = GetBatchResponse;
    const NAME: &'static str = "GetBatch";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::GetBatch {
            keys: prepare_keys(&self.keys)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<GetBatchResponse> {
        match response {
            DataResponse::GetBatch(values) if values.len() == self.keys.len() => {
                let results = self
                    .keys
                    .iter()
                    .cloned()
                    .zip(values)
                    .map(|(key, value)| {
                        let response = match value {
                            Some(v) => GetResponse::Hit {
                                value: Value::new(v),
                            },
                            None => GetResponse::Miss,
                        };
                        (key, response)
                    })
                    .collect();
                Ok(GetBatchResponse { results })
            }
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Store several scalar items in one call, sharing one TTL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetBatchRequest {
    pub cache_name: String,
    pub items: Vec<(Value, Value)>,
    pub ttl: Option<Duration>,
}

impl SetBatchRequest {
    pub fn new<C, I, K, V>(cache_name: C, items: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = (K, V)>,
        K: Into<Value>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            items: items
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            ttl: None,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = Some(ttl);
        self
    }
}

impl CacheRequest for SetBatchRequest {
    type Response = SetBatchResponse;
    const NAME: &'static str = "SetBatch";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        if self.items.is_empty() {
            return Err(Error::invalid_argument("items cannot be empty"));
        }
        let items = self
            .items
            .iter()
            .map(|(k, v)| Ok((prepare_key(k)?, prepare_value(v)?)))
            .collect::<Result<Vec<_>>>()?;
        Ok(DataRequest::SetBatch {
            items,
            ttl_milliseconds: prepare_ttl(self.ttl, context.default_ttl)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SetBatchResponse> {
        match response {
            DataResponse::SetBatch => Ok(SetBatchResponse),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Check which keys exist
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeysExistRequest {
    pub cache_name: String,
    pub keys: Vec<Value>,
}

impl KeysExistRequest {
    pub fn new<C, I, K>(cache_name: C, keys: I) -> Self
    where
        C: Into<String>,
        I: IntoIterator<Item = K>,
        K: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            keys: keys.into_iter().map(Into::into).collect(),
        }
    }
}

impl CacheRequest for KeysExistRequest {
    type Response = KeysExistResponse;
    const NAME: &'static str = "KeysExist";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::KeysExist {
            keys: prepare_keys(&self.keys)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<KeysExistResponse> {
        match response {
            DataResponse::KeysExist(flags) if flags.len() == self.keys.len() => {
                Ok(KeysExistResponse {
                    exists: self.keys.iter().cloned().zip(flags).collect(),
                })
            }
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Report the type of the item under a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGetTypeRequest {
    pub cache_name: String,
    pub key: Value,
}

impl ItemGetTypeRequest {
    pub fn new<C: Into<String>, K: Into<Value>>(cache_name: C, key: K) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
        }
    }
}

impl CacheRequest for ItemGetTypeRequest {
    type Response = ItemGetTypeResponse;
    const NAME: &'static str = "ItemGetType";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::ItemGetType {
            key: prepare_key(&self.key)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<ItemGetTypeResponse> {
        match response {
            DataResponse::ItemGetType(Some(item_type)) => {
                Ok(ItemGetTypeResponse::Hit { item_type })
            }
            DataResponse::ItemGetType(None) => Ok(ItemGetTypeResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Report the remaining TTL of the item under a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemGetTtlRequest {
    pub cache_name: String,
    pub key: Value,
}

impl ItemGetTtlRequest {
    pub fn new<C: Into<String>, K: Into<Value>>(cache_name: C, key: K) -> Self {
        Self {
            cache_name: cache_name.into(),
            key: key.into(),
        }
    }
}

impl CacheRequest for ItemGetTtlRequest {
    type Response = ItemGetTtlResponse;
    const NAME: &'static str = "ItemGetTtl";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::ItemGetTtl {
            key: prepare_key(&self.key)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<ItemGetTtlResponse> {
        match response {
            DataResponse::ItemGetTtl(Some(millis)) => Ok(ItemGetTtlResponse::Hit {
                remaining_ttl: Duration::from_millis(millis),
            }),
            DataResponse::ItemGetTtl(None) => Ok(ItemGetTtlResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}
