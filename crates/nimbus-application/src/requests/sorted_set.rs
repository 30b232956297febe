//! Sorted set requests

use super::validation::{
    prepare_collection_ttl, prepare_name, prepare_value, prepare_values, validate_amount_f64,
    validate_index_range, validate_score_range,
};
use super::{CacheRequest, RequestContext, into_values, unexpected_response};
use nimbus_domain::responses::{
    SortedSetFetchResponse, SortedSetGetRankResponse, SortedSetGetScoreResponse,
    SortedSetGetScoresResponse, SortedSetIncrementScoreResponse, SortedSetLengthByScoreResponse,
    SortedSetLengthResponse, SortedSetPutElementsResponse, SortedSetRemoveElementsResponse,
};
use nimbus_domain::wire::{DataRequest, DataResponse, SortedSetRange};
use nimbus_domain::{CollectionTtl, Error, Result, SortedSetElement, SortedSetOrder, Value};

const SET_NAME: &str = "Sorted set name";

fn into_elements(elements: Vec<(Vec<u8>, f64)>) -> Vec<SortedSetElement> {
    elements
        .into_iter()
        .map(|(value, score)| SortedSetElement::new(value, score))
        .collect()
}

/// Add elements to a sorted set or replace their scores
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSetPutElementsRequest {
    pub cache_name: String,
    pub set_name: String,
    pub elements: Vec<SortedSetElement>,
    pub ttl: CollectionTtl,
}

impl SortedSetPutElementsRequest {
    pub fn new<C, S, I>(cache_name: C, set_name: S, elements: I) -> Self
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = SortedSetElement>,
    {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            elements: elements.into_iter().collect(),
            ttl: CollectionTtl::default(),
        }
    }

    pub fn with_ttl(mut self, ttl: CollectionTtl) -> Self {
        self.ttl = ttl;
        self
    }
}

impl CacheRequest for SortedSetPutElementsRequest {
    type Response = SortedSetPutElementsResponse;
    const NAME: &'static str = "SortedSetPutElements";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        let set_name = prepare_name(&self.set_name, SET_NAME)?;
        let elements = self
            .elements
            .iter()
            .map(|e| Ok((prepare_value(&e.value)?, e.score)))
            .collect::<Result<Vec<_>>>()?;
        Ok(DataRequest::SortedSetPut {
            set_name,
            elements,
            ttl: prepare_collection_ttl(&self.ttl, context.default_ttl)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SortedSetPutElementsResponse> {
        match response {
            DataResponse::SortedSetPut => Ok(SortedSetPutElementsResponse),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Fetch elements of a sorted set by rank
///
/// `start_rank` is inclusive and `end_rank` exclusive; negative ranks count
/// from the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedSetFetchByRankRequest {
    pub cache_name: String,
    pub set_name: String,
    pub order: SortedSetOrder,
    pub start_rank: Option<i32>,
    pub end_rank: Option<i32>,
}

impl SortedSetFetchByRankRequest {
    pub fn new<C: Into<String>, S: Into<String>>(cache_name: C, set_name: S) -> Self {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            order: SortedSetOrder::Ascending,
            start_rank: None,
            end_rank: None,
        }
    }

    pub fn with_order(mut self, order: SortedSetOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_start_rank(mut self, start: i32) -> Self {
        self.start_rank = Some(start);
        self
    }

    pub fn with_end_rank(mut self, end: i32) -> Self {
        self.end_rank = Some(end);
        self
    }
}

impl CacheRequest for SortedSetFetchByRankRequest {
    type Response = SortedSetFetchResponse;
    const NAME: &'static str = "SortedSetFetchByRank";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        let set_name = prepare_name(&self.set_name, SET_NAME)?;
        validate_index_range(self.start_rank, self.end_rank, "rank")?;
        Ok(DataRequest::SortedSetFetch {
            set_name,
            order: self.order,
            range: SortedSetRange::ByIndex {
                start: self.start_rank,
                end: self.end_rank,
            },
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SortedSetFetchResponse> {
        interpret_fetch(Self::NAME, response)
    }
}

/// Fetch elements of a sorted set by score
///
/// Score bounds are inclusive. `offset` skips matching elements and `count`
/// caps how many are returned.
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSetFetchByScoreRequest {
    pub cache_name: String,
    pub set_name: String,
    pub order: SortedSetOrder,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    pub offset: Option<u32>,
    pub count: Option<u32>,
}

impl SortedSetFetchByScoreRequest {
    pub fn new<C: Into<String>, S: Into<String>>(cache_name: C, set_name: S) -> Self {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            order: SortedSetOrder::Ascending,
            min_score: None,
            max_score: None,
            offset: None,
            count: None,
        }
    }

    pub fn with_order(mut self, order: SortedSetOrder) -> Self {
        self.order = order;
        self
    }

    pub fn with_min_score(mut self, min: f64) -> Self {
        self.min_score = Some(min);
        self
    }

    pub fn with_max_score(mut self, max: f64) -> Self {
        self.max_score = Some(max);
        self
    }

    pub fn with_offset(mut self, offset: u32) -> Self {
        self.offset = Some(offset);
        self
    }

    pub fn with_count(mut self, count: u32) -> Self {
        self.count = Some(count);
        self
    }
}

impl CacheRequest for SortedSetFetchByScoreRequest {
    type Response = SortedSetFetchResponse;
    const NAME: &'static str = "SortedSetFetchByScore";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        let set_name = prepare_name(&self.set_name, SET_NAME)?;
        validate_score_range(self.min_score, self.max_score)?;
        if self.count == Some(0) {
            return Err(Error::invalid_argument("count must be greater than 0"));
        }
        Ok(DataRequest::SortedSetFetch {
            set_name,
            order: self.order,
            range: SortedSetRange::ByScore {
                min: self.min_score,
                max: self.max_score,
                offset: self.offset.unwrap_or(0),
                count: self.count,
            },
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SortedSetFetchResponse> {
        interpret_fetch(Self::NAME, response)
    }
}

fn interpret_fetch(name: &str, response: DataResponse) -> Result<SortedSetFetchResponse> {
    match response {
        DataResponse::SortedSetFetch(Some(elements)) => Ok(SortedSetFetchResponse::Hit {
            elements: into_elements(elements),
        }),
        DataResponse::SortedSetFetch(None) => Ok(SortedSetFetchResponse::Miss),
        other => Err(unexpected_response(name, &other)),
    }
}

/// Look up the scores of several values
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedSetGetScoresRequest {
    pub cache_name: String,
    pub set_name: String,
    pub values: Vec<Value>,
}

impl SortedSetGetScoresRequest {
    pub fn new<C, S, I, V>(cache_name: C, set_name: S, values: I) -> Self
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            values: into_values(values),
        }
    }
}

impl CacheRequest for SortedSetGetScoresRequest {
    type Response = SortedSetGetScoresResponse;
    const NAME: &'static str = "SortedSetGetScores";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::SortedSetGetScore {
            set_name: prepare_name(&self.set_name, SET_NAME)?,
            values: prepare_values(&self.values)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SortedSetGetScoresResponse> {
        match response {
            DataResponse::SortedSetGetScore(Some(scores)) if scores.len() == self.values.len() => {
                let responses = self
                    .values
                    .iter()
                    .cloned()
                    .zip(scores)
                    .map(|(value, score)| match score {
                        Some(score) => SortedSetGetScoreResponse::Hit { value, score },
                        None => SortedSetGetScoreResponse::Miss { value },
                    })
                    .collect();
                Ok(SortedSetGetScoresResponse::Hit { responses })
            }
            DataResponse::SortedSetGetScore(None) => Ok(SortedSetGetScoresResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Look up the rank of a value
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedSetGetRankRequest {
    pub cache_name: String,
    pub set_name: String,
    pub value: Value,
    pub order: SortedSetOrder,
}

impl SortedSetGetRankRequest {
    pub fn new<C, S, V>(cache_name: C, set_name: S, value: V) -> Self
    where
        C: Into<String>,
        S: Into<String>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            value: value.into(),
            order: SortedSetOrder::Ascending,
        }
    }

    pub fn with_order(mut self, order: SortedSetOrder) -> Self {
        self.order = order;
        self
    }
}

impl CacheRequest for SortedSetGetRankRequest {
    type Response = SortedSetGetRankResponse;
    const NAME: &'static str = "SortedSetGetRank";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::SortedSetGetRank {
            set_name: prepare_name(&self.set_name, SET_NAME)?,
            value: prepare_value(&self.value)?,
            order: self.order,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SortedSetGetRankResponse> {
        match response {
            DataResponse::SortedSetGetRank(Some(rank)) => Ok(SortedSetGetRankResponse::Hit { rank }),
            DataResponse::SortedSetGetRank(None) => Ok(SortedSetGetRankResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Remove values from a sorted set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedSetRemoveElementsRequest {
    pub cache_name: String,
    pub set_name: String,
    pub values: Vec<Value>,
}

impl SortedSetRemoveElementsRequest {
    pub fn new<C, S, I, V>(cache_name: C, set_name: S, values: I) -> Self
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            values: into_values(values),
        }
    }
}

impl CacheRequest for SortedSetRemoveElementsRequest {
    type Response = SortedSetRemoveElementsResponse;
    const NAME: &'static str = "SortedSetRemoveElements";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::SortedSetRemove {
            set_name: prepare_name(&self.set_name, SET_NAME)?,
            values: prepare_values(&self.values)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SortedSetRemoveElementsResponse> {
        match response {
            DataResponse::SortedSetRemove => Ok(SortedSetRemoveElementsResponse),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Count the elements of a sorted set
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortedSetLengthRequest {
    pub cache_name: String,
    pub set_name: String,
}

impl SortedSetLengthRequest {
    pub fn new<C: Into<String>, S: Into<String>>(cache_name: C, set_name: S) -> Self {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
        }
    }
}

impl CacheRequest for SortedSetLengthRequest {
    type Response = SortedSetLengthResponse;
    const NAME: &'static str = "SortedSetLength";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        Ok(DataRequest::SortedSetLength {
            set_name: prepare_name(&self.set_name, SET_NAME)?,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SortedSetLengthResponse> {
        match response {
            DataResponse::SortedSetLength(Some(length)) => {
                Ok(SortedSetLengthResponse::Hit { length })
            }
            DataResponse::SortedSetLength(None) => Ok(SortedSetLengthResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Count the elements of a sorted set within inclusive score bounds
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSetLengthByScoreRequest {
    pub cache_name: String,
    pub set_name: String,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
}

impl SortedSetLengthByScoreRequest {
    pub fn new<C: Into<String>, S: Into<String>>(cache_name: C, set_name: S) -> Self {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            min_score: None,
            max_score: None,
        }
    }

    pub fn with_min_score(mut self, min: f64) -> Self {
        self.min_score = Some(min);
        self
    }

    pub fn with_max_score(mut self, max: f64) -> Self {
        self.max_score = Some(max);
        self
    }
}

impl CacheRequest for SortedSetLengthByScoreRequest {
    type Response = SortedSetLengthByScoreResponse;
    const NAME: &'static str = "SortedSetLengthByScore";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, _context: &RequestContext) -> Result<DataRequest> {
        let set_name = prepare_name(&self.set_name, SET_NAME)?;
        validate_score_range(self.min_score, self.max_score)?;
        Ok(DataRequest::SortedSetLengthByScore {
            set_name,
            min_score: self.min_score,
            max_score: self.max_score,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SortedSetLengthByScoreResponse> {
        match response {
            DataResponse::SortedSetLengthByScore(Some(length)) => {
                Ok(SortedSetLengthByScoreResponse::Hit { length })
            }
            DataResponse::SortedSetLengthByScore(None) => Ok(SortedSetLengthByScoreResponse::Miss),
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}

/// Add to the score of a value, inserting it at zero when absent
#[derive(Debug, Clone, PartialEq)]
pub struct SortedSetIncrementScoreRequest {
    pub cache_name: String,
    pub set_name: String,
    pub value: Value,
    pub amount: f64,
    pub ttl: CollectionTtl,
}

impl SortedSetIncrementScoreRequest {
    pub fn new<C, S, V>(cache_name: C, set_name: S, value: V, amount: f64) -> Self
    where
        C: Into<String>,
        S: Into<String>,
        V: Into<Value>,
    {
        Self {
            cache_name: cache_name.into(),
            set_name: set_name.into(),
            value: value.into(),
            amount,
            ttl: CollectionTtl::default(),
        }
    }

    pub fn with_ttl(mut self, ttl: CollectionTtl) -> Self {
        self.ttl = ttl;
        self
    }
}

impl CacheRequest for SortedSetIncrementScoreRequest {
    type Response = SortedSetIncrementScoreResponse;
    const NAME: &'static str = "SortedSetIncrementScore";

    fn cache_name(&self) -> &str {
        &self.cache_name
    }

    fn to_wire(&self, context: &RequestContext) -> Result<DataRequest> {
        let set_name = prepare_name(&self.set_name, SET_NAME)?;
        let value = prepare_value(&self.value)?;
        let ttl = prepare_collection_ttl(&self.ttl, context.default_ttl)?;
        validate_amount_f64(self.amount)?;
        Ok(DataRequest::SortedSetIncrement {
            set_name,
            value,
            amount: self.amount,
            ttl,
        })
    }

    fn interpret(&self, response: DataResponse) -> Result<SortedSetIncrementScoreResponse> {
        match response {
            DataResponse::SortedSetIncrement(score) => {
                Ok(SortedSetIncrementScoreResponse { score })
            }
            other => Err(unexpected_response(Self::NAME, &other)),
        }
    }
}
