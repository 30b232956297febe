//! Sorted set operations

use super::CacheClient;
use crate::requests::{
    SortedSetFetchByRankRequest, SortedSetFetchByScoreRequest, SortedSetGetRankRequest,
    SortedSetGetScoresRequest, SortedSetIncrementScoreRequest, SortedSetLengthByScoreRequest,
    SortedSetLengthRequest, SortedSetPutElementsRequest, SortedSetRemoveElementsRequest,
};
use nimbus_domain::responses::{
    SortedSetFetchResponse, SortedSetGetRankResponse, SortedSetGetScoreResponse,
    SortedSetGetScoresResponse, SortedSetIncrementScoreResponse, SortedSetLengthByScoreResponse,
    SortedSetLengthResponse, SortedSetPutElementsResponse, SortedSetRemoveElementsResponse,
};
use nimbus_domain::{Error, Result, SortedSetElement, SortedSetOrder, Value};

impl CacheClient {
    /// Insert elements or replace their scores
    pub async fn sorted_set_put_elements<C, S, I>(
        &self,
        cache_name: C,
        set_name: S,
        elements: I,
    ) -> Result<SortedSetPutElementsResponse>
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = SortedSetElement>,
    {
        self.send(SortedSetPutElementsRequest::new(
            cache_name, set_name, elements,
        ))
        .await
    }

    pub async fn sorted_set_put_element<C, S, V>(
        &self,
        cache_name: C,
        set_name: S,
        value: V,
        score: f64,
    ) -> Result<SortedSetPutElementsResponse>
    where
        C: Into<String>,
        S: Into<String>,
        V: Into<Value>,
    {
        self.sorted_set_put_elements(cache_name, set_name, [SortedSetElement::new(value, score)])
            .await
    }

    /// Fetch every element in the given order; send a
    /// [`SortedSetFetchByRankRequest`] to fetch a rank range
    pub async fn sorted_set_fetch_by_rank<C, S>(
        &self,
        cache_name: C,
        set_name: S,
        order: SortedSetOrder,
    ) -> Result<SortedSetFetchResponse>
    where
        C: Into<String>,
        S: Into<String>,
    {
        self.send(SortedSetFetchByRankRequest::new(cache_name, set_name).with_order(order))
            .await
    }

    /// Fetch elements with scores in `[min_score, max_score]`
    pub async fn sorted_set_fetch_by_score<C, S>(
        &self,
        cache_name: C,
        set_name: S,
        min_score: Option<f64>,
        max_score: Option<f64>,
        order: SortedSetOrder,
    ) -> Result<SortedSetFetchResponse>
    where
        C: Into<String>,
        S: Into<String>,
    {
        let mut request = SortedSetFetchByScoreRequest::new(cache_name, set_name).with_order(order);
        request.min_score = min_score;
        request.max_score = max_score;
        self.send(request).await
    }

    pub async fn sorted_set_get_scores<C, S, I, V>(
        &self,
        cache_name: C,
        set_name: S,
        values: I,
    ) -> Result<SortedSetGetScoresResponse>
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.send(SortedSetGetScoresRequest::new(cache_name, set_name, values))
            .await
    }

    /// Score of one value; a missing sorted set is a miss on the value
    pub async fn sorted_set_get_score<C, S, V>(
        &self,
        cache_name: C,
        set_name: S,
        value: V,
    ) -> Result<SortedSetGetScoreResponse>
    where
        C: Into<String>,
        S: Into<String>,
        V: Into<Value>,
    {
        let value = value.into();
        let response = self
            .sorted_set_get_scores(cache_name, set_name, [value.clone()])
            .await?;
        match response {
            SortedSetGetScoresResponse::Hit { responses } => responses
                .into_iter()
                .next()
                .ok_or_else(|| Error::internal_server("SortedSetGetScore request got no score")),
            SortedSetGetScoresResponse::Miss => Ok(SortedSetGetScoreResponse::Miss { value }),
        }
    }

    /// Zero-based rank of a value in ascending order
    pub async fn sorted_set_get_rank<C, S, V>(
        &self,
        cache_name: C,
        set_name: S,
        value: V,
    ) -> Result<SortedSetGetRankResponse>
    where
        C: Into<String>,
        S: Into<String>,
        V: Into<Value>,
    {
        self.send(SortedSetGetRankRequest::new(cache_name, set_name, value))
            .await
    }

    pub async fn sorted_set_remove_elements<C, S, I, V>(
        &self,
        cache_name: C,
        set_name: S,
        values: I,
    ) -> Result<SortedSetRemoveElementsResponse>
    where
        C: Into<String>,
        S: Into<String>,
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.send(SortedSetRemoveElementsRequest::new(
            cache_name, set_name, values,
        ))
        .await
    }

    pub async fn sorted_set_remove_element<C, S, V>(
        &self,
        cache_name: C,
        set_name: S,
        value: V,
    ) -> Result<SortedSetRemoveElementsResponse>
    where
        C: Into<String>,
        S: Into<String>,
        V: Into<Value>,
    {
        self.sorted_set_remove_elements(cache_name, set_name, [value])
            .await
    }

    pub async fn sorted_set_length<C, S>(
        &self,
        cache_name: C,
        set_name: S,
    ) -> Result<SortedSetLengthResponse>
    where
        C: Into<String>,
        S: Into<String>,
    {
        self.send(SortedSetLengthRequest::new(cache_name, set_name))
            .await
    }

    /// Count elements with scores in `[min_score, max_score]`
    pub async fn sorted_set_length_by_score<C, S>(
        &self,
        cache_name: C,
        set_name: S,
        min_score: Option<f64>,
        max_score: Option<f64>,
    ) -> Result<SortedSetLengthByScoreResponse>
    where
        C: Into<String>,
        S: Into<String>,
    {
        let mut request = SortedSetLengthByScoreRequest::new(cache_name, set_name);
        request.min_score = min_score;
        request.max_score = max_score;
        self.send(request).await
    }

    /// Add to a value's score, inserting it at zero when absent
    pub async fn sorted_set_increment_score<C, S, V>(
        &self,
        cache_name: C,
        set_name: S,
        value: V,
        amount: f64,
    ) -> Result<SortedSetIncrementScoreResponse>
    where
        C: Into<String>,
        S: Into<String>,
        V: Into<Value>,
    {
        self.send(SortedSetIncrementScoreRequest::new(
            cache_name, set_name, value, amount,
        ))
        .await
    }
}
