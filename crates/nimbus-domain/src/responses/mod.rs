//! Response Types
//!
//! Local results for every client operation. Lookups return Hit/Miss
//! variants rather than errors; conditional writes report whether they
//! applied.

/// Cache lifecycle responses
pub mod control;
/// Dictionary responses
pub mod dictionary;
/// List responses
pub mod list;
/// Scalar item responses
pub mod scalar;
/// Set responses
pub mod set;
/// Sorted set responses
pub mod sorted_set;
/// TTL update responses
pub mod ttl;

pub use control::{CreateCacheResponse, DeleteCacheResponse, ListCachesResponse, PingResponse};
pub use dictionary::{
    DictionaryFetchResponse, DictionaryGetFieldResponse, DictionaryGetFieldsResponse,
    DictionaryIncrementResponse, DictionaryLengthResponse, DictionaryRemoveFieldsResponse,
    DictionarySetFieldsResponse,
};
pub use list::{
    ListConcatenateBackResponse, ListConcatenateFrontResponse, ListFetchResponse,
    ListLengthResponse, ListPopBackResponse, ListPopFrontResponse, ListPushBackResponse,
    ListPushFrontResponse, ListRemoveValueResponse,
};
pub use scalar::{
    DeleteResponse, GetBatchResponse, GetResponse, IncrementResponse, ItemGetTtlResponse,
    ItemGetTypeResponse, KeysExistResponse, SetBatchResponse, SetIfResponse, SetResponse,
};
pub use set::{
    SetAddElementsResponse, SetContainsElementsResponse, SetFetchResponse, SetLengthResponse,
    SetPopResponse, SetRemoveElementsResponse,
};
pub use sorted_set::{
    SortedSetFetchResponse, SortedSetGetRankResponse, SortedSetGetScoreResponse,
    SortedSetGetScoresResponse, SortedSetIncrementScoreResponse, SortedSetLengthByScoreResponse,
    SortedSetLengthResponse, SortedSetPutElementsResponse, SortedSetRemoveElementsResponse,
};
pub use ttl::{DecreaseTtlResponse, IncreaseTtlResponse, UpdateTtlResponse};
