//! Data-plane wire messages
//!
//! One request and one response variant per data-plane RPC. Keys, values,
//! fields and collection names travel as raw bytes; TTLs travel in
//! milliseconds. Lookup responses use `Option` for the found/missing split.

use crate::value_objects::{ItemType, SortedSetOrder};
use serde::{Deserialize, Serialize};

/// Raw bytes on the wire
pub type Bytes = Vec<u8>;

/// Collection TTL as sent to the service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WireCollectionTtl {
    pub ttl_milliseconds: u64,
    pub refresh_ttl: bool,
}

/// Condition attached to a conditional write
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetCondition {
    /// Store only when the key is absent
    Absent,
    /// Store only when the key is present
    Present,
    /// Store only when the key holds exactly this value
    Equal(Bytes),
    /// Store when the key is absent or holds a different value
    NotEqual(Bytes),
    /// Store only when the key is present with a different value
    PresentAndNotEqual(Bytes),
    /// Store when the key is absent or holds exactly this value
    AbsentOrEqual(Bytes),
}

/// TTL update instruction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TtlUpdate {
    /// Replace the TTL unconditionally
    OverwriteTo(u64),
    /// Replace the TTL only if it grows
    IncreaseTo(u64),
    /// Replace the TTL only if it shrinks
    DecreaseTo(u64),
}

/// Outcome of a TTL update
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdateTtlResult {
    Set,
    NotSet,
    Missing,
}

/// Range selector for sorted set fetches
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SortedSetRange {
    /// Inclusive start rank, exclusive end rank; `None` is unbounded
    ByIndex {
        start: Option<i32>,
        end: Option<i32>,
    },
    /// Inclusive score bounds; `None` is unbounded
    ByScore {
        min: Option<f64>,
        max: Option<f64>,
        offset: u32,
        count: Option<u32>,
    },
}

/// Data-plane request
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataRequest {
    Get {
        key: Bytes,
    },
    Set {
        key: Bytes,
        value: Bytes,
        ttl_milliseconds: u64,
    },
    SetIf {
        key: Bytes,
        value: Bytes,
        ttl_milliseconds: u64,
        condition: SetCondition,
    },
    Delete {
        key: Bytes,
    },
    Increment {
        key: Bytes,
        amount: i64,
        ttl_milliseconds: u64,
    },
    GetBatch {
        keys: Vec<Bytes>,
    },
    SetBatch {
        items: Vec<(Bytes, Bytes)>,
        ttl_milliseconds: u64,
    },
    KeysExist {
        keys: Vec<Bytes>,
    },
    ItemGetType {
        key: Bytes,
    },
    ItemGetTtl {
        key: Bytes,
    },
    UpdateTtl {
        key: Bytes,
        update: TtlUpdate,
    },
    SetUnion {
        set_name: Bytes,
        elements: Vec<Bytes>,
        ttl: WireCollectionTtl,
    },
    SetDifference {
        set_name: Bytes,
        elements: Vec<Bytes>,
    },
    SetFetch {
        set_name: Bytes,
    },
    SetContains {
        set_name: Bytes,
        elements: Vec<Bytes>,
    },
    SetLength {
        set_name: Bytes,
    },
    SetPop {
        set_name: Bytes,
        count: u32,
    },
    ListPushFront {
        list_name: Bytes,
        value: Bytes,
        truncate_back_to_size: Option<u32>,
        ttl: WireCollectionTtl,
    },
    ListPushBack {
        list_name: Bytes,
        value: Bytes,
        truncate_front_to_size: Option<u32>,
        ttl: WireCollectionTtl,
    },
    ListConcatenateFront {
        list_name: Bytes,
        values: Vec<Bytes>,
        truncate_back_to_size: Option<u32>,
        ttl: WireCollectionTtl,
    },
    ListConcatenateBack {
        list_name: Bytes,
        values: Vec<Bytes>,
        truncate_front_to_size: Option<u32>,
        ttl: WireCollectionTtl,
    },
    ListPopFront {
        list_name: Bytes,
    },
    ListPopBack {
        list_name: Bytes,
    },
    ListFetch {
        list_name: Bytes,
        start_index: Option<i32>,
        end_index: Option<i32>,
    },
    ListLength {
        list_name: Bytes,
    },
    ListRemove {
        list_name: Bytes,
        value: Bytes,
    },
    DictionarySet {
        dictionary_name: Bytes,
        items: Vec<(Bytes, Bytes)>,
        ttl: WireCollectionTtl,
    },
    DictionaryGet {
        dictionary_name: Bytes,
        fields: Vec<Bytes>,
    },
    DictionaryFetch {
        dictionary_name: Bytes,
    },
    DictionaryIncrement {
        dictionary_name: Bytes,
        field: Bytes,
        amount: i64,
        ttl: WireCollectionTtl,
    },
    DictionaryDelete {
        dictionary_name: Bytes,
        fields: Vec<Bytes>,
    },
    DictionaryLength {
        dictionary_name: Bytes,
    },
    SortedSetPut {
        set_name: Bytes,
        elements: Vec<(Bytes, f64)>,
        ttl: WireCollectionTtl,
    },
    SortedSetFetch {
        set_name: Bytes,
        order: SortedSetOrder,
        range: SortedSetRange,
    },
    SortedSetGetScore {
        set_name: Bytes,
        values: Vec<Bytes>,
    },
    SortedSetGetRank {
        set_name: Bytes,
        value: Bytes,
        order: SortedSetOrder,
    },
    SortedSetRemove {
        set_name: Bytes,
        values: Vec<Bytes>,
    },
    SortedSetLength {
        set_name: Bytes,
    },
    SortedSetLengthByScore {
        set_name: Bytes,
        min_score: Option<f64>,
        max_score: Option<f64>,
    },
    SortedSetIncrement {
        set_name: Bytes,
        value: Bytes,
        amount: f64,
        ttl: WireCollectionTtl,
    },
}

impl DataRequest {
    /// RPC method name of this request
    pub fn rpc_name(&self) -> &'static str {
        match self {
            Self::Get { .. } => "Get",
            Self::Set { .. } => "Set",
            Self::SetIf { .. } => "SetIf",
            Self::Delete { .. } => "Delete",
            Self::Increment { .. } => "Increment",
            Self::GetBatch { .. } => "GetBatch",
            Self::SetBatch { .. } => "SetBatch",
            Self::KeysExist { .. } => "KeysExist",
            Self::ItemGetType { .. } => "ItemGetType",
            Self::ItemGetTtl { .. } => "ItemGetTtl",
            Self::UpdateTtl { .. } => "UpdateTtl",
            Self::SetUnion { .. } => "SetUnion",
            Self::SetDifference { .. } => "SetDifference",
            Self::SetFetch { .. } => "SetFetch",
            Self::SetContains { .. } => "SetContains",
            Self::SetLength { .. } => "SetLength",
            Self::SetPop { .. } => "SetPop",
            Self::ListPushFront { .. } => "ListPushFront",
            Self::ListPushBack { .. } => "ListPushBack",
            Self::ListConcatenateFront { .. } => "ListConcatenateFront",
            Self::ListConcatenateBack { .. } => "ListConcatenateBack",
            Self::ListPopFront { .. } => "ListPopFront",
            Self::ListPopBack { .. } => "ListPopBack",
            Self::ListFetch { .. } => "ListFetch",
            Self::ListLength { .. } => "ListLength",
            Self::ListRemove { .. } => "ListRemove",
            Self::DictionarySet { .. } => "DictionarySet",
            Self::DictionaryGet { .. } => "DictionaryGet",
            Self::DictionaryFetch { .. } => "DictionaryFetch",
            Self::DictionaryIncrement { .. } => "DictionaryIncrement",
            Self::DictionaryDelete { .. } => "DictionaryDelete",
            Self::DictionaryLength { .. } => "DictionaryLength",
            Self::SortedSetPut { .. } => "SortedSetPut",
            Self::SortedSetFetch { .. } => "SortedSetFetch",
            Self::SortedSetGetScore { .. } => "SortedSetGetScore",
            Self::SortedSetGetRank { .. } => "SortedSetGetRank",
            Self::SortedSetRemove { .. } => "SortedSetRemove",
            Self::SortedSetLength { .. } => "SortedSetLength",
            Self::SortedSetLengthByScore { .. } => "SortedSetLengthByScore",
            Self::SortedSetIncrement { .. } => "SortedSetIncrement",
        }
    }
}

/// Data-plane response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DataResponse {
    Get(Option<Bytes>),
    Set,
    /// `true` when the value was stored
    SetIf(bool),
    Delete,
    Increment(i64),
    GetBatch(Vec<Option<Bytes>>),
    SetBatch,
    KeysExist(Vec<bool>),
    ItemGetType(Option<ItemType>),
    /// Remaining TTL in milliseconds
    ItemGetTtl(Option<u64>),
    UpdateTtl(UpdateTtlResult),
    SetUnion,
    SetDifference,
    SetFetch(Option<Vec<Bytes>>),
    SetContains(Option<Vec<bool>>),
    SetLength(Option<u32>),
    SetPop(Option<Vec<Bytes>>),
    /// List length after the push
    ListPushFront(u32),
    /// List length after the push
    ListPushBack(u32),
    /// List length after the concatenation
    ListConcatenateFront(u32),
    /// List length after the concatenation
    ListConcatenateBack(u32),
    ListPopFront(Option<Bytes>),
    ListPopBack(Option<Bytes>),
    ListFetch(Option<Vec<Bytes>>),
    ListLength(Option<u32>),
    ListRemove,
    DictionarySet,
    DictionaryGet(Option<Vec<Option<Bytes>>>),
    DictionaryFetch(Option<Vec<(Bytes, Bytes)>>),
    DictionaryIncrement(i64),
    DictionaryDelete,
    DictionaryLength(Option<u32>),
    SortedSetPut,
    SortedSetFetch(Option<Vec<(Bytes, f64)>>),
    SortedSetGetScore(Option<Vec<Option<f64>>>),
    SortedSetGetRank(Option<u64>),
    SortedSetRemove,
    SortedSetLength(Option<u32>),
    SortedSetLengthByScore(Option<u32>),
    SortedSetIncrement(f64),
}

impl DataResponse {
    /// RPC method name this response answers
    pub fn rpc_name(&self) -> &'static str {
        match self {
            Self::Get(_) => "Get",
            Self::Set => "Set",
            Self::SetIf(_) => "SetIf",
            Self::Delete => "Delete",
            Self::Increment(_) => "Increment",
            Self::GetBatch(_) => "GetBatch",
            Self::SetBatch => "SetBatch",
            Self::KeysExist(_) => "KeysExist",
            Self::ItemGetType(_) => "ItemGetType",
            Self::ItemGetTtl(_) => "ItemGetTtl",
            Self::UpdateTtl(_) => "UpdateTtl",
            Self::SetUnion => "SetUnion",
            Self::SetDifference => "SetDifference",
            Self::SetFetch(_) => "SetFetch",
            Self::SetContains(_) => "SetContains",
            Self::SetLength(_) => "SetLength",
            Self::SetPop(_) => "SetPop",
            Self::ListPushFront(_) => "ListPushFront",
            Self::ListPushBack(_) => "ListPushBack",
            Self::ListConcatenateFront(_) => "ListConcatenateFront",
            Self::ListConcatenateBack(_) => "ListConcatenateBack",
            Self::ListPopFront(_) => "ListPopFront",
            Self::ListPopBack(_) => "ListPopBack",
            Self::ListFetch(_) => "ListFetch",
            Self::ListLength(_) => "ListLength",
            Self::ListRemove => "ListRemove",
            Self::DictionarySet => "DictionarySet",
            Self::DictionaryGet(_) => "DictionaryGet",
            Self::DictionaryFetch(_) => "DictionaryFetch",
            Self::DictionaryIncrement(_) => "DictionaryIncrement",
            Self::DictionaryDelete => "DictionaryDelete",
            Self::DictionaryLength(_) => "DictionaryLength",
            Self::SortedSetPut => "SortedSetPut",
            Self::SortedSetFetch(_) => "SortedSetFetch",
            Self::SortedSetGetScore(_) => "SortedSetGetScore",
            Self::SortedSetGetRank(_) => "SortedSetGetRank",
            Self::SortedSetRemove => "SortedSetRemove",
            Self::SortedSetLength(_) => "SortedSetLength",
            Self::SortedSetLengthByScore(_) => "SortedSetLengthByScore",
            Self::SortedSetIncrement(_) => "SortedSetIncrement",
        }
    }
}
