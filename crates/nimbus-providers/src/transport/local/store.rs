//! Item storage for one cache
//!
//! Items expire lazily: an expired entry is treated as absent and removed
//! the next time its key is touched.

use crate::constants::LOCAL_MAX_ITEM_TTL;
use dashmap::DashMap;
use dashmap::mapref::entry::Entry as Slot;
use dashmap::mapref::one::Ref;
use nimbus_domain::ItemType;
use nimbus_domain::wire::{Bytes, DataRequest, DataResponse, Status, StatusCode, WireCollectionTtl};
use std::collections::{BTreeMap, BTreeSet, HashMap, VecDeque};
use std::time::Duration;
use tokio::time::Instant;

pub(crate) type SetItem = BTreeSet<Bytes>;
pub(crate) type ListItem = VecDeque<Bytes>;
pub(crate) type DictionaryItem = BTreeMap<Bytes, Bytes>;
pub(crate) type SortedSetItem = HashMap<Bytes, f64>;

/// Stored value of any type
#[derive(Debug, Clone)]
pub(crate) enum Item {
    Scalar(Bytes),
    Set(SetItem),
    List(ListItem),
    Dictionary(DictionaryItem),
    SortedSet(SortedSetItem),
}

impl Item {
    pub(crate) fn item_type(&self) -> ItemType {
        match self {
            Self::Scalar(_) => ItemType::Scalar,
            Self::Set(_) => ItemType::Set,
            Self::List(_) => ItemType::List,
            Self::Dictionary(_) => ItemType::Dictionary,
            Self::SortedSet(_) => ItemType::SortedSet,
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Entry {
    pub(crate) item: Item,
    pub(crate) expires_at: Instant,
}

impl Entry {
    pub(crate) fn new(item: Item, now: Instant, ttl_milliseconds: u64) -> Self {
        Self {
            item,
            expires_at: expiry(now, ttl_milliseconds),
        }
    }

    pub(crate) fn is_live(&self, now: Instant) -> bool {
        self.expires_at > now
    }
}

pub(crate) fn expiry(now: Instant, ttl_milliseconds: u64) -> Instant {
    now + Duration::from_millis(ttl_milliseconds).min(LOCAL_MAX_ITEM_TTL)
}

/// Collection types a collection item may hold
pub(crate) trait Collection: Default {
    const ITEM_TYPE: ItemType;

    fn view(item: &Item) -> Option<&Self>;
    fn view_mut(item: &mut Item) -> Option<&mut Self>;
    fn into_item(self) -> Item;
    fn is_empty(&self) -> bool;
}

macro_rules! collection {
    ($ty:ty, $variant:ident) => {
        impl Collection for $ty {
            const ITEM_TYPE: ItemType = ItemType::$variant;

            fn view(item: &Item) -> Option<&Self> {
                match item {
                    Item::$variant(c) => Some(c),
                    _ => None,
                }
            }

            fn view_mut(item: &mut Item) -> Option<&mut Self> {
                match item {
                    Item::$variant(c) => Some(c),
                    _ => None,
                }
            }

            fn into_item(self) -> Item {
                Item::$variant(self)
            }

            fn is_empty(&self) -> bool {
                <$ty>::is_empty(self)
            }
        }
    };
}

collection!(SetItem, Set);
collection!(ListItem, List);
collection!(DictionaryItem, Dictionary);
collection!(SortedSetItem, SortedSet);

pub(crate) fn wrong_type(actual: ItemType, expected: ItemType) -> Status {
    Status::new(
        StatusCode::FailedPrecondition,
        format!("item is a {actual}, the operation expects a {expected}"),
    )
}

pub(crate) fn invalid_argument<S: Into<String>>(message: S) -> Status {
    Status::new(StatusCode::InvalidArgument, message)
}

/// Items of one cache
#[derive(Debug, Default)]
pub(crate) struct CacheStore {
    pub(crate) items: DashMap<Bytes, Entry>,
}

impl CacheStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Live entry under `key`; drops it when expired
    pub(crate) fn live(&self, key: &[u8], now: Instant) -> Option<Ref<'_, Bytes, Entry>> {
        let entry = self.items.get(key)?;
        if entry.is_live(now) {
            return Some(entry);
        }
        drop(entry);
        self.items.remove_if(key, |_, e| !e.is_live(now));
        None
    }

    /// Read a collection; `None` when it does not exist
    pub(crate) fn read<C, T, F>(&self, name: &[u8], now: Instant, f: F) -> Result<Option<T>, Status>
    where
        C: Collection,
        F: FnOnce(&C) -> T,
    {
        let Some(entry) = self.live(name, now) else {
            return Ok(None);
        };
        let collection = C::view(&entry.item)
            .ok_or_else(|| wrong_type(entry.item.item_type(), C::ITEM_TYPE))?;
        Ok(Some(f(collection)))
    }

    /// Write to a collection, creating it when absent
    ///
    /// A new collection expires after the given TTL; an existing one has its
    /// expiry reset only when the TTL asks for a refresh.
    pub(crate) fn write<C, T, F>(
        &self,
        name: &[u8],
        ttl: WireCollectionTtl,
        now: Instant,
        f: F,
    ) -> Result<T, Status>
    where
        C: Collection,
        F: FnOnce(&mut C) -> Result<T, Status>,
    {
        match self.items.entry(name.to_vec()) {
            Slot::Occupied(mut slot) if slot.get().is_live(now) => {
                let entry = slot.get_mut();
                let actual = entry.item.item_type();
                let collection =
                    C::view_mut(&mut entry.item).ok_or_else(|| wrong_type(actual, C::ITEM_TYPE))?;
                let out = f(collection)?;
                if ttl.refresh_ttl {
                    entry.expires_at = expiry(now, ttl.ttl_milliseconds);
                }
                Ok(out)
            }
            slot => {
                let mut collection = C::default();
                let out = f(&mut collection)?;
                let entry = Entry::new(collection.into_item(), now, ttl.ttl_milliseconds);
                match slot {
                    Slot::Occupied(mut slot) => {
                        slot.insert(entry);
                    }
                    Slot::Vacant(slot) => {
                        slot.insert(entry);
                    }
                }
                Ok(out)
            }
        }
    }

    /// Modify an existing collection, deleting it once empty
    ///
    /// Returns `None` when the collection does not exist.
    pub(crate) fn modify<C, T, F>(&self, name: &[u8], now: Instant, f: F) -> Result<Option<T>, Status>
    where
        C: Collection,
        F: FnOnce(&mut C) -> T,
    {
        match self.items.entry(name.to_vec()) {
            Slot::Occupied(mut slot) if slot.get().is_live(now) => {
                let entry = slot.get_mut();
                let actual = entry.item.item_type();
                let collection =
                    C::view_mut(&mut entry.item).ok_or_else(|| wrong_type(actual, C::ITEM_TYPE))?;
                let out = f(collection);
                if collection.is_empty() {
                    slot.remove();
                }
                Ok(Some(out))
            }
            Slot::Occupied(slot) => {
                slot.remove();
                Ok(None)
            }
            Slot::Vacant(_) => Ok(None),
        }
    }

    /// Execute one data request
    pub(crate) fn handle(&self, request: DataRequest, now: Instant) -> Result<DataResponse, Status> {
        use DataRequest as R;
        match request {
            R::Get { key } => self.get(&key, now).map(DataResponse::Get),
            R::Set {
                key,
                value,
                ttl_milliseconds,
            } => {
                self.set(key, value, ttl_milliseconds, now);
                Ok(DataResponse::Set)
            }
            R::SetIf {
                key,
                value,
                ttl_milliseconds,
                condition,
            } => self
                .set_if(key, value, ttl_milliseconds, &condition, now)
                .map(DataResponse::SetIf),
            R::Delete { key } => {
                self.items.remove(&key);
                Ok(DataResponse::Delete)
            }
            R::Increment {
                key,
                amount,
                ttl_milliseconds,
            } => self
                .increment(key, amount, ttl_milliseconds, now)
                .map(DataResponse::Increment),
            R::GetBatch { keys } => keys
                .iter()
                .map(|k| self.get(k, now))
                .collect::<Result<Vec<_>, _>>()
                .map(DataResponse::GetBatch),
            R::SetBatch {
                items,
                ttl_milliseconds,
            } => {
                for (key, value) in items {
                    self.set(key, value, ttl_milliseconds, now);
                }
                Ok(DataResponse::SetBatch)
            }
            R::KeysExist { keys } => Ok(DataResponse::KeysExist(
                keys.iter().map(|k| self.live(k, now).is_some()).collect(),
            )),
            R::ItemGetType { key } => Ok(DataResponse::ItemGetType(
                self.live(&key, now).map(|e| e.item.item_type()),
            )),
            R::ItemGetTtl { key } => Ok(DataResponse::ItemGetTtl(self.live(&key, now).map(
                |e| u64::try_from(e.expires_at.duration_since(now).as_millis()).unwrap_or(u64::MAX),
            ))),
            R::UpdateTtl { key, update } => {
                Ok(DataResponse::UpdateTtl(self.update_ttl(&key, update, now)))
            }
            R::SetUnion {
                set_name,
                elements,
                ttl,
            } => self
                .set_union(&set_name, elements, ttl, now)
                .map(|()| DataResponse::SetUnion),
            R::SetDifference { set_name, elements } => self
                .set_difference(&set_name, &elements, now)
                .map(|()| DataResponse::SetDifference),
            R::SetFetch { set_name } => self.set_fetch(&set_name, now).map(DataResponse::SetFetch),
            R::SetContains { set_name, elements } => self
                .set_contains(&set_name, &elements, now)
                .map(DataResponse::SetContains),
            R::SetLength { set_name } => {
                self.set_length(&set_name, now).map(DataResponse::SetLength)
            }
            R::SetPop { set_name, count } => {
                self.set_pop(&set_name, count, now).map(DataResponse::SetPop)
            }
            R::ListPushFront {
                list_name,
                value,
                truncate_back_to_size,
                ttl,
            } => self
                .list_concatenate_front(&list_name, vec![value], truncate_back_to_size, ttl, now)
                .map(DataResponse::ListPushFront),
            R::ListPushBack {
                list_name,
                value,
                truncate_front_to_size,
                ttl,
            } => self
                .list_concatenate_back(&list_name, vec![value], truncate_front_to_size, ttl, now)
                .map(DataResponse::ListPushBack),
            R::ListConcatenateFront {
                list_name,
                values,
                truncate_back_to_size,
                ttl,
            } => self
                .list_concatenate_front(&list_name, values, truncate_back_to_size, ttl, now)
                .map(DataResponse::ListConcatenateFront),
            R::ListConcatenateBack {
                list_name,
                values,
                truncate_front_to_size,
                ttl,
            } => self
                .list_concatenate_back(&list_name, values, truncate_front_to_size, ttl, now)
                .map(DataResponse::ListConcatenateBack),
            R::ListPopFront { list_name } => self
                .list_pop(&list_name, true, now)
                .map(DataResponse::ListPopFront),
            R::ListPopBack { list_name } => self
                .list_pop(&list_name, false, now)
                .map(DataResponse::ListPopBack),
            R::ListFetch {
                list_name,
                start_index,
                end_index,
            } => self
                .list_fetch(&list_name, start_index, end_index, now)
                .map(DataResponse::ListFetch),
            R::ListLength { list_name } => self
                .list_length(&list_name, now)
                .map(DataResponse::ListLength),
            R::ListRemove { list_name, value } => self
                .list_remove(&list_name, &value, now)
                .map(|()| DataResponse::ListRemove),
            R::DictionarySet {
                dictionary_name,
                items,
                ttl,
            } => self
                .dictionary_set(&dictionary_name, items, ttl, now)
                .map(|()| DataResponse::DictionarySet),
            R::DictionaryGet {
                dictionary_name,
                fields,
            } => self
                .dictionary_get(&dictionary_name, &fields, now)
                .map(DataResponse::DictionaryGet),
            R::DictionaryFetch { dictionary_name } => self
                .dictionary_fetch(&dictionary_name, now)
                .map(DataResponse::DictionaryFetch),
            R::DictionaryIncrement {
                dictionary_name,
                field,
                amount,
                ttl,
            } => self
                .dictionary_increment(&dictionary_name, field, amount, ttl, now)
                .map(DataResponse::DictionaryIncrement),
            R::DictionaryDelete {
                dictionary_name,
                fields,
            } => self
                .dictionary_delete(&dictionary_name, &fields, now)
                .map(|()| DataResponse::DictionaryDelete),
            R::DictionaryLength { dictionary_name } => self
                .dictionary_length(&dictionary_name, now)
                .map(DataResponse::DictionaryLength),
            R::SortedSetPut {
                set_name,
                elements,
                ttl,
            } => self
                .sorted_set_put(&set_name, elements, ttl, now)
                .map(|()| DataResponse::SortedSetPut),
            R::SortedSetFetch {
                set_name,
                order,
                range,
            } => self
                .sorted_set_fetch(&set_name, order, range, now)
                .map(DataResponse::SortedSetFetch),
            R::SortedSetGetScore { set_name, values } => self
                .sorted_set_get_score(&set_name, &values, now)
                .map(DataResponse::SortedSetGetScore),
            R::SortedSetGetRank {
                set_name,
                value,
                order,
            } => self
                .sorted_set_get_rank(&set_name, &value, order, now)
                .map(DataResponse::SortedSetGetRank),
            R::SortedSetRemove { set_name, values } => self
                .sorted_set_remove(&set_name, &values, now)
                .map(|()| DataResponse::SortedSetRemove),
            R::SortedSetLength { set_name } => self
                .sorted_set_length(&set_name, None, None, now)
                .map(DataResponse::SortedSetLength),
            R::SortedSetLengthByScore {
                set_name,
                min_score,
                max_score,
            } => self
                .sorted_set_length(&set_name, min_score, max_score, now)
                .map(DataResponse::SortedSetLengthByScore),
            R::SortedSetIncrement {
                set_name,
                value,
                amount,
                ttl,
            } => self
                .sorted_set_increment(&set_name, value, amount, ttl, now)
                .map(DataResponse::SortedSetIncrement),
        }
    }
}

/// Clamp a length into the `u32` range used on the wire
pub(crate) fn wire_len(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

/// Resolve a possibly negative `[start, end)` range against `len`
pub(crate) fn resolve_range(start: Option<i32>, end: Option<i32>, len: usize) -> (usize, usize) {
    let resolve = |index: i32| -> usize {
        let len_i = i64::try_from(len).unwrap_or(i64::MAX);
        let index = i64::from(index);
        let absolute = if index < 0 { len_i + index } else { index };
        usize::try_from(absolute.clamp(0, len_i)).unwrap_or(len)
    };
    let start = start.map_or(0, resolve);
    let end = end.map_or(len, resolve);
    (start, end.max(start))
}
