//! List items

use super::store::{CacheStore, ListItem, resolve_range, wire_len};
use nimbus_domain::wire::{Bytes, Status, WireCollectionTtl};
use tokio::time::Instant;

impl CacheStore {
    /// Prepend values in order, then drop values past `truncate_back_to_size`
    pub(crate) fn list_concatenate_front(
        &self,
        name: &[u8],
        values: Vec<Bytes>,
        truncate_back_to_size: Option<u32>,
        ttl: WireCollectionTtl,
        now: Instant,
    ) -> Result<u32, Status> {
        self.write(name, ttl, now, |list: &mut ListItem| {
            for value in values.into_iter().rev() {
                list.push_front(value);
            }
            if let Some(size) = truncate_back_to_size {
                list.truncate(size as usize);
            }
            Ok(wire_len(list.len()))
        })
    }

    /// Append values in order, then drop values before `truncate_front_to_size`
    pub(crate) fn list_concatenate_back(
        &self,
        name: &[u8],
        values: Vec<Bytes>,
        truncate_front_to_size: Option<u32>,
        ttl: WireCollectionTtl,
        now: Instant,
    ) -> Result<u32, Status> {
        self.write(name, ttl, now, |list: &mut ListItem| {
            list.extend(values);
            if let Some(size) = truncate_front_to_size {
                let excess = list.len().saturating_sub(size as usize);
                list.drain(..excess);
            }
            Ok(wire_len(list.len()))
        })
    }

    pub(crate) fn list_pop(&self, name: &[u8], front: bool, now: Instant) -> Result<Option<Bytes>, Status> {
        self.modify(name, now, |list: &mut ListItem| {
            if front {
                list.pop_front()
            } else {
                list.pop_back()
            }
        })
        .map(Option::flatten)
    }

    pub(crate) fn list_fetch(
        &self,
        name: &[u8],
        start_index: Option<i32>,
        end_index: Option<i32>,
        now: Instant,
    ) -> Result<Option<Vec<Bytes>>, Status> {
        self.read(name, now, |list: &ListItem| {
            let (start, end) = resolve_range(start_index, end_index, list.len());
            list.range(start..end).cloned().collect()
        })
    }

    pub(crate) fn list_length(&self, name: &[u8], now: Instant) -> Result<Option<u32>, Status> {
        self.read(name, now, |list: &ListItem| wire_len(list.len()))
    }

    /// Remove every occurrence of `value`
    pub(crate) fn list_remove(&self, name: &[u8], value: &[u8], now: Instant) -> Result<(), Status> {
        self.modify(name, now, |list: &mut ListItem| {
            list.retain(|v| v.as_slice() != value);
        })
        .map(|_| ())
    }
}
