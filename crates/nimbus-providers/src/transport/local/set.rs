//! Set items

use super::store::{CacheStore, SetItem, wire_len};
use nimbus_domain::wire::{Bytes, Status, WireCollectionTtl};
use tokio::time::Instant;

impl CacheStore {
    pub(crate) fn set_union(
        &self,
        name: &[u8],
        elements: Vec<Bytes>,
        ttl: WireCollectionTtl,
        now: Instant,
    ) -> Result<(), Status> {
        self.write(name, ttl, now, |set: &mut SetItem| {
            set.extend(elements);
            Ok(())
        })
    }

    pub(crate) fn set_difference(
        &self,
        name: &[u8],
        elements: &[Bytes],
        now: Instant,
    ) -> Result<(), Status> {
        self.modify(name, now, |set: &mut SetItem| {
            for element in elements {
                set.remove(element);
            }
        })
        .map(|_| ())
    }

    pub(crate) fn set_fetch(&self, name: &[u8], now: Instant) -> Result<Option<Vec<Bytes>>, Status> {
        self.read(name, now, |set: &SetItem| set.iter().cloned().collect())
    }

    pub(crate) fn set_contains(
        &self,
        name: &[u8],
        elements: &[Bytes],
        now: Instant,
    ) -> Result<Option<Vec<bool>>, Status> {
        self.read(name, now, |set: &SetItem| {
            elements.iter().map(|e| set.contains(e)).collect()
        })
    }

    pub(crate) fn set_length(&self, name: &[u8], now: Instant) -> Result<Option<u32>, Status> {
        self.read(name, now, |set: &SetItem| wire_len(set.len()))
    }

    pub(crate) fn set_pop(
        &self,
        name: &[u8],
        count: u32,
        now: Instant,
    ) -> Result<Option<Vec<Bytes>>, Status> {
        self.modify(name, now, |set: &mut SetItem| {
            let mut popped = Vec::new();
            for _ in 0..count {
                match set.pop_first() {
                    Some(element) => popped.push(element),
                    None => break,
                }
            }
            popped
        })
    }
}
