//! Dictionary items

use super::scalar::parse_integer;
use super::store::{CacheStore, DictionaryItem, invalid_argument, wire_len};
use nimbus_domain::wire::{Bytes, Status, WireCollectionTtl};
use tokio::time::Instant;

impl CacheStore {
    pub(crate) fn dictionary_set(
        &self,
        name: &[u8],
        items: Vec<(Bytes, Bytes)>,
        ttl: WireCollectionTtl,
        now: Instant,
    ) -> Result<(), Status> {
        self.write(name, ttl, now, |dictionary: &mut DictionaryItem| {
            dictionary.extend(items);
            Ok(())
        })
    }

    pub(crate) fn dictionary_get(
        &self,
        name: &[u8],
        fields: &[Bytes],
        now: Instant,
    ) -> Result<Option<Vec<Option<Bytes>>>, Status> {
        self.read(name, now, |dictionary: &DictionaryItem| {
            fields.iter().map(|f| dictionary.get(f).cloned()).collect()
        })
    }

    pub(crate) fn dictionary_fetch(
        &self,
        name: &[u8],
        now: Instant,
    ) -> Result<Option<Vec<(Bytes, Bytes)>>, Status> {
        self.read(name, now, |dictionary: &DictionaryItem| {
            dictionary
                .iter()
                .map(|(f, v)| (f.clone(), v.clone()))
                .collect()
        })
    }

    pub(crate) fn dictionary_increment(
        &self,
        name: &[u8],
        field: Bytes,
        amount: i64,
        ttl: WireCollectionTtl,
        now: Instant,
    ) -> Result<i64, Status> {
        self.write(name, ttl, now, |dictionary: &mut DictionaryItem| {
            let current = match dictionary.get(&field) {
                Some(value) => parse_integer(value)?,
                None => 0,
            };
            let updated = current
                .checked_add(amount)
                .ok_or_else(|| invalid_argument("increment would overflow a 64-bit integer"))?;
            dictionary.insert(field, updated.to_string().into_bytes());
            Ok(updated)
        })
    }

    pub(crate) fn dictionary_delete(
        &self,
        name: &[u8],
        fields: &[Bytes],
        now: Instant,
    ) -> Result<(), Status> {
        self.modify(name, now, |dictionary: &mut DictionaryItem| {
            for field in fields {
                dictionary.remove(field);
            }
        })
        .map(|_| ())
    }

    pub(crate) fn dictionary_length(&self, name: &[u8], now: Instant) -> Result<Option<u32>, Status> {
        self.read(name, now, |dictionary: &DictionaryItem| {
            wire_len(dictionary.len())
        })
    }
}
