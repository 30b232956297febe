//! Scalar items and TTL updates

use super::store::{CacheStore, Entry, Item, expiry, invalid_argument, wrong_type};
use dashmap::mapref::entry::Entry as Slot;
use nimbus_domain::ItemType;
use nimbus_domain::wire::{Bytes, SetCondition, Status, TtlUpdate, UpdateTtlResult};
use tokio::time::Instant;

fn scalar_of(entry: &Entry) -> Result<&Bytes, Status> {
    match &entry.item {
        Item::Scalar(value) => Ok(value),
        other => Err(wrong_type(other.item_type(), ItemType::Scalar)),
    }
}

fn condition_holds(condition: &SetCondition, current: Option<&Bytes>) -> bool {
    match condition {
        SetCondition::Absent => current.is_none(),
        SetCondition::Present => current.is_some(),
        SetCondition::Equal(expected) => current == Some(expected),
        SetCondition::NotEqual(unwanted) => current != Some(unwanted),
        SetCondition::PresentAndNotEqual(unwanted) => {
            current.is_some_and(|value| value != unwanted)
        }
        SetCondition::AbsentOrEqual(expected) => current.is_none_or(|value| value == expected),
    }
}

impl CacheStore {
    pub(crate) fn get(&self, key: &[u8], now: Instant) -> Result<Option<Bytes>, Status> {
        match self.live(key, now) {
            Some(entry) => scalar_of(&entry).map(|v| Some(v.clone())),
            None => Ok(None),
        }
    }

    pub(crate) fn set(&self, key: Bytes, value: Bytes, ttl_milliseconds: u64, now: Instant) {
        self.items
            .insert(key, Entry::new(Item::Scalar(value), now, ttl_milliseconds));
    }

    pub(crate) fn set_if(
        &self,
        key: Bytes,
        value: Bytes,
        ttl_milliseconds: u64,
        condition: &SetCondition,
        now: Instant,
    ) -> Result<bool, Status> {
        let entry = Entry::new(Item::Scalar(value), now, ttl_milliseconds);
        match self.items.entry(key) {
            Slot::Occupied(mut slot) if slot.get().is_live(now) => {
                let current = scalar_of(slot.get())?;
                if !condition_holds(condition, Some(current)) {
                    return Ok(false);
                }
                slot.insert(entry);
                Ok(true)
            }
            slot => {
                if !condition_holds(condition, None) {
                    return Ok(false);
                }
                match slot {
                    Slot::Occupied(mut slot) => {
                        slot.insert(entry);
                    }
                    Slot::Vacant(slot) => {
                        slot.insert(entry);
                    }
                }
                Ok(true)
            }
        }
    }

    pub(crate) fn increment(
        &self,
        key: Bytes,
        amount: i64,
        ttl_milliseconds: u64,
        now: Instant,
    ) -> Result<i64, Status> {
        let mut slot = self
            .items
            .entry(key)
            .or_insert_with(|| Entry::new(Item::Scalar(b"0".to_vec()), now, ttl_milliseconds));
        if !slot.is_live(now) {
            *slot = Entry::new(Item::Scalar(b"0".to_vec()), now, ttl_milliseconds);
        }
        let current = parse_integer(scalar_of(&slot)?)?;
        let updated = current
            .checked_add(amount)
            .ok_or_else(|| invalid_argument("increment would overflow a 64-bit integer"))?;
        slot.item = Item::Scalar(updated.to_string().into_bytes());
        slot.expires_at = expiry(now, ttl_milliseconds);
        Ok(updated)
    }

    pub(crate) fn update_ttl(&self, key: &[u8], update: TtlUpdate, now: Instant) -> UpdateTtlResult {
        let Some(mut entry) = self.items.get_mut(key) else {
            return UpdateTtlResult::Missing;
        };
        if !entry.is_live(now) {
            drop(entry);
            self.items.remove_if(key, |_, e| !e.is_live(now));
            return UpdateTtlResult::Missing;
        }
        let (ttl, applies): (u64, fn(Instant, Instant) -> bool) = match update {
            TtlUpdate::OverwriteTo(ttl) => (ttl, |_, _| true),
            TtlUpdate::IncreaseTo(ttl) => (ttl, |new, old| new > old),
            TtlUpdate::DecreaseTo(ttl) => (ttl, |new, old| new < old),
        };
        let new_expiry = expiry(now, ttl);
        if applies(new_expiry, entry.expires_at) {
            entry.expires_at = new_expiry;
            UpdateTtlResult::Set
        } else {
            UpdateTtlResult::NotSet
        }
    }
}

/// Parse a stored counter, written as a base-10 UTF-8 integer
pub(crate) fn parse_integer(bytes: &[u8]) -> Result<i64, Status> {
    std::str::from_utf8(bytes)
        .ok()
        .and_then(|s| s.trim().parse::<i64>().ok())
        .ok_or_else(|| invalid_argument("the stored value is not an integer"))
}
