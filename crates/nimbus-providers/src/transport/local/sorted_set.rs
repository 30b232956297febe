//! Sorted set items
//!
//! Elements are ordered by score, ties broken by value bytes.

use super::store::{CacheStore, SortedSetItem, resolve_range, wire_len};
use nimbus_domain::SortedSetOrder;
use nimbus_domain::wire::{Bytes, SortedSetRange, Status, WireCollectionTtl};
use std::cmp::Ordering;
use tokio::time::Instant;

fn ordered(set: &SortedSetItem, order: SortedSetOrder) -> Vec<(&Bytes, f64)> {
    let mut elements: Vec<(&Bytes, f64)> = set.iter().map(|(v, s)| (v, *s)).collect();
    elements.sort_by(|(va, sa), (vb, sb)| sa.total_cmp(sb).then_with(|| va.cmp(vb)));
    if order == SortedSetOrder::Descending {
        elements.reverse();
    }
    elements
}

fn in_score_range(score: f64, min: Option<f64>, max: Option<f64>) -> bool {
    min.is_none_or(|min| score.total_cmp(&min) != Ordering::Less)
        && max.is_none_or(|max| score.total_cmp(&max) != Ordering::Greater)
}

impl CacheStore {
    pub(crate) fn sorted_set_put(
        &self,
        name: &[u8],
        elements: Vec<(Bytes, f64)>,
        ttl: WireCollectionTtl,
        now: Instant,
    ) -> Result<(), Status> {
        self.write(name, ttl, now, |set: &mut SortedSetItem| {
            set.extend(elements);
            Ok(())
        })
    }

    pub(crate) fn sorted_set_fetch(
        &self,
        name: &[u8],
        order: SortedSetOrder,
        range: SortedSetRange,
        now: Instant,
    ) -> Result<Option<Vec<(Bytes, f64)>>, Status> {
        self.read(name, now, |set: &SortedSetItem| {
            let elements = ordered(set, order);
            let selected: Vec<(&Bytes, f64)> = match range {
                SortedSetRange::ByIndex { start, end } => {
                    let (start, end) = resolve_range(start, end, elements.len());
                    elements[start..end].to_vec()
                }
                SortedSetRange::ByScore {
                    min,
                    max,
                    offset,
                    count,
                } => elements
                    .into_iter()
                    .filter(|(_, score)| in_score_range(*score, min, max))
                    .skip(offset as usize)
                    .take(count.map_or(usize::MAX, |c| c as usize))
                    .collect(),
            };
            selected
                .into_iter()
                .map(|(value, score)| (value.clone(), score))
                .collect()
        })
    }

    pub(crate) fn sorted_set_get_score(
        &self,
        name: &[u8],
        values: &[Bytes],
        now: Instant,
    ) -> Result<Option<Vec<Option<f64>>>, Status> {
        self.read(name, now, |set: &SortedSetItem| {
            values.iter().map(|v| set.get(v).copied()).collect()
        })
    }

    pub(crate) fn sorted_set_get_rank(
        &self,
        name: &[u8],
        value: &[u8],
        order: SortedSetOrder,
        now: Instant,
    ) -> Result<Option<u64>, Status> {
        self.read(name, now, |set: &SortedSetItem| {
            ordered(set, order)
                .iter()
                .position(|(v, _)| v.as_slice() == value)
                .map(|rank| rank as u64)
        })
        .map(Option::flatten)
    }

    pub(crate) fn sorted_set_remove(
        &self,
        name: &[u8],
        values: &[Bytes],
        now: Instant,
    ) -> Result<(), Status> {
        self.modify(name, now, |set: &mut SortedSetItem| {
            for value in values {
                set.remove(value);
            }
        })
        .map(|_| ())
    }

    /// Count elements, optionally within inclusive score bounds
    pub(crate) fn sorted_set_length(
        &self,
        name: &[u8],
        min_score: Option<f64>,
        max_score: Option<f64>,
        now: Instant,
    ) -> Result<Option<u32>, Status> {
        self.read(name, now, |set: &SortedSetItem| {
            wire_len(
                set.values()
                    .filter(|score| in_score_range(**score, min_score, max_score))
                    .count(),
            )
        })
    }

    pub(crate) fn sorted_set_increment(
        &self,
        name: &[u8],
        value: Bytes,
        amount: f64,
        ttl: WireCollectionTtl,
        now: Instant,
    ) -> Result<f64, Status> {
        self.write(name, ttl, now, |set: &mut SortedSetItem| {
            let score = set.entry(value).or_insert(0.0);
            *score += amount;
            Ok(*score)
        })
    }
}
