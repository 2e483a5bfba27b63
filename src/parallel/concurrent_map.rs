//! Sharded concurrent accumulator keyed by document id.

use std::collections::BTreeMap;
use std::ops::AddAssign;

use parking_lot::Mutex;

use crate::document::DocumentId;

/// A fixed-shard concurrent map from document id to an accumulated value.
///
/// Each shard owns its own lock and its own ordered sub-map; an operation on
/// a key locks only the shard selected by `id mod shard_count` (valid because
/// ids are non-negative by construction). This lets many workers add to
/// per-document scores concurrently without one global lock.
///
/// # Safety contract
///
/// [`erase`](Self::erase) must never run concurrently with an
/// [`accumulate`](Self::accumulate) targeting the same key. The accumulator
/// does not enforce this; callers uphold it with a two-phase protocol — all
/// accumulation work is joined before any erase work begins. Shard internals
/// are never exposed, so the contract cannot be bypassed from outside.
#[derive(Debug)]
pub struct ConcurrentMap<V> {
    shards: Vec<Mutex<BTreeMap<DocumentId, V>>>,
}

impl<V> ConcurrentMap<V>
where
    V: Default + AddAssign + Send,
{
    /// Create an accumulator with the given number of shards (at least 1).
    pub fn new(shard_count: usize) -> Self {
        let shard_count = shard_count.max(1);
        let shards = (0..shard_count).map(|_| Mutex::new(BTreeMap::new())).collect();

        ConcurrentMap { shards }
    }

    /// Add `delta` to the value stored under `key`, creating it at the
    /// default value first if absent. Locks only the owning shard.
    pub fn accumulate(&self, key: DocumentId, delta: V) {
        let mut shard = self.shard(key).lock();
        *shard.entry(key).or_default() += delta;
    }

    /// Remove the entry under `key`, if any. Locks only the owning shard.
    pub fn erase(&self, key: DocumentId) {
        let mut shard = self.shard(key).lock();
        shard.remove(&key);
    }

    /// Merge every shard into one globally ordered map.
    ///
    /// This is a barrier operation: it consumes the accumulator and locks
    /// each shard in turn, so it must only run after all accumulation and
    /// erase work has been joined.
    pub fn into_ordered_map(self) -> BTreeMap<DocumentId, V> {
        let mut merged = BTreeMap::new();
        for shard in self.shards {
            merged.append(&mut shard.into_inner());
        }
        merged
    }

    /// Number of shards.
    pub fn shard_count(&self) -> usize {
        self.shards.len()
    }

    fn shard(&self, key: DocumentId) -> &Mutex<BTreeMap<DocumentId, V>> {
        let index = key as u64 % self.shards.len() as u64;
        &self.shards[index as usize]
    }
}
