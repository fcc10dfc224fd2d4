//! Cache Store Module
//!
//! Main cache engine combining HashMap storage with LRU tracking and hit/miss
//! accounting reported to a shared statistics collector.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use crate::cache::{CacheEntry, CacheStats, LruList};
use crate::error::{CacheError, Result};
use crate::statistics::{StatisticType, StatisticsCollector};

/// State guarded by the cache lock.
struct CacheState<K, V> {
    /// Key to slot in `lru`
    index: HashMap<K, usize>,
    lru: LruList<K, V>,
    stats: CacheStats,
}

// == Cache ==
/// Bounded, named cache with LRU eviction.
///
/// `put`, `get` and `clear` all take the same lock, so recency promotion on a
/// hit is serialized with inserts and evictions. Hit and miss events are sent
/// to the collector while the lock is held, which keeps the local counters and
/// the collector in step.
pub struct Cache<K, V> {
    name: String,
    max_size: usize,
    state: Mutex<CacheState<K, V>>,
    collector: Arc<dyn StatisticsCollector>,
}

impl<K, V> Cache<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates an empty cache.
    ///
    /// # Arguments
    /// * `name` - Identity used to tag statistics events
    /// * `max_size` - Maximum number of entries, at least 1
    /// * `collector` - Sink for hit/miss events
    ///
    /// # Errors
    /// `CacheError::InvalidArgument` when `max_size` is 0.
    pub fn new(
        name: impl Into<String>,
        max_size: usize,
        collector: Arc<dyn StatisticsCollector>,
    ) -> Result<Self> {
        if max_size < 1 {
            return Err(CacheError::InvalidArgument(
                "cache max size must be greater than 0".to_string(),
            ));
        }
        let name = name.into();

        Ok(Self {
            state: Mutex::new(CacheState {
                index: HashMap::new(),
                lru: LruList::new(),
                stats: CacheStats::new(name.clone(), max_size),
            }),
            name,
            max_size,
            collector,
        })
    }

    // == Put ==
    /// Stores `value` under `key` and marks the key most recently used.
    ///
    /// Overwriting keeps the size unchanged. Inserting a new key into a full
    /// cache first evicts the least recently used entry.
    pub fn put(&self, key: K, value: V) {
        let mut state = self.state.lock();
        let state = &mut *state;

        if let Some(&idx) = state.index.get(&key) {
            if let Some(entry) = state.lru.get_mut(idx) {
                entry.replace(value);
            }
            state.lru.move_to_front(idx);
            return;
        }

        if state.lru.len() >= self.max_size {
            if let Some(evicted) = state.lru.pop_back() {
                state.index.remove(&evicted.key);
                state.stats.record_eviction();
                debug!(cache = %self.name, "Evicted least recently used entry");
            }
        }

        let idx = state.lru.push_front(CacheEntry::new(key.clone(), value));
        state.index.insert(key, idx);
    }

    // == Get ==
    /// Looks up `key`, returning a clone of the stored value.
    ///
    /// A hit promotes the key to most recently used. Every call counts as
    /// exactly one hit or one miss, both locally and in the collector.
    pub fn get<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        let mut state = self.state.lock();

        let hit = state.index.get(key).copied().and_then(|idx| {
            state
                .lru
                .get(idx)
                .map(|entry| (idx, entry.value.clone()))
        });

        match hit {
            Some((idx, value)) => {
                state.lru.move_to_front(idx);
                state.stats.record_hit();
                self.collector
                    .increment(StatisticType::CacheHitCount, &self.name);
                trace!(cache = %self.name, "Cache hit");
                Some(value)
            }
            None => {
                state.stats.record_miss();
                self.collector
                    .increment(StatisticType::CacheMissCount, &self.name);
                trace!(cache = %self.name, "Cache miss");
                None
            }
        }
    }

    // == Get Or Insert ==
    /// Returns the cached value for `key`, computing and storing it on a miss.
    ///
    /// `compute` runs without the lock held, so two racing callers may both
    /// compute; the later `put` wins. Accounting matches a plain `get`.
    pub fn get_or_insert_with<F>(&self, key: K, compute: F) -> V
    where
        F: FnOnce() -> V,
    {
        if let Some(value) = self.get(&key) {
            return value;
        }
        let value = compute();
        self.put(key, value.clone());
        value
    }

    /// Checks for `key` without counting a hit/miss or touching recency.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.state.lock().index.contains_key(key)
    }

    // == Clear ==
    /// Removes every entry. Hit/miss counters are kept.
    pub fn clear(&self) {
        let mut state = self.state.lock();
        state.index.clear();
        state.lru.clear();
        debug!(cache = %self.name, "Cache cleared");
    }

    // == Entries ==
    /// Snapshot of the cached values, least recently used first.
    pub fn entries(&self) -> Vec<V> {
        let state = self.state.lock();
        state
            .lru
            .iter_oldest_first()
            .map(|entry| entry.value.clone())
            .collect()
    }
}

impl<K, V> Cache<K, V> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_size(&self) -> usize {
        self.max_size
    }

    /// Current number of entries.
    pub fn size(&self) -> usize {
        self.state.lock().lru.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.lock().lru.is_empty()
    }

    pub fn hit_count(&self) -> u64 {
        self.state.lock().stats.hits
    }

    pub fn miss_count(&self) -> u64 {
        self.state.lock().stats.misses
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        let mut stats = state.stats.clone();
        stats.set_total_entries(state.lru.len());
        stats
    }
}

impl<K, V> fmt::Debug for Cache<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("Cache")
            .field("name", &self.name)
            .field("size", &state.lru.len())
            .field("max_size", &self.max_size)
            .field("hit_count", &state.stats.hits)
            .field("miss_count", &state.stats.misses)
            .finish()
    }
}
