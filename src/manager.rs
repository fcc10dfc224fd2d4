//! Cache Manager Module
//!
//! Registry of named caches sharing a single statistics collector.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::info;

use crate::cache::{Cache, CacheStats};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::statistics::StatisticsCollector;

// == Cache Manager ==
/// Creates caches, hands out shared handles to them, and clears them in bulk.
pub struct CacheManager<K, V> {
    caches: RwLock<HashMap<String, Arc<Cache<K, V>>>>,
    collector: Arc<dyn StatisticsCollector>,
    default_max_size: usize,
}

impl<K, V> CacheManager<K, V>
where
    K: Eq + Hash + Clone,
    V: Clone,
{
    /// Creates an empty registry whose caches report to `collector`.
    pub fn new(collector: Arc<dyn StatisticsCollector>) -> Self {
        Self::with_config(collector, &Config::default())
    }

    /// Creates an empty registry using `config.default_max_size` for
    /// [`CacheManager::add_default_cache`].
    pub fn with_config(collector: Arc<dyn StatisticsCollector>, config: &Config) -> Self {
        Self {
            caches: RwLock::new(HashMap::new()),
            collector,
            default_max_size: config.default_max_size,
        }
    }

    // == Add Cache ==
    /// Creates and registers a cache.
    ///
    /// # Errors
    /// - `CacheError::DuplicateCache` if `name` is already registered
    /// - `CacheError::InvalidArgument` if `max_size` is 0
    pub fn add_cache(&self, name: &str, max_size: usize) -> Result<Arc<Cache<K, V>>> {
        let mut caches = self.caches.write();
        if caches.contains_key(name) {
            return Err(CacheError::DuplicateCache(name.to_string()));
        }

        let cache = Arc::new(Cache::new(name, max_size, Arc::clone(&self.collector))?);
        caches.insert(name.to_string(), Arc::clone(&cache));
        info!(cache = name, max_size, "Cache registered");
        Ok(cache)
    }

    /// Registers a cache sized by the configured default capacity.
    pub fn add_default_cache(&self, name: &str) -> Result<Arc<Cache<K, V>>> {
        self.add_cache(name, self.default_max_size)
    }

    // == Lookup ==
    /// Returns the cache registered under `name`.
    ///
    /// # Errors
    /// `CacheError::UnknownCache` if no such cache exists.
    pub fn cache(&self, name: &str) -> Result<Arc<Cache<K, V>>> {
        self.caches
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| CacheError::UnknownCache(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.caches.read().contains_key(name)
    }

    /// Registered cache names, sorted.
    pub fn cache_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.caches.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Handles to every registered cache, sorted by name.
    pub fn caches(&self) -> Vec<Arc<Cache<K, V>>> {
        let mut caches: Vec<Arc<Cache<K, V>>> = self.caches.read().values().cloned().collect();
        caches.sort_by(|a, b| a.name().cmp(b.name()));
        caches
    }

    // == Clear All ==
    /// Empties every registered cache. Caches stay registered.
    pub fn clear_all_entries(&self) {
        for cache in self.caches() {
            cache.clear();
        }
        info!("All cache entries cleared");
    }

    /// Statistics snapshot for every registered cache, sorted by name.
    pub fn stats(&self) -> Vec<CacheStats> {
        self.caches().iter().map(|cache| cache.stats()).collect()
    }

    /// Logs each cache's counters at info level.
    pub fn log_caches(&self) {
        for stats in self.stats() {
            info!(
                cache = %stats.name,
                size = stats.total_entries,
                max_size = stats.max_size,
                requests = stats.requests(),
                hits = stats.hits,
                misses = stats.misses,
                evictions = stats.evictions,
                hit_rate = stats.hit_rate(),
                "Cache statistics"
            );
        }
    }
}
