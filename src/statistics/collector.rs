//! Statistics Collector Capability
//!
//! The narrow counter interface a cache reports its hits and misses through.

use std::fmt;

use serde::Serialize;

// == Statistic Type ==
/// Kinds of counters a cache emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatisticType {
    /// A `get` found a live entry
    CacheHitCount,
    /// A `get` found nothing under the key
    CacheMissCount,
}

impl StatisticType {
    /// Every statistic type, in reporting order.
    pub const ALL: [StatisticType; 2] = [StatisticType::CacheHitCount, StatisticType::CacheMissCount];

    /// Human-readable name used in logs and reports.
    pub fn description(&self) -> &'static str {
        match self {
            StatisticType::CacheHitCount => "Cache Hit Count",
            StatisticType::CacheMissCount => "Cache Miss Count",
        }
    }
}

impl fmt::Display for StatisticType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

// == Collector Trait ==
/// Sink for cache counter events.
///
/// Implementations are shared across caches and threads, so `increment` must be
/// safe to call concurrently.
pub trait StatisticsCollector: Send + Sync {
    /// Adds one to the `kind` counter tagged with `cache_name`.
    fn increment(&self, kind: StatisticType, cache_name: &str);
}

/// Collector that discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCollector;

impl StatisticsCollector for NoopCollector {
    fn increment(&self, _kind: StatisticType, _cache_name: &str) {}
}
