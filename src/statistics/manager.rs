//! Statistics Manager
//!
//! Process-wide counter table keyed by statistic type and entry key (the cache
//! name for cache statistics).

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use parking_lot::RwLock;
use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::statistics::{StatisticType, StatisticsCollector};

// == Statistic Entry ==
/// A single counter value within a statistic type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticEntry {
    /// Entry key, usually a cache name
    pub key: String,
    /// Number of increments recorded
    pub value: u64,
}

// == Statistics Report ==
/// Serializable snapshot of every recorded statistic.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticsReport {
    /// Whether recording was enabled when the snapshot was taken
    pub enabled: bool,
    /// Statistic type, its description and its entries sorted by key
    pub statistics: Vec<StatisticSummary>,
}

/// Entries recorded under one statistic type.
#[derive(Debug, Clone, Serialize)]
pub struct StatisticSummary {
    #[serde(rename = "type")]
    pub kind: StatisticType,
    pub description: &'static str,
    pub total: u64,
    pub entries: Vec<StatisticEntry>,
}

// == Statistics Manager ==
/// Thread-safe named counter table implementing [`StatisticsCollector`].
///
/// Increments are ignored while the manager is disabled.
#[derive(Debug, Default)]
pub struct StatisticsManager {
    enabled: AtomicBool,
    counters: RwLock<HashMap<StatisticType, HashMap<String, u64>>>,
}

impl StatisticsManager {
    // == Constructor ==
    /// Creates an empty manager.
    ///
    /// # Arguments
    /// * `enabled` - Whether increments are recorded
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled: AtomicBool::new(enabled),
            counters: RwLock::new(HashMap::new()),
        }
    }

    /// Creates a manager honouring `Config::statistics_enabled`.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.statistics_enabled)
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Turns recording on or off. Existing counters are kept.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
        debug!(enabled, "Statistics recording toggled");
    }

    // == Increment ==
    /// Adds one to the counter for `kind` and `key`, creating it on first use.
    pub fn increment(&self, kind: StatisticType, key: &str) {
        if !self.is_enabled() {
            return;
        }
        let mut counters = self.counters.write();
        let entries = counters.entry(kind).or_default();
        match entries.get_mut(key) {
            Some(value) => *value += 1,
            None => {
                entries.insert(key.to_string(), 1);
            }
        }
    }

    // == Queries ==
    /// Returns the current count for `kind` and `key`, or 0 if never incremented.
    pub fn value(&self, kind: StatisticType, key: &str) -> u64 {
        self.counters
            .read()
            .get(&kind)
            .and_then(|entries| entries.get(key))
            .copied()
            .unwrap_or(0)
    }

    /// Sum of every entry recorded under `kind`.
    pub fn total(&self, kind: StatisticType) -> u64 {
        self.counters
            .read()
            .get(&kind)
            .map(|entries| entries.values().sum())
            .unwrap_or(0)
    }

    /// Entries recorded under `kind`, sorted by key.
    pub fn entries(&self, kind: StatisticType) -> Vec<StatisticEntry> {
        let counters = self.counters.read();
        let mut entries: Vec<StatisticEntry> = counters
            .get(&kind)
            .map(|entries| {
                entries
                    .iter()
                    .map(|(key, value)| StatisticEntry {
                        key: key.clone(),
                        value: *value,
                    })
                    .collect()
            })
            .unwrap_or_default();
        entries.sort_by(|a, b| a.key.cmp(&b.key));
        entries
    }

    // == Report ==
    /// Snapshot of every statistic type that has at least one entry.
    pub fn report(&self) -> StatisticsReport {
        let statistics = StatisticType::ALL
            .iter()
            .map(|kind| {
                let entries = self.entries(*kind);
                StatisticSummary {
                    kind: *kind,
                    description: kind.description(),
                    total: entries.iter().map(|e| e.value).sum(),
                    entries,
                }
            })
            .filter(|summary| !summary.entries.is_empty())
            .collect();

        StatisticsReport {
            enabled: self.is_enabled(),
            statistics,
        }
    }

    /// Drops every recorded counter.
    pub fn clear(&self) {
        self.counters.write().clear();
        debug!("Statistics cleared");
    }
}

impl StatisticsCollector for StatisticsManager {
    fn increment(&self, kind: StatisticType, cache_name: &str) {
        StatisticsManager::increment(self, kind, cache_name);
    }
}
