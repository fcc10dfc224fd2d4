//! Memo Cache - bounded, named in-memory caches for memoizing lookups
//!
//! Provides LRU-evicting caches that report hits and misses to a shared
//! statistics collector, plus a registry for managing caches by name.

pub mod cache;
pub mod config;
pub mod error;
pub mod manager;
pub mod statistics;

pub use cache::{Cache, CacheStats};
pub use config::Config;
pub use error::{CacheError, Result};
pub use manager::CacheManager;
pub use statistics::{NoopCollector, StatisticType, StatisticsCollector, StatisticsManager};
