//! Cache Module
//!
//! Provides a bounded in-memory cache with LRU eviction and hit/miss accounting.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruList;
pub use stats::CacheStats;
pub use store::Cache;
