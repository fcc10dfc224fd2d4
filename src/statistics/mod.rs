//! Statistics Module
//!
//! Named counters shared by every cache in the process. Caches only see the
//! `StatisticsCollector` capability; `StatisticsManager` is the concrete sink.

mod collector;
mod manager;

pub use collector::{NoopCollector, StatisticType, StatisticsCollector};
pub use manager::{StatisticEntry, StatisticSummary, StatisticsManager, StatisticsReport};
