//! Configuration Module
//!
//! Handles loading cache and statistics settings from environment variables.

use std::env;

/// Default capacity for caches registered without an explicit size.
pub const DEFAULT_MAX_SIZE: usize = 5000;

/// Cache configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Capacity used by `CacheManager::add_default_cache`
    pub default_max_size: usize,
    /// Whether the statistics manager records hit/miss events
    pub statistics_enabled: bool,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `MEMO_CACHE_MAX_SIZE` - Default cache capacity, at least 1 (default: 5000)
    /// - `MEMO_STATISTICS_ENABLED` - Record statistics, `true`/`false` (default: false)
    pub fn from_env() -> Self {
        Self {
            default_max_size: env::var("MEMO_CACHE_MAX_SIZE")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|size: &usize| *size >= 1)
                .unwrap_or(DEFAULT_MAX_SIZE),
            statistics_enabled: env::var("MEMO_STATISTICS_ENABLED")
                .ok()
                .and_then(|v| v.trim().to_ascii_lowercase().parse().ok())
                .unwrap_or(false),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_max_size: DEFAULT_MAX_SIZE,
            statistics_enabled: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.default_max_size, 5000);
        assert!(!config.statistics_enabled);
    }

    // Both env cases live in one test so they cannot race each other.
    #[test]
    fn test_config_from_env() {
        env::remove_var("MEMO_CACHE_MAX_SIZE");
        env::remove_var("MEMO_STATISTICS_ENABLED");
        assert_eq!(Config::from_env(), Config::default());

        env::set_var("MEMO_CACHE_MAX_SIZE", "250");
        env::set_var("MEMO_STATISTICS_ENABLED", "TRUE");
        let config = Config::from_env();
        assert_eq!(config.default_max_size, 250);
        assert!(config.statistics_enabled);

        env::set_var("MEMO_CACHE_MAX_SIZE", "0");
        env::remove_var("MEMO_STATISTICS_ENABLED");
        assert_eq!(Config::from_env().default_max_size, DEFAULT_MAX_SIZE);

        env::set_var("MEMO_CACHE_MAX_SIZE", "lots");
        env::set_var("MEMO_STATISTICS_ENABLED", "maybe");
        assert_eq!(Config::from_env(), Config::default());

        env::remove_var("MEMO_CACHE_MAX_SIZE");
        env::remove_var("MEMO_STATISTICS_ENABLED");
    }
}
