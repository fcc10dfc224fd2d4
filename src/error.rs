//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for caches and the cache registry.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CacheError {
    /// Precondition violated by the caller (e.g. a zero capacity)
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A cache with this name is already registered
    #[error("Cache already exists with name: {0}")]
    DuplicateCache(String),

    /// No cache is registered under this name
    #[error("Unable to find cache with name: {0}")]
    UnknownCache(String),
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
