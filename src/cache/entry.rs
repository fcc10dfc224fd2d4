//! Cache Entry Module
//!
//! Defines the key/value pair stored for each cached item.

// == Cache Entry ==
/// A single cached item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CacheEntry<K, V> {
    /// Lookup identity, read back when the entry is evicted
    pub key: K,
    /// Stored payload
    pub value: V,
}

impl<K, V> CacheEntry<K, V> {
    /// Creates a new cache entry.
    pub fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Replaces the stored value, returning the previous one.
    pub fn replace(&mut self, value: V) -> V {
        std::mem::replace(&mut self.value, value)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new("key", 1);
        assert_eq!(entry.key, "key");
        assert_eq!(entry.value, 1);
    }

    #[test]
    fn test_entry_replace() {
        let mut entry = CacheEntry::new("key", 1);
        let previous = entry.replace(2);

        assert_eq!(previous, 1);
        assert_eq!(entry.value, 2);
        assert_eq!(entry, CacheEntry::new("key", 2));
    }

    #[test]
    fn test_entry_empty_value() {
        let entry: CacheEntry<&str, Option<u32>> = CacheEntry::new("key", None);
        assert_eq!(entry.value, None);
    }
}
