//! Builder for S4LRU caches.
//!
//! Collects construction options in one place and validates them once, so
//! callers can choose between a panicking `build` and a fallible `try_build`.
//!
//! ## Example
//!
//! ```rust
//! use s4lru::builder::S4lruBuilder;
//!
//! let mut cache = S4lruBuilder::new(100).build::<u64, String>();
//! cache.insert(1, "hello".to_string());
//! assert_eq!(cache.get(&1), Some(&"hello".to_string()));
//! assert_eq!(cache.segment_capacity(), 25);
//! ```

use std::hash::Hash;

use crate::error::ConfigError;
#[cfg(feature = "concurrency")]
use crate::policy::s4lru::ConcurrentS4lruCache;
use crate::policy::s4lru::S4lruCache;

/// Builder for creating cache instances.
#[derive(Debug, Clone)]
pub struct S4lruBuilder {
    capacity: usize,
    presize_index: bool,
}

impl S4lruBuilder {
    /// Create a new cache builder with the specified total capacity.
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity,
            presize_index: true,
        }
    }

    /// Whether the key index reserves room for every slot up front.
    ///
    /// On by default. Turning it off lets the index grow on demand, which
    /// trades rehashing during warm-up for a smaller footprint on caches
    /// that never fill.
    pub fn presize_index(mut self, presize: bool) -> Self {
        self.presize_index = presize;
        self
    }

    /// Build a cache.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is below 4. See [`try_build`](Self::try_build).
    pub fn build<K, V>(self) -> S4lruCache<K, V>
    where
        K: Clone + Eq + Hash,
    {
        match self.try_build() {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Build a cache, returning an error on invalid configuration.
    ///
    /// # Example
    ///
    /// ```rust
    /// use s4lru::builder::S4lruBuilder;
    ///
    /// assert!(S4lruBuilder::new(2).try_build::<u64, u64>().is_err());
    ///
    /// let cache = S4lruBuilder::new(12)
    ///     .presize_index(false)
    ///     .try_build::<u64, u64>()
    ///     .unwrap();
    /// assert_eq!(cache.capacity(), 12);
    /// ```
    pub fn try_build<K, V>(self) -> Result<S4lruCache<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        S4lruCache::try_with_options(self.capacity, self.presize_index)
    }

    /// Build a thread-safe cache.
    ///
    /// # Panics
    ///
    /// Panics if the capacity is below 4.
    #[cfg(feature = "concurrency")]
    pub fn build_concurrent<K, V>(self) -> ConcurrentS4lruCache<K, V>
    where
        K: Clone + Eq + Hash,
    {
        ConcurrentS4lruCache::from_cache(self.build())
    }

    #[cfg(feature = "concurrency")]
    pub fn try_build_concurrent<K, V>(self) -> Result<ConcurrentS4lruCache<K, V>, ConfigError>
    where
        K: Clone + Eq + Hash,
    {
        self.try_build().map(ConcurrentS4lruCache::from_cache)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::s4lru::Level;

    #[test]
    fn test_basic_ops() {
        let mut cache = S4lruBuilder::new(10).build::<u64, String>();

        assert_eq!(cache.insert(1, "one".to_string()), None);
        assert_eq!(cache.insert(2, "two".to_string()), None);

        assert_eq!(cache.get(&1), Some(&"one".to_string()));
        assert_eq!(cache.get(&3), None);
        assert!(cache.contains(&2));
        assert_eq!(cache.len(), 2);

        assert_eq!(cache.insert(1, "ONE".to_string()), Some("one".to_string()));
        assert_eq!(cache.level_of(&1), Some(Level::L0));

        cache.clear();
        assert!(cache.is_empty());
    }

    #[test]
    fn test_capacity_enforcement() {
        let mut cache = S4lruBuilder::new(8).build::<u64, String>();

        cache.insert(1, "one".to_string());
        cache.insert(2, "two".to_string());
        cache.insert(3, "three".to_string()); // level 0 holds 2, evicts key 1

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains(&1));
        assert!(cache.contains(&2));
        assert!(cache.contains(&3));
    }

    #[test]
    fn test_invalid_capacity() {
        let err = S4lruBuilder::new(0).try_build::<u64, u64>().unwrap_err();
        assert!(err.to_string().contains("capacity"));
    }

    #[test]
    fn test_unsized_index_behaves_the_same() {
        let mut cache = S4lruBuilder::new(4)
            .presize_index(false)
            .build::<u64, u64>();
        cache.insert(1, 1);
        cache.get(&1);
        assert_eq!(cache.level_of(&1), Some(Level::L1));
        cache.check_invariants().unwrap();
    }

    #[cfg(feature = "concurrency")]
    #[test]
    fn test_concurrent_build() {
        let cache = S4lruBuilder::new(16).build_concurrent::<u64, u64>();
        cache.insert(1, 1);
        assert_eq!(cache.get(&1), Some(1));
        assert!(S4lruBuilder::new(1).try_build_concurrent::<u64, u64>().is_err());
    }
}
