//! # Cache Trait Hierarchy
//!
//! Small, layered traits that describe what a cache can do, so callers can be
//! written against behavior instead of a concrete policy type.
//!
//! ## Architecture
//!
//! ```text
//!   ┌─────────────────────────────────────────┐
//!   │          ReadOnlyCache<K, V>            │
//!   │                                         │
//!   │  contains(&, &K) → bool                 │
//!   │  len(&) → usize                         │
//!   │  is_empty(&) → bool                     │
//!   │  capacity(&) → usize                    │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │            CoreCache<K, V>              │
//!   │                                         │
//!   │  insert(&mut, K, V) → Option<V>         │
//!   │  get(&mut, &K) → Option<&V>             │
//!   │  clear(&mut)                            │
//!   └──────────────────┬──────────────────────┘
//!                      │
//!                      ▼
//!   ┌─────────────────────────────────────────┐
//!   │           MutableCache<K, V>            │
//!   │                                         │
//!   │  remove(&mut, &K) → Option<V>           │
//!   │  remove_batch(&mut, &[K])               │
//!   └─────────────────────────────────────────┘
//! ```
//!
//! `get` takes `&mut self` because a hit may reorder the policy's internal
//! lists. `contains` never does.
//!
//! ## Thread Safety
//!
//! None of these traits imply synchronization. Thread-safe wrappers
//! implement the [`ConcurrentCache`] marker.

/// Read-only inspection that never changes eviction order.
///
/// # Example
///
/// ```
/// use s4lru::policy::s4lru::S4lruCache;
/// use s4lru::traits::ReadOnlyCache;
///
/// fn occupancy<C: ReadOnlyCache<u64, u64>>(cache: &C) -> f64 {
///     cache.len() as f64 / cache.capacity() as f64
/// }
///
/// let mut cache = S4lruCache::new(8);
/// cache.insert(1, 1);
/// cache.insert(2, 2);
/// assert_eq!(occupancy(&cache), 0.25);
/// ```
pub trait ReadOnlyCache<K, V> {
    /// Checks if a key exists without updating access state.
    fn contains(&self, key: &K) -> bool;

    /// Returns the current number of entries in the cache.
    fn len(&self) -> usize;

    /// Returns `true` if the cache contains no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the maximum number of entries the cache can hold.
    fn capacity(&self) -> usize;
}

/// Operations every cache policy supports.
///
/// # Example
///
/// ```
/// use s4lru::policy::s4lru::S4lruCache;
/// use s4lru::traits::{CoreCache, ReadOnlyCache};
///
/// fn warm_cache<C: CoreCache<u64, String>>(cache: &mut C, data: &[(u64, String)]) {
///     for (key, value) in data {
///         cache.insert(*key, value.clone());
///     }
/// }
///
/// let mut cache = S4lruCache::new(100);
/// warm_cache(&mut cache, &[(1, "one".to_string()), (2, "two".to_string())]);
/// assert_eq!(cache.len(), 2);
/// ```
pub trait CoreCache<K, V>: ReadOnlyCache<K, V> {
    /// Inserts a key-value pair, returning the previous value if it existed.
    ///
    /// If the cache is at capacity, an entry may be evicted according to the
    /// cache's eviction policy before the new entry is inserted.
    fn insert(&mut self, key: K, value: V) -> Option<V>;

    /// Gets a reference to a value by key.
    ///
    /// May update internal ordering depending on the eviction policy. Use
    /// [`contains`](ReadOnlyCache::contains) if you only need to check
    /// existence without affecting eviction order.
    fn get(&mut self, key: &K) -> Option<&V>;

    /// Removes all entries from the cache.
    fn clear(&mut self);
}

/// Caches that support arbitrary key-based removal.
///
/// # Example
///
/// ```
/// use s4lru::policy::s4lru::S4lruCache;
/// use s4lru::traits::{CoreCache, MutableCache, ReadOnlyCache};
///
/// fn invalidate_keys<C: MutableCache<u64, String>>(cache: &mut C, keys: &[u64]) {
///     for key in keys {
///         cache.remove(key);
///     }
/// }
///
/// let mut cache = S4lruCache::new(100);
/// cache.insert(1, "one".to_string());
/// cache.insert(2, "two".to_string());
/// cache.insert(3, "three".to_string());
///
/// invalidate_keys(&mut cache, &[1, 3]);
/// assert!(!cache.contains(&1));
/// assert!(cache.contains(&2));
/// assert!(!cache.contains(&3));
/// ```
pub trait MutableCache<K, V>: CoreCache<K, V> {
    /// Removes a specific key-value pair.
    ///
    /// Returns the removed value if the key existed, or `None` if it didn't.
    fn remove(&mut self, key: &K) -> Option<V>;

    /// Removes multiple keys.
    ///
    /// Returns a vector of `Option<V>` in the same order as the input keys.
    fn remove_batch(&mut self, keys: &[K]) -> Vec<Option<V>> {
        keys.iter().map(|key| self.remove(key)).collect()
    }
}

/// Marker for cache handles that are safe to share across threads.
pub trait ConcurrentCache: Send + Sync {}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    /// Unbounded map-backed cache, enough to exercise the default methods.
    struct MapCache(HashMap<i32, String>);

    impl ReadOnlyCache<i32, String> for MapCache {
        fn contains(&self, key: &i32) -> bool {
            self.0.contains_key(key)
        }

        fn len(&self) -> usize {
            self.0.len()
        }

        fn capacity(&self) -> usize {
            usize::MAX
        }
    }

    impl CoreCache<i32, String> for MapCache {
        fn insert(&mut self, key: i32, value: String) -> Option<String> {
            self.0.insert(key, value)
        }

        fn get(&mut self, key: &i32) -> Option<&String> {
            self.0.get(key)
        }

        fn clear(&mut self) {
            self.0.clear();
        }
    }

    impl MutableCache<i32, String> for MapCache {
        fn remove(&mut self, key: &i32) -> Option<String> {
            self.0.remove(key)
        }
    }

    #[test]
    fn is_empty_follows_len() {
        let mut cache = MapCache(HashMap::new());
        assert!(cache.is_empty());
        cache.insert(1, "one".to_string());
        assert!(!cache.is_empty());
    }

    #[test]
    fn remove_batch_preserves_key_order() {
        let mut cache = MapCache(HashMap::new());
        cache.insert(1, "one".to_string());
        cache.insert(3, "three".to_string());

        let removed = cache.remove_batch(&[3, 2, 1]);
        assert_eq!(
            removed,
            vec![Some("three".to_string()), None, Some("one".to_string())]
        );
        assert!(cache.is_empty());
    }
}
