//! Segmented LRU with four levels (S4LRU).
//!
//! Keeps four LRU segments of equal size, level 0 (coldest) to level 3
//! (hottest). A miss inserts at the front of level 0. A hit moves the entry
//! one level up; a hit on level 3 only refreshes its position there. When the
//! level above is full, its back entry drops one level to make room. Entries
//! only leave the cache from the back of level 0.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                          S4lruCache<K, V> Layout                            │
//! │                                                                             │
//! │   index: FxHashMap<K, Location { level, slot }>                             │
//! │                                                                             │
//! │   ┌──────────┬──────────────┐                                               │
//! │   │   Key    │   Location   │                                               │
//! │   ├──────────┼──────────────┤                                               │
//! │   │  "page1" │  (L3, #0)    │──────────────────────────────┐                │
//! │   │  "page2" │  (L0, #1)    │────┐                         │                │
//! │   └──────────┴──────────────┘    │                         │                │
//! │                                  ▼                         ▼                │
//! │   segments: [SegmentList<Entry<K, V>>; 4], each with `segment_cap` slots    │
//! │                                                                             │
//! │     L0 (cold)      L1             L2             L3 (hot)                   │
//! │   ┌──────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐                 │
//! │   │ front    │   │ front    │   │ front    │   │ front    │                 │
//! │   │   ...    │──►│   ...    │──►│   ...    │──►│   ...    │◄─┐ hit on L3    │
//! │   │ back     │◄──│ back     │◄──│ back     │◄──│ back     │──┘ stays on L3  │
//! │   └────┬─────┘   └──────────┘   └──────────┘   └──────────┘                 │
//! │        ▼            ──► promotion on hit   ◄── demotion of displaced back   │
//! │     evicted                                                                 │
//! └─────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Allocation-free steady state
//!
//! Every segment reserves its slots at construction. Once the cache is warm:
//!
//! - A promotion into a full level swaps the `(key, value)` payloads of the
//!   hit slot and the back slot of the level above. Each slot then moves to
//!   the front of its own segment and both index entries are repointed.
//! - An insert into a full level 0 overwrites the payload of its back slot
//!   in place and moves that slot to the front.
//!
//! The observable result matches "remove from level i, push to the front of
//! level i + 1, push the displaced back of level i + 1 to the front of level i".
//!
//! ## Operations
//!
//! | Operation   | Time   | Notes                                       |
//! |-------------|--------|---------------------------------------------|
//! | `get`       | O(1)   | Promotes by exactly one level               |
//! | `insert`    | O(1)   | Always lands on level 0                     |
//! | `remove`    | O(1)   | Shrinks one segment, no demotion cascade    |
//! | `peek`      | O(1)   | No reordering                               |
//! | `len`       | O(1)   | Index size                                  |
//! | `clear`     | O(n)   | Resets all segments                         |
//!
//! ## Example Usage
//!
//! ```
//! use s4lru::policy::s4lru::{Level, S4lruCache};
//!
//! // 16 slots in total, 4 per segment
//! let mut cache = S4lruCache::new(16);
//!
//! cache.insert("page1", "content1");
//! assert_eq!(cache.level_of(&"page1"), Some(Level::L0));
//!
//! // Each hit climbs one level
//! assert_eq!(cache.get(&"page1"), Some(&"content1"));
//! assert_eq!(cache.level_of(&"page1"), Some(Level::L1));
//!
//! assert_eq!(cache.remove(&"page1"), Some("content1"));
//! assert!(cache.is_empty());
//! ```
//!
//! ## Thread Safety
//!
//! - [`S4lruCache`]: Not thread-safe, every operation needs `&mut self` or
//!   external synchronization
//! - [`ConcurrentS4lruCache`]: One `parking_lot::Mutex` held for the whole of
//!   each operation (feature `concurrency`)
//!
//! ## References
//!
//! - Huang et al., "An Analysis of Facebook Photo Caching", SOSP 2013

use std::collections::TryReserveError;
use std::fmt;
use std::hash::Hash;
#[cfg(feature = "concurrency")]
use std::sync::Arc;

use log::{debug, trace};
#[cfg(feature = "concurrency")]
use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::ds::{SegmentList, SlotId};
use crate::error::{ConfigError, InvariantError};
#[cfg(feature = "metrics")]
use crate::metrics::metrics_impl::S4lruMetrics;
#[cfg(feature = "metrics")]
use crate::metrics::snapshot::S4lruMetricsSnapshot;
#[cfg(feature = "metrics")]
use crate::metrics::traits::{CoreMetricsRecorder, MetricsSnapshotProvider, S4lruMetricsRecorder};
#[cfg(feature = "concurrency")]
use crate::traits::ConcurrentCache;
use crate::traits::{CoreCache, MutableCache, ReadOnlyCache};

/// Number of segments.
pub const SEGMENTS: usize = 4;

/// Segment an entry lives in, from coldest to hottest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Level {
    L0,
    L1,
    L2,
    L3,
}

impl Level {
    /// All levels, coldest first.
    pub const ALL: [Level; SEGMENTS] = [Level::L0, Level::L1, Level::L2, Level::L3];

    /// Returns the segment index, `0..=3`.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    #[inline]
    pub fn from_index(index: usize) -> Option<Level> {
        Self::ALL.get(index).copied()
    }

    /// Level a hit promotes to, `None` on the top level.
    #[inline]
    pub fn next(self) -> Option<Level> {
        Self::from_index(self.index() + 1)
    }

    /// Level a displaced entry is demoted to, `None` on level 0.
    #[inline]
    pub fn prev(self) -> Option<Level> {
        self.index().checked_sub(1).and_then(Self::from_index)
    }
}

/// Payload of one slot. Promotion swaps move whole entries between slots.
#[derive(Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Where a key currently lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Location {
    level: Level,
    slot: SlotId,
}

/// Four-segment LRU cache.
///
/// Capacity is split evenly: each segment holds `capacity / 4` entries and the
/// remainder of the division is unused. Capacities below 4 are rejected.
///
/// # Type Parameters
///
/// - `K`: Key type, must be `Clone + Eq + Hash`
/// - `V`: Value type
///
/// # Example
///
/// ```
/// use s4lru::policy::s4lru::{Level, S4lruCache};
///
/// // One slot per segment
/// let mut cache = S4lruCache::new(4);
///
/// cache.insert("a", 1);
/// cache.get(&"a");
/// cache.get(&"a");
/// cache.get(&"a");
/// assert_eq!(cache.level_of(&"a"), Some(Level::L3));
///
/// // Level 0 has a single slot, so the next insert replaces "b"
/// cache.insert("b", 2);
/// cache.insert("c", 3);
/// assert!(!cache.contains(&"b"));
/// assert!(cache.contains(&"a"));
/// ```
pub struct S4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    index: FxHashMap<K, Location>,
    segments: [SegmentList<Entry<K, V>>; SEGMENTS],
    segment_cap: usize,
    requested_capacity: usize,
    #[cfg(feature = "metrics")]
    metrics: S4lruMetrics,
}

impl<K, V> S4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a cache holding up to `capacity` entries, `capacity / 4` per segment.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 4`. See [`try_new`](Self::try_new).
    ///
    /// # Example
    ///
    /// ```
    /// use s4lru::policy::s4lru::S4lruCache;
    ///
    /// let cache: S4lruCache<String, i32> = S4lruCache::new(10);
    /// assert_eq!(cache.segment_capacity(), 2);
    /// assert_eq!(cache.capacity(), 8);
    /// assert_eq!(cache.requested_capacity(), 10);
    /// ```
    pub fn new(capacity: usize) -> Self {
        match Self::try_new(capacity) {
            Ok(cache) => cache,
            Err(e) => panic!("{}", e),
        }
    }

    /// Creates a cache, returning an error instead of panicking on a capacity
    /// too small to give every segment a slot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::CapacityTooSmall`] if `capacity < 4`, and
    /// [`ConfigError::CapacityTooLarge`] if the slots or the index cannot be
    /// reserved.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        Self::try_with_options(capacity, true)
    }

    pub(crate) fn try_with_options(
        capacity: usize,
        presize_index: bool,
    ) -> Result<Self, ConfigError> {
        if capacity < SEGMENTS {
            return Err(ConfigError::CapacityTooSmall {
                capacity,
                min: SEGMENTS,
            });
        }
        let too_large = |_: TryReserveError| ConfigError::CapacityTooLarge { capacity };

        let segment_cap = capacity / SEGMENTS;
        let mut segments = Vec::with_capacity(SEGMENTS);
        for _ in 0..SEGMENTS {
            segments.push(SegmentList::try_with_capacity(segment_cap).map_err(too_large)?);
        }
        let segments: [SegmentList<Entry<K, V>>; SEGMENTS] = match segments.try_into() {
            Ok(segments) => segments,
            Err(_) => return Err(ConfigError::CapacityTooLarge { capacity }),
        };

        let mut index = FxHashMap::default();
        if presize_index {
            index.try_reserve(segment_cap * SEGMENTS).map_err(too_large)?;
        }

        debug!(
            "s4lru: capacity={} segment_capacity={} unused={}",
            capacity,
            segment_cap,
            capacity % SEGMENTS
        );

        Ok(Self {
            index,
            segments,
            segment_cap,
            requested_capacity: capacity,
            #[cfg(feature = "metrics")]
            metrics: S4lruMetrics::default(),
        })
    }

    /// Looks up `key` and promotes it one level.
    ///
    /// A hit on level 3 moves the entry to the front of level 3. A miss
    /// leaves the cache untouched.
    ///
    /// # Example
    ///
    /// ```
    /// use s4lru::policy::s4lru::{Level, S4lruCache};
    ///
    /// let mut cache = S4lruCache::new(8);
    /// cache.insert("key", 42);
    ///
    /// assert_eq!(cache.get(&"key"), Some(&42));
    /// assert_eq!(cache.level_of(&"key"), Some(Level::L1));
    ///
    /// assert_eq!(cache.get(&"missing"), None);
    /// ```
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let Some(&location) = self.index.get(key) else {
            #[cfg(feature = "metrics")]
            self.metrics.record_get_miss();
            return None;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_get_hit();

        let location = match location.level.next() {
            Some(upper) => {
                let promoted = self.promote(key, location, upper);
                debug_assert!(
                    promoted.is_some(),
                    "s4lru: indexed entry at segment {} slot {} could not be promoted",
                    location.level.index(),
                    location.slot.index()
                );
                promoted?
            },
            None => {
                self.segments[location.level.index()].move_to_front(location.slot);
                #[cfg(feature = "metrics")]
                self.metrics.record_top_level_touch();
                location
            },
        };

        self.segments[location.level.index()]
            .get(location.slot)
            .map(|entry| &entry.value)
    }

    /// Moves the entry at `location` to the front of `upper`, returning its new location.
    fn promote(&mut self, key: &K, location: Location, upper: Level) -> Option<Location> {
        let lower = location.level;

        #[cfg(feature = "metrics")]
        self.metrics.record_promotion();

        if !self.segments[upper.index()].is_full() {
            let entry = self.segments[lower.index()].remove(location.slot)?;
            let slot = self.segments[upper.index()].push_front(entry).ok()?;
            let promoted = Location { level: upper, slot };
            if let Some(current) = self.index.get_mut(key) {
                *current = promoted;
            }
            return Some(promoted);
        }

        // Upper level is full: trade payloads with its back slot so no slot
        // changes segment.
        let displaced = self.segments[upper.index()].back_id()?;
        {
            let (below, above) = self.segments.split_at_mut(upper.index());
            let hit = below[lower.index()].get_mut(location.slot)?;
            let back = above[0].get_mut(displaced)?;
            std::mem::swap(hit, back);
        }
        self.segments[lower.index()].move_to_front(location.slot);
        self.segments[upper.index()].move_to_front(displaced);

        let promoted = Location {
            level: upper,
            slot: displaced,
        };
        if let Some(current) = self.index.get_mut(key) {
            *current = promoted;
        }
        let demoted_key = &self.segments[lower.index()].get(location.slot)?.key;
        if let Some(current) = self.index.get_mut(demoted_key) {
            *current = location;
        }

        trace!(
            "s4lru: promotion swap, slot {} demoted to level {}",
            displaced.index(),
            lower.index()
        );
        #[cfg(feature = "metrics")]
        self.metrics.record_promotion_swap();

        Some(promoted)
    }

    /// Inserts `key` at the front of level 0, returning the value it replaced.
    ///
    /// A key that is already resident is taken out of its current segment
    /// first, whatever its level, so re-inserting a hot key makes it cold
    /// again. When level 0 is full its back entry is evicted.
    ///
    /// # Example
    ///
    /// ```
    /// use s4lru::policy::s4lru::{Level, S4lruCache};
    ///
    /// let mut cache = S4lruCache::new(8);
    /// assert_eq!(cache.insert("key", "initial"), None);
    /// cache.get(&"key");
    /// assert_eq!(cache.level_of(&"key"), Some(Level::L1));
    ///
    /// assert_eq!(cache.insert("key", "updated"), Some("initial"));
    /// assert_eq!(cache.level_of(&"key"), Some(Level::L0));
    /// assert_eq!(cache.len(), 1);
    /// ```
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_insert_call();

        let previous = self.detach(&key).map(|entry| entry.value);

        #[cfg(feature = "metrics")]
        {
            if previous.is_some() {
                self.metrics.record_insert_update();
            } else {
                self.metrics.record_insert_new();
            }
        }

        let entry = Entry {
            key: key.clone(),
            value,
        };
        match self.segments[Level::L0.index()].push_front(entry) {
            Ok(slot) => {
                self.index.insert(
                    key,
                    Location {
                        level: Level::L0,
                        slot,
                    },
                );
            },
            Err(entry) => self.replace_coldest(entry),
        }

        previous
    }

    /// Overwrites the back slot of a full level 0 with `entry`.
    fn replace_coldest(&mut self, entry: Entry<K, V>) {
        let cold = &mut self.segments[Level::L0.index()];
        let Some(slot) = cold.back_id() else {
            return;
        };
        let Some(payload) = cold.get_mut(slot) else {
            return;
        };

        #[cfg(feature = "metrics")]
        self.metrics.record_evict_call();

        let key = entry.key.clone();
        let evicted = std::mem::replace(payload, entry);
        cold.move_to_front(slot);
        self.index.remove(&evicted.key);
        self.index.insert(
            key,
            Location {
                level: Level::L0,
                slot,
            },
        );

        trace!("s4lru: evicted entry from level 0 slot {}", slot.index());
        #[cfg(feature = "metrics")]
        self.metrics.record_evicted_entry();
    }

    /// Removes `key` from whichever segment holds it.
    ///
    /// Other segments are left as they are; nothing is pulled down to fill the gap.
    ///
    /// # Example
    ///
    /// ```
    /// use s4lru::policy::s4lru::S4lruCache;
    ///
    /// let mut cache = S4lruCache::new(8);
    /// cache.insert("key", 42);
    ///
    /// assert_eq!(cache.remove(&"key"), Some(42));
    /// assert_eq!(cache.remove(&"key"), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        #[cfg(feature = "metrics")]
        self.metrics.record_remove_call();

        let entry = self.detach(key)?;

        #[cfg(feature = "metrics")]
        self.metrics.record_remove_found();

        Some(entry.value)
    }

    /// Unlinks `key` from its segment and the index.
    fn detach(&mut self, key: &K) -> Option<Entry<K, V>> {
        let location = self.index.remove(key)?;
        self.segments[location.level.index()].remove(location.slot)
    }

    /// Returns the value for `key` without promoting it.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let location = self.index.get(key)?;
        self.segments[location.level.index()]
            .get(location.slot)
            .map(|entry| &entry.value)
    }

    /// Returns `true` if `key` is resident. Does not promote.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the level currently holding `key`.
    #[inline]
    pub fn level_of(&self, key: &K) -> Option<Level> {
        self.index.get(key).map(|location| location.level)
    }

    /// Returns the number of resident entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.index.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Returns the usable capacity, `4 * segment_capacity()`.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.segment_cap * SEGMENTS
    }

    /// Returns the capacity the cache was constructed with.
    #[inline]
    pub fn requested_capacity(&self) -> usize {
        self.requested_capacity
    }

    /// Returns the number of slots in each segment.
    #[inline]
    pub fn segment_capacity(&self) -> usize {
        self.segment_cap
    }

    /// Returns the number of entries on `level`.
    #[inline]
    pub fn segment_len(&self, level: Level) -> usize {
        self.segments[level.index()].len()
    }

    /// Keys on `level` from front (most recently promoted) to back.
    pub fn keys_in(&self, level: Level) -> impl Iterator<Item = &K> + '_ {
        self.segments[level.index()].iter().map(|entry| &entry.key)
    }

    /// Removes every entry. Slot storage is kept for reuse.
    pub fn clear(&mut self) {
        for segment in &mut self.segments {
            segment.clear();
        }
        self.index.clear();

        debug!("s4lru: cleared");
        #[cfg(feature = "metrics")]
        self.metrics.record_clear();
    }

    /// Checks that the index and the segments describe the same entries.
    ///
    /// Every segment must be within its capacity, every linked slot must be
    /// indexed under its own key at its own location, and the index must not
    /// hold anything else.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantError`] describing the first violation found.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        let mut linked = 0usize;

        for level in Level::ALL {
            let segment = &self.segments[level.index()];
            if segment.len() > self.segment_cap {
                return Err(InvariantError::in_segment(
                    level.index(),
                    format!(
                        "holds {} entries, capacity {}",
                        segment.len(),
                        self.segment_cap
                    ),
                ));
            }

            let mut walked = 0usize;
            for slot in segment.iter_ids() {
                walked += 1;
                let entry = segment.get(slot).ok_or_else(|| {
                    InvariantError::in_segment(
                        level.index(),
                        format!("links vacant slot {}", slot.index()),
                    )
                })?;
                let expected = Location { level, slot };
                match self.index.get(&entry.key) {
                    Some(location) if *location == expected => {},
                    Some(location) => {
                        return Err(InvariantError::in_segment(
                            level.index(),
                            format!(
                                "slot {} is indexed at segment {} slot {}",
                                slot.index(),
                                location.level.index(),
                                location.slot.index()
                            ),
                        ));
                    },
                    None => {
                        return Err(InvariantError::in_segment(
                            level.index(),
                            format!("slot {} has no index entry", slot.index()),
                        ));
                    },
                }
            }

            if walked != segment.len() {
                return Err(InvariantError::in_segment(
                    level.index(),
                    format!("walked {} entries but len = {}", walked, segment.len()),
                ));
            }
            linked += walked;
        }

        if linked != self.index.len() {
            return Err(InvariantError::new(format!(
                "index holds {} keys but segments link {} entries",
                self.index.len(),
                linked
            )));
        }
        Ok(())
    }
}

#[cfg(feature = "metrics")]
impl<K, V> S4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    pub fn metrics_snapshot(&self) -> S4lruMetricsSnapshot {
        S4lruMetricsSnapshot {
            get_calls: self.metrics.get_calls,
            get_hits: self.metrics.get_hits,
            get_misses: self.metrics.get_misses,
            insert_calls: self.metrics.insert_calls,
            insert_updates: self.metrics.insert_updates,
            insert_new: self.metrics.insert_new,
            evict_calls: self.metrics.evict_calls,
            evicted_entries: self.metrics.evicted_entries,
            promotions: self.metrics.promotions,
            promotion_swaps: self.metrics.promotion_swaps,
            top_level_touches: self.metrics.top_level_touches,
            remove_calls: self.metrics.remove_calls,
            remove_found: self.metrics.remove_found,
            segment_lens: std::array::from_fn(|level| self.segments[level].len()),
            cache_len: self.index.len(),
            capacity: self.capacity(),
        }
    }
}

#[cfg(feature = "metrics")]
impl<K, V> MetricsSnapshotProvider<S4lruMetricsSnapshot> for S4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn snapshot(&self) -> S4lruMetricsSnapshot {
        self.metrics_snapshot()
    }
}

impl<K, V> fmt::Debug for S4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let segment_lens: [usize; SEGMENTS] =
            std::array::from_fn(|level| self.segments[level].len());
        f.debug_struct("S4lruCache")
            .field("capacity", &self.capacity())
            .field("segment_capacity", &self.segment_cap)
            .field("len", &self.index.len())
            .field("segment_lens", &segment_lens)
            .finish_non_exhaustive()
    }
}

impl<K, V> ReadOnlyCache<K, V> for S4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn contains(&self, key: &K) -> bool {
        S4lruCache::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        S4lruCache::len(self)
    }

    #[inline]
    fn capacity(&self) -> usize {
        S4lruCache::capacity(self)
    }
}

impl<K, V> CoreCache<K, V> for S4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn insert(&mut self, key: K, value: V) -> Option<V> {
        S4lruCache::insert(self, key, value)
    }

    #[inline]
    fn get(&mut self, key: &K) -> Option<&V> {
        S4lruCache::get(self, key)
    }

    fn clear(&mut self) {
        S4lruCache::clear(self);
    }
}

impl<K, V> MutableCache<K, V> for S4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    #[inline]
    fn remove(&mut self, key: &K) -> Option<V> {
        S4lruCache::remove(self, key)
    }
}

// ---------------------------------------------------------------------------
// Concurrent wrapper
// ---------------------------------------------------------------------------

/// Thread-safe S4LRU cache behind a single `parking_lot::Mutex`.
///
/// Every method holds the lock for its whole duration, so a promotion swap
/// (two slot moves plus two index updates) is never observed half done.
/// Lookups promote, so reads take the same exclusive lock as writes.
/// Clones share the same underlying cache.
///
/// # Example
///
/// ```
/// use s4lru::policy::s4lru::ConcurrentS4lruCache;
///
/// let cache = ConcurrentS4lruCache::new(100);
///
/// cache.insert("key", "value".to_string());
/// assert_eq!(cache.get(&"key"), Some("value".to_string()));
///
/// let len = cache.get_with(&"key", |v| v.len());
/// assert_eq!(len, Some(5));
/// ```
#[cfg(feature = "concurrency")]
pub struct ConcurrentS4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    inner: Arc<Mutex<S4lruCache<K, V>>>,
}

#[cfg(feature = "concurrency")]
impl<K, V> Clone for ConcurrentS4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> fmt::Debug for ConcurrentS4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cache = self.inner.lock();
        f.debug_struct("ConcurrentS4lruCache")
            .field("len", &cache.len())
            .field("capacity", &cache.capacity())
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentS4lruCache<K, V>
where
    K: Clone + Eq + Hash,
{
    /// Creates a new concurrent cache.
    ///
    /// # Panics
    ///
    /// Panics if `capacity < 4`. See [`try_new`](Self::try_new).
    pub fn new(capacity: usize) -> Self {
        Self::from_cache(S4lruCache::new(capacity))
    }

    /// Creates a new concurrent cache, returning an error on invalid capacity.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if `capacity < 4`.
    pub fn try_new(capacity: usize) -> Result<Self, ConfigError> {
        S4lruCache::try_new(capacity).map(Self::from_cache)
    }

    /// Wraps an existing cache.
    pub fn from_cache(cache: S4lruCache<K, V>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(cache)),
        }
    }

    /// Inserts at level 0, returning the replaced value.
    pub fn insert(&self, key: K, value: V) -> Option<V> {
        self.inner.lock().insert(key, value)
    }

    /// Gets a cloned value by key, promoting it one level.
    ///
    /// This requires `V: Clone`. For non-cloneable values, use `get_with()`.
    pub fn get(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().get(key).cloned()
    }

    /// Promotes `key` and applies `f` to its value while the lock is held.
    pub fn get_with<R>(&self, key: &K, f: impl FnOnce(&V) -> R) -> Option<R> {
        self.inner.lock().get(key).map(f)
    }

    /// Gets a cloned value without promoting it.
    pub fn peek(&self, key: &K) -> Option<V>
    where
        V: Clone,
    {
        self.inner.lock().peek(key).cloned()
    }

    pub fn remove(&self, key: &K) -> Option<V> {
        self.inner.lock().remove(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.inner.lock().contains(key)
    }

    pub fn level_of(&self, key: &K) -> Option<Level> {
        self.inner.lock().level_of(key)
    }

    pub fn len(&self) -> usize {
        self.inner.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.lock().is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.inner.lock().capacity()
    }

    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Runs [`S4lruCache::check_invariants`] under the lock.
    pub fn check_invariants(&self) -> Result<(), InvariantError> {
        self.inner.lock().check_invariants()
    }

    #[cfg(feature = "metrics")]
    pub fn metrics_snapshot(&self) -> S4lruMetricsSnapshot {
        self.inner.lock().metrics_snapshot()
    }
}

#[cfg(feature = "concurrency")]
impl<K, V> ConcurrentCache for ConcurrentS4lruCache<K, V>
where
    K: Clone + Eq + Hash + Send,
    V: Send,
{
}
