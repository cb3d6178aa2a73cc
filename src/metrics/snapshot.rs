/// Point-in-time copy of the S4LRU counters plus occupancy gauges.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct S4lruMetricsSnapshot {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,

    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,

    pub evict_calls: u64,
    pub evicted_entries: u64,

    pub promotions: u64,
    pub promotion_swaps: u64, // each swap demotes exactly one entry
    pub top_level_touches: u64,

    pub remove_calls: u64,
    pub remove_found: u64,

    // gauges captured at snapshot time
    pub segment_lens: [usize; 4],
    pub cache_len: usize,
    pub capacity: usize,
}

impl S4lruMetricsSnapshot {
    /// Fraction of `get` calls that hit, or `0.0` before any lookup.
    pub fn hit_ratio(&self) -> f64 {
        if self.get_calls == 0 {
            0.0
        } else {
            self.get_hits as f64 / self.get_calls as f64
        }
    }
}
