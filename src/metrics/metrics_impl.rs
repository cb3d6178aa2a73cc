use crate::metrics::traits::{CoreMetricsRecorder, S4lruMetricsRecorder};

// ---------------------------------------------------------------------------
// S4lruMetrics
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct S4lruMetrics {
    pub get_calls: u64,
    pub get_hits: u64,
    pub get_misses: u64,
    pub insert_calls: u64,
    pub insert_updates: u64,
    pub insert_new: u64,
    pub evict_calls: u64,
    pub evicted_entries: u64,
    pub promotions: u64,
    pub promotion_swaps: u64,
    pub top_level_touches: u64,
    pub remove_calls: u64,
    pub remove_found: u64,
}

impl CoreMetricsRecorder for S4lruMetrics {
    fn record_get_hit(&mut self) {
        self.get_calls += 1;
        self.get_hits += 1;
    }
    fn record_get_miss(&mut self) {
        self.get_calls += 1;
        self.get_misses += 1;
    }
    fn record_insert_call(&mut self) {
        self.insert_calls += 1;
    }
    fn record_insert_new(&mut self) {
        self.insert_new += 1;
    }
    fn record_insert_update(&mut self) {
        self.insert_updates += 1;
    }
    fn record_evict_call(&mut self) {
        self.evict_calls += 1;
    }
    fn record_evicted_entry(&mut self) {
        self.evicted_entries += 1;
    }
    fn record_clear(&mut self) {}
}

impl S4lruMetricsRecorder for S4lruMetrics {
    fn record_promotion(&mut self) {
        self.promotions += 1;
    }
    fn record_promotion_swap(&mut self) {
        self.promotion_swaps += 1;
    }
    fn record_top_level_touch(&mut self) {
        self.top_level_touches += 1;
    }
    fn record_remove_call(&mut self) {
        self.remove_calls += 1;
    }
    fn record_remove_found(&mut self) {
        self.remove_found += 1;
    }
}
