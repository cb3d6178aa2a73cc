//! DHAT heap profiler for the S4LRU cache.
//!
//! Run with: cargo run --bin dhat_profile --release --features dhat-heap
//! View results: Open dhat-heap.json in <https://nnethercote.github.io/dh_view/dh_view.html>

#[global_allocator]
static ALLOC: dhat::Alloc = dhat::Alloc;

use s4lru::policy::s4lru::S4lruCache;

/// Simple XorShift64 RNG for deterministic workloads.
struct XorShift64 {
    state: u64,
}

impl XorShift64 {
    fn new(seed: u64) -> Self {
        Self { state: seed.max(1) }
    }

    fn next_u64(&mut self) -> u64 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.state = x;
        x
    }
}

/// 90% of accesses hit 10% of keys.
fn hotset_workload(cache: &mut S4lruCache<u64, u64>, operations: usize, universe: u64, seed: u64) {
    let mut rng = XorShift64::new(seed);
    let hot_size = universe / 10;

    for _ in 0..operations {
        let key = if rng.next_u64() % 10 < 9 {
            rng.next_u64() % hot_size
        } else {
            hot_size + (rng.next_u64() % (universe - hot_size))
        };

        if cache.get(&key).is_none() {
            cache.insert(key, key);
        }
    }
}

fn scan_workload(cache: &mut S4lruCache<u64, u64>, operations: usize, universe: u64) {
    for i in 0..operations {
        let key = (i as u64) % universe;
        if cache.get(&key).is_none() {
            cache.insert(key, key);
        }
    }
}

/// Allocations made by `f`, as counted by the running profiler.
fn blocks_allocated_by(f: impl FnOnce()) -> u64 {
    let before = dhat::HeapStats::get().total_blocks;
    f();
    dhat::HeapStats::get().total_blocks - before
}

fn main() {
    let _profiler = dhat::Profiler::new_heap();

    println!("S4LRU DHAT Heap Profiling");
    println!("=========================\n");

    let capacity = 4096;
    let operations = 100_000;
    let universe = 16_384;

    let mut cache = S4lruCache::new(capacity);

    // Warm up until every level is full
    let per_level = (capacity / 4) as u64;
    for level in 0..4u64 {
        for i in 0..per_level {
            let key = level * per_level + i;
            cache.insert(key, key);
            for _ in 0..(3 - level) {
                cache.get(&key);
            }
        }
    }
    println!("  Warm size: {}", cache.len());

    let hotset = blocks_allocated_by(|| hotset_workload(&mut cache, operations, universe, 42));
    println!("  Hotset workload allocations: {}", hotset);

    let scan = blocks_allocated_by(|| scan_workload(&mut cache, operations / 2, universe));
    println!("  Scan workload allocations: {}", scan);

    println!("  Final size: {}", cache.len());

    println!("\n=========================");
    println!("Profile written to dhat-heap.json");
}
