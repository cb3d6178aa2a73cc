//! Example demonstrating the S4LRU (four-segment LRU) cache policy.
//!
//! New entries land in level 0. Every hit promotes an entry one level, up to
//! level 3. When the level above is full, its least recent entry trades
//! places with the promoted one and drops a level. Only level 0 evicts.
//!
//! Run with: cargo run --example basic_s4lru

use s4lru::policy::s4lru::{Level, S4lruCache};

fn print_levels(cache: &S4lruCache<&'static str, u32>) {
    for level in Level::ALL.iter().rev() {
        let keys: Vec<_> = cache.keys_in(*level).collect();
        println!("  {:?}: {:?}", level, keys);
    }
}

fn main() {
    env_logger::init();

    println!("=== S4LRU Cache Example ===\n");

    // Capacity 4 gives every level a single slot
    let mut cache = S4lruCache::new(4);
    println!(
        "Created S4LRU cache: capacity={}, per level={}\n",
        cache.capacity(),
        cache.segment_capacity()
    );

    // Walk four keys up the levels, hottest first
    let keys = ["e3", "e2", "e1", "e0"];
    for (i, key) in keys.into_iter().enumerate() {
        cache.insert(key, i as u32);
        for _ in 0..(3 - i) {
            cache.get(&key);
        }
    }
    println!("After promoting e3 three times, e2 twice and e1 once:");
    print_levels(&cache);

    // A scan of one-off keys only ever churns level 0
    println!("\n=== Scan Resistance Demo ===\n");
    for (i, key) in ["scan1", "scan2", "scan3"].into_iter().enumerate() {
        cache.insert(key, 100 + i as u32);
    }
    println!("After inserting three one-off keys:");
    print_levels(&cache);
    println!("  contains e3? {}", cache.contains(&"e3"));
    println!("  contains e0? {}", cache.contains(&"e0"));

    // A hit on level 0 swaps with the back of level 1
    println!("\n=== Promotion Swap Demo ===\n");
    cache.get(&"scan3");
    println!("After get(scan3):");
    print_levels(&cache);

    println!("\nlen: {}", cache.len());
}
