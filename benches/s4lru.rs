use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use s4lru::policy::s4lru::S4lruCache;

const CAPACITY: usize = 4096;

/// Cache whose four levels are all full.
fn warm_cache() -> S4lruCache<u64, u64> {
    let mut cache = S4lruCache::new(CAPACITY);
    let per_level = (CAPACITY / 4) as u64;
    for level in 0..4u64 {
        for i in 0..per_level {
            let key = level * per_level + i;
            cache.insert(key, key);
            for _ in 0..(3 - level) {
                cache.get(&key);
            }
        }
    }
    cache
}

fn bench_s4lru_insert_get(c: &mut Criterion) {
    c.bench_function("s4lru_insert_get", |b| {
        b.iter_batched(
            warm_cache,
            |mut cache| {
                for i in 0..1024u64 {
                    cache.insert(std::hint::black_box(i + 10_000), i);
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(i)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_s4lru_promotion_swaps(c: &mut Criterion) {
    c.bench_function("s4lru_promotion_swaps", |b| {
        b.iter_batched(
            warm_cache,
            |mut cache| {
                // every level is full, so each hit below level 3 swaps
                for key in 0..3072u64 {
                    let _ = std::hint::black_box(cache.get(&std::hint::black_box(key)));
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_s4lru_eviction_churn(c: &mut Criterion) {
    c.bench_function("s4lru_eviction_churn", |b| {
        b.iter_batched(
            warm_cache,
            |mut cache| {
                for i in 0..4096u64 {
                    cache.insert(std::hint::black_box(100_000 + i), i);
                }
            },
            BatchSize::SmallInput,
        )
    });
}

fn bench_s4lru_hotset(c: &mut Criterion) {
    c.bench_function("s4lru_hotset", |b| {
        b.iter_batched(
            || (warm_cache(), SmallRng::seed_from_u64(42)),
            |(mut cache, mut rng)| {
                for _ in 0..4096 {
                    // 90% of lookups hit a tenth of the key space
                    let key = if rng.gen_bool(0.9) {
                        rng.gen_range(0..1_638u64)
                    } else {
                        rng.gen_range(1_638..16_384u64)
                    };
                    if cache.get(&key).is_none() {
                        cache.insert(key, key);
                    }
                }
            },
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(
    benches,
    bench_s4lru_insert_get,
    bench_s4lru_promotion_swaps,
    bench_s4lru_eviction_churn,
    bench_s4lru_hotset
);
criterion_main!(benches);
