#![no_main]

use libfuzzer_sys::fuzz_target;
use s4lru::policy::s4lru::{Level, S4lruCache};

// Fuzz arbitrary operation sequences on S4lruCache
//
// The first byte picks the capacity; each following pair of bytes is
// (operation, key). Structural invariants are checked after every step.
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, ops)) = data.split_first() else {
        return;
    };

    let capacity = 4 + usize::from(cap_byte % 60);
    let mut cache: S4lruCache<u8, u32> = S4lruCache::new(capacity);

    for pair in ops.chunks_exact(2) {
        let key = pair[1] % 64;
        match pair[0] % 5 {
            0 => {
                // insert
                cache.insert(key, u32::from(pair[0]));
                assert_eq!(cache.level_of(&key), Some(Level::L0));
            }
            1 | 2 => {
                // get
                let before = cache.level_of(&key);
                let hit = cache.get(&key).is_some();
                assert_eq!(hit, before.is_some());
                if let Some(level) = before {
                    let expected = level.next().unwrap_or(Level::L3);
                    assert_eq!(cache.level_of(&key), Some(expected));
                }
            }
            3 => {
                // remove
                let len = cache.len();
                if cache.remove(&key).is_some() {
                    assert_eq!(cache.len(), len - 1);
                }
                assert!(!cache.contains(&key));
            }
            4 => {
                // peek
                let level = cache.level_of(&key);
                assert_eq!(cache.peek(&key).is_some(), level.is_some());
                assert_eq!(cache.level_of(&key), level);
            }
            _ => unreachable!(),
        }

        cache.check_invariants().unwrap();
        for level in Level::ALL {
            assert!(cache.segment_len(level) <= cache.segment_capacity());
        }
    }
});
