#![no_main]

use libfuzzer_sys::fuzz_target;
use s4lru::ds::SegmentList;

// Fuzz arbitrary operation sequences on SegmentList
//
// Tests random sequences of push_front, remove, move_to_front, get_mut and
// clear against a bounded list.
fuzz_target!(|data: &[u8]| {
    let Some((&cap_byte, ops)) = data.split_first() else {
        return;
    };

    let capacity = usize::from(cap_byte % 16);
    let mut list: SegmentList<u32> = SegmentList::with_capacity(capacity);
    let mut ids = Vec::new();

    for pair in ops.chunks_exact(2) {
        let value = u32::from(pair[1]);
        match pair[0] % 5 {
            0 => {
                // push_front
                let was_full = list.is_full();
                match list.push_front(value) {
                    Ok(id) => {
                        assert!(!was_full);
                        assert_eq!(list.front_id(), Some(id));
                        ids.push(id);
                    }
                    Err(returned) => {
                        assert!(was_full);
                        assert_eq!(returned, value);
                    }
                }
            }
            1 => {
                // remove
                if !ids.is_empty() {
                    let id = ids.swap_remove(usize::from(pair[1]) % ids.len());
                    assert!(list.remove(id).is_some());
                    assert!(!list.contains(id));
                }
            }
            2 => {
                // move_to_front
                if let Some(&id) = ids.get(usize::from(pair[1]) % ids.len().max(1)) {
                    assert!(list.move_to_front(id));
                    assert_eq!(list.front_id(), Some(id));
                }
            }
            3 => {
                // get_mut
                if let Some(&id) = ids.first() {
                    if let Some(slot) = list.get_mut(id) {
                        *slot = value;
                    }
                    assert_eq!(list.get(id), Some(&value));
                }
            }
            4 => {
                // clear
                list.clear();
                ids.clear();
                assert!(list.is_empty());
            }
            _ => unreachable!(),
        }

        assert_eq!(list.len(), ids.len());
        assert!(list.len() <= list.capacity());
        assert_eq!(list.iter().count(), list.len());
    }
});
