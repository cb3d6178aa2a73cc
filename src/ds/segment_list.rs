//! Bounded doubly linked list stored in a flat slot array.
//!
//! Every node lives in a preallocated `Vec` of slots and is linked to its
//! neighbours by `SlotId`, so a list never allocates after construction.
//! Freed slots go on a free list and are handed out again by the next
//! `push_front`.
//!
//! ## Architecture
//!
//! ```text
//!   slots (Vec<Slot<T>>, len == capacity)
//!   ┌────────┬──────────────────────────────────────────────┐
//!   │ SlotId │ Slot { value, prev, next }                   │
//!   ├────────┼──────────────────────────────────────────────┤
//!   │ 0      │ { value: Some(B), prev: Some(2), next: None }│
//!   │ 1      │ { value: None, .. }          ◄── free_list   │
//!   │ 2      │ { value: Some(A), prev: None, next: Some(0) }│
//!   └────────┴──────────────────────────────────────────────┘
//!
//!   head ─► [2] ◄──► [0] ◄── tail
//! ```
//!
//! ## Operations
//! - `push_front(value)`: O(1), hands the value back when the list is full
//! - `remove(id)`: O(1), slot goes back on the free list
//! - `move_to_front(id)`: O(1) detach + attach
//! - `get_mut(id)`: O(1) in-place payload access, used for slot reuse
//!
//! `debug_validate_invariants()` is available in debug/test builds.

use std::collections::TryReserveError;

/// Stable handle to a slot inside a [`SegmentList`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(pub(crate) usize);

impl SlotId {
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug)]
struct Slot<T> {
    value: Option<T>,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

impl<T> Slot<T> {
    fn vacant() -> Self {
        Self {
            value: None,
            prev: None,
            next: None,
        }
    }
}

/// Fixed-capacity list that links slots of a flat arena by `SlotId`.
///
/// Front is the most recently inserted or moved node, back is the next
/// candidate for eviction or demotion.
#[derive(Debug)]
pub struct SegmentList<T> {
    slots: Vec<Slot<T>>,
    free_list: Vec<usize>,
    head: Option<SlotId>,
    tail: Option<SlotId>,
    len: usize,
    #[cfg(test)]
    claims: usize,
}

impl<T> SegmentList<T> {
    /// Creates an empty list with every slot reserved up front.
    ///
    /// # Panics
    ///
    /// Panics if the slot storage cannot be allocated. See
    /// [`try_with_capacity`](Self::try_with_capacity).
    pub fn with_capacity(capacity: usize) -> Self {
        match Self::try_with_capacity(capacity) {
            Ok(list) => list,
            Err(e) => panic!("segment list of {} slots: {}", capacity, e),
        }
    }

    /// Creates an empty list, reporting allocation failure instead of aborting.
    pub fn try_with_capacity(capacity: usize) -> Result<Self, TryReserveError> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(capacity)?;
        let mut free_list = Vec::new();
        free_list.try_reserve_exact(capacity)?;

        slots.resize_with(capacity, Slot::vacant);
        // Reversed so the lowest index is handed out first.
        free_list.extend((0..capacity).rev());
        Ok(Self {
            slots,
            free_list,
            head: None,
            tail: None,
            len: 0,
            #[cfg(test)]
            claims: 0,
        })
    }

    /// Returns the number of linked nodes.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list is empty.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the maximum number of nodes the list can hold.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Returns `true` once every slot is occupied.
    pub fn is_full(&self) -> bool {
        self.len == self.slots.len()
    }

    /// Returns `true` if `id` refers to an occupied slot.
    pub fn contains(&self, id: SlotId) -> bool {
        self.slots
            .get(id.0)
            .map(|slot| slot.value.is_some())
            .unwrap_or(false)
    }

    /// Returns the SlotId at the front of the list.
    pub fn front_id(&self) -> Option<SlotId> {
        self.head
    }

    /// Returns the SlotId at the back of the list.
    pub fn back_id(&self) -> Option<SlotId> {
        self.tail
    }

    pub fn get(&self, id: SlotId) -> Option<&T> {
        self.slots.get(id.0).and_then(|slot| slot.value.as_ref())
    }

    pub fn get_mut(&mut self, id: SlotId) -> Option<&mut T> {
        self.slots.get_mut(id.0).and_then(|slot| slot.value.as_mut())
    }

    /// Links `value` at the front, or returns it as `Err` if the list is full.
    pub fn push_front(&mut self, value: T) -> Result<SlotId, T> {
        let Some(idx) = self.free_list.pop() else {
            return Err(value);
        };
        let id = SlotId(idx);
        #[cfg(test)]
        {
            self.claims += 1;
        }
        self.slots[idx].value = Some(value);
        self.len += 1;
        self.attach_front(id);
        Ok(id)
    }

    /// Unlinks `id` and returns its value, freeing the slot.
    pub fn remove(&mut self, id: SlotId) -> Option<T> {
        self.detach(id)?;
        let value = self.slots[id.0].value.take()?;
        self.free_list.push(id.0);
        self.len -= 1;
        Some(value)
    }

    /// Moves an existing node to the front; returns `false` if `id` is not present.
    pub fn move_to_front(&mut self, id: SlotId) -> bool {
        if !self.contains(id) {
            return false;
        }
        if Some(id) == self.head {
            return true;
        }
        self.detach(id);
        self.attach_front(id);
        true
    }

    /// Unlinks every node and returns all slots to the free list.
    pub fn clear(&mut self) {
        for slot in &mut self.slots {
            *slot = Slot::vacant();
        }
        self.free_list.clear();
        self.free_list.extend((0..self.slots.len()).rev());
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Number of slots ever taken off the free list.
    #[cfg(test)]
    pub(crate) fn claims(&self) -> usize {
        self.claims
    }

    /// Returns an iterator from front to back.
    pub fn iter(&self) -> SegmentListIter<'_, T> {
        SegmentListIter {
            list: self,
            current: self.head,
        }
    }

    /// Returns an iterator of SlotIds from front to back.
    pub fn iter_ids(&self) -> SegmentListIdIter<'_, T> {
        SegmentListIdIter {
            list: self,
            current: self.head,
        }
    }

    fn detach(&mut self, id: SlotId) -> Option<()> {
        let (prev, next) = {
            let slot = self.slots.get(id.0)?;
            slot.value.as_ref()?;
            (slot.prev, slot.next)
        };

        match prev {
            Some(prev_id) => self.slots[prev_id.0].next = next,
            None => self.head = next,
        }
        match next {
            Some(next_id) => self.slots[next_id.0].prev = prev,
            None => self.tail = prev,
        }

        let slot = &mut self.slots[id.0];
        slot.prev = None;
        slot.next = None;
        Some(())
    }

    fn attach_front(&mut self, id: SlotId) {
        let old_head = self.head;
        {
            let slot = &mut self.slots[id.0];
            slot.prev = None;
            slot.next = old_head;
        }
        match old_head {
            Some(old_head) => self.slots[old_head.0].prev = Some(id),
            None => self.tail = Some(id),
        }
        self.head = Some(id);
    }

    #[cfg(any(test, debug_assertions))]
    pub fn debug_validate_invariants(&self) {
        if self.head.is_none() || self.tail.is_none() {
            assert!(self.head.is_none());
            assert!(self.tail.is_none());
            assert_eq!(self.len, 0);
            return;
        }

        let mut seen = std::collections::HashSet::new();
        let mut count = 0usize;
        let mut current = self.head;
        let mut prev = None;

        while let Some(id) = current {
            assert!(seen.insert(id));
            let slot = &self.slots[id.0];
            assert!(slot.value.is_some(), "linked slot is vacant");
            assert_eq!(slot.prev, prev);
            if slot.next.is_none() {
                assert_eq!(self.tail, Some(id));
            }
            prev = Some(id);
            current = slot.next;
            count += 1;
            assert!(count <= self.len);
        }

        assert_eq!(count, self.len);
        assert_eq!(self.len + self.free_list.len(), self.slots.len());
    }
}

pub struct SegmentListIter<'a, T> {
    list: &'a SegmentList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for SegmentListIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        let slot = &self.list.slots[id.0];
        self.current = slot.next;
        slot.value.as_ref()
    }
}

/// Iterator over SlotIds from front to back.
pub struct SegmentListIdIter<'a, T> {
    list: &'a SegmentList<T>,
    current: Option<SlotId>,
}

impl<'a, T> Iterator for SegmentListIdIter<'a, T> {
    type Item = SlotId;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.current?;
        self.current = self.list.slots[id.0].next;
        Some(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn segment_list_basic_ops() {
        let mut list = SegmentList::with_capacity(3);
        let a = list.push_front("a").unwrap();
        let b = list.push_front("b").unwrap();
        let c = list.push_front("c").unwrap();

        assert!(list.is_full());
        assert_eq!(list.push_front("d"), Err("d"));
        assert_eq!(list.front_id(), Some(c));
        assert_eq!(list.back_id(), Some(a));

        assert!(list.move_to_front(a));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["a", "c", "b"]);

        assert_eq!(list.remove(b), Some("b"));
        assert_eq!(list.len(), 2);
        assert!(!list.contains(b));
        list.debug_validate_invariants();
    }

    #[test]
    fn freed_slot_is_reused() {
        let mut list = SegmentList::with_capacity(2);
        let a = list.push_front(1).unwrap();
        list.push_front(2).unwrap();

        assert_eq!(list.remove(a), Some(1));
        let c = list.push_front(3).unwrap();
        assert_eq!(a.index(), c.index());
        assert_eq!(list.get(c), Some(&3));
    }

    #[test]
    fn stale_ids_are_rejected() {
        let mut list = SegmentList::with_capacity(2);
        let a = list.push_front(1).unwrap();
        list.remove(a);

        assert_eq!(list.get(a), None);
        assert_eq!(list.remove(a), None);
        assert!(!list.move_to_front(a));
        assert!(!list.contains(SlotId(99)));
    }

    #[test]
    fn get_mut_rewrites_payload_in_place() {
        let mut list = SegmentList::with_capacity(2);
        let a = list.push_front(10).unwrap();
        list.push_front(20).unwrap();

        *list.get_mut(a).unwrap() = 30;
        assert!(list.move_to_front(a));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec![30, 20]);
        assert_eq!(list.iter_ids().next(), Some(a));
    }

    #[test]
    fn remove_middle_and_ends() {
        let mut list = SegmentList::with_capacity(3);
        let c = list.push_front("c").unwrap();
        let b = list.push_front("b").unwrap();
        let a = list.push_front("a").unwrap();

        assert_eq!(list.remove(b), Some("b"));
        let values: Vec<_> = list.iter().copied().collect();
        assert_eq!(values, vec!["a", "c"]);

        assert_eq!(list.remove(a), Some("a"));
        assert_eq!(list.front_id(), Some(c));
        assert_eq!(list.back_id(), Some(c));

        assert_eq!(list.remove(c), Some("c"));
        assert!(list.is_empty());
        assert_eq!(list.front_id(), None);
        assert_eq!(list.back_id(), None);
        list.debug_validate_invariants();
    }

    #[test]
    fn clear_resets_state() {
        let mut list = SegmentList::with_capacity(2);
        list.push_front(1).unwrap();
        list.push_front(2).unwrap();
        list.clear();

        assert!(list.is_empty());
        assert_eq!(list.capacity(), 2);
        assert!(list.push_front(3).is_ok());
        assert!(list.push_front(4).is_ok());
        assert!(list.is_full());
        list.debug_validate_invariants();
    }

    #[test]
    fn oversized_capacity_is_an_error() {
        assert!(SegmentList::<u64>::try_with_capacity(usize::MAX).is_err());
        let list = SegmentList::<u64>::try_with_capacity(4).unwrap();
        assert_eq!(list.capacity(), 4);
    }

    #[test]
    fn zero_capacity_list_accepts_nothing() {
        let mut list: SegmentList<u8> = SegmentList::with_capacity(0);
        assert!(list.is_full());
        assert_eq!(list.push_front(1), Err(1));
    }
}
