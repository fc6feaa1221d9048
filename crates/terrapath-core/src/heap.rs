//! Fixed-capacity binary min-heap with in-place priority improvement.
//!
//! [`IndexedHeap`] does not own its members. It stores keys (indices into a
//! caller-owned slice of [`HeapItem`]s) and every member records the heap
//! slot it currently occupies. That back-pointer makes
//! [`contains`](IndexedHeap::contains) O(1) and lets
//! [`improve`](IndexedHeap::improve) restore heap order from the member's
//! slot without scanning.
//!
//! Slot bookkeeping is written only by the heap itself, on push, pop and
//! every swap. A member's stored slot is meaningless once it has been popped.

use std::cmp::Ordering;
use std::fmt;

/// Slot value stored on an item that is not in the heap.
pub const NOT_IN_HEAP: usize = usize::MAX;

/// An element that can live in an [`IndexedHeap`].
pub trait HeapItem {
    /// The heap slot recorded on this item.
    fn heap_index(&self) -> usize;

    /// Record the heap slot of this item. Called by the heap only.
    fn set_heap_index(&mut self, idx: usize);

    /// Compare priorities. `Ordering::Less` means `self` should leave the
    /// heap before `other`.
    fn cmp_priority(&self, other: &Self) -> Ordering;
}

/// Errors raised by [`IndexedHeap`] operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// `pop_best` on a heap without members.
    Empty,
    /// `push` on a heap already holding `capacity` members.
    Full { capacity: usize },
    /// `push` of a key that is already a member.
    AlreadyMember { key: usize },
    /// `improve` of a key that is not a member.
    NotMember { key: usize },
    /// A key that does not index into the item slice.
    KeyOutOfRange { key: usize, len: usize },
    /// A heap was requested with room for nothing.
    ZeroCapacity,
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("heap is empty"),
            Self::Full { capacity } => write!(f, "heap is full ({capacity} members)"),
            Self::AlreadyMember { key } => write!(f, "key {key} is already in the heap"),
            Self::NotMember { key } => write!(f, "key {key} is not in the heap"),
            Self::KeyOutOfRange { key, len } => {
                write!(f, "key {key} out of range for {len} items")
            }
            Self::ZeroCapacity => f.write_str("heap capacity must be at least 1"),
        }
    }
}

impl std::error::Error for HeapError {}

/// Binary min-heap of keys into a slice of [`HeapItem`]s.
///
/// The slot of each member satisfies: a parent at `i` is never worse than
/// its children at `2i + 1` and `2i + 2`, and `items[slots[i]].heap_index()
/// == i` for every live slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedHeap {
    slots: Vec<usize>,
    capacity: usize,
}

impl IndexedHeap {
    /// Create an empty heap that can hold `capacity` members.
    pub fn with_capacity(capacity: usize) -> Result<Self, HeapError> {
        if capacity == 0 {
            return Err(HeapError::ZeroCapacity);
        }
        Ok(Self {
            slots: Vec::with_capacity(capacity),
            capacity,
        })
    }

    /// Maximum number of members.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of members.
    #[inline]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Member keys in slot order.
    #[inline]
    pub fn keys(&self) -> &[usize] {
        &self.slots
    }

    /// Key of the best member without removing it.
    #[inline]
    pub fn peek(&self) -> Option<usize> {
        self.slots.first().copied()
    }

    /// Whether `key` is currently a member. O(1).
    pub fn contains<T: HeapItem>(&self, items: &[T], key: usize) -> bool {
        let Some(item) = items.get(key) else {
            return false;
        };
        let idx = item.heap_index();
        idx < self.slots.len() && self.slots[idx] == key
    }

    /// Add `key` as a new member.
    pub fn push<T: HeapItem>(&mut self, items: &mut [T], key: usize) -> Result<(), HeapError> {
        if key >= items.len() {
            return Err(HeapError::KeyOutOfRange {
                key,
                len: items.len(),
            });
        }
        if self.contains(items, key) {
            return Err(HeapError::AlreadyMember { key });
        }
        if self.slots.len() >= self.capacity {
            return Err(HeapError::Full {
                capacity: self.capacity,
            });
        }
        let idx = self.slots.len();
        self.slots.push(key);
        items[key].set_heap_index(idx);
        self.sift_up(items, idx);
        Ok(())
    }

    /// Remove and return the best member.
    ///
    /// The last member moves into the root slot and sinks to its place.
    pub fn pop_best<T: HeapItem>(&mut self, items: &mut [T]) -> Result<usize, HeapError> {
        let Some(&best) = self.slots.first() else {
            return Err(HeapError::Empty);
        };
        let Some(last) = self.slots.pop() else {
            return Err(HeapError::Empty);
        };
        if !self.slots.is_empty() {
            self.slots[0] = last;
            items[last].set_heap_index(0);
            self.sift_down(items, 0);
        }
        items[best].set_heap_index(NOT_IN_HEAP);
        Ok(best)
    }

    /// Restore heap order after the priority of member `key` improved.
    ///
    /// Only sifts towards the root: calling this after a priority got
    /// *worse* silently breaks heap order.
    pub fn improve<T: HeapItem>(&mut self, items: &mut [T], key: usize) -> Result<(), HeapError> {
        if !self.contains(items, key) {
            return Err(HeapError::NotMember { key });
        }
        let idx = items[key].heap_index();
        self.sift_up(items, idx);
        Ok(())
    }

    /// Drop every member.
    pub fn clear<T: HeapItem>(&mut self, items: &mut [T]) {
        for &key in &self.slots {
            items[key].set_heap_index(NOT_IN_HEAP);
        }
        self.slots.clear();
    }

    /// Whether no member is strictly better than its parent.
    pub fn is_heap_ordered<T: HeapItem>(&self, items: &[T]) -> bool {
        (1..self.slots.len()).all(|i| {
            let parent = (i - 1) / 2;
            items[self.slots[i]].cmp_priority(&items[self.slots[parent]]) != Ordering::Less
        })
    }

    /// Whether every member's recorded slot matches its real slot.
    pub fn indices_consistent<T: HeapItem>(&self, items: &[T]) -> bool {
        self.slots
            .iter()
            .enumerate()
            .all(|(i, &key)| items[key].heap_index() == i)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Move the member at `idx` up while it is strictly better than its
    /// parent.
    fn sift_up<T: HeapItem>(&mut self, items: &mut [T], mut idx: usize) {
        while idx > 0 {
            let parent = (idx - 1) / 2;
            if items[self.slots[idx]].cmp_priority(&items[self.slots[parent]]) == Ordering::Less {
                self.swap(items, idx, parent);
                idx = parent;
            } else {
                break;
            }
        }
    }

    /// Move the member at `idx` down while a child is strictly better. The
    /// left child wins unless the right one is strictly better.
    fn sift_down<T: HeapItem>(&mut self, items: &mut [T], mut idx: usize) {
        let len = self.slots.len();
        loop {
            let left = idx * 2 + 1;
            if left >= len {
                return;
            }
            let right = left + 1;
            let mut child = left;
            if right < len
                && items[self.slots[right]].cmp_priority(&items[self.slots[left]]) == Ordering::Less
            {
                child = right;
            }
            if items[self.slots[child]].cmp_priority(&items[self.slots[idx]]) == Ordering::Less {
                self.swap(items, idx, child);
                idx = child;
            } else {
                return;
            }
        }
    }

    #[inline]
    fn swap<T: HeapItem>(&mut self, items: &mut [T], a: usize, b: usize) {
        self.slots.swap(a, b);
        items[self.slots[a]].set_heap_index(a);
        items[self.slots[b]].set_heap_index(b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::RngExt;

    #[derive(Debug, Clone)]
    struct Item {
        prio: i32,
        tie: i32,
        slot: usize,
    }

    impl Item {
        fn new(prio: i32) -> Self {
            Self::with_tie(prio, 0)
        }

        fn with_tie(prio: i32, tie: i32) -> Self {
            Self {
                prio,
                tie,
                slot: NOT_IN_HEAP,
            }
        }
    }

    impl HeapItem for Item {
        fn heap_index(&self) -> usize {
            self.slot
        }
        fn set_heap_index(&mut self, idx: usize) {
            self.slot = idx;
        }
        fn cmp_priority(&self, other: &Self) -> Ordering {
            self.prio.cmp(&other.prio).then(self.tie.cmp(&other.tie))
        }
    }

    fn assert_invariants(heap: &IndexedHeap, items: &[Item]) {
        assert!(heap.is_heap_ordered(items), "heap order broken: {heap:?}");
        assert!(heap.indices_consistent(items), "stale heap index: {heap:?}");
    }

    #[test]
    fn zero_capacity_is_rejected() {
        assert_eq!(
            IndexedHeap::with_capacity(0),
            Err(HeapError::ZeroCapacity)
        );
    }

    #[test]
    fn pops_in_priority_order() {
        let mut items: Vec<Item> = [5, 3, 8, 1, 9, 2].into_iter().map(Item::new).collect();
        let mut heap = IndexedHeap::with_capacity(items.len()).unwrap();
        for key in 0..items.len() {
            heap.push(&mut items, key).unwrap();
            assert_invariants(&heap, &items);
        }
        assert_eq!(heap.peek(), Some(3));

        let mut order = Vec::new();
        while !heap.is_empty() {
            let key = heap.pop_best(&mut items).unwrap();
            assert_invariants(&heap, &items);
            order.push(items[key].prio);
        }
        assert_eq!(order, vec![1, 2, 3, 5, 8, 9]);
    }

    #[test]
    fn secondary_key_breaks_ties() {
        let mut items = vec![
            Item::with_tie(4, 3),
            Item::with_tie(4, 1),
            Item::with_tie(4, 2),
        ];
        let mut heap = IndexedHeap::with_capacity(3).unwrap();
        for key in 0..3 {
            heap.push(&mut items, key).unwrap();
        }
        assert_eq!(heap.pop_best(&mut items), Ok(1));
        assert_eq!(heap.pop_best(&mut items), Ok(2));
        assert_eq!(heap.pop_best(&mut items), Ok(0));
    }

    #[test]
    fn full_ties_keep_insertion_slot() {
        // Equal members never swap, so the first pushed stays at the root.
        let mut items = vec![Item::new(7), Item::new(7), Item::new(7)];
        let mut heap = IndexedHeap::with_capacity(3).unwrap();
        for key in 0..3 {
            heap.push(&mut items, key).unwrap();
        }
        assert_eq!(heap.keys(), &[0, 1, 2]);
        // Root goes, the last member fills the root and stays (left child ties).
        assert_eq!(heap.pop_best(&mut items), Ok(0));
        assert_eq!(heap.keys(), &[2, 1]);
    }

    #[test]
    fn pop_empty_fails() {
        let mut items: Vec<Item> = Vec::new();
        let mut heap = IndexedHeap::with_capacity(4).unwrap();
        assert_eq!(heap.pop_best(&mut items), Err(HeapError::Empty));
    }

    #[test]
    fn push_errors() {
        let mut items = vec![Item::new(1), Item::new(2)];
        let mut heap = IndexedHeap::with_capacity(1).unwrap();
        heap.push(&mut items, 0).unwrap();
        assert_eq!(
            heap.push(&mut items, 0),
            Err(HeapError::AlreadyMember { key: 0 })
        );
        assert_eq!(
            heap.push(&mut items, 1),
            Err(HeapError::Full { capacity: 1 })
        );
        assert_eq!(
            heap.push(&mut items, 5),
            Err(HeapError::KeyOutOfRange { key: 5, len: 2 })
        );
    }

    #[test]
    fn contains_tracks_membership() {
        let mut items = vec![Item::new(3), Item::new(1), Item::new(2)];
        let mut heap = IndexedHeap::with_capacity(3).unwrap();
        assert!(!heap.contains(&items, 0));
        heap.push(&mut items, 0).unwrap();
        heap.push(&mut items, 1).unwrap();
        assert!(heap.contains(&items, 0));
        assert!(heap.contains(&items, 1));
        assert!(!heap.contains(&items, 2));
        assert!(!heap.contains(&items, 99));

        let best = heap.pop_best(&mut items).unwrap();
        assert_eq!(best, 1);
        assert!(!heap.contains(&items, 1));
        assert_eq!(items[1].heap_index(), NOT_IN_HEAP);
    }

    #[test]
    fn stale_index_does_not_fake_membership() {
        let mut items = vec![Item::new(1), Item::new(2)];
        let mut heap = IndexedHeap::with_capacity(2).unwrap();
        heap.push(&mut items, 0).unwrap();
        // Key 1 was never pushed but claims slot 0.
        items[1].slot = 0;
        assert!(!heap.contains(&items, 1));
    }

    #[test]
    fn improve_moves_member_up() {
        let mut items: Vec<Item> = [1, 4, 6, 8, 9].into_iter().map(Item::new).collect();
        let mut heap = IndexedHeap::with_capacity(items.len()).unwrap();
        for key in 0..items.len() {
            heap.push(&mut items, key).unwrap();
        }
        items[4].prio = 0;
        heap.improve(&mut items, 4).unwrap();
        assert_invariants(&heap, &items);
        assert_eq!(heap.peek(), Some(4));
        assert_eq!(items[4].heap_index(), 0);
    }

    #[test]
    fn improve_non_member_fails() {
        let mut items = vec![Item::new(1), Item::new(2)];
        let mut heap = IndexedHeap::with_capacity(2).unwrap();
        heap.push(&mut items, 0).unwrap();
        assert_eq!(
            heap.improve(&mut items, 1),
            Err(HeapError::NotMember { key: 1 })
        );
    }

    #[test]
    fn clear_forgets_members() {
        let mut items = vec![Item::new(1), Item::new(2)];
        let mut heap = IndexedHeap::with_capacity(2).unwrap();
        heap.push(&mut items, 0).unwrap();
        heap.push(&mut items, 1).unwrap();
        heap.clear(&mut items);
        assert!(heap.is_empty());
        assert!(!heap.contains(&items, 0));
        assert!(items.iter().all(|i| i.heap_index() == NOT_IN_HEAP));
    }

    #[test]
    fn random_operations_keep_invariants() {
        let mut rng = rand::rng();
        for _ in 0..50 {
            let n = 64;
            let mut items: Vec<Item> = (0..n)
                .map(|_| Item::with_tie(rng.random_range(0..40), rng.random_range(0..5)))
                .collect();
            let mut heap = IndexedHeap::with_capacity(n).unwrap();
            let mut popped = Vec::new();

            for _ in 0..300 {
                let key = rng.random_range(0..n);
                match rng.random_range(0..3u32) {
                    0 => {
                        if !heap.contains(&items, key) && !popped.contains(&key) {
                            heap.push(&mut items, key).unwrap();
                        }
                    }
                    1 => {
                        if !heap.is_empty() {
                            let best = heap.pop_best(&mut items).unwrap();
                            // Nothing left may beat what was just popped.
                            for &k in heap.keys() {
                                assert_ne!(
                                    items[k].cmp_priority(&items[best]),
                                    Ordering::Less
                                );
                            }
                            popped.push(best);
                        }
                    }
                    _ => {
                        if heap.contains(&items, key) {
                            items[key].prio -= rng.random_range(0..10);
                            heap.improve(&mut items, key).unwrap();
                        }
                    }
                }
                assert_invariants(&heap, &items);
            }
        }
    }
}
