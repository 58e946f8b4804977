//! Exact Least Recently Used (LRU) Replacement Policy.
//!
//! This policy keeps a total recency order over all ways of a set: a
//! doubly-linked recency list from most-recently-used (front) to
//! least-recently-used (back). The list is laid out as an arena of
//! fixed-capacity nodes addressed by way index, so locating a way's node is a
//! direct array lookup and every relink is O(1) pointer surgery with no
//! allocation after construction.
//!
//! # Performance
//!
//! - **Time Complexity:** O(1) for `touch`, `set_to_erase`, `allocate`, `update`.
//! - **Space Complexity:** O(W) per set, where W is the associativity.
//! - **Hardware Cost:** High - real designs need W·log2(W) state bits per set.

use super::ReplacementPolicy;
use crate::common::error::ReplacementError;

/// Sentinel slot index marking the end of the list.
const NIL: usize = usize::MAX;

/// One arena node: the links of a single way within the recency list.
#[derive(Clone, Copy, Debug)]
struct Node {
    /// Way toward the front (more recently used), or [`NIL`] at the head.
    prev: usize,
    /// Way toward the back (less recently used), or [`NIL`] at the tail.
    next: usize,
}

/// Exact-LRU policy state for one cache set.
///
/// Invariant: the arena links and the tracked flags always agree - every
/// tracked way is linked into the list exactly once, untracked ways are not
/// linked, and the list holds at most `ways` entries.
#[derive(Debug)]
pub struct LruPolicy {
    /// Arena of list nodes, indexed directly by way.
    nodes: Vec<Node>,
    /// Whether each way is currently linked into the recency list.
    tracked: Vec<bool>,
    /// Most-recently-used way, or [`NIL`] when the list is empty.
    head: usize,
    /// Least-recently-used way, or [`NIL`] when the list is empty.
    tail: usize,
    /// Number of currently tracked ways.
    len: usize,
    /// Fixed associativity.
    ways: usize,
}

impl LruPolicy {
    /// Creates a new exact-LRU policy tracking all `ways` indices.
    ///
    /// Ways are seeded by pushing `0..ways` to the front in order, so the
    /// initial eviction order (with no intervening touches) is `0, 1, 2, ...`.
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity (number of ways) of the cache set.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::InvalidWayCount`] if `ways` is zero.
    pub fn new(ways: usize) -> Result<Self, ReplacementError> {
        if ways == 0 {
            return Err(ReplacementError::InvalidWayCount {
                ways,
                requirement: "way count must be non-zero",
            });
        }

        let mut policy = Self {
            nodes: vec![Node { prev: NIL, next: NIL }; ways],
            tracked: vec![false; ways],
            head: NIL,
            tail: NIL,
            len: 0,
            ways,
        };
        for way in 0..ways {
            policy.push_front(way);
        }
        Ok(policy)
    }

    /// Returns the number of currently tracked ways.
    ///
    /// Never exceeds the construction-time way count.
    pub const fn tracked_count(&self) -> usize {
        self.len
    }

    /// Links an unlinked `way` at the front (MRU position) of the list.
    fn push_front(&mut self, way: usize) {
        let old_head = self.head;
        self.nodes[way] = Node {
            prev: NIL,
            next: old_head,
        };
        if old_head == NIL {
            self.tail = way;
        } else {
            self.nodes[old_head].prev = way;
        }
        self.head = way;
        self.tracked[way] = true;
        self.len += 1;
    }

    /// Links an unlinked `way` at the back (LRU position) of the list.
    fn push_back(&mut self, way: usize) {
        let old_tail = self.tail;
        self.nodes[way] = Node {
            prev: old_tail,
            next: NIL,
        };
        if old_tail == NIL {
            self.head = way;
        } else {
            self.nodes[old_tail].next = way;
        }
        self.tail = way;
        self.tracked[way] = true;
        self.len += 1;
    }

    /// Unlinks a tracked `way` from the list, leaving it untracked.
    fn unlink(&mut self, way: usize) {
        let Node { prev, next } = self.nodes[way];
        if prev == NIL {
            self.head = next;
        } else {
            self.nodes[prev].next = next;
        }
        if next == NIL {
            self.tail = prev;
        } else {
            self.nodes[next].prev = prev;
        }
        self.nodes[way] = Node {
            prev: NIL,
            next: NIL,
        };
        self.tracked[way] = false;
        self.len -= 1;
    }
}

impl ReplacementPolicy for LruPolicy {
    /// Relinks the accessed way at the front of the recency list.
    ///
    /// Touching an untracked way violates the contract; it is asserted in
    /// debug builds and ignored in release builds, leaving state consistent.
    fn touch(&mut self, way: usize) {
        debug_assert!(self.tracked[way], "touch on untracked way {way}");
        if self.tracked[way] && self.head != way {
            self.unlink(way);
            self.push_front(way);
        }
    }

    /// Relinks the way at the back of the list, marking it next-to-evict.
    ///
    /// The way stays tracked; only its recency position changes.
    fn set_to_erase(&mut self, way: usize) -> Result<(), ReplacementError> {
        debug_assert!(self.tracked[way], "set_to_erase on untracked way {way}");
        if self.tracked[way] && self.tail != way {
            self.unlink(way);
            self.push_back(way);
        }
        Ok(())
    }

    /// Installs `way` at the MRU position, evicting the LRU way if at capacity.
    ///
    /// An already-tracked way is relinked rather than duplicated, so each way
    /// appears in the recency list at most once. The eviction here removes the
    /// victim from tracking without reinsertion, distinct from the
    /// evict-and-recycle semantics of `update`.
    fn allocate(&mut self, way: usize) -> Result<(), ReplacementError> {
        if self.tracked[way] {
            self.unlink(way);
        } else if self.len == self.ways {
            let lru = self.tail;
            self.unlink(lru);
        }
        self.push_front(way);
        Ok(())
    }

    /// Removes the LRU way, reinserts it at the MRU position, and returns it.
    ///
    /// The recycled insertion models the evicted line becoming the newly
    /// loaded line.
    fn update(&mut self) -> usize {
        let victim = self.tail;
        debug_assert!(victim != NIL, "update on empty recency list");
        self.unlink(victim);
        self.push_front(victim);
        victim
    }

    fn get_ways(&self) -> usize {
        self.ways
    }
}
