//! Pseudo-LRU (PLRU) Replacement Policy.
//!
//! PLRU approximates Least Recently Used with a complete binary tree of
//! single-bit direction hints over the ways: W - 1 bits for W ways instead of
//! a full recency order. Each internal node's bit points toward the subtree
//! the next victim search should descend into, i.e. away from recent touches.
//!
//! The tree is complete and its depth is fixed at construction (log2 of the
//! way count), so it is stored as a flat array of direction bits with implicit
//! binary-heap indexing: node `i`'s children sit at `2i + 1` and `2i + 2`, and
//! the leaf for way `w` sits at `ways - 1 + w`. Touch and victim search are
//! pure index arithmetic; nothing allocates after construction.
//!
//! # Performance
//!
//! - **Time Complexity:** O(log W) for `touch` and `update`.
//! - **Space Complexity:** W - 1 bits per set.
//! - **Hardware Cost:** Low - this is the scheme real L1 designs ship.

use super::ReplacementPolicy;
use crate::common::error::ReplacementError;

/// Direction hint held by one internal tree node.
///
/// Points toward the subtree the next victim search should descend into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Direction {
    /// Descend into the left child.
    Left,
    /// Descend into the right child.
    Right,
}

impl Direction {
    /// Returns the opposite direction.
    const fn flip(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }
}

/// Pseudo-LRU policy state for one cache set.
///
/// Invariant: every way in `[0, ways)` labels exactly one leaf, and leaves are
/// stable for the policy's lifetime; only internal direction bits mutate.
#[derive(Debug)]
pub struct PlruPolicy {
    /// Direction bits of the `ways - 1` internal nodes, in heap order.
    bits: Vec<Direction>,
    /// Fixed associativity (a power of two).
    ways: usize,
}

impl PlruPolicy {
    /// Creates a new Pseudo-LRU policy over `ways` leaves.
    ///
    /// All direction bits start pointing left, so the initial victim is way 0.
    ///
    /// # Arguments
    ///
    /// * `ways` - The associativity (number of ways) of the cache set.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::InvalidWayCount`] if `ways` is not a power
    /// of two. Nothing is built on failure.
    pub fn new(ways: usize) -> Result<Self, ReplacementError> {
        if !ways.is_power_of_two() {
            return Err(ReplacementError::InvalidWayCount {
                ways,
                requirement: "way count must be a power of two",
            });
        }
        Ok(Self {
            bits: vec![Direction::Left; ways - 1],
            ways,
        })
    }

    /// Returns the implicit-heap index of the leaf labeled `way`.
    const fn leaf_index(&self, way: usize) -> usize {
        self.ways - 1 + way
    }

    /// Returns which side of its parent the node at `child` hangs on.
    ///
    /// Left children sit at odd heap indices (`2i + 1`), right children at
    /// even ones (`2i + 2`).
    const fn side_of(child: usize) -> Direction {
        if child % 2 == 1 {
            Direction::Left
        } else {
            Direction::Right
        }
    }
}

impl ReplacementPolicy for PlruPolicy {
    /// Walks from the touched leaf to the root, pointing every bit on the
    /// path away from the touched branch.
    ///
    /// At each step, if the parent's bit currently points at the side the
    /// current node hangs on, it is flipped to the opposite side. A future
    /// victim search descending by direction bit is thereby steered away from
    /// the most recently touched path. With a single way the tree has no
    /// internal nodes and this is a no-op.
    fn touch(&mut self, way: usize) {
        debug_assert!(way < self.ways, "touch on out-of-range way {way}");
        let mut child = self.leaf_index(way);
        while child > 0 {
            let parent = (child - 1) / 2;
            let side = Self::side_of(child);
            if self.bits[parent] == side {
                self.bits[parent] = side.flip();
            }
            child = parent;
        }
    }

    /// Soft demotion is not modeled by Pseudo-LRU.
    ///
    /// The bit tree only supports free-running touch/update cycles used in
    /// approximate performance modeling.
    fn set_to_erase(&mut self, _way: usize) -> Result<(), ReplacementError> {
        Err(ReplacementError::UnsupportedOperation {
            policy: "Pseudo-LRU",
            operation: "set_to_erase",
        })
    }

    /// Identity-rotating allocation is not modeled by Pseudo-LRU.
    ///
    /// Leaves are fixed at construction; the tree cannot track rotating way
    /// identities.
    fn allocate(&mut self, _way: usize) -> Result<(), ReplacementError> {
        Err(ReplacementError::UnsupportedOperation {
            policy: "Pseudo-LRU",
            operation: "allocate",
        })
    }

    /// Descends from the root by direction bit to the victim leaf.
    ///
    /// The victim is then touched: the evicted way is treated as just
    /// accessed, because it is about to be refilled.
    fn update(&mut self) -> usize {
        let mut node = 0;
        while node < self.bits.len() {
            node = match self.bits[node] {
                Direction::Left => 2 * node + 1,
                Direction::Right => 2 * node + 2,
            };
        }
        let victim = node - (self.ways - 1);
        self.touch(victim);
        victim
    }

    fn get_ways(&self) -> usize {
        self.ways
    }
}
