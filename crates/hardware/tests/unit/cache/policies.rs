//! Cache Replacement Policy Tests.
//!
//! Verifies the victim selection logic for the exact-LRU and Pseudo-LRU
//! policies. Each policy implements `ReplacementPolicy` with `touch(way)`,
//! `set_to_erase(way)`, `allocate(way)`, `update() -> way`, and
//! `get_ways()`. Tests exercise them in isolation with edge cases.

use memsim_core::ReplacementError;
use memsim_core::cache::policies::{LruPolicy, PlruPolicy, ReplacementPolicy};
use proptest::prelude::*;
use rstest::rstest;

// ══════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════

/// Calls `update()` `count` times and collects the victim sequence.
fn drain(policy: &mut dyn ReplacementPolicy, count: usize) -> Vec<usize> {
    (0..count).map(|_| policy.update()).collect()
}

/// Constructs an exact-LRU policy or fails the test.
fn lru(ways: usize) -> LruPolicy {
    match LruPolicy::new(ways) {
        Ok(policy) => policy,
        Err(e) => panic!("LRU construction failed for {ways} ways: {e}"),
    }
}

/// Constructs a Pseudo-LRU policy or fails the test.
fn plru(ways: usize) -> PlruPolicy {
    match PlruPolicy::new(ways) {
        Ok(policy) => policy,
        Err(e) => panic!("PLRU construction failed for {ways} ways: {e}"),
    }
}

// ══════════════════════════════════════════════════════════
// 1. Exact LRU
// ══════════════════════════════════════════════════════════

/// Fresh state: ways were seeded 0..ways front-to-back reversed, so the
/// initial eviction order is 0, 1, 2, 3.
#[test]
fn lru_initial_drain_order_is_ascending() {
    let mut policy = lru(4);
    assert_eq!(drain(&mut policy, 4), vec![0, 1, 2, 3]);
}

/// `update()` recycles the victim to the MRU position, so draining past the
/// way count cycles through victims instead of repeating one.
#[test]
fn lru_update_cycles_through_victims() {
    let mut policy = lru(4);
    assert_eq!(drain(&mut policy, 8), vec![0, 1, 2, 3, 0, 1, 2, 3]);
}

/// After touching 4, 1, 5 on a 6-way set, the drain order is the untouched
/// ways in original order (0, 2, 3) followed by the touch order (4, 1, 5).
#[test]
fn lru_touch_order_determines_drain_order() {
    let mut policy = lru(6);

    policy.touch(4);
    policy.touch(1);
    policy.touch(5);

    assert_eq!(drain(&mut policy, 6), vec![0, 2, 3, 4, 1, 5]);
}

/// Touching every way in order makes the first-touched way the victim.
#[test]
fn lru_evicts_least_recently_touched() {
    let mut policy = lru(4);

    for way in [2, 0, 3, 1] {
        policy.touch(way);
    }
    // Recency (MRU to LRU): 1, 3, 0, 2.
    assert_eq!(policy.update(), 2);
}

/// Repeated touches of the MRU way do not change the victim.
#[test]
fn lru_repeated_touch_same_way() {
    let mut policy = lru(4);

    policy.touch(3);
    policy.touch(3);
    policy.touch(3);
    assert_eq!(policy.update(), 0);
}

/// Round-trip scenario on a 3-way set: touch the already-MRU way, evict the
/// tail, and verify the evicted way was recycled to the MRU position.
#[test]
fn lru_three_way_round_trip() {
    let mut policy = lru(3);

    // Fresh recency (MRU to LRU): 2, 1, 0. Way 2 is already MRU.
    policy.touch(2);
    assert_eq!(policy.update(), 0);
    // Way 0 is now MRU; the remaining drain confirms it moved off the tail.
    assert_eq!(drain(&mut policy, 3), vec![1, 2, 0]);
}

/// `set_to_erase` soft-demotes a way to the eviction end without untracking it.
#[test]
fn lru_set_to_erase_marks_next_victim() {
    let mut policy = lru(4);

    // Fresh recency (MRU to LRU): 3, 2, 1, 0. Demote the MRU way.
    assert!(policy.set_to_erase(3).is_ok());
    assert_eq!(policy.update(), 3);
    // Way 3 was recycled to MRU by update; the rest drain in seeded order.
    assert_eq!(drain(&mut policy, 3), vec![0, 1, 2]);
}

/// Soft-demoting the way that is already LRU is a no-op.
#[test]
fn lru_set_to_erase_tail_is_noop() {
    let mut policy = lru(4);

    assert!(policy.set_to_erase(0).is_ok());
    assert_eq!(drain(&mut policy, 4), vec![0, 1, 2, 3]);
}

/// `allocate` installs the way at the MRU position.
#[test]
fn lru_allocate_installs_as_mru() {
    let mut policy = lru(4);

    // Fresh recency (MRU to LRU): 3, 2, 1, 0.
    assert!(policy.allocate(1).is_ok());
    // Recency: 1, 3, 2, 0.
    assert_eq!(drain(&mut policy, 4), vec![0, 2, 3, 1]);
}

/// An already-tracked way is relinked, never duplicated: the tracked count
/// stays at capacity through any allocate sequence.
#[test]
fn lru_allocate_never_exceeds_capacity() {
    let mut policy = lru(4);

    for way in [0, 1, 1, 3, 2, 0, 3] {
        assert!(policy.allocate(way).is_ok());
        assert!(policy.tracked_count() <= policy.get_ways());
    }
    assert_eq!(policy.tracked_count(), 4);
}

/// A single-way set always evicts its only way.
#[test]
fn lru_single_way() {
    let mut policy = lru(1);

    assert_eq!(policy.update(), 0);
    policy.touch(0);
    assert_eq!(policy.update(), 0);
}

/// Construction rejects a zero way count and builds nothing.
#[test]
fn lru_rejects_zero_ways() {
    assert!(matches!(
        LruPolicy::new(0),
        Err(ReplacementError::InvalidWayCount { ways: 0, .. })
    ));
}

/// `get_ways` reports the construction-time count regardless of history.
#[test]
fn lru_get_ways_is_stable() {
    let mut policy = lru(8);

    assert_eq!(policy.get_ways(), 8);
    policy.touch(5);
    let _ = policy.update();
    assert!(policy.allocate(2).is_ok());
    assert!(policy.set_to_erase(7).is_ok());
    assert_eq!(policy.get_ways(), 8);
}

// ══════════════════════════════════════════════════════════
// 2. Pseudo-LRU
// ══════════════════════════════════════════════════════════

/// All direction bits start pointing left, so the first victim is way 0.
#[test]
fn plru_initial_victim_is_zero() {
    let mut policy = plru(4);
    assert_eq!(policy.update(), 0);
}

/// Free-running updates on a 4-way tree visit every way before repeating:
/// each victim is touched on eviction, steering the next search elsewhere.
#[test]
fn plru_update_cycles_through_all_ways() {
    let mut policy = plru(4);
    assert_eq!(drain(&mut policy, 8), vec![0, 2, 1, 3, 0, 2, 1, 3]);
}

/// Touching a way flips the bits on its root path away from it, so the very
/// next victim search cannot reach it.
#[test]
fn plru_touched_way_is_not_the_next_victim() {
    for ways in [2, 4, 8, 16] {
        for way in 0..ways {
            let mut policy = plru(ways);
            policy.touch(way);
            let victim = policy.update();
            assert_ne!(victim, way, "ways={ways}: evicted the just-touched way");
        }
    }
}

/// A two-way tree is a single bit: victims alternate.
#[test]
fn plru_two_way_alternates() {
    let mut policy = plru(2);
    assert_eq!(drain(&mut policy, 4), vec![0, 1, 0, 1]);
}

/// Depth-0 tree: a single way has no internal nodes; touch and update are
/// no-ops beyond returning that one way.
#[test]
fn plru_single_way() {
    let mut policy = plru(1);

    policy.touch(0);
    assert_eq!(policy.update(), 0);
    assert_eq!(policy.update(), 0);
}

/// Non-power-of-two way counts fail at construction, before any node exists.
#[rstest]
#[case(0)]
#[case(3)]
#[case(5)]
#[case(6)]
#[case(7)]
fn plru_rejects_non_power_of_two(#[case] ways: usize) {
    assert!(matches!(
        PlruPolicy::new(ways),
        Err(ReplacementError::InvalidWayCount { ways: w, .. }) if w == ways
    ));
}

/// Power-of-two way counts construct successfully.
#[rstest]
#[case(1)]
#[case(2)]
#[case(4)]
#[case(8)]
#[case(16)]
fn plru_accepts_power_of_two(#[case] ways: usize) {
    assert_eq!(plru(ways).get_ways(), ways);
}

/// Soft demotion is refused regardless of prior state.
#[test]
fn plru_set_to_erase_unsupported() {
    let mut policy = plru(4);

    policy.touch(2);
    let _ = policy.update();
    assert!(matches!(
        policy.set_to_erase(1),
        Err(ReplacementError::UnsupportedOperation {
            operation: "set_to_erase",
            ..
        })
    ));
}

/// Allocation is refused regardless of prior state.
#[test]
fn plru_allocate_unsupported() {
    let mut policy = plru(4);

    assert!(matches!(
        policy.allocate(0),
        Err(ReplacementError::UnsupportedOperation {
            operation: "allocate",
            ..
        })
    ));
}

/// A refused operation leaves the tree untouched.
#[test]
fn plru_refusal_leaves_state_unchanged() {
    let mut policy = plru(4);

    policy.touch(0);
    assert!(policy.set_to_erase(3).is_err());
    assert!(policy.allocate(3).is_err());
    // touch(0) flipped the root path; the victim search still avoids way 0.
    assert_eq!(policy.update(), 2);
}

/// `get_ways` reports the construction-time count regardless of history.
#[test]
fn plru_get_ways_is_stable() {
    let mut policy = plru(16);

    assert_eq!(policy.get_ways(), 16);
    policy.touch(11);
    let _ = policy.update();
    assert_eq!(policy.get_ways(), 16);
}

// ══════════════════════════════════════════════════════════
// 3. Properties
// ══════════════════════════════════════════════════════════

proptest! {
    /// For any touch history, the way touched last is never the next victim
    /// (with more than one way to choose from).
    #[test]
    fn plru_never_evicts_most_recent_touch(
        history in proptest::collection::vec(0_usize..8, 0..64),
        last in 0_usize..8,
    ) {
        let mut policy = plru(8);
        for way in history {
            policy.touch(way);
        }
        policy.touch(last);
        prop_assert_ne!(policy.update(), last);
    }

    /// For any touch history, exact LRU victims stay in range and draining a
    /// full cycle yields every way exactly once.
    #[test]
    fn lru_drain_is_a_permutation(
        history in proptest::collection::vec(0_usize..6, 0..64),
    ) {
        let mut policy = lru(6);
        for way in history {
            policy.touch(way);
        }
        let mut victims = drain(&mut policy, 6);
        victims.sort_unstable();
        prop_assert_eq!(victims, vec![0, 1, 2, 3, 4, 5]);
    }
}
