//! Cache Replacement Policies.
//!
//! Implements the algorithms that select victim lines in set-associative
//! caches, behind one polymorphic contract.
//!
//! # Policies
//!
//! - `Lru`: exact Least Recently Used (total recency order over all ways).
//! - `Plru`: Pseudo-LRU (binary tree of direction bits, one per internal node).
//!
//! One policy instance tracks one cache set. Adding a policy means adding a
//! type implementing [`ReplacementPolicy`] plus a branch in [`create`]; call
//! sites never change.

/// Exact Least Recently Used replacement policy.
pub mod lru;

/// Pseudo-LRU (tree-based) replacement policy.
pub mod plru;

pub use lru::LruPolicy;
pub use plru::PlruPolicy;

use crate::common::error::ReplacementError;
use crate::config::{CacheConfig, ReplacementPolicy as PolicyKind};

/// Trait for cache replacement policies.
///
/// Defines the per-access contract between the owning cache set and the
/// victim-selection state. Way indices are integers in `[0, ways)`; ways are
/// never created or destroyed after construction. Every operation runs in
/// O(log ways) or better and never suspends or performs I/O.
pub trait ReplacementPolicy: Send + Sync {
    /// Records that `way` was just accessed (cache hit).
    ///
    /// # Arguments
    ///
    /// * `way` - The way index within the set that was accessed. Must be
    ///   currently tracked by the policy.
    fn touch(&mut self, way: usize);

    /// Marks `way` as the next eviction candidate without removing it from
    /// tracking.
    ///
    /// Used by invalidation paths: the line is dead but its slot bookkeeping
    /// must remain consistent.
    ///
    /// # Arguments
    ///
    /// * `way` - The way index to soft-demote. Must be currently tracked.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::UnsupportedOperation`] if the policy does
    /// not model soft demotion.
    fn set_to_erase(&mut self, way: usize) -> Result<(), ReplacementError>;

    /// Installs `way` as freshly loaded (most recently used).
    ///
    /// If the tracked-way count is already at capacity, the current least
    /// valuable way is evicted first.
    ///
    /// # Arguments
    ///
    /// * `way` - The way index to install.
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::UnsupportedOperation`] if the policy does
    /// not model identity-rotating allocation.
    fn allocate(&mut self, way: usize) -> Result<(), ReplacementError>;

    /// Selects the current least-valuable way and advances internal state as
    /// if that way had just been touched.
    ///
    /// The anticipatory re-insertion at the MRU position means repeated calls
    /// without intervening touches cycle through victims rather than
    /// repeatedly returning the same one: the evicted way is about to be
    /// refilled.
    ///
    /// # Returns
    ///
    /// The way index to evict.
    fn update(&mut self) -> usize;

    /// Returns the fixed way count this policy was constructed with.
    fn get_ways(&self) -> usize;
}

/// Constructs a replacement policy by canonical name.
///
/// This is the single extension point for policy selection: recognized names
/// are `"LRU"` and `"Pseudo-LRU"`.
///
/// # Arguments
///
/// * `name` - Canonical policy name.
/// * `ways` - Associativity of the cache set the policy will track.
///
/// # Errors
///
/// Returns [`ReplacementError::UnknownPolicy`] for an unrecognized name, or
/// [`ReplacementError::InvalidWayCount`] if the selected policy rejects
/// `ways` (zero for LRU, any non-power-of-two for Pseudo-LRU).
pub fn create(name: &str, ways: usize) -> Result<Box<dyn ReplacementPolicy>, ReplacementError> {
    build(name.parse()?, ways)
}

/// Constructs a replacement policy from a cache configuration.
///
/// The enum-typed twin of [`create`], used when the policy kind has already
/// been deserialized.
///
/// # Arguments
///
/// * `config` - Cache configuration carrying way count and policy kind.
///
/// # Errors
///
/// Returns [`ReplacementError::InvalidWayCount`] if the configured policy
/// rejects the configured way count.
pub fn from_config(config: &CacheConfig) -> Result<Box<dyn ReplacementPolicy>, ReplacementError> {
    build(config.policy, config.ways)
}

/// Dispatches construction on the policy kind.
fn build(kind: PolicyKind, ways: usize) -> Result<Box<dyn ReplacementPolicy>, ReplacementError> {
    let policy: Box<dyn ReplacementPolicy> = match kind {
        PolicyKind::Lru => Box::new(LruPolicy::new(ways)?),
        PolicyKind::PseudoLru => Box::new(PlruPolicy::new(ways)?),
    };
    tracing::debug!(policy = kind.as_str(), ways, "constructed replacement policy");
    Ok(policy)
}
