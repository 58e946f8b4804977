//! Configuration system for the replacement-policy core.
//!
//! This module defines the configuration structures and enums used to
//! parameterize victim selection. It provides:
//! 1. **Defaults:** Baseline hardware constants (associativity, policy choice).
//! 2. **Structures:** Per-cache configuration consumed at construction time.
//! 3. **Enums:** The replacement-policy selector with its canonical names.
//!
//! Configuration is supplied via JSON by the embedding simulator or built with
//! `CacheConfig::default()`.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::common::error::ReplacementError;

/// Default configuration constants for the replacement-policy core.
///
/// These values define the baseline configuration when not explicitly
/// overridden by the embedding simulator's configuration files.
mod defaults {
    /// Default cache associativity (4 ways per set).
    ///
    /// Matches the associativity of typical L1 data caches and satisfies the
    /// power-of-two constraint of the Pseudo-LRU policy.
    pub const CACHE_WAYS: usize = 4;
}

/// Cache replacement policy algorithms.
///
/// Specifies the algorithm used to select which way of a cache set to evict
/// when a new line must be installed. The serialized names are the canonical
/// factory names: `"LRU"` and `"Pseudo-LRU"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum ReplacementPolicy {
    /// Exact Least Recently Used replacement policy.
    ///
    /// Keeps a total recency order over all ways and evicts the way that was
    /// accessed least recently.
    #[default]
    #[serde(rename = "LRU", alias = "Lru")]
    Lru,
    /// Pseudo-LRU (tree-based) replacement policy.
    ///
    /// Approximates LRU with one direction bit per internal node of a binary
    /// tree over the ways, for lower hardware overhead.
    #[serde(rename = "Pseudo-LRU", alias = "Plru")]
    PseudoLru,
}

impl ReplacementPolicy {
    /// Returns the canonical factory name of this policy.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lru => "LRU",
            Self::PseudoLru => "Pseudo-LRU",
        }
    }
}

impl fmt::Display for ReplacementPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReplacementPolicy {
    type Err = ReplacementError;

    /// Parses a canonical factory name (`"LRU"` or `"Pseudo-LRU"`).
    ///
    /// # Errors
    ///
    /// Returns [`ReplacementError::UnknownPolicy`] for any other name.
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        match name {
            "LRU" => Ok(Self::Lru),
            "Pseudo-LRU" => Ok(Self::PseudoLru),
            _ => Err(ReplacementError::UnknownPolicy(name.to_owned())),
        }
    }
}

/// Configuration of one cache's victim selection.
///
/// The way count and policy kind are fixed for the lifetime of the policy
/// instances built from this configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CacheConfig {
    /// Associativity (number of ways per set).
    #[serde(default = "CacheConfig::default_ways")]
    pub ways: usize,
    /// Replacement policy used for victim selection.
    #[serde(default)]
    pub policy: ReplacementPolicy,
}

impl CacheConfig {
    /// Returns the default associativity.
    const fn default_ways() -> usize {
        defaults::CACHE_WAYS
    }
}

impl Default for CacheConfig {
    /// Creates a cache configuration with default associativity and policy.
    fn default() -> Self {
        Self {
            ways: Self::default_ways(),
            policy: ReplacementPolicy::default(),
        }
    }
}
