//! Set-Associative Cache Units.
//!
//! This module groups the cache-side units of the simulator core. The
//! surrounding tag array decides hit or miss; the replacement policies below
//! answer the remaining question on every access and fill: which way of the
//! set is least valuable and should be evicted next.

/// Cache replacement policy implementations (exact LRU, Pseudo-LRU).
pub mod policies;

pub use policies::{LruPolicy, PlruPolicy, ReplacementPolicy, create};
