//! Cache replacement-policy core for a cycle-level memory-hierarchy simulator.
//!
//! This crate implements the victim-selection logic a set-associative cache model
//! invokes on every access and fill. It provides the following:
//! 1. **Policies:** An exact Least-Recently-Used policy and a tree-based Pseudo-LRU
//!    approximation, selected polymorphically behind one trait.
//! 2. **Factory:** Name-keyed construction of boxed policy instances for
//!    configuration-time dispatch.
//! 3. **Configuration:** Serde-deserializable cache configuration with defaults.
//! 4. **Common:** Byte-order packing utilities shared with the memory-access path.
//!
//! A policy instance tracks one cache set. The owning set calls
//! [`ReplacementPolicy::touch`] on hits and [`ReplacementPolicy::update`] on fills;
//! data flows one direction, cache set to policy.

/// Cache units (victim selection / replacement policies).
pub mod cache;
/// Common utilities (byte-order conversion, error types).
pub mod common;
/// Simulator configuration (defaults, enums, cache config structure).
pub mod config;

/// Replacement-policy capability trait; implemented by every concrete policy.
pub use crate::cache::policies::ReplacementPolicy;
/// Name-keyed policy factory; recognizes `"LRU"` and `"Pseudo-LRU"`.
pub use crate::cache::policies::create;
/// Error taxonomy for policy construction and misuse.
pub use crate::common::error::ReplacementError;
/// Cache configuration; use `CacheConfig::default()` or deserialize from JSON.
pub use crate::config::CacheConfig;
