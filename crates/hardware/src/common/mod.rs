//! Common utilities and types used throughout the simulator core.
//!
//! This module provides fundamental building blocks shared across components:
//! 1. **Byte Order:** Pack/unpack conversions between fixed-width integers and
//!    byte sequences in a chosen endianness.
//! 2. **Error Handling:** The replacement-policy error taxonomy.

/// Byte-order (endianness) conversion utilities.
pub mod endian;

/// Error types for policy construction and misuse.
pub mod error;

pub use endian::{ByteOrdered, Endian};
pub use error::ReplacementError;
