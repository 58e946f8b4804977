//! Byte-order conversion utilities.
//!
//! The memory-access path moves fixed-width integers to and from byte buffers
//! whose layout is dictated by the simulated target, not the host. This module
//! provides the pure conversions used for that: packing an ordered byte
//! sequence into a value and unpacking a value into an ordered byte sequence,
//! in either byte order. Unpacking the packed form of a value under a given
//! byte order reproduces the original value exactly.

/// Byte order of a multi-byte value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endian {
    /// Least-significant byte first.
    Little,
    /// Most-significant byte first.
    Big,
}

impl Endian {
    /// The byte order of the host the simulator runs on.
    pub const NATIVE: Self = if cfg!(target_endian = "big") {
        Self::Big
    } else {
        Self::Little
    };
}

/// Fixed-width unsigned integers convertible to and from ordered byte sequences.
///
/// Implemented for `u8` through `u128`. The conversions are total and
/// round-trip exactly: `T::pack(value.unpack(e), e) == value` for every
/// representable `value` and both byte orders `e`.
pub trait ByteOrdered: Sized + Copy {
    /// The byte-array representation of `Self` (`[u8; size_of::<Self>()]`).
    type Bytes;

    /// Reassembles a value from its byte representation in the given order.
    ///
    /// # Arguments
    ///
    /// * `bytes` - The ordered byte sequence to pack.
    /// * `endian` - The byte order `bytes` is laid out in.
    ///
    /// # Returns
    ///
    /// The packed integer value.
    fn pack(bytes: Self::Bytes, endian: Endian) -> Self;

    /// Splits a value into its byte representation in the given order.
    ///
    /// # Arguments
    ///
    /// * `endian` - The byte order to lay the result out in.
    ///
    /// # Returns
    ///
    /// The ordered byte sequence of `self`.
    fn unpack(self, endian: Endian) -> Self::Bytes;
}

macro_rules! impl_byte_ordered {
    ($($ty:ty),* $(,)?) => {$(
        impl ByteOrdered for $ty {
            type Bytes = [u8; size_of::<$ty>()];

            #[inline(always)]
            fn pack(bytes: Self::Bytes, endian: Endian) -> Self {
                match endian {
                    Endian::Little => Self::from_le_bytes(bytes),
                    Endian::Big => Self::from_be_bytes(bytes),
                }
            }

            #[inline(always)]
            fn unpack(self, endian: Endian) -> Self::Bytes {
                match endian {
                    Endian::Little => self.to_le_bytes(),
                    Endian::Big => self.to_be_bytes(),
                }
            }
        }
    )*};
}

impl_byte_ordered!(u8, u16, u32, u64, u128);
