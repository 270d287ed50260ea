//! Fixed-width little-endian packing of 64-bit words.
//!
//! A word always packs into exactly [`WIDTH`] bytes with the least-significant byte first.
//! The codec is a bijection: every `u64` has exactly one packed form and every
//! `[u8; 8]` unpacks to exactly one `u64`.
//!
//! ```
//! let bytes = le64::pack(0x0102_0304_0506_0708);
//! assert_eq!(bytes, [0x08, 0x07, 0x06, 0x05, 0x04, 0x03, 0x02, 0x01]);
//! assert_eq!(le64::unpack(&bytes), 0x0102_0304_0506_0708);
//! ```
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod error;
mod packed;
mod repr;

#[cfg(feature = "cli")]
pub mod cli;

pub use self::{error::Error, packed::Packed, repr::ReprPacked};

/// Number of bytes in a packed word.
pub const WIDTH: usize = core::mem::size_of::<u64>();

/// Packs `x` into its little-endian byte form.
///
/// Byte `i` of the output holds `(x >> (8 * i)) & 0xff`.
#[inline]
pub const fn pack(mut x: u64) -> [u8; WIDTH] {
    let mut out = [0u8; WIDTH];
    let mut i = 0;

    while i < WIDTH {
        out[i] = (x & 0xff) as u8;
        x >>= 8;
        i += 1;
    }

    out
}

/// Packs `x` into a buffer owned by the caller.
#[inline]
pub fn pack_into(out: &mut [u8; WIDTH], x: u64) {
    *out = pack(x);
}

/// Packs the two's complement bit pattern of `x`.
#[inline]
pub const fn pack_signed(x: i64) -> [u8; WIDTH] {
    pack(x as u64)
}

/// Unpacks a word from its little-endian byte form.
///
/// The input length is part of the type, so anything other than eight bytes is rejected
/// at compile time:
///
/// ```compile_fail
/// let short = [0u8; 7];
/// le64::unpack(&short);
/// ```
#[inline]
pub const fn unpack(bytes: &[u8; WIDTH]) -> u64 {
    let mut x = 0u64;
    let mut i = WIDTH;

    // Most-significant byte first, so byte 0 lands in the low 8 bits.
    while i > 0 {
        i -= 1;
        x = (x << 8) | bytes[i] as u64;
    }

    x
}

/// Unpacks a word and reinterprets its bit pattern as two's complement.
#[inline]
pub const fn unpack_signed(bytes: &[u8; WIDTH]) -> i64 {
    unpack(bytes) as i64
}

/// Unpacks a word from a slice whose length is only known at runtime.
///
/// ```
/// assert!(le64::unpack_slice(&[1, 0, 0, 0, 0, 0, 0]).is_err());
/// assert_eq!(le64::unpack_slice(&[1, 0, 0, 0, 0, 0, 0, 0]).unwrap(), 1);
/// ```
#[inline]
pub fn unpack_slice(input: &[u8]) -> Result<u64, Error> {
    let bytes: &[u8; WIDTH] = input.try_into().map_err(|_| Error::InvalidDataSize {
        expected: WIDTH,
        got: input.len(),
    })?;

    Ok(unpack(bytes))
}
