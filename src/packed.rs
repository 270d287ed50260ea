use core::{fmt, ops::Deref};

use crate::{pack, unpack, Error, WIDTH};

const LOOKUP: [u8; 16] = *b"0123456789abcdef";

/// A word in its packed, little-endian form.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct Packed([u8; WIDTH]);

impl Packed {
    #[inline(always)]
    pub const fn new(bytes: [u8; WIDTH]) -> Self {
        Self(bytes)
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self([0u8; WIDTH])
    }

    #[inline]
    pub const fn from_word(x: u64) -> Self {
        Self(pack(x))
    }

    /// The word these bytes encode.
    #[inline]
    pub const fn word(&self) -> u64 {
        unpack(&self.0)
    }

    #[inline(always)]
    pub const fn to_bytes(self) -> [u8; WIDTH] {
        self.0
    }

    /// Parses the text form written by `Display`: two lowercase hex digits per byte, in
    /// byte order.
    pub fn from_hex(input: &str) -> Result<Self, Error> {
        if let Some(c) = input.chars().find(|c| !c.is_ascii()) {
            return Err(Error::InvalidHexDigit(c));
        }

        if input.len() != WIDTH * 2 {
            return Err(Error::InvalidDataSize {
                expected: WIDTH * 2,
                got: input.len(),
            });
        }

        let mut out = [0u8; WIDTH];

        for (byte, chunk) in out.iter_mut().zip(input.as_bytes().chunks_exact(2)) {
            let hi = from_hex_digit(chunk[0])?;
            let lo = from_hex_digit(chunk[1])?;
            *byte = (hi << 4) | lo;
        }

        Ok(Self(out))
    }

    #[cfg(feature = "rand")]
    pub fn random<R: rand::prelude::Rng>(rng: &mut R) -> Self {
        let mut out = [0u8; WIDTH];
        rng.fill_bytes(&mut out);
        Self(out)
    }
}

#[inline]
fn from_hex_digit(digit: u8) -> Result<u8, Error> {
    match digit {
        b'0'..=b'9' => Ok(digit - b'0'),
        b'a'..=b'f' => Ok(digit - b'a' + 10),
        _ => Err(Error::InvalidHexDigit(digit as char)),
    }
}

impl fmt::Display for Packed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = [0u8; WIDTH * 2];

        for (chunk, byte) in out.chunks_exact_mut(2).zip(self.0) {
            chunk[0] = LOOKUP[(byte >> 4) as usize];
            chunk[1] = LOOKUP[(byte & 0xf) as usize];
        }

        f.write_str(core::str::from_utf8(&out).map_err(|_| fmt::Error)?)
    }
}

impl fmt::Debug for Packed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Packed({self})")
    }
}

#[cfg(any(test, feature = "proptest"))]
impl proptest::prelude::Arbitrary for Packed {
    type Parameters = ();
    type Strategy = proptest::strategy::BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        use proptest::prelude::*;
        any::<[u8; WIDTH]>().prop_map(Self).boxed()
    }
}

impl Deref for Packed {
    type Target = [u8; WIDTH];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AsRef<[u8]> for Packed {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<u64> for Packed {
    fn from(x: u64) -> Self {
        Self::from_word(x)
    }
}

impl From<[u8; WIDTH]> for Packed {
    fn from(bytes: [u8; WIDTH]) -> Self {
        Self(bytes)
    }
}

impl From<Packed> for u64 {
    fn from(packed: Packed) -> Self {
        packed.word()
    }
}

impl TryFrom<&[u8]> for Packed {
    type Error = Error;

    fn try_from(input: &[u8]) -> Result<Self, Self::Error> {
        let bytes: [u8; WIDTH] = input.try_into().map_err(|_| Error::InvalidDataSize {
            expected: WIDTH,
            got: input.len(),
        })?;

        Ok(Self(bytes))
    }
}
