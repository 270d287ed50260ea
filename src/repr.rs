use crate::{Error, Packed};

/// Scalars with an eight-byte little-endian packed form.
pub trait ReprPacked: Sized + Copy {
    fn pack(&self) -> Packed;
    fn unpack(input: &Packed) -> Self;

    #[inline(always)]
    fn zero() -> Self {
        Self::unpack(&Packed::zero())
    }

    #[inline]
    fn from_slice(input: &[u8]) -> Result<Self, Error> {
        Ok(Self::unpack(&Packed::try_from(input)?))
    }
}

impl ReprPacked for u64 {
    #[inline(always)]
    fn pack(&self) -> Packed {
        Packed::from_word(*self)
    }

    #[inline(always)]
    fn unpack(input: &Packed) -> Self {
        input.word()
    }
}

impl ReprPacked for i64 {
    #[inline(always)]
    fn pack(&self) -> Packed {
        Packed::new(crate::pack_signed(*self))
    }

    #[inline(always)]
    fn unpack(input: &Packed) -> Self {
        crate::unpack_signed(input)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    macro_rules! test_repr_packed {
        ($type:ident) => {
            paste::paste! {
                #[test_strategy::proptest]
                fn [<test_roundtrip_ $type>](input: $type) {
                    prop_assert_eq!(<$type>::unpack(&input.pack()), input);
                }

                #[test_strategy::proptest]
                fn [<test_matches_le_bytes_ $type>](input: $type) {
                    prop_assert_eq!(*input.pack(), input.to_le_bytes());
                }

                #[test_strategy::proptest]
                fn [<test_from_slice_ $type>](input: Packed) {
                    prop_assert_eq!(<$type>::from_slice(input.as_ref())?, <$type>::unpack(&input));
                }

                #[test]
                fn [<test_zero_ $type>]() {
                    assert_eq!(<$type>::zero(), 0);
                }
            }
        };
    }

    test_repr_packed!(u64);
    test_repr_packed!(i64);

    #[test]
    fn test_signed_shares_bit_pattern() {
        assert_eq!((-1i64).pack(), u64::MAX.pack());
        assert_eq!(i64::unpack(&Packed::new([0xff; 8])), -1);
    }

    #[test]
    fn test_from_slice_wrong_length() {
        assert_eq!(
            u64::from_slice(&[0u8; 9]),
            Err(Error::InvalidDataSize {
                expected: 8,
                got: 9
            })
        );
    }
}
