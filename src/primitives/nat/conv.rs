//! Conversions between `Nat` and native integers and word vectors

use crate::primitives::{Nat, Word};

impl<W: Word> Nat<W> {
    /// Builds a value from a `u128`, splitting it into words.
    pub fn from_u128(mut value: u128) -> Self {
        let mut words = Vec::new();

        while value != 0 {
            words.push(W::wrapping_from_u128(value));
            value = value.checked_shr(W::BITS).unwrap_or(0);
        }

        Self(words)
    }
}

macro_rules! impl_from_uint {
    ($($t:ty),*) => {
        $(
            impl<W: Word> From<$t> for Nat<W> {
                fn from(value: $t) -> Self {
                    Self::from_u128(value as u128)
                }
            }
        )*
    };
}

impl_from_uint!(u8, u16, u32, u64, u128, usize);

/// Words are taken least significant first; high zero words are dropped.
impl<W: Word> From<Vec<W>> for Nat<W> {
    fn from(words: Vec<W>) -> Self {
        Self::from_words(words)
    }
}

impl<W: Word> From<Nat<W>> for Vec<W> {
    fn from(value: Nat<W>) -> Self {
        value.0
    }
}
