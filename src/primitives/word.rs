//! Machine words
//!
//! A magnitude is stored as a sequence of fixed-width unsigned words. The
//! `Word` trait captures what the encoder and truncator need from a word
//! type, and it is the seam where the per-width encoders are selected:
//! `u32` and `u64` route to the branch-table encoders, every other width
//! uses the portable byte loop.
//!
//! Selection happens at compile time through the trait impl, so there is
//! no runtime dispatch on the word width.

use core::fmt::Debug;
use core::hash::Hash;
use core::ops::{BitOr, Shl, Shr};

use crate::marshal::{generic, word32, word64};

pub(crate) mod sealed {
    /// Encoder hook, reachable only from inside the crate.
    ///
    /// Callers hand it canonical words (last word non-zero, or none) and
    /// an output window already checked to be exactly the encoding's
    /// length; `marshal` is the only public way in.
    pub trait Encode: Sized {
        fn encode_be(words: &[Self], out: &mut [u8]) -> usize;
    }
}

/// Fixed-width unsigned machine word.
///
/// Sealed: implemented for `u8`, `u16`, `u32`, `u64` and `u128` only.
/// The per-width encoder behind it is not part of the public API; go
/// through [`marshal`](crate::marshal()).
///
/// ```compile_fail
/// use bigmarshal::primitives::Word;
///
/// let mut out = [0u8; 8];
/// <u64 as Word>::encode_be(&[0u64], &mut out);
/// ```
pub trait Word:
    sealed::Encode
    + Copy
    + Debug
    + Default
    + Eq
    + Hash
    + Ord
    + BitOr<Output = Self>
    + Shl<u32, Output = Self>
    + Shr<u32, Output = Self>
{
    /// Width in bits.
    const BITS: u32;

    /// Width in bytes.
    const BYTES: usize;

    const ZERO: Self;
    const ONE: Self;

    /// Returns byte `index` of the word, where index 0 is the least
    /// significant byte.
    ///
    /// `index` must be below `Self::BYTES`.
    fn byte(self, index: usize) -> u8;

    /// Number of leading zero bits.
    fn leading_zeros(self) -> u32;

    /// Keeps the low `Self::BITS` bits of `value`.
    fn wrapping_from_u128(value: u128) -> Self;

    /// Number of leading zero bytes; `Self::BYTES` for the zero word.
    #[inline(always)]
    fn leading_zero_bytes(self) -> usize {
        (self.leading_zeros() / 8) as usize
    }
}

macro_rules! impl_word {
    (@common $t:ty) => {
        const BITS: u32 = <$t>::BITS;
        const BYTES: usize = core::mem::size_of::<$t>();
        const ZERO: Self = 0;
        const ONE: Self = 1;

        #[inline(always)]
        fn byte(self, index: usize) -> u8 {
            (self >> (index * 8)) as u8
        }

        #[inline(always)]
        fn leading_zeros(self) -> u32 {
            <$t>::leading_zeros(self)
        }

        #[inline(always)]
        fn wrapping_from_u128(value: u128) -> Self {
            value as $t
        }
    };
    ($t:ty) => {
        impl Word for $t {
            impl_word!(@common $t);
        }

        impl sealed::Encode for $t {
            #[inline]
            fn encode_be(words: &[Self], out: &mut [u8]) -> usize {
                generic::encode(words, out)
            }
        }
    };
    ($t:ty, $fixed:path) => {
        impl Word for $t {
            impl_word!(@common $t);
        }

        impl sealed::Encode for $t {
            #[inline]
            fn encode_be(words: &[Self], out: &mut [u8]) -> usize {
                if cfg!(feature = "portable") {
                    generic::encode(words, out)
                } else {
                    $fixed(words, out)
                }
            }
        }
    };
}

impl_word!(u8);
impl_word!(u16);
impl_word!(u32, word32::encode);
impl_word!(u64, word64::encode);
impl_word!(u128);

/// The platform word: the widest word the target handles natively.
#[cfg(target_pointer_width = "64")]
pub type Limb = u64;

#[cfg(target_pointer_width = "32")]
pub type Limb = u32;

#[cfg(not(any(target_pointer_width = "32", target_pointer_width = "64")))]
pub type Limb = u16;
