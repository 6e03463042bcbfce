//! In-place truncation to 256 bits
//!
//! Reduces a magnitude to its low 256 bits, the same value as
//! `x & (2^256 - 1)`, by dropping words instead of building a mask.
//!
//! Words are stored least significant first, so the low 256 bits are the
//! first `256 / W::BITS` words of the sequence. Those are kept; every
//! word above them is discarded. Zero words that end up on top of the
//! kept window are dropped as well, so 2^256 truncates to the empty
//! sequence rather than to four zero words.

use log::trace;

use crate::magnitude::{Magnitude, significant_words};
use crate::primitives::Word;

/// Width, in bits, that [`truncate_to_256_bits`] reduces to.
pub const U256_BITS: u32 = 256;

/// Number of `W` words that hold 256 bits: 4 for `u64`, 8 for `u32`.
#[inline]
pub const fn words_for_256<W: Word>() -> usize {
    (U256_BITS / W::BITS) as usize
}

/// Clears every bit of `m` at position 256 and above.
///
/// Magnitudes of at most `words_for_256` words are left as they are. The
/// operation is idempotent.
///
/// # Example
/// ```
/// use bigmarshal::{truncate_to_256_bits, primitives::Nat};
///
/// let mut x = Nat::<u64>::power_of_two(256);
/// truncate_to_256_bits(&mut x);
///
/// assert!(x.is_zero());
/// ```
pub fn truncate_to_256_bits<M: Magnitude + ?Sized>(m: &mut M) {
    let limit = words_for_256::<M::Word>();
    let words = m.words();
    let count = words.len();

    if count <= limit {
        return;
    }

    let keep = significant_words(&words[..limit]).len();
    trace!("truncating magnitude to 256 bits: {count} words -> {keep}");

    m.truncate_words(keep);
}
