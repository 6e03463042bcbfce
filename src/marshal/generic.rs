//! Portable big-endian encoder
//!
//! Works for any word width by shifting and masking one byte at a time.
//! It is the reference the fixed-width encoders are checked against, and
//! the encoder used for widths without a specialisation.

use crate::primitives::Word;

/// Encodes `words` (least-significant first, canonical) into `out`.
///
/// Leading zero bytes of the most significant word are skipped; every
/// byte of the remaining words is emitted, zero or not.
pub(crate) fn encode<W: Word>(words: &[W], out: &mut [u8]) -> usize {
    let Some((&top, rest)) = words.split_last() else {
        return 0;
    };

    let mut i = 0;
    let mut j = W::BYTES;

    while j > 0 && top.byte(j - 1) == 0 {
        j -= 1;
    }

    for index in (0..j).rev() {
        out[i] = top.byte(index);
        i += 1;
    }

    for &word in rest.iter().rev() {
        for index in (0..W::BYTES).rev() {
            out[i] = word.byte(index);
            i += 1;
        }
    }

    i
}
