//! Allocation-free big-endian marshalling
//!
//! Writes the minimal big-endian byte encoding of a magnitude into a
//! caller-owned buffer. The output is the same as "all bytes of the
//! value, most significant first, with leading zero bytes stripped"; the
//! value zero encodes as no bytes at all.
//!
//! The required length is computed up front and checked against the
//! buffer before anything is written, so an undersized buffer is
//! reported as [`MarshalError::BufferTooSmall`] and left untouched.
//! Bytes past the written prefix are never modified.
//!
//! Three encoders produce identical output:
//! - `generic`: portable byte-at-a-time loop, any word width
//! - `word32` / `word64`: branch-table encoders for the native widths
//!
//! [`marshal`] picks one through the word type (sealed, see [`Word`]);
//! [`marshal_generic`] always uses the portable one.

pub(crate) mod generic;
pub(crate) mod word32;
pub(crate) mod word64;

use log::debug;

use crate::error::{MarshalError, Result};
use crate::magnitude::{Magnitude, significant_words};
use crate::primitives::{Encode, Word};

/// Upper bound on the encoded length of `m`: every stored word at full
/// width.
///
/// Overestimates by at most `W::BYTES - 1` when the top word has leading
/// zero bytes (more if the storage carries high zero words). A buffer of
/// this length never triggers [`MarshalError::BufferTooSmall`].
#[inline]
pub fn max_byte_len<M: Magnitude + ?Sized>(m: &M) -> usize {
    m.words().len() * M::Word::BYTES
}

/// Writes the minimal big-endian encoding of `m` into the front of `buf`
/// and returns the number of bytes written.
///
/// # Errors
/// [`MarshalError::BufferTooSmall`] if `buf` is shorter than the encoding.
///
/// # Example
/// ```
/// use bigmarshal::{marshal, max_byte_len};
///
/// let value: Vec<u64> = vec![0x100];
/// let mut buf = vec![0u8; max_byte_len(&value)];
/// let n = marshal(&value, &mut buf).unwrap();
///
/// assert_eq!(&buf[..n], &[0x01, 0x00]);
/// ```
#[inline]
pub fn marshal<M: Magnitude + ?Sized>(m: &M, buf: &mut [u8]) -> Result<usize> {
    marshal_with(m.words(), buf, <M::Word as Encode>::encode_be)
}

/// Same as [`marshal`] but always through the portable encoder.
pub fn marshal_generic<M: Magnitude + ?Sized>(m: &M, buf: &mut [u8]) -> Result<usize> {
    marshal_with(m.words(), buf, generic::encode)
}

/// Minimal big-endian bytes of `words` in a vector of exactly that
/// length.
pub(crate) fn to_vec<W: Word>(words: &[W]) -> Vec<u8> {
    let words = significant_words(words);
    let mut out = vec![0u8; encoded_len(words)];
    <W as Encode>::encode_be(words, &mut out);

    out
}

/// Trims high zero words and checks the buffer before handing both to
/// `encode`. Encoders only ever see canonical words and an exact window.
#[inline(always)]
fn marshal_with<W: Word>(
    words: &[W],
    buf: &mut [u8],
    encode: fn(&[W], &mut [u8]) -> usize,
) -> Result<usize> {
    let words = significant_words(words);
    let out = output_window(buf, encoded_len(words))?;

    Ok(encode(words, out))
}

/// Exact encoded length of canonical `words`.
#[inline]
pub(crate) fn encoded_len<W: Word>(words: &[W]) -> usize {
    match words.last() {
        Some(&top) => words.len() * W::BYTES - top.leading_zero_bytes(),
        None => 0,
    }
}

fn output_window(buf: &mut [u8], needed: usize) -> Result<&mut [u8]> {
    let available = buf.len();

    match buf.get_mut(..needed) {
        Some(out) => Ok(out),
        None => {
            debug!("marshal rejected buffer: need {needed} bytes, have {available}");
            Err(MarshalError::BufferTooSmall { needed, available })
        }
    }
}
