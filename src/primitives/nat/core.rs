use std::fmt::{self, Display, Formatter};

use crate::marshal::to_vec;
use crate::primitives::{Limb, Word};

/// Owned non-negative integer of arbitrary size.
///
/// Words are stored least significant first. The last stored word is
/// never zero; the value zero holds no words.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Nat<W: Word = Limb>(pub(crate) Vec<W>);

impl<W: Word> Nat<W> {
    /// The value zero.
    pub const ZERO: Self = Self(Vec::new());

    /// Builds a value from words given least significant first.
    ///
    /// High zero words are dropped.
    pub fn from_words(words: Vec<W>) -> Self {
        let mut out = Self(words);
        out.normalize();
        out
    }

    /// Returns 2^`exp`.
    pub fn power_of_two(exp: u32) -> Self {
        let mut words = vec![W::ZERO; (exp / W::BITS) as usize];
        words.push(W::ONE << (exp % W::BITS));

        Self(words)
    }

    /// The words, least significant first.
    #[inline]
    pub fn words(&self) -> &[W] {
        &self.0
    }

    pub fn into_words(self) -> Vec<W> {
        self.0
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of significant bits; 0 for zero.
    pub fn bit_len(&self) -> u64 {
        match self.0.last() {
            Some(&top) => {
                (self.0.len() as u64 - 1) * W::BITS as u64 + (W::BITS - top.leading_zeros()) as u64
            }
            None => 0,
        }
    }

    /// Minimal big-endian bytes; empty for zero.
    pub fn to_be_bytes(&self) -> Vec<u8> {
        to_vec(&self.0)
    }

    pub(crate) fn truncate_words_normalized(&mut self, len: usize) {
        self.0.truncate(len);
        self.normalize();
    }

    fn normalize(&mut self) {
        while self.0.last() == Some(&W::ZERO) {
            self.0.pop();
        }
    }
}

impl<W: Word> Display for Nat<W> {
    /// Formats the value as colon-separated uppercase hexadecimal bytes,
    /// most significant first. Zero prints as `00`.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let bytes = self.to_be_bytes();

        if bytes.is_empty() {
            return f.write_str("00");
        }

        for (i, byte) in bytes.iter().enumerate() {
            if i > 0 {
                f.write_str(":")?;
            }

            write!(f, "{:02X}", byte)?;
        }

        Ok(())
    }
}
