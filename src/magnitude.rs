//! Word-sequence view of a non-negative integer
//!
//! [`Magnitude`] is the only thing the marshaller and the truncator know
//! about an integer type: a read-only view of its words, least
//! significant first, and a way to shorten that sequence in place.
//!
//! The canonical form has a non-zero last word, with zero stored as the
//! empty sequence. [`Nat`](crate::primitives::Nat) always holds that form;
//! a bare `Vec<W>` may carry high zero words, which both operations
//! tolerate.

use crate::primitives::{Nat, Word};

/// Accessor and mutator over the words of a non-negative integer.
pub trait Magnitude {
    type Word: Word;

    /// The words, least significant first.
    fn words(&self) -> &[Self::Word];

    /// Replaces the word sequence with its first `len` words.
    ///
    /// Does nothing when `len` is not below the current length.
    fn truncate_words(&mut self, len: usize);
}

impl<W: Word> Magnitude for Vec<W> {
    type Word = W;

    #[inline]
    fn words(&self) -> &[W] {
        self
    }

    #[inline]
    fn truncate_words(&mut self, len: usize) {
        self.truncate(len);
    }
}

impl<W: Word> Magnitude for Nat<W> {
    type Word = W;

    #[inline]
    fn words(&self) -> &[W] {
        Nat::words(self)
    }

    fn truncate_words(&mut self, len: usize) {
        self.truncate_words_normalized(len);
    }
}

/// `words` without its high zero words.
#[inline]
pub(crate) fn significant_words<W: Word>(words: &[W]) -> &[W] {
    let len = words
        .iter()
        .rposition(|&w| w != W::ZERO)
        .map_or(0, |i| i + 1);

    &words[..len]
}
