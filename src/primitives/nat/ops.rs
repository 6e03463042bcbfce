use std::ops::{Shl, ShlAssign};

use crate::primitives::{Nat, Word};

impl<W: Word> ShlAssign<u32> for Nat<W> {
    fn shl_assign(&mut self, shift: u32) {
        if shift == 0 || self.is_zero() {
            return;
        }

        let word_shift = (shift / W::BITS) as usize;
        let bit_shift = shift % W::BITS;

        let mut out = Vec::with_capacity(self.0.len() + word_shift + 1);
        out.resize(word_shift, W::ZERO);

        if bit_shift == 0 {
            out.extend_from_slice(&self.0);
        } else {
            let mut carry = W::ZERO;

            for &w in &self.0 {
                out.push((w << bit_shift) | carry);
                carry = w >> (W::BITS - bit_shift);
            }

            if carry != W::ZERO {
                out.push(carry);
            }
        }

        self.0 = out;
    }
}

impl<W: Word> Shl<u32> for Nat<W> {
    type Output = Nat<W>;

    fn shl(mut self, shift: u32) -> Self::Output {
        self <<= shift;
        self
    }
}

impl<W: Word> Shl<u32> for &Nat<W> {
    type Output = Nat<W>;

    fn shl(self, shift: u32) -> Self::Output {
        self.clone() << shift
    }
}
