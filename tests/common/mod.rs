//! Shared fixtures: reference implementations on `malachite::Natural`,
//! the doubling sweep, and logger setup.

#![allow(dead_code)]

use std::sync::Once;

use bigmarshal::primitives::{Nat, Word};
use malachite::Natural;
use malachite::base::num::basic::traits::{One, Zero};

static INIT: Once = Once::new();

/// Initialise logging for tests. Safe to call from every test.
pub fn init_test_logging() {
    INIT.call_once(|| {
        let _ = env_logger::builder()
            .is_test(true)
            .filter_level(log::LevelFilter::Trace)
            .try_init();
    });
}

/// The same value as `words` (least significant first) as a `Natural`.
pub fn to_reference<W: Word + Into<u128>>(words: &[W]) -> Natural {
    words.iter().rev().fold(Natural::ZERO, |acc, &w| {
        (acc << W::BITS) + Natural::from(Into::<u128>::into(w))
    })
}

/// Canonical big-endian bytes of `n`: no leading zero byte, empty for zero.
pub fn reference_bytes(n: &Natural) -> Vec<u8> {
    let bytes: Vec<u8> = n
        .to_limbs_asc()
        .iter()
        .rev()
        .flat_map(|limb| limb.to_be_bytes())
        .collect();
    let start = bytes.iter().position(|&b| b != 0).unwrap_or(bytes.len());

    bytes[start..].to_vec()
}

/// 2^256 - 1.
pub fn mask_256() -> Natural {
    (Natural::ONE << 256u32) - Natural::ONE
}

/// `x & (2^256 - 1)`.
pub fn reference_truncate(x: &Natural) -> Natural {
    x & &mask_256()
}

/// 0, 1, 2, 4, ... : doubles each step, or becomes 1 from zero.
pub fn doubling_sweep<W: Word>(steps: usize) -> Vec<Nat<W>> {
    let mut out = Vec::with_capacity(steps);
    let mut value = Nat::<W>::ZERO;

    for _ in 0..steps {
        out.push(value.clone());

        value = if value.is_zero() {
            Nat::from(1u8)
        } else {
            value << 1
        };
    }

    out
}
