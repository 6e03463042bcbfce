use bigmarshal::primitives::{Limb, Nat};
use bigmarshal::truncate_to_256_bits;

use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use malachite::Natural;
use std::hint::black_box;

/// 0 followed by 2^0 .. 2^511, half of them wider than 256 bits.
fn vectors() -> Vec<Nat<Limb>> {
    let mut out = vec![Nat::ZERO];
    out.extend((0..512).map(Nat::power_of_two));
    out
}

fn to_natural(v: &Nat<Limb>) -> Natural {
    v.words()
        .iter()
        .rev()
        .fold(Natural::from(0u32), |acc, &w| (acc << Limb::BITS) + Natural::from(w))
}

pub fn bench_truncate(c: &mut Criterion) {
    let values = vectors();

    c.bench_function("truncate_to_256_bits 0-512 bits", |b| {
        b.iter_batched(
            || values.clone(),
            |mut values| {
                for v in &mut values {
                    truncate_to_256_bits(black_box(v));
                }
                values
            },
            BatchSize::SmallInput,
        )
    });

    let mask = (Natural::from(1u32) << 256u32) - Natural::from(1u32);
    let reference: Vec<Natural> = values
        .iter()
        .map(to_natural)
        .collect();

    c.bench_function("malachite bitmask 0-512 bits", |b| {
        b.iter(|| {
            for v in &reference {
                black_box(black_box(v) & &mask);
            }
        })
    });
}

criterion_group!(benches, bench_truncate);
criterion_main!(benches);
