use bigmarshal::primitives::{Limb, Nat};
use bigmarshal::{marshal, marshal_generic, max_byte_len};

use criterion::{Criterion, criterion_group, criterion_main};
use malachite::Natural;
use malachite::base::num::conversion::traits::PowerOf2Digits;
use std::hint::black_box;

/// 0 followed by 2^0 .. 2^256.
fn vectors() -> Vec<Nat<Limb>> {
    let mut out = vec![Nat::ZERO];
    out.extend((0..=256).map(Nat::power_of_two));
    out
}

fn to_natural(v: &Nat<Limb>) -> Natural {
    v.words()
        .iter()
        .rev()
        .fold(Natural::from(0u32), |acc, &w| (acc << Limb::BITS) + Natural::from(w))
}

pub fn bench_marshal(c: &mut Criterion) {
    let values = vectors();
    let mut buf = [0u8; 100];

    c.bench_function("marshal 0-256 bits prealloc generic", |b| {
        b.iter(|| {
            for v in &values {
                let _ = marshal_generic(black_box(v), &mut buf);
            }
        })
    });

    c.bench_function("marshal 0-256 bits prealloc platform", |b| {
        b.iter(|| {
            for v in &values {
                let _ = marshal(black_box(v), &mut buf);
            }
        })
    });

    c.bench_function("marshal 0-256 bits noprealloc generic", |b| {
        b.iter(|| {
            for v in &values {
                let mut buf = vec![0u8; max_byte_len(v)];
                let _ = marshal_generic(black_box(v), &mut buf);
            }
        })
    });

    c.bench_function("marshal 0-256 bits noprealloc platform", |b| {
        b.iter(|| {
            for v in &values {
                let mut buf = vec![0u8; max_byte_len(v)];
                let _ = marshal(black_box(v), &mut buf);
            }
        })
    });
}

pub fn bench_reference(c: &mut Criterion) {
    let values: Vec<Natural> = vectors().iter().map(to_natural).collect();

    c.bench_function("malachite 0-256 bits noprealloc bytes", |b| {
        b.iter(|| {
            for v in &values {
                let bytes: Vec<u8> = black_box(v).to_power_of_2_digits_desc(8);
                black_box(bytes);
            }
        })
    });
}

criterion_group!(benches, bench_marshal, bench_reference);
criterion_main!(benches);
