//! Ascon Comprehensive Criterion Benchmark
//!
//! Statistically rigorous performance measurements across AEAD, Hash/XOF
//! and MAC/PRF, at a range of input sizes.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use ascon::{aead_encrypt, hash, mac, prf, xof, AeadVariant, HashVariant, XofVariant};
use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use rand::prelude::*;
use std::hint::black_box;

const KB: usize = 1024;

// =============================================================================
// BENCHMARK 1: LATENCY
// =============================================================================

/// Hot-path latency for small inputs (packet headers, record fields).
fn bench_latency(c: &mut Criterion) {
    let mut group = c.benchmark_group("1-Latency");

    let sizes = [(16, "16B"), (64, "64B"), (256, "256B"), (KB, "1KB")];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| hash(HashVariant::Hash, black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 2: MEDIUM/LARGE PAYLOADS
// =============================================================================

/// Throughput across larger payloads (files, blobs, firmware images).
fn bench_payloads(c: &mut Criterion) {
    let mut group = c.benchmark_group("2-Payloads");
    group.sample_size(50);

    let sizes = [
        (4 * KB, "4KB"),
        (64 * KB, "64KB"),
        (1024 * KB, "1MB"),
        (4 * 1024 * KB, "4MB"),
    ];

    for (size, name) in sizes {
        let mut input = vec![0u8; size];
        rand::rng().fill(&mut input[..]);
        group.throughput(Throughput::Bytes(size as u64));

        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(name),
            &input,
            |b, data| b.iter(|| hash(HashVariant::Hasha, black_box(data))),
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 3: AEAD VARIANTS
// =============================================================================

/// Encrypt throughput across the three AEAD variants, at a fixed payload
/// size, to compare their per-variant rate/round tradeoffs.
fn bench_aead_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("3-AEAD-Variants");

    let size = 16 * KB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    let nonce = [7u8; 16];
    group.throughput(Throughput::Bytes(size as u64));

    for variant in [
        AeadVariant::Ascon128,
        AeadVariant::Ascon128a,
        AeadVariant::Ascon80pq,
    ] {
        let key = vec![0u8; variant.key_len()];
        group.bench_with_input(
            criterion::BenchmarkId::from_parameter(format!("{variant:?}")),
            &variant,
            |b, &variant| {
                b.iter(|| aead_encrypt(variant, &key, &nonce, b"", black_box(&input)).unwrap())
            },
        );
    }
    group.finish();
}

// =============================================================================
// BENCHMARK 4: HASH / XOF VARIANTS
// =============================================================================

/// Ascon-Hash vs Ascon-Hasha vs Ascon-Xof at a fixed payload size.
fn bench_hash_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("4-Hash-Xof-Variants");

    let size = 16 * KB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("Hash", |b| {
        b.iter(|| hash(HashVariant::Hash, black_box(&input)))
    });
    group.bench_function("Hasha", |b| {
        b.iter(|| hash(HashVariant::Hasha, black_box(&input)))
    });
    group.bench_function("Xof-32B", |b| {
        b.iter(|| xof(XofVariant::Xof, black_box(&input), 32))
    });
    group.bench_function("Xofa-32B", |b| {
        b.iter(|| xof(XofVariant::Xofa, black_box(&input), 32))
    });

    group.finish();
}

// =============================================================================
// BENCHMARK 5: MAC / PRF
// =============================================================================

/// Keyed constructions (Ascon-Mac, Ascon-Prf) at a fixed payload size.
fn bench_mac_prf(c: &mut Criterion) {
    let mut group = c.benchmark_group("5-Mac-Prf");

    let size = 16 * KB;
    let mut input = vec![0u8; size];
    rand::rng().fill(&mut input[..]);
    let key = [9u8; 16];
    group.throughput(Throughput::Bytes(size as u64));

    group.bench_function("mac", |b| {
        b.iter(|| mac(&key, black_box(&input)))
    });
    group.bench_function("prf-32B", |b| {
        b.iter(|| prf(&key, black_box(&input), 32))
    });

    group.finish();
}

// =============================================================================
// MAIN
// =============================================================================

criterion_group!(
    benches,
    bench_latency,
    bench_payloads,
    bench_aead_variants,
    bench_hash_variants,
    bench_mac_prf,
);

criterion_main!(benches);
