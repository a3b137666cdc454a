//! crates/align/benches/alignment_benchmark.rs
//!
//! Alignment throughput for typical edit patterns.
//!
//! Run with: `cargo bench -p align`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use align::{AlignerConfig, diff_with};

fn generate_data(size: usize, seed: u64) -> Vec<u8> {
    let mut state = seed;
    (0..size)
        .map(|_| {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1);
            (state >> 56) as u8
        })
        .collect()
}

/// Flips one byte every `stride` bytes.
fn sparse_edits(base: &[u8], stride: usize) -> Vec<u8> {
    let mut target = base.to_vec();
    for i in (0..target.len()).step_by(stride) {
        target[i] = target[i].wrapping_add(1);
    }
    target
}

fn bench_identical(c: &mut Criterion) {
    let mut group = c.benchmark_group("align_identical");
    let config = AlignerConfig::default();

    for size in [4096, 65536, 1 << 20] {
        let data = generate_data(size, 1);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &data, |b, data| {
            b.iter(|| black_box(diff_with(black_box(data), black_box(data), &config)));
        });
    }

    group.finish();
}

fn bench_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("align_sparse_edits");
    let config = AlignerConfig::default();

    for size in [4096, 65536] {
        let base = generate_data(size, 2);
        let target = sparse_edits(&base, 512);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(base, target),
            |b, (base, target)| {
                b.iter(|| black_box(diff_with(black_box(base), black_box(target), &config)));
            },
        );
    }

    group.finish();
}

fn bench_unrelated(c: &mut Criterion) {
    let mut group = c.benchmark_group("align_unrelated");
    group.sample_size(10);
    let config = AlignerConfig::default();

    for size in [1024, 4096] {
        let base = generate_data(size, 3);
        let target = generate_data(size, 4);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(
            BenchmarkId::from_parameter(size),
            &(base, target),
            |b, (base, target)| {
                b.iter(|| black_box(diff_with(black_box(base), black_box(target), &config)));
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_identical, bench_sparse, bench_unrelated);
criterion_main!(benches);
