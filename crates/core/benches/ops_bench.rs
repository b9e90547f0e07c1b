//! Performance benchmarks for the synchronous sequence helpers

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ripple_core::{filter_array, group_by};

fn bench_filter_array(c: &mut Criterion) {
    let numbers: Vec<u64> = (0..10_000).collect();

    c.bench_function("filter_array_10k_evens", |b| {
        b.iter(|| filter_array(black_box(&numbers), |n, _| n % 2 == 0));
    });

    c.bench_function("filter_array_10k_keep_all", |b| {
        b.iter(|| filter_array(black_box(&numbers), |_, _| true));
    });
}

fn bench_group_by(c: &mut Criterion) {
    let numbers: Vec<u64> = (0..10_000).collect();

    c.bench_function("group_by_10k_16_buckets", |b| {
        b.iter(|| group_by(black_box(&numbers), |n| n % 16));
    });

    c.bench_function("group_by_10k_single_bucket", |b| {
        b.iter(|| group_by(black_box(&numbers), |_| 0u8));
    });
}

criterion_group!(benches, bench_filter_array, bench_group_by);
criterion_main!(benches);
