use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use sparsedouble::mocks::random_vector;
use sparsedouble::prelude::*;

fn bench_dot(c: &mut Criterion) {
    let mut group = c.benchmark_group("dot hash vs sequential");
    for &dimension in [1_000, 100_000].iter() {
        let a: SparseVector = random_vector(dimension, 0.01, 0);
        let b: SparseVector = random_vector(dimension, 0.1, 1);
        let sa = a.to_sequential();
        let sb = b.to_sequential();
        group.bench_with_input(BenchmarkId::new("hash", dimension), &dimension, |bench, _| {
            bench.iter(|| black_box(a.dot(&b)))
        });
        group.bench_with_input(
            BenchmarkId::new("sequential", dimension),
            &dimension,
            |bench, _| bench.iter(|| black_box(sa.dot(&sb))),
        );
    }
    group.finish();
}

fn bench_add(c: &mut Criterion) {
    let mut group = c.benchmark_group("add hash vs sequential");
    for &dimension in [1_000, 100_000].iter() {
        let a: SparseVector = random_vector(dimension, 0.01, 2);
        let b: SparseVector = random_vector(dimension, 0.01, 3);
        let sa = a.to_sequential();
        let sb = b.to_sequential();
        group.bench_with_input(BenchmarkId::new("hash", dimension), &dimension, |bench, _| {
            bench.iter(|| black_box(a.add(&b)))
        });
        group.bench_with_input(
            BenchmarkId::new("sequential", dimension),
            &dimension,
            |bench, _| bench.iter(|| black_box(sa.add(&sb))),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_dot, bench_add);
criterion_main!(benches);
