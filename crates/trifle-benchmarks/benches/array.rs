//! Summation and deduplication benchmarks
//!
//! Deduplication is quadratic in the number of distinct values, so inputs
//! vary both length and cardinality.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use trifle_benchmarks::{criterion_config, numeric_input};
use trifle_core::{remove_duplicates, sum_array};

fn bench_sum_array(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum_array");

    for len in [16, 1_024, 65_536].iter() {
        group.throughput(Throughput::Elements(*len as u64));
        let input = numeric_input(*len, *len);

        group.bench_with_input(BenchmarkId::new("f64", len), &input, |b, values| {
            b.iter(|| black_box(sum_array(values)));
        });
    }

    group.finish();
}

fn bench_remove_duplicates(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_duplicates");

    for (len, distinct) in [(1_024, 8), (1_024, 256), (4_096, 1_024)].iter() {
        group.throughput(Throughput::Elements(*len as u64));
        let input = numeric_input(*len, *distinct);

        group.bench_with_input(
            BenchmarkId::new(format!("distinct_{}", distinct), len),
            &input,
            |b, values| {
                b.iter(|| black_box(remove_duplicates(values)));
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = criterion_config();
    targets = bench_sum_array, bench_remove_duplicates
}
criterion_main!(benches);
