//! Benchmark for collection operations: flatten, uniq, sort_by and the
//! set-like operations.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use sequent::collection::{difference, flatten, intersection, sort_by, uniq};
use sequent::value::{Nested, Value};
use std::hint::black_box;

fn deep_value(depth: usize) -> Value {
    let mut value = Value::from(0);
    for level in 0..depth {
        value = Value::array([Value::from(level as f64), value]);
    }
    value
}

fn wide_nested(width: usize) -> Vec<Nested<usize>> {
    (0..width)
        .map(|index| {
            Nested::sequence([
                Nested::leaf(index),
                Nested::sequence([Nested::leaf(index + 1), Nested::leaf(index + 2)]),
            ])
        })
        .collect()
}

// =============================================================================
// Flatten Benchmarks
// =============================================================================

fn benchmark_flatten(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("flatten");

    for depth in [10, 100, 1000] {
        let nested = vec![deep_value(depth)];
        group.bench_with_input(BenchmarkId::new("deep_value", depth), &nested, |bencher, nested| {
            bencher.iter(|| black_box(flatten(black_box(nested))));
        });
    }

    for width in [100, 1000, 10_000] {
        let nested = wide_nested(width);
        group.bench_with_input(BenchmarkId::new("wide_nested", width), &nested, |bencher, nested| {
            bencher.iter(|| black_box(flatten(black_box(nested))));
        });
    }

    group.finish();
}

// =============================================================================
// Ordering Benchmarks
// =============================================================================

fn benchmark_uniq(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("uniq");

    for size in [100, 1000, 10_000] {
        let numbers: Vec<u32> = (0..size).map(|index| (index * 7919) % (size / 2 + 1)).collect();
        group.bench_with_input(BenchmarkId::new("u32", size), &numbers, |bencher, numbers| {
            bencher.iter(|| {
                let mut working = numbers.clone();
                uniq(&mut working);
                black_box(working)
            });
        });
    }

    group.finish();
}

fn benchmark_sort_by(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sort_by");

    for size in [100_i32, 1000, 10_000] {
        let records: Vec<Value> = (0..size)
            .map(|index| {
                if index % 10 == 0 {
                    Value::object([("id", Value::from(index))])
                } else {
                    Value::object([("key", Value::from((index * 31) % 97))])
                }
            })
            .collect();
        group.bench_with_input(BenchmarkId::new("property", size), &records, |bencher, records| {
            bencher.iter(|| {
                let mut working = records.clone();
                sort_by(&mut working, sequent::collection::Property("key"));
                black_box(working)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Set Benchmarks
// =============================================================================

fn benchmark_set_operations(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("set_operations");

    for size in [10, 100, 1000] {
        let first: Vec<u32> = (0..size).collect();
        let others = vec![(0..size).step_by(2).collect::<Vec<u32>>(), (0..size).step_by(3).collect()];

        group.bench_with_input(BenchmarkId::new("difference", size), &size, |bencher, _| {
            bencher.iter(|| black_box(difference(black_box(&first), black_box(&others))));
        });

        let mut all = vec![first.clone()];
        all.extend(others.iter().cloned());
        group.bench_with_input(BenchmarkId::new("intersection", size), &size, |bencher, _| {
            bencher.iter(|| black_box(intersection(black_box(&all))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_flatten,
    benchmark_uniq,
    benchmark_sort_by,
    benchmark_set_operations
);

criterion_main!(benches);
