//! LinkedList benchmarks.
//!
//! Run with: cargo bench

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use nexus_sequence::LinkedList;

const SIZES: [u64; 3] = [16, 256, 4096];

// ============================================================================
// Append
// ============================================================================

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for &n in &SIZES {
        group.throughput(Throughput::Elements(n));

        group.bench_with_input(BenchmarkId::new("nexus-sequence", n), &n, |b, &n| {
            let mut list: LinkedList<u64> = LinkedList::with_capacity(n as usize);
            b.iter(|| {
                for i in 0..n {
                    black_box(list.append(i));
                }
                list.clear();
            });
        });

        group.bench_with_input(BenchmarkId::new("std", n), &n, |b, &n| {
            let mut list = std::collections::LinkedList::new();
            b.iter(|| {
                for i in 0..n {
                    list.push_back(black_box(i));
                }
                list.clear();
            });
        });
    }

    group.finish();
}

// ============================================================================
// Remove by value (worst case: last element)
// ============================================================================

fn bench_remove_last_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_last_value");

    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            let mut list: LinkedList<u64> = (0..n).collect();
            b.iter(|| {
                let v = black_box(list.remove(&(n - 1)));
                list.append(n - 1);
                v
            });
        });
    }

    group.finish();
}

// ============================================================================
// Swap by value
// ============================================================================

fn bench_swap(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap");

    for &n in &SIZES {
        group.bench_with_input(BenchmarkId::new("ends", n), &n, |b, &n| {
            let mut list: LinkedList<u64> = (0..n).collect();
            b.iter(|| black_box(list.swap(&0, &(n - 1))));
        });

        group.bench_with_input(BenchmarkId::new("adjacent_middle", n), &n, |b, &n| {
            let mut list: LinkedList<u64> = (0..n).collect();
            let mid = n / 2;
            b.iter(|| black_box(list.swap(&mid, &(mid + 1))));
        });
    }

    group.finish();
}

// ============================================================================
// Conversion
// ============================================================================

fn bench_to_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("to_sequence");

    for &n in &SIZES {
        group.throughput(Throughput::Elements(n));
        let list: LinkedList<u64> = (0..n).collect();
        group.bench_with_input(BenchmarkId::from_parameter(n), &list, |b, list| {
            b.iter(|| black_box(list.to_sequence()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_append,
    bench_remove_last_value,
    bench_swap,
    bench_to_sequence
);
criterion_main!(benches);
