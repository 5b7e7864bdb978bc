//! Benchmarks for the four container phases against std collections.
//!
//! Run with: cargo bench
//!
//! Each iteration starts from an empty container and drives it through
//! N appends, N prepends, N erases at the front, N erases at the back.

use std::collections::{LinkedList as StdList, VecDeque};
use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use nexus_linear::{LinkedList, Sequence, Vector};

const SIZES: [usize; 3] = [100, 1_000, 10_000];

fn phases<S: Sequence<Item = u64>>(seq: &mut S, n: usize) {
    for i in 0..n as u64 {
        seq.append(i);
    }
    for i in 0..n as u64 {
        seq.prepend(i);
    }
    for _ in 0..n {
        black_box(seq.erase(seq.begin()).ok());
    }
    for _ in 0..n {
        let last = seq.offset(seq.end(), -1).and_then(|pos| seq.erase(pos));
        black_box(last.ok());
    }
}

// ============================================================================
// Full phase sequence
// ============================================================================

fn bench_phases(c: &mut Criterion) {
    let mut group = c.benchmark_group("phases");

    for n in SIZES {
        group.throughput(Throughput::Elements(4 * n as u64));

        group.bench_with_input(BenchmarkId::new("nexus-linear/list", n), &n, |b, &n| {
            b.iter(|| {
                let mut list: LinkedList<u64> = LinkedList::new();
                phases(&mut list, n);
            });
        });

        group.bench_with_input(BenchmarkId::new("nexus-linear/vector", n), &n, |b, &n| {
            b.iter(|| {
                let mut vec: Vector<u64> = Vector::new();
                phases(&mut vec, n);
            });
        });

        group.bench_with_input(BenchmarkId::new("std/linked_list", n), &n, |b, &n| {
            b.iter(|| {
                let mut list: StdList<u64> = StdList::new();
                for i in 0..n as u64 {
                    list.push_back(i);
                }
                for i in 0..n as u64 {
                    list.push_front(i);
                }
                for _ in 0..n {
                    black_box(list.pop_front());
                }
                for _ in 0..n {
                    black_box(list.pop_back());
                }
            });
        });

        group.bench_with_input(BenchmarkId::new("std/vec_deque", n), &n, |b, &n| {
            b.iter(|| {
                let mut deque: VecDeque<u64> = VecDeque::with_capacity(10);
                for i in 0..n as u64 {
                    deque.push_back(i);
                }
                for i in 0..n as u64 {
                    deque.push_front(i);
                }
                for _ in 0..n {
                    black_box(deque.pop_front());
                }
                for _ in 0..n {
                    black_box(deque.pop_back());
                }
            });
        });
    }

    group.finish();
}

// ============================================================================
// Append only (vector growth policy vs std Vec)
// ============================================================================

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");
    let n = 100_000usize;
    group.throughput(Throughput::Elements(n as u64));

    group.bench_function("nexus-linear/vector", |b| {
        b.iter(|| {
            let mut vec: Vector<u64> = Vector::new();
            for i in 0..n as u64 {
                vec.append(i);
            }
            black_box(vec.len())
        });
    });

    group.bench_function("nexus-linear/list", |b| {
        b.iter(|| {
            let mut list: LinkedList<u64> = LinkedList::new();
            for i in 0..n as u64 {
                list.append(i);
            }
            black_box(list.len())
        });
    });

    group.bench_function("std/vec", |b| {
        b.iter(|| {
            let mut vec: Vec<u64> = Vec::with_capacity(10);
            for i in 0..n as u64 {
                vec.push(i);
            }
            black_box(vec.len())
        });
    });

    group.finish();
}

// ============================================================================
// Sequential iteration
// ============================================================================

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    let n = 100_000u64;
    group.throughput(Throughput::Elements(n));

    let list: LinkedList<u64> = (0..n).collect();
    let vec: Vector<u64> = (0..n).collect();

    group.bench_function("nexus-linear/list", |b| {
        b.iter(|| black_box(list.iter().sum::<u64>()));
    });

    group.bench_function("nexus-linear/vector", |b| {
        b.iter(|| black_box(vec.iter().sum::<u64>()));
    });

    group.bench_function("nexus-linear/list/cursor", |b| {
        b.iter(|| {
            let mut cursor = list.cursor_front();
            let mut sum = 0u64;
            while let Ok(value) = cursor.get() {
                sum += value;
                let _ = cursor.move_next();
            }
            black_box(sum)
        });
    });

    group.finish();
}

criterion_group!(benches, bench_phases, bench_append, bench_iterate);
criterion_main!(benches);
