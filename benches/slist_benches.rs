use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use mola_slist::SList;
use rand::prelude::SliceRandom;
use rand::{SeedableRng, rngs::StdRng};
use std::collections::LinkedList;
use std::hint::black_box;

const SIZES: [usize; 3] = [16, 256, 4_096];

fn shuffled(len: usize) -> Vec<u64> {
    let mut values: Vec<u64> = (0..len as u64).collect();
    values.shuffle(&mut StdRng::seed_from_u64(42));
    values
}

// --- Building lists ---

fn build_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    for len in SIZES {
        let values = shuffled(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("slist_prepend", len), &values, |b, values| {
            b.iter(|| {
                let mut list = SList::new();
                for v in values {
                    list.prepend(v).unwrap();
                }
                black_box(list)
            })
        });

        group.bench_with_input(BenchmarkId::new("slist_extend", len), &values, |b, values| {
            b.iter(|| black_box(values.iter().collect::<SList<&u64>>()))
        });

        group.bench_with_input(BenchmarkId::new("std_linked_list", len), &values, |b, values| {
            b.iter(|| black_box(values.iter().collect::<LinkedList<&u64>>()))
        });
    }
    group.finish();
}

// --- Sorting ---

fn sort_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");
    for len in SIZES {
        let values = shuffled(len);
        group.throughput(Throughput::Elements(len as u64));

        group.bench_with_input(BenchmarkId::new("slist_sort", len), &values, |b, values| {
            b.iter_with_setup(
                || values.iter().collect::<SList<&u64>>(),
                |mut list| {
                    list.sort(|a, b| a < b);
                    list
                },
            )
        });

        group.bench_with_input(BenchmarkId::new("vec_sort", len), &values, |b, values| {
            b.iter_with_setup(
                || values.iter().collect::<Vec<&u64>>(),
                |mut vec| {
                    vec.sort();
                    vec
                },
            )
        });
    }
    group.finish();
}

// --- Lookups ---

fn lookup_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("lookup");
    for len in SIZES {
        let values = shuffled(len);
        let list: SList<&u64> = values.iter().collect();
        let needle = &values[len - 1];

        group.bench_function(BenchmarkId::new("index", len), |b| {
            b.iter(|| black_box(list.index(&needle)))
        });

        group.bench_function(BenchmarkId::new("find", len), |b| {
            b.iter(|| black_box(list.find(needle, |n, v| *n == **v).is_some()))
        });
    }
    group.finish();
}

criterion_group!(benches, build_benchmark, sort_benchmark, lookup_benchmark);
criterion_main!(benches);
