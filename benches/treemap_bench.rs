//! Benchmark for TreeMap vs standard BTreeMap.
//!
//! Keys are inserted in a scrambled but deterministic order so the
//! unbalanced tree stays close to logarithmic height. The `degenerate`
//! group measures the sorted-input worst case separately.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use navmap::TreeMap;
use std::collections::BTreeMap;
use std::hint::black_box;

/// A permutation of `0..size`; 7919 is prime and divides none of the sizes.
fn scrambled(size: i32) -> Vec<i32> {
    (0..size).map(|index| (index * 7919) % size).collect()
}

// =============================================================================
// put Benchmark
// =============================================================================

fn benchmark_put(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("put");

    for size in [100, 1000, 10000] {
        let keys = scrambled(size);

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = TreeMap::new();
                for &key in keys {
                    map.put(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &keys, |bencher, keys| {
            bencher.iter(|| {
                let mut map = BTreeMap::new();
                for &key in keys {
                    map.insert(black_box(key), black_box(key * 2));
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// get Benchmark
// =============================================================================

fn benchmark_get(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("get");

    for size in [100, 1000, 10000] {
        let tree_map: TreeMap<i32, i32> = scrambled(size).into_iter().map(|key| (key, key * 2)).collect();
        let standard_map: BTreeMap<i32, i32> =
            scrambled(size).into_iter().map(|key| (key, key * 2)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in 0..size {
                    if let Some(&value) = tree_map.get(&black_box(key)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut sum = 0;
                for key in 0..size {
                    if let Some(&value) = standard_map.get(&black_box(key)) {
                        sum += value;
                    }
                }
                black_box(sum)
            });
        });
    }

    group.finish();
}

// =============================================================================
// floor Benchmark
// =============================================================================

fn benchmark_floor(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("floor");

    for size in [100, 1000, 10000] {
        // Even keys only, so half of the probes miss.
        let tree_map: TreeMap<i32, i32> = scrambled(size).into_iter().map(|key| (key * 2, key)).collect();
        let standard_map: BTreeMap<i32, i32> =
            scrambled(size).into_iter().map(|key| (key * 2, key)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0;
                for probe in 0..size * 2 {
                    if tree_map.floor_key(&black_box(probe)).is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut hits = 0;
                for probe in 0..size * 2 {
                    if standard_map.range(..=black_box(probe)).next_back().is_some() {
                        hits += 1;
                    }
                }
                black_box(hits)
            });
        });
    }

    group.finish();
}

// =============================================================================
// remove Benchmark
// =============================================================================

fn benchmark_remove(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("remove");

    for size in [100, 1000, 10000] {
        let tree_map: TreeMap<i32, i32> = scrambled(size).into_iter().map(|key| (key, key)).collect();
        let standard_map: BTreeMap<i32, i32> = scrambled(size).into_iter().map(|key| (key, key)).collect();

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || tree_map.clone(),
                |mut map| {
                    for key in 0..size {
                        map.remove(&black_box(key));
                    }
                    black_box(map)
                },
                criterion::BatchSize::SmallInput,
            );
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, &size| {
            bencher.iter_batched(
                || standard_map.clone(),
                |mut map| {
                    for key in 0..size {
                        map.remove(&black_box(key));
                    }
                    black_box(map)
                },
                criterion::BatchSize::SmallInput,
            );
        });
    }

    group.finish();
}

// =============================================================================
// range Benchmark
// =============================================================================

fn benchmark_range(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sub_map");

    for size in [100, 1000, 10000] {
        let tree_map: TreeMap<i32, i32> = scrambled(size).into_iter().map(|key| (key, key)).collect();
        let standard_map: BTreeMap<i32, i32> = scrambled(size).into_iter().map(|key| (key, key)).collect();
        let start = size / 4;
        let end = size / 4 * 3;

        group.bench_with_input(BenchmarkId::new("TreeMap", size), &size, |bencher, _| {
            bencher.iter(|| black_box(tree_map.sub_map(&black_box(start), &black_box(end))));
        });

        group.bench_with_input(BenchmarkId::new("BTreeMap", size), &size, |bencher, _| {
            bencher.iter(|| {
                let copy: BTreeMap<i32, i32> = standard_map
                    .range(black_box(start)..black_box(end))
                    .map(|(&key, &value)| (key, value))
                    .collect();
                black_box(copy)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Degenerate Shape Benchmark
// =============================================================================

fn benchmark_degenerate(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("degenerate");

    for size in [100, 1000] {
        group.bench_with_input(BenchmarkId::new("sorted_put", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut map = TreeMap::new();
                for key in 0..size {
                    map.put(black_box(key), key);
                }
                black_box(map)
            });
        });

        group.bench_with_input(BenchmarkId::new("scrambled_put", size), &size, |bencher, &size| {
            let keys = scrambled(size);
            bencher.iter(|| {
                let mut map = TreeMap::new();
                for &key in &keys {
                    map.put(black_box(key), key);
                }
                black_box(map)
            });
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Group and Main
// =============================================================================

criterion_group!(
    benches,
    benchmark_put,
    benchmark_get,
    benchmark_floor,
    benchmark_remove,
    benchmark_range,
    benchmark_degenerate
);

criterion_main!(benches);
