//! IAI-Callgrind benchmark for TreeMap.
//!
//! Measures instruction counts for construction, navigation and range
//! extraction. Scrambled input keeps the tree shallow; sorted input shows
//! the degenerate cost of an unbalanced tree.

use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use navmap::TreeMap;
use std::hint::black_box;

fn scrambled(size: i32) -> Vec<i32> {
    (0..size).map(|index| (index * 7919) % size).collect()
}

// Setup functions for different data sizes
fn setup_scrambled_1000() -> Vec<i32> {
    scrambled(1000)
}

fn setup_sorted_1000() -> Vec<i32> {
    (0..1000).collect()
}

fn setup_map_1000() -> TreeMap<i32, i32> {
    scrambled(1000).into_iter().map(|key| (key, key)).collect()
}

fn setup_map_10000() -> TreeMap<i32, i32> {
    scrambled(10000).into_iter().map(|key| (key, key)).collect()
}

// put benchmarks
#[library_benchmark]
#[bench::with_setup(setup_scrambled_1000())]
fn put_scrambled_1000(keys: Vec<i32>) -> TreeMap<i32, i32> {
    let mut map = TreeMap::new();
    for key in black_box(keys) {
        map.put(key, key);
    }
    black_box(map)
}

#[library_benchmark]
#[bench::with_setup(setup_sorted_1000())]
fn put_sorted_1000(keys: Vec<i32>) -> TreeMap<i32, i32> {
    let mut map = TreeMap::new();
    for key in black_box(keys) {
        map.put(key, key);
    }
    black_box(map)
}

// navigation benchmarks
#[library_benchmark]
#[bench::with_setup(setup_map_10000())]
fn ceiling_10000(map: TreeMap<i32, i32>) -> usize {
    let mut hits = 0;
    for probe in (0..10000).step_by(7) {
        if map.ceiling_key(&black_box(probe)).is_some() {
            hits += 1;
        }
    }
    black_box(hits)
}

// poll benchmarks
#[library_benchmark]
#[bench::with_setup(setup_map_1000())]
fn poll_first_1000(mut map: TreeMap<i32, i32>) -> usize {
    let mut polled = 0;
    while map.poll_first_entry().is_some() {
        polled += 1;
    }
    black_box(polled)
}

// range benchmarks
#[library_benchmark]
#[bench::with_setup(setup_map_10000())]
fn head_map_10000(map: TreeMap<i32, i32>) -> TreeMap<i32, i32> {
    black_box(map.head_map(&black_box(5000)))
}

library_benchmark_group!(
    name = treemap_group;
    benchmarks =
        put_scrambled_1000, put_sorted_1000,
        ceiling_10000,
        poll_first_1000,
        head_map_10000
);

main!(library_benchmark_groups = treemap_group);
