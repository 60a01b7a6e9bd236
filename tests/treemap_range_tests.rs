//! Tests for head, tail and sub maps.

use navmap::{MapError, TreeMap};
use proptest::prelude::*;
use rstest::{fixture, rstest};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[fixture]
fn numbers() -> TreeMap<i32, i32> {
    [50, 30, 70, 20, 40, 60, 80]
        .into_iter()
        .map(|key| (key, key * 10))
        .collect()
}

fn keys<V>(map: &TreeMap<i32, V>) -> Vec<i32> {
    map.keys().copied().collect()
}

// =============================================================================
// Example Tests
// =============================================================================

#[rstest]
fn test_head_map_excludes_end(numbers: TreeMap<i32, i32>) {
    let head = numbers.head_map(&50);
    assert_eq!(keys(&head), vec![20, 30, 40]);
    assert_eq!(head.get(&30), Some(&300));
}

#[rstest]
fn test_tail_map_includes_start(numbers: TreeMap<i32, i32>) {
    assert_eq!(keys(&numbers.tail_map(&50)), vec![50, 60, 70, 80]);
}

#[rstest]
fn test_sub_map_is_half_open(numbers: TreeMap<i32, i32>) {
    assert_eq!(keys(&numbers.sub_map(&30, &60).unwrap()), vec![30, 40, 50]);
}

#[rstest]
#[case(50, 50)]
#[case(60, 30)]
fn test_sub_map_invalid_range(numbers: TreeMap<i32, i32>, #[case] start: i32, #[case] end: i32) {
    assert_eq!(numbers.sub_map(&start, &end), Err(MapError::InvalidRange));
}

#[rstest]
fn test_range_maps_of_empty_map() {
    let map: TreeMap<i32, i32> = TreeMap::new();
    assert!(map.head_map(&0).is_empty());
    assert!(map.tail_map(&0).is_empty());
    assert!(map.sub_map(&0, &1).unwrap().is_empty());
}

#[rstest]
fn test_range_map_shares_comparator() {
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);
    let map = {
        let mut map = TreeMap::with_comparator(move |left: &i32, right: &i32| {
            counter.fetch_add(1, Ordering::Relaxed);
            left.cmp(right)
        });
        map.extend([(2, ()), (1, ()), (3, ())]);
        map
    };

    let head = map.head_map(&3);
    let before = calls.load(Ordering::Relaxed);
    assert!(head.contains_key(&1));
    assert!(calls.load(Ordering::Relaxed) > before);
}

#[rstest]
fn test_range_maps_are_mutable_and_independent(numbers: TreeMap<i32, i32>) {
    let mut sub = numbers.sub_map(&30, &70).unwrap();
    sub.put(10, 100);
    sub.remove(&50);

    assert_eq!(keys(&sub), vec![10, 30, 40, 60]);
    assert_eq!(keys(&numbers), vec![20, 30, 40, 50, 60, 70, 80]);
}

// =============================================================================
// Partition Laws
// =============================================================================

proptest! {
    /// Law: head(k) ∪ entry(k) ∪ tail-above(k) is the whole map.
    #[test]
    fn prop_head_and_tail_partition(
        keys in prop::collection::vec(-100i32..100, 0..60),
        pivot in -110i32..110
    ) {
        let map: TreeMap<i32, i32> = keys.iter().map(|&key| (key, key)).collect();
        let head = map.head_map(&pivot);
        let tail = map.tail_map(&pivot);

        prop_assert!(head.keys().all(|key| *key < pivot));
        prop_assert!(tail.keys().all(|key| *key >= pivot));
        prop_assert_eq!(head.len() + tail.len(), map.len());
        prop_assert_eq!(tail.contains_key(&pivot), map.contains_key(&pivot));

        let mut joined: Vec<i32> = head.keys().copied().collect();
        joined.extend(tail.keys().copied());
        prop_assert_eq!(joined, map.keys().copied().collect::<Vec<_>>());
        prop_assert_eq!(head.check_invariants(), Ok(()));
        prop_assert_eq!(tail.check_invariants(), Ok(()));
    }

    /// Law: sub(a, b) equals the overlap of tail(a) and head(b).
    #[test]
    fn prop_sub_map_is_intersection(
        keys in prop::collection::vec(-100i32..100, 0..60),
        start in -110i32..110,
        width in 1i32..80
    ) {
        let map: TreeMap<i32, i32> = keys.iter().map(|&key| (key, key)).collect();
        let end = start + width;
        let sub = map.sub_map(&start, &end).unwrap();
        let expected = map.tail_map(&start).head_map(&end);
        prop_assert_eq!(sub, expected);
    }
}
