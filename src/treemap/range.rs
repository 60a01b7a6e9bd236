//! Eager head, tail and sub maps.
//!
//! Range maps are not views. Each call walks the source tree once, skips
//! subtrees that cannot hold qualifying keys, and copies every qualifying
//! entry into a fresh map through [`TreeMap::put`]. Nodes are visited root
//! first, then the left subtree, then the right one, so the new tree
//! repeats the relative shape of the copied nodes.

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::TreeMap;
use super::node::NodeId;
use crate::error::MapError;
use crate::ordering::Comparator;
use crate::trace::{RangeKind, TraceEvent};

/// What a range walk does at one node.
#[derive(Clone, Copy, Debug)]
struct Visit {
    include: bool,
    descend_left: bool,
    descend_right: bool,
}

impl<K: Clone, V: Clone, C: Comparator<K>> TreeMap<K, V, C> {
    /// Returns a new map holding the entries whose keys are strictly less
    /// than `end`.
    ///
    /// The result shares this map's comparator and tracer but no nodes;
    /// later changes to either map do not affect the other.
    ///
    /// # Complexity
    ///
    /// O(n · h) in the worst case
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let map: TreeMap<i32, i32> = (1..=5).map(|key| (key, key)).collect();
    /// let head = map.head_map(&3);
    ///
    /// let keys: Vec<&i32> = head.keys().collect();
    /// assert_eq!(keys, vec![&1, &2]);
    /// ```
    #[must_use]
    pub fn head_map(&self, end: &K) -> Self {
        self.build_range(RangeKind::Head, |key| {
            let below = self.comparator.compare(key, end) == Ordering::Less;
            Visit {
                include: below,
                descend_left: true,
                descend_right: below,
            }
        })
    }

    /// Returns a new map holding the entries whose keys are greater than or
    /// equal to `start`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let map: TreeMap<i32, i32> = (1..=5).map(|key| (key, key)).collect();
    /// let tail = map.tail_map(&3);
    ///
    /// let keys: Vec<&i32> = tail.keys().collect();
    /// assert_eq!(keys, vec![&3, &4, &5]);
    /// ```
    #[must_use]
    pub fn tail_map(&self, start: &K) -> Self {
        self.build_range(RangeKind::Tail, |key| {
            let at_or_above = self.comparator.compare(key, start) != Ordering::Less;
            Visit {
                include: at_or_above,
                descend_left: at_or_above,
                descend_right: true,
            }
        })
    }

    /// Returns a new map holding the entries whose keys lie in
    /// `start..end`.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::InvalidRange`] unless `start` is strictly less
    /// than `end`. Nothing is built in that case.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::{MapError, TreeMap};
    ///
    /// let map: TreeMap<i32, i32> = (1..=5).map(|key| (key, key)).collect();
    ///
    /// let middle = map.sub_map(&2, &4).unwrap();
    /// let keys: Vec<&i32> = middle.keys().collect();
    /// assert_eq!(keys, vec![&2, &3]);
    ///
    /// assert_eq!(map.sub_map(&4, &2).unwrap_err(), MapError::InvalidRange);
    /// ```
    pub fn sub_map(&self, start: &K, end: &K) -> Result<Self, MapError> {
        if self.comparator.compare(start, end) != Ordering::Less {
            return Err(MapError::InvalidRange);
        }
        Ok(self.build_range(RangeKind::Sub, |key| {
            let from_start = self.comparator.compare(key, start);
            let to_end = self.comparator.compare(key, end);
            Visit {
                include: from_start != Ordering::Less && to_end == Ordering::Less,
                descend_left: from_start == Ordering::Greater,
                descend_right: to_end == Ordering::Less,
            }
        }))
    }

    /// Pre-order walk guided by `visit`, copying included entries.
    fn build_range<F>(&self, range: RangeKind, visit: F) -> Self
    where
        F: Fn(&K) -> Visit,
    {
        let mut result = self.empty_like();
        let mut pending: SmallVec<[NodeId; 32]> = SmallVec::new();
        pending.extend(self.arena.root());

        while let Some(id) = pending.pop() {
            let node = &self.arena[id];
            let Visit {
                include,
                descend_left,
                descend_right,
            } = visit(&node.key);

            if include {
                result.put(node.key.clone(), node.value.clone());
            }
            // Right is pushed first so that the left subtree is copied first.
            if descend_right {
                pending.extend(node.right);
            }
            if descend_left {
                pending.extend(node.left);
            }
        }

        result.emit(TraceEvent::RangeBuilt {
            range,
            len: result.len(),
        });
        result
    }
}
