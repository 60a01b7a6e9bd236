//! Structural self-checks.

use std::cmp::Ordering;

use smallvec::SmallVec;

use super::TreeMap;
use super::node::NodeId;
use crate::ordering::Comparator;

impl<K, V, C> TreeMap<K, V, C> {
    /// Returns the number of nodes on the longest root-to-leaf path, or 0
    /// for an empty map.
    ///
    /// Sorted insertions degrade the tree into a list:
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let sorted: TreeMap<i32, ()> = (0..16).map(|key| (key, ())).collect();
    /// assert_eq!(sorted.height(), 16);
    ///
    /// let mut balanced = TreeMap::new();
    /// for key in [4, 2, 6, 1, 3, 5, 7] {
    ///     balanced.put(key, ());
    /// }
    /// assert_eq!(balanced.height(), 3);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut pending: SmallVec<[(NodeId, usize); 32]> = SmallVec::new();
        pending.extend(self.arena.root().map(|root| (root, 1)));

        while let Some((id, depth)) = pending.pop() {
            deepest = deepest.max(depth);
            let node = &self.arena[id];
            pending.extend(node.left.map(|left| (left, depth + 1)));
            pending.extend(node.right.map(|right| (right, depth + 1)));
        }
        deepest
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Verifies the structural invariants of the tree.
    ///
    /// Checks parent/child link agreement, that every stored node is
    /// reachable exactly once from the root, and that an in-order walk
    /// yields strictly increasing keys.
    ///
    /// # Errors
    ///
    /// Returns a description of the first violation found.
    #[doc(hidden)]
    pub fn check_invariants(&self) -> Result<(), &'static str> {
        let Some(root) = self.arena.root() else {
            return if self.is_empty() {
                Ok(())
            } else {
                Err("nodes stored without a root")
            };
        };
        if self.arena[root].parent.is_some() {
            return Err("root has a parent");
        }

        let mut reachable = 0usize;
        let mut pending: SmallVec<[NodeId; 32]> = SmallVec::new();
        pending.push(root);
        while let Some(id) = pending.pop() {
            reachable += 1;
            if reachable > self.len() {
                return Err("more nodes reachable than stored");
            }
            let node = &self.arena[id];
            for child in [node.left, node.right].into_iter().flatten() {
                if self.arena[child].parent != Some(id) {
                    return Err("child does not link back to its parent");
                }
                pending.push(child);
            }
        }
        if reachable != self.len() {
            return Err("stored nodes unreachable from the root");
        }

        let mut keys = self.keys();
        if let Some(mut previous) = keys.next() {
            for key in keys {
                if self.comparator.compare(previous, key) != Ordering::Less {
                    return Err("keys out of order");
                }
                previous = key;
            }
        }
        Ok(())
    }
}
