//! Removal by transplanting subtrees.

use super::TreeMap;
use super::node::NodeId;
use crate::entry::Entry;
use crate::ordering::Comparator;
use crate::trace::{End, TraceEvent};

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Removes `key` from the map, returning its value if it was present.
    ///
    /// Removing an absent key leaves the map untouched.
    ///
    /// # Complexity
    ///
    /// O(h)
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1, "one");
    /// assert_eq!(map.remove(&1), Some("one"));
    /// assert_eq!(map.remove(&1), None);
    /// ```
    pub fn remove(&mut self, key: &K) -> Option<V> {
        self.remove_entry(key).map(|entry| entry.into_parts().1)
    }

    /// Removes `key` from the map, returning the stored key and value.
    pub fn remove_entry(&mut self, key: &K) -> Option<Entry<K, V>> {
        let Some(id) = self.find(key) else {
            self.emit(TraceEvent::RemoveMissed { key });
            return None;
        };
        Some(self.excise(id))
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Removes and returns the entry with the smallest key.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let mut map: TreeMap<i32, &str> = [(2, "b"), (1, "a")].into_iter().collect();
    /// assert_eq!(map.poll_first_entry().map(|entry| entry.into_parts()), Some((1, "a")));
    /// assert_eq!(map.len(), 1);
    ///
    /// map.clear();
    /// assert_eq!(map.poll_first_entry(), None);
    /// ```
    pub fn poll_first_entry(&mut self) -> Option<Entry<K, V>> {
        self.poll(End::First)
    }

    /// Removes and returns the entry with the largest key.
    pub fn poll_last_entry(&mut self) -> Option<Entry<K, V>> {
        self.poll(End::Last)
    }

    fn poll(&mut self, end: End) -> Option<Entry<K, V>> {
        let target = self.extremal_node(end);
        self.emit(TraceEvent::Polled {
            end,
            key: target.map(|id| &self.arena[id].key),
        });
        target.map(|id| self.excise(id))
    }

    /// Splices the node out of the tree and moves its contents out.
    fn excise(&mut self, id: NodeId) -> Entry<K, V> {
        self.unlink(id);
        self.arena.detach(id);
        let (key, value) = self.arena.release(id);
        self.emit(TraceEvent::Removed {
            key: &key,
            len: self.len(),
        });
        Entry::new(key, value)
    }

    /// Replaces the node by its child or in-order successor.
    fn unlink(&mut self, id: NodeId) {
        let node = &self.arena[id];
        match (node.left, node.right) {
            (None, right) => self.arena.transplant(id, right),
            (left, None) => self.arena.transplant(id, left),
            (Some(left), Some(right)) => {
                let successor = self.arena.leftmost(right);
                if self.arena[successor].parent != Some(id) {
                    let successor_right = self.arena[successor].right;
                    self.arena.transplant(successor, successor_right);
                    self.arena.set_right(successor, Some(right));
                }
                self.arena.transplant(id, Some(successor));
                self.arena.set_left(successor, Some(left));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn sample() -> TreeMap<i32, i32> {
        [50, 30, 70, 20, 40, 60, 80]
            .into_iter()
            .map(|key| (key, key))
            .collect()
    }

    fn keys(map: &TreeMap<i32, i32>) -> Vec<i32> {
        map.keys().copied().collect()
    }

    #[rstest]
    #[case(20)]
    #[case(30)]
    #[case(50)]
    #[case(70)]
    #[case(80)]
    fn test_remove_keeps_invariants(#[case] key: i32) {
        let mut map = sample();
        assert_eq!(map.remove(&key), Some(key));
        assert!(!map.contains_key(&key));
        assert_eq!(map.len(), 6);
        assert_eq!(map.check_invariants(), Ok(()));
    }

    #[rstest]
    fn test_remove_two_child_root_promotes_successor() {
        let mut map = sample();
        map.remove(&50);

        let root = map.arena.root().unwrap();
        assert_eq!(map.arena[root].key, 60);
        assert_eq!(map.arena[root].parent, None);
        let right = map.arena[root].right.unwrap();
        assert_eq!(map.arena[right].key, 70);
        assert_eq!(map.arena[right].left, None);
        assert_eq!(keys(&map), vec![20, 30, 40, 60, 70, 80]);
    }

    #[rstest]
    fn test_remove_successor_with_right_child() {
        // 50's successor 55 is not its right child and has a right child 57.
        let mut map: TreeMap<i32, i32> = [50, 30, 70, 60, 80, 55, 57]
            .into_iter()
            .map(|key| (key, key))
            .collect();
        map.remove(&50);

        let root = map.arena.root().unwrap();
        assert_eq!(map.arena[root].key, 55);
        let sixty = map.find(&60).unwrap();
        let fifty_seven = map.find(&57).unwrap();
        assert_eq!(map.arena[sixty].left, Some(fifty_seven));
        assert_eq!(map.arena[fifty_seven].parent, Some(sixty));
        assert_eq!(map.check_invariants(), Ok(()));
        assert_eq!(keys(&map), vec![30, 55, 57, 60, 70, 80]);
    }

    #[rstest]
    fn test_remove_absent_key_is_noop() {
        let mut map = sample();
        let before: Vec<_> = map.arena.slots().map(|node| (node.key, node.parent)).collect();

        assert_eq!(map.remove(&45), None);

        let after: Vec<_> = map.arena.slots().map(|node| (node.key, node.parent)).collect();
        assert_eq!(before, after);
    }

    #[rstest]
    fn test_remove_until_empty() {
        let mut map = sample();
        for key in [50, 20, 80, 30, 70, 40, 60] {
            map.remove(&key);
            assert_eq!(map.check_invariants(), Ok(()));
        }
        assert!(map.is_empty());
        assert_eq!(map.arena.root(), None);
    }

    #[rstest]
    fn test_poll_last_entry() {
        let mut map = sample();
        assert_eq!(map.poll_last_entry(), Some(Entry::new(80, 80)));
        assert_eq!(map.last_key(), Ok(&70));
        assert_eq!(map.check_invariants(), Ok(()));
    }
}
