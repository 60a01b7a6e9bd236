//! Predecessor, successor and extremal queries.
//!
//! Each of the four neighbour walks is a single root-to-leaf descent that
//! remembers the best candidate seen so far. No walk recurses or climbs
//! parent links.

use std::cmp::Ordering;

use super::TreeMap;
use super::node::NodeId;
use crate::entry::Entry;
use crate::error::MapError;
use crate::ordering::Comparator;
use crate::trace::{End, Query, TraceEvent};

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Greatest node whose key is strictly less than `key`.
    fn lower_node(&self, key: &K) -> Option<NodeId> {
        let mut current = self.arena.root();
        let mut candidate = None;
        while let Some(id) = current {
            let node = &self.arena[id];
            if self.comparator.compare(&node.key, key) == Ordering::Less {
                candidate = Some(id);
                current = node.right;
            } else {
                current = node.left;
            }
        }
        candidate
    }

    /// Greatest node whose key is less than or equal to `key`.
    fn floor_node(&self, key: &K) -> Option<NodeId> {
        let mut current = self.arena.root();
        let mut candidate = None;
        while let Some(id) = current {
            let node = &self.arena[id];
            match self.comparator.compare(&node.key, key) {
                Ordering::Equal => return Some(id),
                Ordering::Less => {
                    candidate = Some(id);
                    current = node.right;
                }
                Ordering::Greater => current = node.left,
            }
        }
        candidate
    }

    /// Least node whose key is strictly greater than `key`.
    fn higher_node(&self, key: &K) -> Option<NodeId> {
        let mut current = self.arena.root();
        let mut candidate = None;
        while let Some(id) = current {
            let node = &self.arena[id];
            if self.comparator.compare(&node.key, key) == Ordering::Greater {
                candidate = Some(id);
                current = node.left;
            } else {
                current = node.right;
            }
        }
        candidate
    }

    /// Least node whose key is greater than or equal to `key`.
    fn ceiling_node(&self, key: &K) -> Option<NodeId> {
        let mut current = self.arena.root();
        let mut candidate = None;
        while let Some(id) = current {
            let node = &self.arena[id];
            match self.comparator.compare(&node.key, key) {
                Ordering::Equal => return Some(id),
                Ordering::Greater => {
                    candidate = Some(id);
                    current = node.left;
                }
                Ordering::Less => current = node.right,
            }
        }
        candidate
    }

    /// Runs `query` for `key` and reports the outcome to the tracer.
    pub(super) fn lookup(&self, query: Query, key: &K) -> Option<NodeId> {
        let found = match query {
            Query::Get | Query::ContainsKey => self.find(key),
            Query::Lower => self.lower_node(key),
            Query::Floor => self.floor_node(key),
            Query::Higher => self.higher_node(key),
            Query::Ceiling => self.ceiling_node(key),
        };
        self.emit(TraceEvent::Lookup {
            query,
            key,
            found: found.map(|id| &self.arena[id].key),
        });
        found
    }

    fn lookup_key(&self, query: Query, key: &K) -> Option<&K> {
        self.lookup(query, key).map(|id| &self.arena[id].key)
    }

    fn lookup_entry(&self, query: Query, key: &K) -> Option<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.lookup(query, key).map(|id| self.snapshot(id))
    }

    /// Returns the greatest key strictly less than `key`.
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
    /// let map: TreeMap<i32, ()> = [10, 20, 30].into_iter().map(|key| (key, ())).collect();
    /// assert_eq!(map.lower_key(&20), Some(&10));
    /// assert_eq!(map.lower_key(&25), Some(&20));
    /// assert_eq!(map.lower_key(&10), None);
    /// ```
    #[must_use]
    pub fn lower_key(&self, key: &K) -> Option<&K> {
        self.lookup_key(Query::Lower, key)
    }

    /// Returns the greatest key less than or equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let map: TreeMap<i32, ()> = [10, 20, 30].into_iter().map(|key| (key, ())).collect();
    /// assert_eq!(map.floor_key(&20), Some(&20));
    /// assert_eq!(map.floor_key(&25), Some(&20));
    /// assert_eq!(map.floor_key(&5), None);
    /// ```
    #[must_use]
    pub fn floor_key(&self, key: &K) -> Option<&K> {
        self.lookup_key(Query::Floor, key)
    }

    /// Returns the least key strictly greater than `key`.
    #[must_use]
    pub fn higher_key(&self, key: &K) -> Option<&K> {
        self.lookup_key(Query::Higher, key)
    }

    /// Returns the least key greater than or equal to `key`.
    #[must_use]
    pub fn ceiling_key(&self, key: &K) -> Option<&K> {
        self.lookup_key(Query::Ceiling, key)
    }

    /// Returns a snapshot of the entry with the greatest key strictly less
    /// than `key`.
    #[must_use]
    pub fn lower_entry(&self, key: &K) -> Option<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.lookup_entry(Query::Lower, key)
    }

    /// Returns a snapshot of the entry with the greatest key less than or
    /// equal to `key`.
    #[must_use]
    pub fn floor_entry(&self, key: &K) -> Option<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.lookup_entry(Query::Floor, key)
    }

    /// Returns a snapshot of the entry with the least key strictly greater
    /// than `key`.
    #[must_use]
    pub fn higher_entry(&self, key: &K) -> Option<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.lookup_entry(Query::Higher, key)
    }

    /// Returns a snapshot of the entry with the least key greater than or
    /// equal to `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(10, "ten");
    /// map.put(20, "twenty");
    ///
    /// let entry = map.ceiling_entry(&11).unwrap();
    /// assert_eq!(entry.into_parts(), (20, "twenty"));
    /// ```
    #[must_use]
    pub fn ceiling_entry(&self, key: &K) -> Option<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.lookup_entry(Query::Ceiling, key)
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Locates the leftmost or rightmost node and reports it to the tracer.
    fn extremum(&self, end: End) -> Option<NodeId> {
        let found = self.extremal_node(end);
        self.emit(TraceEvent::Extremum {
            end,
            key: found.map(|id| &self.arena[id].key),
        });
        found
    }

    pub(super) fn extremal_node(&self, end: End) -> Option<NodeId> {
        self.arena.root().map(|root| match end {
            End::First => self.arena.leftmost(root),
            End::Last => self.arena.rightmost(root),
        })
    }

    /// Returns the smallest key.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::EmptyMap`] if the map is empty.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::{MapError, TreeMap};
    ///
    /// let mut map = TreeMap::new();
    /// assert_eq!(map.first_key(), Err(MapError::EmptyMap));
    ///
    /// map.put(2, "two");
    /// map.put(1, "one");
    /// assert_eq!(map.first_key(), Ok(&1));
    /// ```
    pub fn first_key(&self) -> Result<&K, MapError> {
        self.extremum(End::First)
            .map(|id| &self.arena[id].key)
            .ok_or(MapError::EmptyMap)
    }

    /// Returns the largest key.
    ///
    /// # Errors
    ///
    /// Returns [`MapError::EmptyMap`] if the map is empty.
    pub fn last_key(&self) -> Result<&K, MapError> {
        self.extremum(End::Last)
            .map(|id| &self.arena[id].key)
            .ok_or(MapError::EmptyMap)
    }

    /// Returns a snapshot of the entry with the smallest key, or `None` if
    /// the map is empty.
    ///
    /// Unlike [`first_key`](Self::first_key), an empty map is not an error
    /// here.
    #[must_use]
    pub fn first_entry(&self) -> Option<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.extremum(End::First).map(|id| self.snapshot(id))
    }

    /// Returns a snapshot of the entry with the largest key, or `None` if
    /// the map is empty.
    #[must_use]
    pub fn last_entry(&self) -> Option<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        self.extremum(End::Last).map(|id| self.snapshot(id))
    }
}
