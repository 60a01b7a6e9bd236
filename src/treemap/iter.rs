//! In-order iteration and key/entry collections.

use std::iter::FusedIterator;

use super::TreeMap;
use super::node::{NodeArena, NodeId};
use crate::entry::Entry;
use crate::trace::{Collection, TraceEvent};

// =============================================================================
// Borrowing Iterators
// =============================================================================

/// An iterator over the entries of a [`TreeMap`] in ascending key order.
///
/// Each step follows a right child or climbs parent links, so the iterator
/// holds no stack regardless of the tree's height.
pub struct Iter<'a, K, V> {
    arena: &'a NodeArena<K, V>,
    front: Option<NodeId>,
    back: Option<NodeId>,
    remaining: usize,
}

impl<K, V> Clone for Iter<'_, K, V> {
    fn clone(&self) -> Self {
        Self {
            arena: self.arena,
            front: self.front,
            back: self.back,
            remaining: self.remaining,
        }
    }
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.front?;
        self.remaining -= 1;
        self.front = self.arena.successor(id);
        let node = &self.arena[id];
        Some((&node.key, &node.value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, V> DoubleEndedIterator for Iter<'_, K, V> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.back?;
        self.remaining -= 1;
        self.back = self.arena.predecessor(id);
        let node = &self.arena[id];
        Some((&node.key, &node.value))
    }
}

impl<K, V> ExactSizeIterator for Iter<'_, K, V> {}

impl<K, V> FusedIterator for Iter<'_, K, V> {}

/// An iterator over the keys of a [`TreeMap`] in ascending order.
#[derive(Clone)]
pub struct Keys<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Keys<'a, K, V> {
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(key, _)| key)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Keys<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(key, _)| key)
    }
}

impl<K, V> ExactSizeIterator for Keys<'_, K, V> {}

impl<K, V> FusedIterator for Keys<'_, K, V> {}

/// An iterator over the values of a [`TreeMap`], ordered by their keys.
#[derive(Clone)]
pub struct Values<'a, K, V> {
    inner: Iter<'a, K, V>,
}

impl<'a, K, V> Iterator for Values<'a, K, V> {
    type Item = &'a V;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(_, value)| value)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for Values<'_, K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back().map(|(_, value)| value)
    }
}

impl<K, V> ExactSizeIterator for Values<'_, K, V> {}

impl<K, V> FusedIterator for Values<'_, K, V> {}

// =============================================================================
// Owning Iterator
// =============================================================================

/// An owning iterator over the entries of a [`TreeMap`] in ascending key
/// order.
pub struct IntoIter<K, V> {
    inner: std::vec::IntoIter<(K, V)>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, V> DoubleEndedIterator for IntoIter<K, V> {
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner.next_back()
    }
}

impl<K, V> ExactSizeIterator for IntoIter<K, V> {}

impl<K, V> FusedIterator for IntoIter<K, V> {}

// =============================================================================
// TreeMap Accessors
// =============================================================================

impl<K, V, C> TreeMap<K, V, C> {
    /// Returns an iterator over the entries in ascending key order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let map: TreeMap<i32, char> = [(2, 'b'), (1, 'a'), (3, 'c')].into_iter().collect();
    /// let entries: Vec<(&i32, &char)> = map.iter().collect();
    /// assert_eq!(entries, vec![(&1, &'a'), (&2, &'b'), (&3, &'c')]);
    ///
    /// let reversed: Vec<&i32> = map.keys().rev().collect();
    /// assert_eq!(reversed, vec![&3, &2, &1]);
    /// ```
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, V> {
        let root = self.arena.root();
        Iter {
            arena: &self.arena,
            front: root.map(|root| self.arena.leftmost(root)),
            back: root.map(|root| self.arena.rightmost(root)),
            remaining: self.len(),
        }
    }

    /// Returns an iterator over the keys in ascending order.
    #[must_use]
    pub fn keys(&self) -> Keys<'_, K, V> {
        Keys { inner: self.iter() }
    }

    /// Returns an iterator over the values, ordered by their keys.
    #[must_use]
    pub fn values(&self) -> Values<'_, K, V> {
        Values { inner: self.iter() }
    }

    /// Collects every key in ascending order.
    ///
    /// The result is a snapshot; later changes to the map do not affect it.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let map: TreeMap<&str, i32> = [("b", 2), ("a", 1)].into_iter().collect();
    /// assert_eq!(map.key_set(), vec!["a", "b"]);
    /// ```
    #[must_use]
    pub fn key_set(&self) -> Vec<K>
    where
        K: Clone,
    {
        let keys: Vec<K> = self.keys().cloned().collect();
        self.emit(TraceEvent::Collected {
            collection: Collection::Keys,
            len: keys.len(),
        });
        keys
    }

    /// Collects a snapshot of every entry in ascending key order.
    #[must_use]
    pub fn entry_set(&self) -> Vec<Entry<K, V>>
    where
        K: Clone,
        V: Clone,
    {
        let entries: Vec<Entry<K, V>> = self
            .iter()
            .map(|(key, value)| Entry::new(key.clone(), value.clone()))
            .collect();
        self.emit(TraceEvent::Collected {
            collection: Collection::Entries,
            len: entries.len(),
        });
        entries
    }
}

impl<'a, K, V, C> IntoIterator for &'a TreeMap<K, V, C> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V, C> IntoIterator for TreeMap<K, V, C> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.arena.into_in_order().into_iter(),
        }
    }
}
