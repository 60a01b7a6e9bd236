//! Read-only access to the tree structure.

use std::fmt;

use super::TreeMap;
use super::node::{NodeArena, NodeId};

/// A borrowed handle on one node of a [`TreeMap`].
///
/// `NodeRef` exposes the shape of the tree without any way to change it.
/// It is what [`Diagram`](crate::Diagram) renders from, and it lets callers
/// inspect how insertion order shaped the tree.
///
/// # Examples
///
/// ```rust
/// use navmap::TreeMap;
///
/// let map: TreeMap<i32, ()> = [2, 1, 3].into_iter().map(|key| (key, ())).collect();
/// let root = map.root().unwrap();
///
/// assert_eq!(root.key(), &2);
/// assert_eq!(root.left().map(|node| *node.key()), Some(1));
/// assert_eq!(root.right().map(|node| *node.key()), Some(3));
/// assert!(root.parent().is_none());
/// ```
pub struct NodeRef<'a, K, V> {
    arena: &'a NodeArena<K, V>,
    id: NodeId,
}

impl<K, V> Clone for NodeRef<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for NodeRef<'_, K, V> {}

impl<'a, K, V> NodeRef<'a, K, V> {
    const fn at(arena: &'a NodeArena<K, V>, id: NodeId) -> Self {
        Self { arena, id }
    }

    /// Returns the key stored in this node.
    #[inline]
    #[must_use]
    pub fn key(&self) -> &'a K {
        &self.arena[self.id].key
    }

    /// Returns the value stored in this node.
    #[inline]
    #[must_use]
    pub fn value(&self) -> &'a V {
        &self.arena[self.id].value
    }

    /// Returns the left child.
    #[must_use]
    pub fn left(&self) -> Option<Self> {
        self.arena[self.id].left.map(|id| Self::at(self.arena, id))
    }

    /// Returns the right child.
    #[must_use]
    pub fn right(&self) -> Option<Self> {
        self.arena[self.id].right.map(|id| Self::at(self.arena, id))
    }

    /// Returns the parent, or `None` for the root.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        self.arena[self.id].parent.map(|id| Self::at(self.arena, id))
    }

    /// Returns `true` if the node has no children.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        let node = &self.arena[self.id];
        node.left.is_none() && node.right.is_none()
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for NodeRef<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("NodeRef")
            .field("key", self.key())
            .field("value", self.value())
            .finish_non_exhaustive()
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Returns the root node, or `None` if the map is empty.
    #[must_use]
    pub fn root(&self) -> Option<NodeRef<'_, K, V>> {
        self.arena.root().map(|id| NodeRef::at(&self.arena, id))
    }
}
