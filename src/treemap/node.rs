//! Node storage.
//!
//! Nodes live in a dense `Vec` owned by the map. Links between nodes are
//! [`NodeId`] indices: `left`/`right` form the tree, `parent` is a plain
//! back-index used for relinking and in-order stepping.
//!
//! The arena never has holes. Releasing a node moves the last node into the
//! freed slot and repoints the three links that may refer to it (its
//! parent's child link, its children's parent links, or the root).

use std::ops::{Index, IndexMut};

/// Index of a node inside a [`NodeArena`].
///
/// Handles are only meaningful until the next release, which may move one
/// node to a different slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub(crate) struct NodeId(usize);

impl NodeId {
    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0
    }
}

/// Which child link of a parent refers to a node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Side {
    Left,
    Right,
}

#[derive(Clone, Debug)]
pub(crate) struct Node<K, V> {
    pub(crate) key: K,
    pub(crate) value: V,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    pub(crate) parent: Option<NodeId>,
}

impl<K, V> Node<K, V> {
    const fn new(key: K, value: V, parent: Option<NodeId>) -> Self {
        Self {
            key,
            value,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    #[inline]
    fn child_mut(&mut self, side: Side) -> &mut Option<NodeId> {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    #[inline]
    const fn is_detached(&self) -> bool {
        self.left.is_none() && self.right.is_none() && self.parent.is_none()
    }
}

#[derive(Clone, Debug)]
pub(crate) struct NodeArena<K, V> {
    nodes: Vec<Node<K, V>>,
    root: Option<NodeId>,
}

impl<K, V> NodeArena<K, V> {
    pub(crate) const fn new() -> Self {
        Self {
            nodes: Vec::new(),
            root: None,
        }
    }

    #[inline]
    pub(crate) const fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    pub(crate) const fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub(crate) fn clear(&mut self) {
        self.root = None;
        self.nodes.clear();
    }

    /// Adds the root of an empty tree.
    pub(crate) fn attach_root(&mut self, key: K, value: V) -> NodeId {
        debug_assert!(self.root.is_none());
        let id = self.push(Node::new(key, value, None));
        self.root = Some(id);
        id
    }

    /// Adds a leaf under `parent` on `side`, which must be vacant.
    pub(crate) fn attach_leaf(&mut self, parent: NodeId, side: Side, key: K, value: V) -> NodeId {
        debug_assert!(self[parent].child(side).is_none());
        let id = self.push(Node::new(key, value, Some(parent)));
        *self[parent].child_mut(side) = Some(id);
        id
    }

    fn push(&mut self, node: Node<K, V>) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn set_left(&mut self, parent: NodeId, child: Option<NodeId>) {
        self[parent].left = child;
        if let Some(child) = child {
            self[child].parent = Some(parent);
        }
    }

    pub(crate) fn set_right(&mut self, parent: NodeId, child: Option<NodeId>) {
        self[parent].right = child;
        if let Some(child) = child {
            self[child].parent = Some(parent);
        }
    }

    /// Puts `replacement` where `target` hangs in the tree.
    ///
    /// Only the link above `target` and the parent link of `replacement`
    /// change; `target` keeps its own links until the caller clears them.
    pub(crate) fn transplant(&mut self, target: NodeId, replacement: Option<NodeId>) {
        let parent = self[target].parent;
        match parent {
            None => self.root = replacement,
            Some(parent) if self[parent].left == Some(target) => self[parent].left = replacement,
            Some(parent) => self[parent].right = replacement,
        }
        if let Some(replacement) = replacement {
            self[replacement].parent = parent;
        }
    }

    /// Clears every link of a node that is no longer part of the tree.
    pub(crate) fn detach(&mut self, id: NodeId) {
        let node = &mut self[id];
        node.left = None;
        node.right = None;
        node.parent = None;
    }

    /// Frees the slot of a detached node and returns its contents.
    pub(crate) fn release(&mut self, id: NodeId) -> (K, V) {
        debug_assert!(self[id].is_detached());
        debug_assert!(self.root != Some(id));

        let last = NodeId(self.nodes.len() - 1);
        let removed = self.nodes.swap_remove(id.index());
        if id != last {
            self.relocated(last, id);
        }
        (removed.key, removed.value)
    }

    /// Repoints every link that referred to the node formerly at `from`,
    /// which now sits at `to`.
    fn relocated(&mut self, from: NodeId, to: NodeId) {
        let Node {
            left,
            right,
            parent,
            ..
        } = self[to];

        match parent {
            None => self.root = Some(to),
            Some(parent) if self[parent].left == Some(from) => self[parent].left = Some(to),
            Some(parent) => self[parent].right = Some(to),
        }
        if let Some(left) = left {
            self[left].parent = Some(to);
        }
        if let Some(right) = right {
            self[right].parent = Some(to);
        }
    }

    pub(crate) fn leftmost(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self[id].left {
            id = left;
        }
        id
    }

    pub(crate) fn rightmost(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self[id].right {
            id = right;
        }
        id
    }

    /// In-order successor, found through the right subtree or the parent chain.
    pub(crate) fn successor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(right) = self[id].right {
            return Some(self.leftmost(right));
        }
        let mut child = id;
        let mut parent = self[id].parent;
        while let Some(ancestor) = parent {
            if self[ancestor].left == Some(child) {
                return Some(ancestor);
            }
            child = ancestor;
            parent = self[ancestor].parent;
        }
        None
    }

    /// In-order predecessor, the mirror image of [`Self::successor`].
    pub(crate) fn predecessor(&self, id: NodeId) -> Option<NodeId> {
        if let Some(left) = self[id].left {
            return Some(self.rightmost(left));
        }
        let mut child = id;
        let mut parent = self[id].parent;
        while let Some(ancestor) = parent {
            if self[ancestor].right == Some(child) {
                return Some(ancestor);
            }
            child = ancestor;
            parent = self[ancestor].parent;
        }
        None
    }

    /// Consumes the arena, returning its pairs in key order.
    pub(crate) fn into_in_order(self) -> Vec<(K, V)> {
        let mut order = Vec::with_capacity(self.len());
        let mut current = self.root.map(|root| self.leftmost(root));
        while let Some(id) = current {
            order.push(id);
            current = self.successor(id);
        }

        let mut pairs: Vec<Option<(K, V)>> = self
            .nodes
            .into_iter()
            .map(|node| Some((node.key, node.value)))
            .collect();
        order
            .into_iter()
            .filter_map(|id| pairs[id.index()].take())
            .collect()
    }

    /// All nodes in slot order. Slot order carries no meaning.
    #[inline]
    pub(crate) fn slots(&self) -> impl Iterator<Item = &Node<K, V>> {
        self.nodes.iter()
    }
}

impl<K, V> Index<NodeId> for NodeArena<K, V> {
    type Output = Node<K, V>;

    #[inline]
    fn index(&self, id: NodeId) -> &Self::Output {
        &self.nodes[id.index()]
    }
}

impl<K, V> IndexMut<NodeId> for NodeArena<K, V> {
    #[inline]
    fn index_mut(&mut self, id: NodeId) -> &mut Self::Output {
        &mut self.nodes[id.index()]
    }
}
