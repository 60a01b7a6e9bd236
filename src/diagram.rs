//! Text rendering of a tree's shape.
//!
//! [`Diagram`] draws one node per line, the root first and every node's
//! left child before its right child. A node's last child is drawn with
//! `└─`, any other child with `├─`; descendants are indented by `| ` below
//! a non-last child and by two spaces below a last one.
//!
//! # Examples
//!
//! ```rust
//! use navmap::TreeMap;
//!
//! let mut map = TreeMap::new();
//! for key in [2, 1, 3] {
//!     map.put(key, key * 10);
//! }
//!
//! assert_eq!(
//!     map.diagram().to_string(),
//!     "└─2(20)\n  ├─1(10)\n  └─3(30)\n",
//! );
//! ```

use std::fmt;

use smallvec::SmallVec;

use crate::treemap::{NodeRef, TreeMap};

/// Renders the tree rooted at a [`NodeRef`] through [`fmt::Display`].
///
/// Rendering walks the tree with an explicit stack and never touches the
/// map, so it is safe on degenerate trees of any depth.
pub struct Diagram<'a, K, V> {
    root: Option<NodeRef<'a, K, V>>,
}

impl<K, V> Clone for Diagram<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for Diagram<'_, K, V> {}

impl<'a, K, V> Diagram<'a, K, V> {
    /// Creates a diagram of the subtree below `root`, or of an empty tree.
    #[must_use]
    pub const fn new(root: Option<NodeRef<'a, K, V>>) -> Self {
        Self { root }
    }
}

/// One pending line: the node, the indentation above it, and whether it is
/// the last child of its parent.
struct Line<'a, K, V> {
    node: NodeRef<'a, K, V>,
    prefix: String,
    is_last: bool,
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Diagram<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Some(root) = self.root else {
            return writeln!(formatter, "empty");
        };

        let mut pending: SmallVec<[Line<'_, K, V>; 32]> = SmallVec::new();
        pending.push(Line {
            node: root,
            prefix: String::new(),
            is_last: true,
        });

        while let Some(Line {
            node,
            prefix,
            is_last,
        }) = pending.pop()
        {
            let connector = if is_last { "└─" } else { "├─" };
            writeln!(
                formatter,
                "{prefix}{connector}{}({})",
                node.key(),
                node.value()
            )?;

            let child_prefix = format!("{prefix}{}", if is_last { "  " } else { "| " });
            let right = node.right();
            if let Some(right) = right {
                pending.push(Line {
                    node: right,
                    prefix: child_prefix.clone(),
                    is_last: true,
                });
            }
            if let Some(left) = node.left() {
                pending.push(Line {
                    node: left,
                    prefix: child_prefix,
                    is_last: right.is_none(),
                });
            }
        }
        Ok(())
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for Diagram<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Diagram")
            .field("root", &self.root)
            .finish()
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Returns a [`Diagram`] of the current tree shape.
    #[must_use]
    pub fn diagram(&self) -> Diagram<'_, K, V> {
        Diagram::new(self.root())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn test_empty_map() {
        let map: TreeMap<i32, i32> = TreeMap::new();
        assert_eq!(map.diagram().to_string(), "empty\n");
    }

    #[rstest]
    fn test_single_child_is_drawn_as_last() {
        let mut map = TreeMap::new();
        map.put(3, 'c');
        map.put(2, 'b');
        map.put(1, 'a');
        assert_eq!(map.diagram().to_string(), "└─3(c)\n  └─2(b)\n    └─1(a)\n");
    }

    #[rstest]
    fn test_left_child_before_right_child() {
        let mut map = TreeMap::new();
        for key in [2, 1, 4, 3] {
            map.put(key, key);
        }
        let expected = "└─2(2)\n  ├─1(1)\n  └─4(4)\n    └─3(3)\n";
        assert_eq!(map.diagram().to_string(), expected);
    }
}
