//! Unbalanced binary search tree map.
//!
//! This module provides [`TreeMap`], a mutable ordered map backed by a plain
//! binary search tree with parent links.
//!
//! # Overview
//!
//! - O(height) `put`, `get`, `remove`
//! - O(height) `lower`/`floor`/`higher`/`ceiling` navigation
//! - O(height) first/last lookup and polling
//! - `head_map`/`tail_map`/`sub_map`, each producing an independent map
//! - O(1) `len` and `is_empty`
//!
//! The tree is never rebalanced. Its shape depends only on the order of
//! insertions and removals, so the height ranges from `log2(n)` for random
//! input up to `n` for sorted input. Every traversal is iterative, so a
//! degenerate tree costs time but never call stack.
//!
//! # Examples
//!
//! ```rust
//! use navmap::TreeMap;
//!
//! let mut map = TreeMap::new();
//! for key in [50, 30, 70, 20, 40, 60, 80] {
//!     map.put(key, key * 10);
//! }
//!
//! assert_eq!(map.first_key(), Ok(&20));
//! assert_eq!(map.floor_key(&45), Some(&40));
//! assert_eq!(map.higher_key(&80), None);
//!
//! let polled = map.poll_first_entry().unwrap();
//! assert_eq!(polled.key(), &20);
//!
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&30, &40, &50, &60, &70, &80]);
//! ```
//!
//! # Internal Structure
//!
//! Nodes are stored in an arena owned by the map and linked by index.
//! The tree maintains the following invariants:
//! 1. Every key in a node's left subtree compares less than the node's key,
//!    every key in its right subtree compares greater
//! 2. `len()` equals the number of nodes reachable from the root
//! 3. A node's parent link names the node whose left or right link names it;
//!    the root has no parent
//! 4. Every arena slot holds a reachable node

mod cursor;
mod invariants;
mod iter;
mod navigate;
mod node;
mod range;
mod remove;

pub use cursor::NodeRef;
pub use iter::{IntoIter, Iter, Keys, Values};

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops::Index;
use std::sync::Arc;

use crate::entry::Entry;
use crate::ordering::{Comparator, NaturalOrder, Reversed};
use crate::trace::{Position, Query, TraceEvent, Tracer};

use node::{NodeArena, NodeId, Side};

static_assertions::assert_impl_all!(TreeMap<i32, String>: Send, Sync, Clone);
static_assertions::assert_impl_all!(TreeMap<String, Vec<u8>, Reversed<NaturalOrder>>: Send, Sync);

// =============================================================================
// TreeMap Definition
// =============================================================================

/// A mutable ordered map based on an unbalanced binary search tree.
///
/// Keys are ordered by a [`Comparator`], [`NaturalOrder`] unless another one
/// is supplied through [`TreeMap::with_comparator`]. Range maps built from a
/// map share its comparator instance.
///
/// # Time Complexity
///
/// | Operation                       | Complexity  |
/// |---------------------------------|-------------|
/// | `new`                           | O(1)        |
/// | `put` / `get` / `remove`        | O(h)        |
/// | `lower_key` ... `ceiling_key`   | O(h)        |
/// | `first_key` / `last_key`        | O(h)        |
/// | `poll_first_entry`              | O(h)        |
/// | `contains_value`                | O(n)        |
/// | `head_map` / `tail_map` / `sub_map` | O(n · h) |
/// | `len` / `is_empty`              | O(1)        |
///
/// `h` is the height of the tree, between `log2(n)` and `n`.
///
/// # Examples
///
/// ```rust
/// use navmap::TreeMap;
///
/// let mut map = TreeMap::new();
/// assert_eq!(map.put("b", 2), None);
/// assert_eq!(map.put("a", 1), None);
/// assert_eq!(map.put("b", 20), Some(2));
///
/// assert_eq!(map.len(), 2);
/// assert_eq!(map.get(&"b"), Some(&20));
/// assert_eq!(map.remove(&"a"), Some(1));
/// assert!(!map.contains_key(&"a"));
/// ```
pub struct TreeMap<K, V, C = NaturalOrder> {
    /// Node storage and root link
    arena: NodeArena<K, V>,
    /// Ordering shared with every range map built from this one
    comparator: Arc<C>,
    /// Observability hook, `None` unless installed
    tracer: Option<Arc<dyn Tracer<K, V>>>,
}

impl<K, V> TreeMap<K, V, NaturalOrder> {
    /// Creates an empty map ordered by `K`'s [`Ord`] implementation.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let map: TreeMap<i32, String> = TreeMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::with_comparator(NaturalOrder)
    }
}

impl<K, V, C> TreeMap<K, V, C> {
    /// Creates an empty map ordered by `comparator`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let by_length = |left: &&str, right: &&str| {
    ///     left.len().cmp(&right.len()).then_with(|| left.cmp(right))
    /// };
    /// let mut map = TreeMap::with_comparator(by_length);
    /// map.put("ccc", 3);
    /// map.put("a", 1);
    /// map.put("bb", 2);
    ///
    /// let keys: Vec<&&str> = map.keys().collect();
    /// assert_eq!(keys, vec![&"a", &"bb", &"ccc"]);
    /// ```
    #[inline]
    #[must_use]
    pub fn with_comparator(comparator: C) -> Self {
        Self::from_parts(Arc::new(comparator), None)
    }

    /// Creates an empty map sharing `comparator` and `tracer`.
    fn from_parts(comparator: Arc<C>, tracer: Option<Arc<dyn Tracer<K, V>>>) -> Self {
        let map = Self {
            arena: NodeArena::new(),
            comparator,
            tracer,
        };
        map.emit(TraceEvent::Constructed);
        map
    }

    /// Creates an empty map with the same comparator and tracer as `self`.
    pub(crate) fn empty_like(&self) -> Self {
        Self::from_parts(Arc::clone(&self.comparator), self.tracer.clone())
    }

    /// Installs `tracer`, replacing any previous one.
    ///
    /// When called on an empty map the tracer immediately receives
    /// [`TraceEvent::Constructed`], so builder-style construction is
    /// observed like any other.
    #[must_use]
    pub fn with_tracer<T>(mut self, tracer: T) -> Self
    where
        T: Tracer<K, V> + 'static,
    {
        self.set_tracer(tracer);
        if self.is_empty() {
            self.emit(TraceEvent::Constructed);
        }
        self
    }

    /// Installs `tracer`, replacing any previous one.
    pub fn set_tracer<T>(&mut self, tracer: T)
    where
        T: Tracer<K, V> + 'static,
    {
        self.tracer = Some(Arc::new(tracer));
    }

    /// Removes the installed tracer, if any.
    pub fn clear_tracer(&mut self) {
        self.tracer = None;
    }

    /// Returns the comparator ordering this map.
    #[inline]
    pub fn comparator(&self) -> &C {
        &self.comparator
    }

    /// Returns the number of entries in the map.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.arena.len()
    }

    /// Returns `true` if the map contains no entries.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.arena.len() == 0
    }

    /// Removes every entry.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let mut map: TreeMap<i32, i32> = (0..10).map(|key| (key, key)).collect();
    /// map.clear();
    /// assert!(map.is_empty());
    /// assert_eq!(map.get(&3), None);
    /// ```
    pub fn clear(&mut self) {
        let discarded = self.len();
        self.arena.clear();
        self.emit(TraceEvent::Cleared { discarded });
    }

    /// Returns `true` if some entry holds a value equal to `value`.
    ///
    /// Values are unordered, so every node is inspected.
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn contains_value(&self, value: &V) -> bool
    where
        V: PartialEq,
    {
        let found = self.arena.slots().any(|node| node.value == *value);
        self.emit(TraceEvent::ValueScan { value, found });
        found
    }

    /// Reports `event` to the tracer, if one is installed.
    #[inline]
    fn emit(&self, event: TraceEvent<'_, K, V>) {
        if let Some(tracer) = &self.tracer {
            tracer.record(&event);
        }
    }

    fn snapshot(&self, id: NodeId) -> Entry<K, V>
    where
        K: Clone,
        V: Clone,
    {
        let node = &self.arena[id];
        Entry::new(node.key.clone(), node.value.clone())
    }
}

impl<K, V, C: Comparator<K>> TreeMap<K, V, C> {
    /// Associates `value` with `key`.
    ///
    /// If the key is already present its value is replaced in place, the
    /// tree keeps its shape, and the previous value is returned. Otherwise
    /// a new leaf is attached and `None` is returned.
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
    /// assert_eq!(map.put(1, "one"), None);
    /// assert_eq!(map.put(1, "ONE"), Some("one"));
    /// assert_eq!(map.len(), 1);
    /// ```
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let Some(mut current) = self.arena.root() else {
            let id = self.arena.attach_root(key, value);
            self.trace_inserted(id);
            return None;
        };

        loop {
            let side = match self.comparator.compare(&key, &self.arena[current].key) {
                Ordering::Less => Side::Left,
                Ordering::Greater => Side::Right,
                Ordering::Equal => {
                    let previous = mem::replace(&mut self.arena[current].value, value);
                    let node = &self.arena[current];
                    self.emit(TraceEvent::Replaced {
                        key: &node.key,
                        value: &node.value,
                    });
                    return Some(previous);
                }
            };

            match self.arena[current].child(side) {
                Some(child) => current = child,
                None => {
                    let id = self.arena.attach_leaf(current, side, key, value);
                    self.trace_inserted(id);
                    return None;
                }
            }
        }
    }

    fn trace_inserted(&self, id: NodeId) {
        if self.tracer.is_none() {
            return;
        }
        let node = &self.arena[id];
        let position = match node.parent {
            None => Position::Root,
            Some(parent) if self.arena[parent].left == Some(id) => {
                Position::LeftOf(&self.arena[parent].key)
            }
            Some(parent) => Position::RightOf(&self.arena[parent].key),
        };
        self.emit(TraceEvent::Inserted {
            key: &node.key,
            value: &node.value,
            position,
            len: self.len(),
        });
    }

    /// Returns the node holding `key`.
    pub(crate) fn find(&self, key: &K) -> Option<NodeId> {
        let mut current = self.arena.root();
        while let Some(id) = current {
            let node = &self.arena[id];
            current = match self.comparator.compare(key, &node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return Some(id),
            };
        }
        None
    }

    /// Returns a reference to the value associated with `key`.
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
    /// map.put("hello".to_string(), 42);
    ///
    /// assert_eq!(map.get(&"hello".to_string()), Some(&42));
    /// assert_eq!(map.get(&"world".to_string()), None);
    /// ```
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&V> {
        self.lookup(Query::Get, key).map(|id| &self.arena[id].value)
    }

    /// Returns the stored key and its value.
    #[must_use]
    pub fn get_key_value(&self, key: &K) -> Option<(&K, &V)> {
        self.lookup(Query::Get, key).map(|id| {
            let node = &self.arena[id];
            (&node.key, &node.value)
        })
    }

    /// Returns a mutable reference to the value associated with `key`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use navmap::TreeMap;
    ///
    /// let mut map = TreeMap::new();
    /// map.put(1, vec![1]);
    /// if let Some(values) = map.get_mut(&1) {
    ///     values.push(2);
    /// }
    /// assert_eq!(map.get(&1), Some(&vec![1, 2]));
    /// ```
    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        let id = self.lookup(Query::Get, key)?;
        Some(&mut self.arena[id].value)
    }

    /// Returns `true` if the map contains `key`.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn contains_key(&self, key: &K) -> bool {
        self.lookup(Query::ContainsKey, key).is_some()
    }
}

// =============================================================================
// Standard Trait Implementations
// =============================================================================

impl<K, V> Default for TreeMap<K, V, NaturalOrder> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Clone, V: Clone, C> Clone for TreeMap<K, V, C> {
    /// Copies every node. The comparator and tracer are shared.
    fn clone(&self) -> Self {
        Self {
            arena: self.arena.clone(),
            comparator: Arc::clone(&self.comparator),
            tracer: self.tracer.clone(),
        }
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for TreeMap<K, V, NaturalOrder> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K, V, C: Comparator<K>> Extend<(K, V)> for TreeMap<K, V, C> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

impl<K, V, C: Comparator<K>> Index<&K> for TreeMap<K, V, C> {
    type Output = V;

    /// Returns the value for `key`.
    ///
    /// # Panics
    ///
    /// Panics if the key is not present.
    fn index(&self, key: &K) -> &V {
        match self.get(key) {
            Some(value) => value,
            None => panic!("key not found in TreeMap"),
        }
    }
}

impl<K: PartialEq, V: PartialEq, C> PartialEq for TreeMap<K, V, C> {
    /// Two maps are equal when they hold equal entries in the same order.
    /// Tree shape is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq, C> Eq for TreeMap<K, V, C> {}

impl<K: Hash, V: Hash, C> Hash for TreeMap<K, V, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.len().hash(state);
        for (key, value) in self {
            key.hash(state);
            value.hash(state);
        }
    }
}

impl<K: fmt::Debug, V: fmt::Debug, C> fmt::Debug for TreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_map().entries(self.iter()).finish()
    }
}

impl<K: fmt::Display, V: fmt::Display, C> fmt::Display for TreeMap<K, V, C> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{{")?;
        let mut first = true;
        for (key, value) in self {
            if first {
                first = false;
            } else {
                write!(formatter, ", ")?;
            }
            write!(formatter, "{key}: {value}")?;
        }
        write!(formatter, "}}")
    }
}

// =============================================================================
// Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl<K, V, C> serde::Serialize for TreeMap<K, V, C>
where
    K: serde::Serialize,
    V: serde::Serialize,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(feature = "serde")]
struct TreeMapVisitor<K, V> {
    key_marker: std::marker::PhantomData<K>,
    value_marker: std::marker::PhantomData<V>,
}

#[cfg(feature = "serde")]
impl<K, V> TreeMapVisitor<K, V> {
    const fn new() -> Self {
        Self {
            key_marker: std::marker::PhantomData,
            value_marker: std::marker::PhantomData,
        }
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::de::Visitor<'de> for TreeMapVisitor<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    type Value = TreeMap<K, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::MapAccess<'de>,
    {
        let mut map = TreeMap::new();
        while let Some((key, value)) = access.next_entry()? {
            map.put(key, value);
        }
        Ok(map)
    }
}

#[cfg(feature = "serde")]
impl<'de, K, V> serde::Deserialize<'de> for TreeMap<K, V>
where
    K: serde::Deserialize<'de> + Ord,
    V: serde::Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_map(TreeMapVisitor::new())
    }
}

// =============================================================================
// Tests
// =============================================================================
