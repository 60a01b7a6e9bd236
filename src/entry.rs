//! Owned key/value snapshots.

use std::fmt;

/// An owned snapshot of one key/value pair of a [`TreeMap`](crate::TreeMap).
///
/// An `Entry` never aliases the tree it came from: navigation methods clone
/// the pair out of the map, and polling methods move it out of the removed
/// node. Mutating the map afterwards does not affect the snapshot.
///
/// # Examples
///
/// ```rust
/// use navmap::TreeMap;
///
/// let mut map = TreeMap::new();
/// map.put(1, "one");
///
/// let entry = map.first_entry().unwrap();
/// map.put(1, "uno");
///
/// assert_eq!(entry.key(), &1);
/// assert_eq!(entry.value(), &"one");
/// assert_eq!(entry.to_string(), "1 = one");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    /// Creates a snapshot from its parts.
    #[inline]
    pub const fn new(key: K, value: V) -> Self {
        Self { key, value }
    }

    /// Returns the key.
    #[inline]
    pub const fn key(&self) -> &K {
        &self.key
    }

    /// Returns the value.
    #[inline]
    pub const fn value(&self) -> &V {
        &self.value
    }

    /// Splits the snapshot into its key and value.
    #[inline]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

impl<K, V> From<(K, V)> for Entry<K, V> {
    #[inline]
    fn from((key, value): (K, V)) -> Self {
        Self::new(key, value)
    }
}

impl<K, V> From<Entry<K, V>> for (K, V) {
    #[inline]
    fn from(entry: Entry<K, V>) -> Self {
        entry.into_parts()
    }
}

impl<K: fmt::Display, V: fmt::Display> fmt::Display for Entry<K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} = {}", self.key, self.value)
    }
}
