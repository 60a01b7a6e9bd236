//! Usage errors reported by [`TreeMap`](crate::TreeMap).
//!
//! Errors are raised before any mutation takes place, so a failed call never
//! leaves the map partially modified. A missing key or an empty navigation
//! result is not an error; those are reported as `None`.

use thiserror::Error;

/// Errors returned by [`TreeMap`](crate::TreeMap) operations.
///
/// # Examples
///
/// ```rust
/// use navmap::{MapError, TreeMap};
///
/// let map: TreeMap<i32, &str> = TreeMap::new();
/// assert_eq!(map.first_key(), Err(MapError::EmptyMap));
/// assert_eq!(map.sub_map(&5, &5).unwrap_err(), MapError::InvalidRange);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum MapError {
    /// `first_key` or `last_key` was called on an empty map.
    #[error("the map is empty")]
    EmptyMap,

    /// `sub_map` was called with a start key that is not strictly less than
    /// the end key.
    #[error("invalid range: start key must be strictly less than end key")]
    InvalidRange,
}
