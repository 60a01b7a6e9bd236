//! Optional observability hook.
//!
//! A [`TreeMap`](crate::TreeMap) can carry a [`Tracer`] that is told about
//! every construction, mutation and query outcome through a [`TraceEvent`].
//! No tracer is installed by default, and installing or removing one never
//! changes what the map does.
//!
//! Two tracers ship with the crate:
//!
//! - [`TracingTracer`] (feature `tracing`, on by default) forwards events to
//!   the [`tracing`](https://docs.rs/tracing) ecosystem at `DEBUG` level
//!   under the `navmap` target.
//! - [`FnTracer`], built with [`from_fn`], wraps a closure.
//!
//! # Examples
//!
//! ```rust
//! use navmap::TreeMap;
//! use navmap::trace::{self, TraceEvent};
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::sync::Arc;
//!
//! let inserts = Arc::new(AtomicUsize::new(0));
//! let counter = Arc::clone(&inserts);
//!
//! let mut map = TreeMap::new().with_tracer(trace::from_fn(
//!     move |event: &TraceEvent<'_, i32, &str>| {
//!         if matches!(event, TraceEvent::Inserted { .. }) {
//!             counter.fetch_add(1, Ordering::Relaxed);
//!         }
//!     },
//! ));
//!
//! map.put(2, "two");
//! map.put(1, "one");
//! map.put(2, "deux");
//! assert_eq!(inserts.load(Ordering::Relaxed), 2);
//! ```

use std::fmt;

/// The log target used by [`TracingTracer`].
pub const TARGET: &str = "navmap";

/// Where a newly inserted node was attached.
#[derive(Debug, PartialEq, Eq)]
pub enum Position<'a, K> {
    /// The node became the root of an empty tree.
    Root,
    /// The node became the left child of the node with this key.
    LeftOf(&'a K),
    /// The node became the right child of the node with this key.
    RightOf(&'a K),
}

/// The kind of single-key query that produced a [`TraceEvent::Lookup`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Query {
    /// `get`, `get_mut` or `get_key_value`.
    Get,
    /// `contains_key`.
    ContainsKey,
    /// Greatest key strictly less than the query.
    Lower,
    /// Greatest key less than or equal to the query.
    Floor,
    /// Least key strictly greater than the query.
    Higher,
    /// Least key greater than or equal to the query.
    Ceiling,
}

/// Which end of the map an extremal operation looked at.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum End {
    /// The smallest key.
    First,
    /// The largest key.
    Last,
}

/// The kind of range map that was built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RangeKind {
    /// `head_map`.
    Head,
    /// `tail_map`.
    Tail,
    /// `sub_map`.
    Sub,
}

/// The kind of snapshot collection that was built.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Collection {
    /// `key_set`.
    Keys,
    /// `entry_set`.
    Entries,
}

/// A single observation reported to a [`Tracer`].
///
/// Events borrow from the map for the duration of the
/// [`Tracer::record`] call only.
#[derive(Debug, PartialEq, Eq)]
pub enum TraceEvent<'a, K, V> {
    /// An empty map was created.
    Constructed,
    /// The map was cleared.
    Cleared {
        /// Number of entries dropped.
        discarded: usize,
    },
    /// A new node was created for an absent key.
    Inserted {
        /// The inserted key.
        key: &'a K,
        /// The inserted value.
        value: &'a V,
        /// Where the node was attached.
        position: Position<'a, K>,
        /// Length after the insertion.
        len: usize,
    },
    /// The value of an existing key was replaced in place.
    Replaced {
        /// The existing key.
        key: &'a K,
        /// The new value.
        value: &'a V,
    },
    /// A node was spliced out of the tree.
    Removed {
        /// The removed key.
        key: &'a K,
        /// Length after the removal.
        len: usize,
    },
    /// A removal was requested for a key that is not present.
    RemoveMissed {
        /// The requested key.
        key: &'a K,
    },
    /// A single-key query finished.
    Lookup {
        /// Which query ran.
        query: Query,
        /// The query key.
        key: &'a K,
        /// The key of the matching node, if any.
        found: Option<&'a K>,
    },
    /// A `contains_value` scan finished.
    ValueScan {
        /// The searched value.
        value: &'a V,
        /// Whether any node holds an equal value.
        found: bool,
    },
    /// A first/last query finished.
    Extremum {
        /// Which end was inspected.
        end: End,
        /// The extremal key, or `None` for an empty map.
        key: Option<&'a K>,
    },
    /// A poll operation is about to remove an extremal entry.
    Polled {
        /// Which end is polled.
        end: End,
        /// The key being removed, or `None` for an empty map.
        key: Option<&'a K>,
    },
    /// A head, tail or sub map was built.
    RangeBuilt {
        /// Which kind of range map.
        range: RangeKind,
        /// Number of entries in the new map.
        len: usize,
    },
    /// A key or entry snapshot was collected.
    Collected {
        /// Which snapshot.
        collection: Collection,
        /// Number of items collected.
        len: usize,
    },
}

impl<K> Clone for Position<'_, K> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K> Copy for Position<'_, K> {}

impl<K, V> Clone for TraceEvent<'_, K, V> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, V> Copy for TraceEvent<'_, K, V> {}

/// Receives [`TraceEvent`]s from a map.
///
/// Tracers are shared between a map, its clones and the range maps built
/// from it, so they take `&self` and must be `Send + Sync`.
pub trait Tracer<K, V>: Send + Sync {
    /// Records one event.
    fn record(&self, event: &TraceEvent<'_, K, V>);
}

/// A [`Tracer`] backed by a closure. Created by [`from_fn`].
#[derive(Clone, Copy)]
pub struct FnTracer<F>(F);

impl<F> fmt::Debug for FnTracer<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FnTracer")
    }
}

/// Creates a [`Tracer`] that calls `function` for every event.
pub const fn from_fn<K, V, F>(function: F) -> FnTracer<F>
where
    F: Fn(&TraceEvent<'_, K, V>) + Send + Sync,
{
    FnTracer(function)
}

impl<K, V, F> Tracer<K, V> for FnTracer<F>
where
    F: Fn(&TraceEvent<'_, K, V>) + Send + Sync,
{
    #[inline]
    fn record(&self, event: &TraceEvent<'_, K, V>) {
        (self.0)(event);
    }
}

/// Forwards events to `tracing` at `DEBUG` level under the [`TARGET`] target.
///
/// # Examples
///
/// ```rust
/// use navmap::TreeMap;
/// use navmap::trace::TracingTracer;
///
/// let mut map = TreeMap::new().with_tracer(TracingTracer);
/// map.put("alpha", 1);
/// ```
#[cfg(feature = "tracing")]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TracingTracer;

#[cfg(feature = "tracing")]
impl<K: fmt::Debug, V: fmt::Debug> Tracer<K, V> for TracingTracer {
    fn record(&self, event: &TraceEvent<'_, K, V>) {
        match *event {
            TraceEvent::Constructed => {
                tracing::debug!(target: TARGET, "constructed empty map");
            }
            TraceEvent::Cleared { discarded } => {
                tracing::debug!(target: TARGET, discarded, "cleared");
            }
            TraceEvent::Inserted {
                key,
                value,
                position,
                len,
            } => {
                tracing::debug!(target: TARGET, ?key, ?value, ?position, len, "inserted");
            }
            TraceEvent::Replaced { key, value } => {
                tracing::debug!(target: TARGET, ?key, ?value, "replaced value");
            }
            TraceEvent::Removed { key, len } => {
                tracing::debug!(target: TARGET, ?key, len, "removed");
            }
            TraceEvent::RemoveMissed { key } => {
                tracing::debug!(target: TARGET, ?key, "remove: key not found");
            }
            TraceEvent::Lookup { query, key, found } => {
                tracing::debug!(target: TARGET, ?query, ?key, ?found, "lookup");
            }
            TraceEvent::ValueScan { value, found } => {
                tracing::debug!(target: TARGET, ?value, found, "value scan");
            }
            TraceEvent::Extremum { end, key } => {
                tracing::debug!(target: TARGET, ?end, ?key, "extremum");
            }
            TraceEvent::Polled { end, key } => {
                tracing::debug!(target: TARGET, ?end, ?key, "poll");
            }
            TraceEvent::RangeBuilt { range, len } => {
                tracing::debug!(target: TARGET, ?range, len, "range map built");
            }
            TraceEvent::Collected { collection, len } => {
                tracing::debug!(target: TARGET, ?collection, len, "collected");
            }
        }
    }
}
