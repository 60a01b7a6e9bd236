//! # navmap
//!
//! A mutable navigable ordered map built on a plain, unbalanced binary
//! search tree with parent links.
//!
//! ## Overview
//!
//! - **Map operations**: `put`, `get`, `contains_key`, `contains_value`, `remove`
//! - **Navigation**: `lower`/`floor`/`higher`/`ceiling` by key or by entry,
//!   first/last lookup and `poll_first_entry`/`poll_last_entry`
//! - **Range maps**: eager `head_map`, `tail_map` and `sub_map` copies
//! - **Custom ordering**: any [`Comparator`], including closures and [`Reversed`]
//! - **Observability**: an optional [`Tracer`](trace::Tracer) told about every
//!   mutation and query outcome
//! - **Visualization**: [`Diagram`] draws the current tree shape
//!
//! The tree never rebalances. Its height, and so the cost of every keyed
//! operation, depends on insertion order; sorted input produces a list.
//!
//! ## Feature Flags
//!
//! - `tracing` (default): [`TracingTracer`](trace::TracingTracer), a tracer
//!   that forwards events to `tracing`
//! - `serde`: `Serialize`/`Deserialize` for [`TreeMap`] and [`Entry`]
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use navmap::prelude::*;
//!
//! let mut map = TreeMap::new();
//! for (key, value) in [(50, "fifty"), (30, "thirty"), (70, "seventy")] {
//!     map.put(key, value);
//! }
//!
//! assert_eq!(map.ceiling_key(&31), Some(&50));
//! assert_eq!(map.sub_map(&40, &40), Err(MapError::InvalidRange));
//!
//! let tail = map.tail_map(&50);
//! assert_eq!(tail.len(), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports commonly used types and traits.
///
/// # Usage
///
/// ```rust
/// use navmap::prelude::*;
/// ```
pub mod prelude {
    pub use crate::diagram::Diagram;
    pub use crate::entry::Entry;
    pub use crate::error::MapError;
    pub use crate::ordering::{Comparator, NaturalOrder, Reversed};
    pub use crate::trace::{TraceEvent, Tracer};
    pub use crate::treemap::TreeMap;
}

pub mod diagram;
pub mod entry;
pub mod error;
pub mod ordering;
pub mod trace;
mod treemap;

pub use diagram::Diagram;
pub use entry::Entry;
pub use error::MapError;
pub use ordering::{Comparator, NaturalOrder, Reversed};
pub use treemap::{IntoIter, Iter, Keys, NodeRef, TreeMap, Values};
