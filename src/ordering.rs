//! Pluggable key ordering.
//!
//! Every key comparison made by [`TreeMap`](crate::TreeMap) goes through a
//! [`Comparator`]. The default, [`NaturalOrder`], defers to the key type's
//! [`Ord`] implementation; [`Reversed`] flips any comparator; and any
//! `Fn(&K, &K) -> Ordering` can be used directly.
//!
//! # Contract
//!
//! A comparator must describe a strict total order, and the result for a
//! fixed pair of keys must never change while those keys are stored in a
//! map. The map does not validate this. A comparator that breaks the
//! contract leaves the tree in an unspecified (but memory-safe) state.
//!
//! # Examples
//!
//! ```rust
//! use navmap::TreeMap;
//! use navmap::ordering::Reversed;
//!
//! let mut map = TreeMap::with_comparator(Reversed::natural());
//! map.put(1, "one");
//! map.put(3, "three");
//! map.put(2, "two");
//!
//! let keys: Vec<&i32> = map.keys().collect();
//! assert_eq!(keys, vec![&3, &2, &1]);
//! ```

use std::cmp::Ordering;

/// A strict total order over keys of type `K`.
pub trait Comparator<K: ?Sized> {
    /// Compares `left` with `right`.
    fn compare(&self, left: &K, right: &K) -> Ordering;
}

/// Orders keys by their [`Ord`] implementation.
///
/// This is the comparator used by [`TreeMap::new`](crate::TreeMap::new).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<K: Ord + ?Sized> Comparator<K> for NaturalOrder {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        left.cmp(right)
    }
}

/// Inverts the order of the wrapped comparator.
///
/// # Examples
///
/// ```rust
/// use navmap::ordering::{Comparator, NaturalOrder, Reversed};
/// use std::cmp::Ordering;
///
/// let descending = Reversed::new(NaturalOrder);
/// assert_eq!(descending.compare(&1, &2), Ordering::Greater);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<C>(C);

impl<C> Reversed<C> {
    /// Wraps `comparator` so that it orders keys the other way round.
    #[inline]
    pub const fn new(comparator: C) -> Self {
        Self(comparator)
    }

    /// Returns the wrapped comparator.
    #[inline]
    pub fn into_inner(self) -> C {
        self.0
    }
}

impl Reversed<NaturalOrder> {
    /// Descending natural order.
    #[inline]
    pub const fn natural() -> Self {
        Self(NaturalOrder)
    }
}

impl<K: ?Sized, C: Comparator<K>> Comparator<K> for Reversed<C> {
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self.0.compare(right, left)
    }
}

impl<K: ?Sized, F> Comparator<K> for F
where
    F: Fn(&K, &K) -> Ordering,
{
    #[inline]
    fn compare(&self, left: &K, right: &K) -> Ordering {
        self(left, right)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(1, 2, Ordering::Less)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Greater)]
    fn test_natural_order_matches_ord(
        #[case] left: i32,
        #[case] right: i32,
        #[case] expected: Ordering,
    ) {
        assert_eq!(NaturalOrder.compare(&left, &right), expected);
    }

    #[rstest]
    #[case(1, 2, Ordering::Greater)]
    #[case(2, 2, Ordering::Equal)]
    #[case(3, 2, Ordering::Less)]
    fn test_reversed_inverts_order(
        #[case] left: i32,
        #[case] right: i32,
        #[case] expected: Ordering,
    ) {
        assert_eq!(Reversed::natural().compare(&left, &right), expected);
    }

    #[rstest]
    fn test_closure_comparator() {
        let by_length = |left: &&str, right: &&str| left.len().cmp(&right.len());
        assert_eq!(by_length.compare(&"ab", &"abc"), Ordering::Less);
        assert_eq!(by_length.compare(&"xyz", &"abc"), Ordering::Equal);
    }

    #[rstest]
    fn test_comparator_on_unsized_keys() {
        assert_eq!(NaturalOrder.compare("apple", "banana"), Ordering::Less);
    }

    #[rstest]
    fn test_reversed_into_inner() {
        assert_eq!(Reversed::new(NaturalOrder).into_inner(), NaturalOrder);
    }
}
