//! The sequence adapter.
//!
//! Every combinator in this crate consumes a *sequence*: an ordered
//! collection of `(key, value)` pairs. A sequence is either
//!
//! - **materialized**: an [`Entries`] mapping held fully in memory, or
//! - **lazy**: a [`LazySequence`] that produces pairs on demand and can be
//!   consumed only once.
//!
//! [`Sequence`] tags the two shapes, and [`IntoSequence`] lets combinators
//! accept plain vectors, arrays, mappings, ranges, and lazy sequences
//! alike without the caller saying which one it holds.
//!
//! Any other iterator goes through [`LazySequence::from_values`] (keyed by
//! position) or [`LazySequence::from_pairs`] (keys supplied).
//!
//! # Keys
//!
//! Plain value lists are keyed by position, starting at `0`. Keys are
//! preserved by every combinator unless it is documented to re-key.
//!
//! # Examples
//!
//! ```rust
//! use fnpipe::sequence::IntoSequence;
//!
//! let sequence = vec!['a', 'b'].into_sequence();
//! assert!(sequence.is_materialized());
//!
//! let pairs: Vec<_> = sequence.into_iter().collect();
//! assert_eq!(pairs, vec![(0, 'a'), (1, 'b')]);
//! ```

mod entries;
mod lazy_sequence;
mod truthy;

use std::collections::BTreeMap;
use std::ops::{Range, RangeFrom, RangeInclusive};

pub use entries::{Entries, SequenceKey};
pub use lazy_sequence::LazySequence;
pub use truthy::Truthy;

/// An ordered sequence of `(key, value)` pairs, either materialized or
/// lazy.
#[derive(Debug)]
pub enum Sequence<'a, K, V> {
    /// All pairs held in memory.
    Materialized(Entries<K, V>),
    /// Pairs produced on demand, single pass.
    Lazy(LazySequence<'a, K, V>),
}

impl<'a, K: SequenceKey, V> Sequence<'a, K, V> {
    /// Returns `true` for the materialized shape.
    pub const fn is_materialized(&self) -> bool {
        matches!(self, Self::Materialized(_))
    }

    /// Collects the sequence into an [`Entries`] mapping.
    ///
    /// A materialized sequence is returned as is. Draining a lazy sequence
    /// that never ends does not terminate.
    pub fn materialize(self) -> Entries<K, V> {
        match self {
            Self::Materialized(entries) => entries,
            Self::Lazy(lazy) => lazy.collect(),
        }
    }

    /// Converts the sequence into a lazy one without evaluating anything.
    pub fn into_lazy(self) -> LazySequence<'a, K, V>
    where
        K: 'a,
        V: 'a,
    {
        match self {
            Self::Materialized(entries) => LazySequence::from_pairs(entries),
            Self::Lazy(lazy) => lazy,
        }
    }
}

impl<'a, K, V> IntoIterator for Sequence<'a, K, V> {
    type Item = (K, V);
    type IntoIter = SequenceIter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        match self {
            Self::Materialized(entries) => SequenceIter::Materialized(entries.into_iter()),
            Self::Lazy(lazy) => SequenceIter::Lazy(lazy),
        }
    }
}

/// Iterator over the pairs of a [`Sequence`].
#[derive(Debug)]
pub enum SequenceIter<'a, K, V> {
    /// Draining a materialized mapping.
    Materialized(std::vec::IntoIter<(K, V)>),
    /// Pulling from a lazy sequence.
    Lazy(LazySequence<'a, K, V>),
}

impl<K, V> Iterator for SequenceIter<'_, K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Materialized(entries) => entries.next(),
            Self::Lazy(lazy) => lazy.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Materialized(entries) => entries.size_hint(),
            Self::Lazy(lazy) => lazy.size_hint(),
        }
    }
}

/// Conversion into a [`Sequence`].
///
/// Implemented for the inputs combinators accept: `Vec<V>` and `[V; N]`
/// (keyed by position), [`Entries`], `BTreeMap<K, V>` (in key order),
/// [`LazySequence`], and [`Sequence`] itself. `a..b`, `a..=b`, and `a..`
/// become lazy sequences keyed by position, so an unbounded range is
/// never collected up front.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::{Entries, IntoSequence, LazySequence};
///
/// assert!(Entries::from([("a", 1)]).into_sequence().is_materialized());
/// assert!(!LazySequence::from_values(0..).into_sequence().is_materialized());
/// ```
pub trait IntoSequence<'a> {
    /// Key type of the produced sequence.
    type Key: SequenceKey;
    /// Value type of the produced sequence.
    type Value;

    /// Performs the conversion.
    fn into_sequence(self) -> Sequence<'a, Self::Key, Self::Value>;
}

impl<'a, K: SequenceKey, V> IntoSequence<'a> for Sequence<'a, K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, K, V> {
        self
    }
}

impl<'a, K: SequenceKey, V> IntoSequence<'a> for Entries<K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, K, V> {
        Sequence::Materialized(self)
    }
}

impl<'a, K: SequenceKey, V> IntoSequence<'a> for LazySequence<'a, K, V> {
    type Key = K;
    type Value = V;

    #[inline]
    fn into_sequence(self) -> Sequence<'a, K, V> {
        Sequence::Lazy(self)
    }
}

impl<'a, V> IntoSequence<'a> for Vec<V> {
    type Key = usize;
    type Value = V;

    fn into_sequence(self) -> Sequence<'a, usize, V> {
        Sequence::Materialized(Entries::from_values(self))
    }
}

impl<'a, V, const N: usize> IntoSequence<'a> for [V; N] {
    type Key = usize;
    type Value = V;

    fn into_sequence(self) -> Sequence<'a, usize, V> {
        Sequence::Materialized(Entries::from_values(self))
    }
}

impl<'a, K: SequenceKey, V> IntoSequence<'a> for BTreeMap<K, V> {
    type Key = K;
    type Value = V;

    fn into_sequence(self) -> Sequence<'a, K, V> {
        Sequence::Materialized(self.into_iter().collect())
    }
}

macro_rules! impl_into_sequence_for_range {
    ($($range:ident),* $(,)?) => {
        $(
            impl<'a, T: 'a> IntoSequence<'a> for $range<T>
            where
                $range<T>: Iterator<Item = T>,
            {
                type Key = usize;
                type Value = T;

                fn into_sequence(self) -> Sequence<'a, usize, T> {
                    Sequence::Lazy(LazySequence::from_values(self))
                }
            }
        )*
    };
}

impl_into_sequence_for_range!(Range, RangeInclusive, RangeFrom);
