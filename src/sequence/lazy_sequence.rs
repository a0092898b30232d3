//! One-shot, pull-based sequences of key/value pairs.

use std::fmt;

/// A lazily produced sequence of `(key, value)` pairs.
///
/// Each pair is produced on demand, inside the consumer's call to
/// [`Iterator::next`]. The sequence is forward-only and cannot be
/// restarted or cloned; pairs that have been pulled are gone. Sources may
/// be unbounded.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::LazySequence;
///
/// let mut letters = LazySequence::from_values(['a', 'b', 'c']);
/// assert_eq!(letters.next(), Some((0, 'a')));
///
/// // The first pair is not replayed.
/// let rest: Vec<_> = letters.collect();
/// assert_eq!(rest, vec![(1, 'b'), (2, 'c')]);
/// ```
pub struct LazySequence<'a, K, V> {
    source: Box<dyn Iterator<Item = (K, V)> + 'a>,
}

impl<'a, K, V> LazySequence<'a, K, V> {
    /// Wraps an iterator of `(key, value)` pairs.
    pub fn from_pairs<I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        I::IntoIter: 'a,
    {
        Self {
            source: Box::new(pairs.into_iter()),
        }
    }
}

impl<'a, V> LazySequence<'a, usize, V> {
    /// Wraps an iterator of values, keying them by position from `0`.
    pub fn from_values<I>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        I::IntoIter: 'a,
    {
        Self::from_pairs(values.into_iter().enumerate())
    }
}

impl<K, V> Iterator for LazySequence<'_, K, V> {
    type Item = (K, V);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.source.next()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<K, V> fmt::Debug for LazySequence<'_, K, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("LazySequence(<pending>)")
    }
}
