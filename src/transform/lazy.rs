//! Lazy combinators.
//!
//! Transforms here return a [`LazySequence`] without touching their input.
//! Work happens pair by pair when the result is pulled, so they compose
//! with unbounded sources such as [`iterate`].
//!
//! The wrapped callbacks are shared between every sequence a transform
//! produces, which is why they must outlive the sequences (`'a`).
//!
//! # Examples
//!
//! ```rust
//! use fnpipe::pipe;
//! use fnpipe::transform::{eager, lazy};
//!
//! let squares = pipe!(
//!     lazy::iterate(1_u64, |x| x + 1),
//!     lazy::map(|x: u64| x * x),
//!     lazy::filter(|x: &u64| x % 2 == 1),
//!     lazy::take(3),
//!     eager::collect(),
//! );
//! assert_eq!(squares.into_values(), vec![1, 9, 25]);
//! ```

use std::rc::Rc;

use crate::sequence::{IntoSequence, LazySequence, Truthy};

/// Lazily applies `function` to every value, keeping keys.
pub fn map<'a, S, F, W>(function: F) -> impl Fn(S) -> LazySequence<'a, S::Key, W>
where
    S: IntoSequence<'a>,
    S::Key: 'a,
    S::Value: 'a,
    F: Fn(S::Value) -> W + 'a,
{
    let function = Rc::new(function);
    move |input| {
        let function = Rc::clone(&function);
        LazySequence::from_pairs(
            input
                .into_sequence()
                .into_iter()
                .map(move |(key, value)| (key, function(value))),
        )
    }
}

/// Like [`map`], but `function` also receives each key.
pub fn map_with_keys<'a, S, F, W>(function: F) -> impl Fn(S) -> LazySequence<'a, S::Key, W>
where
    S: IntoSequence<'a>,
    S::Key: 'a,
    S::Value: 'a,
    F: Fn(S::Value, &S::Key) -> W + 'a,
{
    let function = Rc::new(function);
    move |input| {
        let function = Rc::clone(&function);
        LazySequence::from_pairs(input.into_sequence().into_iter().map(move |(key, value)| {
            let mapped = function(value, &key);
            (key, mapped)
        }))
    }
}

/// Lazily keeps the pairs whose value satisfies `predicate`.
pub fn filter<'a, S, P>(predicate: P) -> impl Fn(S) -> LazySequence<'a, S::Key, S::Value>
where
    S: IntoSequence<'a>,
    S::Key: 'a,
    S::Value: 'a,
    P: Fn(&S::Value) -> bool + 'a,
{
    let predicate = Rc::new(predicate);
    move |input| {
        let predicate = Rc::clone(&predicate);
        LazySequence::from_pairs(
            input
                .into_sequence()
                .into_iter()
                .filter(move |(_, value)| predicate(value)),
        )
    }
}

/// Like [`filter`], but `predicate` also receives each key.
pub fn filter_with_keys<'a, S, P>(predicate: P) -> impl Fn(S) -> LazySequence<'a, S::Key, S::Value>
where
    S: IntoSequence<'a>,
    S::Key: 'a,
    S::Value: 'a,
    P: Fn(&S::Value, &S::Key) -> bool + 'a,
{
    let predicate = Rc::new(predicate);
    move |input| {
        let predicate = Rc::clone(&predicate);
        LazySequence::from_pairs(
            input
                .into_sequence()
                .into_iter()
                .filter(move |(key, value)| predicate(value, key)),
        )
    }
}

/// Lazily keeps the pairs whose value is truthy.
pub fn filter_truthy<'a, S>() -> impl Fn(S) -> LazySequence<'a, S::Key, S::Value>
where
    S: IntoSequence<'a>,
    S::Key: 'a,
    S::Value: Truthy + 'a,
{
    filter(Truthy::is_truthy)
}

/// Caps a sequence at `count` pairs.
///
/// The source is pulled at most `count` times: once the cap is reached the
/// result ends without asking for another pair.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::LazySequence;
/// use fnpipe::transform::lazy;
///
/// let first_three = lazy::take(3);
/// let taken: Vec<_> = first_three(LazySequence::from_values(10..)).collect();
/// assert_eq!(taken, vec![(0, 10), (1, 11), (2, 12)]);
/// ```
pub fn take<'a, S>(count: usize) -> impl Fn(S) -> LazySequence<'a, S::Key, S::Value>
where
    S: IntoSequence<'a>,
    S::Key: 'a,
    S::Value: 'a,
{
    move |input| LazySequence::from_pairs(input.into_sequence().into_iter().take(count))
}

/// Returns the infinite sequence `initial, mapper(initial),
/// mapper(mapper(initial)), ...`, keyed by position.
///
/// Element `n` is produced by the `n`th pull and costs exactly one call to
/// `mapper` (none for element `0`). The sequence never ends on its own;
/// bound it with [`take`] or stop pulling.
///
/// # Examples
///
/// ```rust
/// use fnpipe::transform::lazy;
///
/// let counting: Vec<i32> = lazy::iterate(0, |x| x + 1)
///     .take(10)
///     .map(|(_, value)| value)
///     .collect();
/// assert_eq!(counting, (0..10).collect::<Vec<_>>());
/// ```
pub fn iterate<'a, T, F>(initial: T, mapper: F) -> LazySequence<'a, usize, T>
where
    T: Clone + 'a,
    F: Fn(T) -> T + 'a,
{
    LazySequence::from_values(Iterate {
        initial: Some(initial),
        previous: None,
        mapper,
    })
}

struct Iterate<T, F> {
    initial: Option<T>,
    previous: Option<T>,
    mapper: F,
}

impl<T: Clone, F: Fn(T) -> T> Iterator for Iterate<T, F> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        let current = match self.initial.take() {
            Some(initial) => initial,
            None => (self.mapper)(self.previous.take()?),
        };
        self.previous = Some(current.clone());
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::Entries;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_map_is_deferred_until_pulled() {
        let calls = Cell::new(0);
        let doubled = map(|value: i32| {
            calls.set(calls.get() + 1);
            value * 2
        });

        let mut sequence = doubled(vec![5, 6]);
        assert_eq!(calls.get(), 0);
        assert_eq!(sequence.next(), Some((0, 10)));
        assert_eq!(calls.get(), 1);
        assert_eq!(sequence.next(), Some((1, 12)));
        assert_eq!(sequence.next(), None);
    }

    #[rstest]
    fn test_map_with_keys_over_iterator() {
        let weighted = map_with_keys(|value: i32, key: &usize| value * 2 + *key as i32);
        let result: Vec<_> = weighted(LazySequence::from_values([5, 6])).collect();
        assert_eq!(result, vec![(0, 10), (1, 13)]);
    }

    #[rstest]
    fn test_filter_truthy_default() {
        let compact = filter_truthy();
        let result: Entries<usize, &str> = compact(vec!["5", "", "8"]).collect();
        assert_eq!(result, Entries::from([(0, "5"), (2, "8")]));
    }

    #[rstest]
    fn test_filter_with_keys_preserves_keys() {
        let input: Entries<char, i32> = ('a'..='d').zip(1..=4).collect();
        let odd_or_b = filter_with_keys(|value: &i32, key: &char| value % 2 == 1 || *key == 'b');
        let result: Entries<char, i32> = odd_or_b(input).collect();
        assert_eq!(result, Entries::from([('a', 1), ('b', 2), ('c', 3)]));
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    #[case(5)]
    fn test_take_never_over_fetches(#[case] count: usize) {
        let produced = Cell::new(0_usize);
        let source = LazySequence::from_values((0..).inspect(|_| produced.set(produced.get() + 1)));

        let taken: Vec<_> = take(count)(source).collect();

        assert_eq!(taken.len(), count);
        assert_eq!(produced.get(), count);
    }

    #[rstest]
    fn test_take_shorter_input() {
        let taken: Vec<_> = take(3)(vec!['A', 'B']).collect();
        assert_eq!(taken, vec![(0, 'A'), (1, 'B')]);
    }

    #[rstest]
    fn test_iterate_calls_mapper_once_per_step() {
        let calls = Cell::new(0);
        let sequence = iterate(0, |x: i32| {
            calls.set(calls.get() + 1);
            x + 1
        });

        let values: Vec<i32> = sequence.take(5).map(|(_, value)| value).collect();

        assert_eq!(values, vec![0, 1, 2, 3, 4]);
        assert_eq!(calls.get(), 4);
    }

    #[rstest]
    fn test_iterate_keys_are_positions() {
        let keys: Vec<usize> = iterate("x".to_string(), |text| text + "x")
            .take(3)
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, vec![0, 1, 2]);
    }
}
