//! Eager combinators.
//!
//! Every transform here drains its input and returns a concrete
//! [`Entries`] mapping (or a plain value). Materialized inputs are handled
//! in bulk where that saves work; lazy inputs are pulled pair by pair. The
//! observable result is the same either way.
//!
//! # Examples
//!
//! ```rust
//! use fnpipe::pipe;
//! use fnpipe::sequence::Entries;
//! use fnpipe::transform::eager;
//!
//! let result = pipe!(
//!     vec![5, 6, 7, 8],
//!     eager::map(|x: i32| x * 10),
//!     eager::filter(|x: &i32| *x > 60),
//! );
//! assert_eq!(result, Entries::from([(2, 70), (3, 80)]));
//! ```

use std::cell::Cell;

use crate::sequence::{Entries, IntoSequence, Sequence, SequenceKey, Truthy};

pub use super::nested::{Nested, flatten};

/// Applies `function` to every value, keeping keys and order.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::Entries;
/// use fnpipe::transform::eager;
///
/// let shout = eager::map(|word: &str| word.to_uppercase());
/// assert_eq!(
///     shout(Entries::from([("a", "x"), ("b", "y")])),
///     Entries::from([("a", "X".to_string()), ("b", "Y".to_string())])
/// );
/// ```
pub fn map<'a, S, F, W>(function: F) -> impl Fn(S) -> Entries<S::Key, W>
where
    S: IntoSequence<'a>,
    F: Fn(S::Value) -> W,
{
    move |input| match input.into_sequence() {
        Sequence::Materialized(entries) => entries.map_values(|_, value| function(value)),
        Sequence::Lazy(lazy) => lazy.map(|(key, value)| (key, function(value))).collect(),
    }
}

/// Like [`map`], but `function` also receives each key.
pub fn map_with_keys<'a, S, F, W>(function: F) -> impl Fn(S) -> Entries<S::Key, W>
where
    S: IntoSequence<'a>,
    F: Fn(S::Value, &S::Key) -> W,
{
    move |input| match input.into_sequence() {
        Sequence::Materialized(entries) => entries.map_values(|key, value| function(value, key)),
        Sequence::Lazy(lazy) => lazy
            .map(|(key, value)| {
                let mapped = function(value, &key);
                (key, mapped)
            })
            .collect(),
    }
}

/// Keeps the entries whose value satisfies `predicate`, with their keys.
pub fn filter<'a, S, P>(predicate: P) -> impl Fn(S) -> Entries<S::Key, S::Value>
where
    S: IntoSequence<'a>,
    P: Fn(&S::Value) -> bool,
{
    move |input| match input.into_sequence() {
        Sequence::Materialized(mut entries) => {
            entries.retain(|_, value| predicate(value));
            entries
        }
        Sequence::Lazy(lazy) => lazy.filter(|(_, value)| predicate(value)).collect(),
    }
}

/// Like [`filter`], but `predicate` also receives each key.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::Entries;
/// use fnpipe::transform::eager;
///
/// let odd_or_b = eager::filter_with_keys(|value: &i32, key: &&str| value % 2 == 1 || *key == "b");
/// let input = Entries::from([("a", 1), ("b", 2), ("c", 3), ("d", 4)]);
/// assert_eq!(odd_or_b(input), Entries::from([("a", 1), ("b", 2), ("c", 3)]));
/// ```
pub fn filter_with_keys<'a, S, P>(predicate: P) -> impl Fn(S) -> Entries<S::Key, S::Value>
where
    S: IntoSequence<'a>,
    P: Fn(&S::Value, &S::Key) -> bool,
{
    move |input| match input.into_sequence() {
        Sequence::Materialized(mut entries) => {
            entries.retain(|key, value| predicate(value, key));
            entries
        }
        Sequence::Lazy(lazy) => lazy.filter(|(key, value)| predicate(value, key)).collect(),
    }
}

/// Keeps the entries whose value is truthy.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::Entries;
/// use fnpipe::transform::eager;
///
/// let compact = eager::filter_truthy();
/// assert_eq!(compact(vec![5, 0, 0, 8]), Entries::from([(0, 5), (3, 8)]));
/// ```
pub fn filter_truthy<'a, S>() -> impl Fn(S) -> Entries<S::Key, S::Value>
where
    S: IntoSequence<'a>,
    S::Value: Truthy,
{
    filter(Truthy::is_truthy)
}

/// Materializes any sequence into an [`Entries`] mapping.
pub fn collect<'a, S>() -> impl Fn(S) -> Entries<S::Key, S::Value>
where
    S: IntoSequence<'a>,
{
    |input: S| input.into_sequence().materialize()
}

/// Keeps the first `count` entries with their keys.
///
/// Shorter inputs are returned whole. A lazy input is not pulled past its
/// `count`th pair.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::Entries;
/// use fnpipe::transform::eager;
///
/// let first_two = eager::take(2);
/// assert_eq!(first_two(vec!['a', 'b', 'c']), Entries::from([(0, 'a'), (1, 'b')]));
/// assert_eq!(first_two(vec!['z']), Entries::from([(0, 'z')]));
/// ```
pub fn take<'a, S>(count: usize) -> impl Fn(S) -> Entries<S::Key, S::Value>
where
    S: IntoSequence<'a>,
{
    move |input| match input.into_sequence() {
        Sequence::Materialized(mut entries) => {
            entries.truncate(count);
            entries
        }
        Sequence::Lazy(lazy) => lazy.take(count).collect(),
    }
}

/// Returns the first value, pulling at most one pair.
pub fn head<'a, S>(input: S) -> Option<S::Value>
where
    S: IntoSequence<'a>,
{
    input.into_sequence().into_iter().next().map(|(_, value)| value)
}

/// Returns everything after the first entry, keys kept.
pub fn tail<'a, S>(input: S) -> Entries<S::Key, S::Value>
where
    S: IntoSequence<'a>,
{
    input.into_sequence().into_iter().skip(1).collect()
}

/// Re-keys the values by `key_maker`.
///
/// When two values produce the same key, the later one wins; the key keeps
/// the position where it first appeared.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::Entries;
/// use fnpipe::transform::eager;
///
/// let by_first_name = eager::index_by(|name: &(&str, &str)| name.0);
/// let captains = vec![("Jean-Luc", "Picard"), ("James", "Kirk")];
/// assert_eq!(
///     by_first_name(captains),
///     Entries::from([("Jean-Luc", ("Jean-Luc", "Picard")), ("James", ("James", "Kirk"))])
/// );
/// ```
pub fn index_by<'a, S, F, NK>(key_maker: F) -> impl Fn(S) -> Entries<NK, S::Value>
where
    S: IntoSequence<'a>,
    F: Fn(&S::Value) -> NK,
    NK: SequenceKey,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .map(|(_, value)| (key_maker(&value), value))
            .collect()
    }
}

/// Builds a mapping whose values come from `values(key, value)` and whose
/// keys come from a counter.
///
/// The counter starts at `0` and belongs to the transform returned by this
/// call: it keeps counting across invocations of that transform and is
/// never reset. Another call to `keyed_map` gets its own counter.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::Entries;
/// use fnpipe::transform::eager;
///
/// let sums = eager::keyed_map(|key: &i32, value: &i32| key + value);
/// let input = Entries::from([(1, 1), (2, 2), (3, 3)]);
///
/// assert_eq!(sums(input.clone()), Entries::from([(0, 2), (1, 4), (2, 6)]));
/// assert_eq!(sums(input), Entries::from([(3, 2), (4, 4), (5, 6)]));
/// ```
pub fn keyed_map<'a, S, F, W>(values: F) -> impl Fn(S) -> Entries<usize, W>
where
    S: IntoSequence<'a>,
    F: Fn(&S::Key, &S::Value) -> W,
{
    let counter = Cell::new(0_usize);
    keyed_map_with(values, move |_: &S::Key, _: &S::Value| {
        let key = counter.get();
        counter.set(key + 1);
        key
    })
}

/// Builds a mapping whose keys come from `keys(key, value)` and whose
/// values come from `values(key, value)`.
///
/// Duplicate computed keys keep the later value.
pub fn keyed_map_with<'a, S, F, G, W, NK>(values: F, keys: G) -> impl Fn(S) -> Entries<NK, W>
where
    S: IntoSequence<'a>,
    F: Fn(&S::Key, &S::Value) -> W,
    G: Fn(&S::Key, &S::Value) -> NK,
    NK: SequenceKey,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .map(|(key, value)| (keys(&key, &value), values(&key, &value)))
            .collect()
    }
}

/// Adds `value` at the end under the next positional key.
///
/// When the largest key is already `usize::MAX` there is no next key: the
/// input is returned unchanged and a `WARN` event is emitted. Existing
/// entries are never overwritten.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::Entries;
/// use fnpipe::transform::eager;
///
/// let add_five = eager::append(5);
/// assert_eq!(add_five(vec![1, 2]), Entries::from_values([1, 2, 5]));
/// ```
pub fn append<'a, S, V>(value: V) -> impl Fn(S) -> Entries<usize, V>
where
    S: IntoSequence<'a, Key = usize, Value = V>,
    V: Clone,
{
    move |input| {
        let mut entries = input.into_sequence().materialize();
        if entries.push(value.clone()).is_err() {
            tracing::warn!(len = entries.len(), "append skipped: no key left after usize::MAX");
        }
        entries
    }
}

/// Stores `value` under `key`.
///
/// A new key lands at the end; an existing key is replaced in place.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::Entries;
/// use fnpipe::transform::eager;
///
/// let add_c = eager::append_at("C", "c");
/// assert_eq!(
///     add_c(Entries::from([("a", "A"), ("b", "B")])),
///     Entries::from([("a", "A"), ("b", "B"), ("c", "C")])
/// );
/// ```
pub fn append_at<'a, S>(value: S::Value, key: S::Key) -> impl Fn(S) -> Entries<S::Key, S::Value>
where
    S: IntoSequence<'a>,
    S::Value: Clone,
{
    move |input| {
        let mut entries = input.into_sequence().materialize();
        entries.insert(key.clone(), value.clone());
        entries
    }
}

/// Like [`map`], but `function` may fail.
///
/// Stops at the first `Err` and returns it unchanged; later values are not
/// visited.
///
/// # Errors
///
/// Returns the first error produced by `function`.
///
/// # Examples
///
/// ```rust
/// use fnpipe::transform::eager;
///
/// let parse = eager::try_map(|text: &str| text.parse::<i32>());
/// assert!(parse(vec!["1", "2"]).is_ok());
/// assert!(parse(vec!["1", "two", "3"]).is_err());
/// ```
pub fn try_map<'a, S, F, W, E>(function: F) -> impl Fn(S) -> Result<Entries<S::Key, W>, E>
where
    S: IntoSequence<'a>,
    F: Fn(S::Value) -> Result<W, E>,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .map(|(key, value)| function(value).map(|mapped| (key, mapped)))
            .collect()
    }
}

/// Like [`filter`], but `predicate` may fail.
///
/// # Errors
///
/// Returns the first error produced by `predicate`.
pub fn try_filter<'a, S, P, E>(predicate: P) -> impl Fn(S) -> Result<Entries<S::Key, S::Value>, E>
where
    S: IntoSequence<'a>,
    P: Fn(&S::Value) -> Result<bool, E>,
{
    move |input| {
        let mut kept = Entries::new();
        for (key, value) in input.into_sequence() {
            if predicate(&value)? {
                kept.insert(key, value);
            }
        }
        Ok(kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sequence::LazySequence;
    use rstest::rstest;

    fn letters() -> Entries<char, char> {
        ('a'..='z').zip('A'..='Z').collect()
    }

    #[rstest]
    fn test_map_preserves_string_keys() {
        let suffix = map(|value: &str| format!("{value}hi"));
        let result = suffix(Entries::from([("a", "A"), ("b", "B"), ("c", "C")]));

        assert_eq!(
            result,
            Entries::from([
                ("a", "Ahi".to_string()),
                ("b", "Bhi".to_string()),
                ("c", "Chi".to_string()),
            ])
        );
    }

    #[rstest]
    fn test_map_with_keys_on_lazy_input() {
        let weighted = map_with_keys(|value: i32, key: &usize| value * 2 + *key as i32);
        let result = weighted(LazySequence::from_values([5, 6]));
        assert_eq!(result, Entries::from_values([10, 13]));
    }

    #[rstest]
    fn test_filter_keeps_original_keys() {
        let even = |value: &i32| value % 2 == 0;
        assert_eq!(filter(even)(vec![5, 6, 7, 8]), Entries::from([(1, 6), (3, 8)]));
        assert_eq!(
            filter(even)(LazySequence::from_values([5, 6, 7, 8])),
            Entries::from([(1, 6), (3, 8)])
        );
    }

    #[rstest]
    fn test_filter_truthy_on_strings() {
        let compact = filter_truthy();
        assert_eq!(
            compact(vec!["x", "", "y"]),
            Entries::from([(0, "x"), (2, "y")])
        );
    }

    #[rstest]
    #[case(3, 3)]
    #[case(26, 26)]
    #[case(40, 26)]
    #[case(0, 0)]
    fn test_take_materialized_and_lazy_agree(#[case] count: usize, #[case] expected: usize) {
        let eager_result = take(count)(letters());
        let lazy_result = take(count)(LazySequence::from_pairs(letters()));

        assert_eq!(eager_result.len(), expected);
        assert_eq!(eager_result, lazy_result);
    }

    #[rstest]
    fn test_take_keeps_keys() {
        let first_three = take(3);
        assert_eq!(
            first_three(letters()),
            Entries::from([('a', 'A'), ('b', 'B'), ('c', 'C')])
        );
    }

    #[rstest]
    fn test_head_and_tail() {
        assert_eq!(head(vec![1, 2, 3]), Some(1));
        assert_eq!(head(Vec::<i32>::new()), None);
        assert_eq!(tail(vec![1, 2, 3]), Entries::from([(1, 2), (2, 3)]));
        assert!(tail(Vec::<i32>::new()).is_empty());
    }

    #[rstest]
    fn test_head_pulls_a_single_pair() {
        let pulled = Cell::new(0);
        let source = LazySequence::from_values((0..).inspect(|_| pulled.set(pulled.get() + 1)));

        assert_eq!(head(source), Some(0));
        assert_eq!(pulled.get(), 1);
    }

    #[rstest]
    fn test_index_by_last_write_wins() {
        let by_parity = index_by(|value: &i32| value % 2);
        let result = by_parity(vec![1, 2, 3, 4]);
        assert_eq!(result, Entries::from([(1, 3), (0, 4)]));
    }

    #[rstest]
    fn test_keyed_map_with_key_callback() {
        let product_by_sum = keyed_map_with(
            |key: &i32, value: &i32| key * value,
            |key: &i32, value: &i32| key + value,
        );
        let result = product_by_sum(Entries::from([(1, 1), (2, 2), (3, 3)]));
        assert_eq!(result, Entries::from([(2, 1), (4, 4), (6, 9)]));
    }

    #[rstest]
    fn test_keyed_map_counters_are_independent() {
        let first = keyed_map(|_: &usize, value: &char| *value);
        let second = keyed_map(|_: &usize, value: &char| *value);

        assert_eq!(first(vec!['a']), Entries::from([(0, 'a')]));
        assert_eq!(first(vec!['b']), Entries::from([(1, 'b')]));
        assert_eq!(second(vec!['c']), Entries::from([(0, 'c')]));
    }

    #[rstest]
    fn test_append_after_largest_key() {
        let add_nine = append(9);
        let sparse = Entries::from([(4, 1), (2, 2)]);
        assert_eq!(add_nine(sparse), Entries::from([(4, 1), (2, 2), (5, 9)]));
        assert_eq!(add_nine(Entries::new()), Entries::from([(0, 9)]));
    }

    #[rstest]
    fn test_append_at_existing_key_replaces_in_place() {
        let replace_a = append_at(10, "a");
        assert_eq!(
            replace_a(Entries::from([("a", 1), ("b", 2)])),
            Entries::from([("a", 10), ("b", 2)])
        );
    }

    #[rstest]
    fn test_try_map_stops_at_first_error() {
        let visited = Cell::new(0);
        let checked = try_map(|value: i32| {
            visited.set(visited.get() + 1);
            if value < 0 { Err(value) } else { Ok(value * 2) }
        });

        assert_eq!(checked(vec![1, -2, -3, 4]), Err(-2));
        assert_eq!(visited.get(), 2);
    }

    #[rstest]
    fn test_try_filter_success_keeps_keys() {
        let small = try_filter(|value: &u8| {
            if *value == 0 { Err("zero") } else { Ok(*value < 3) }
        });

        assert_eq!(small(vec![1, 5, 2]), Ok(Entries::from([(0, 1), (2, 2)])));
        assert_eq!(small(vec![1, 0]), Err("zero"));
    }

    #[rstest]
    fn test_collect_iterator_input() {
        let gather = collect();
        assert_eq!(
            gather(LazySequence::from_values([1, 2, 3])),
            Entries::from_values([1, 2, 3])
        );
    }
}
