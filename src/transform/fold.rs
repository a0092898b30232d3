//! Folding and short-circuiting combinators.
//!
//! These transforms reduce a sequence to a single value. They accept both
//! materialized and lazy inputs; the short-circuiting ones (`first`,
//! `any`, `all`, `reduce_until`) stop pulling as soon as the answer is
//! known.

use crate::Error;
use crate::sequence::{IntoSequence, Truthy};

/// Folds every value into an accumulator, starting from `initial`.
///
/// Each invocation starts from a fresh clone of `initial`, so an empty
/// input returns it unchanged.
///
/// # Examples
///
/// ```rust
/// use fnpipe::transform::fold;
///
/// let sum = fold::reduce(0, |total: i32, x: i32| total + x);
/// assert_eq!(sum(vec![1, 2, 3, 4, 5]), 15);
/// assert_eq!(sum(Vec::new()), 0);
/// ```
pub fn reduce<'a, S, A, F>(initial: A, function: F) -> impl Fn(S) -> A
where
    S: IntoSequence<'a>,
    A: Clone,
    F: Fn(A, S::Value) -> A,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .fold(initial.clone(), |accumulator, (_, value)| {
                function(accumulator, value)
            })
    }
}

/// Like [`reduce`], but `function` also receives each key.
pub fn reduce_with_keys<'a, S, A, F>(initial: A, function: F) -> impl Fn(S) -> A
where
    S: IntoSequence<'a>,
    A: Clone,
    F: Fn(A, S::Value, &S::Key) -> A,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .fold(initial.clone(), |accumulator, (key, value)| {
                function(accumulator, value, &key)
            })
    }
}

/// Folds like [`reduce`], stopping as soon as `stop` holds for the
/// accumulator.
///
/// `stop` is checked after every step; the value that triggers it is
/// included and nothing after it is pulled.
///
/// # Examples
///
/// ```rust
/// use fnpipe::sequence::LazySequence;
/// use fnpipe::transform::fold;
///
/// let sum_past_ten = fold::reduce_until(0, |total: u32, x: u32| total + x, |total: &u32| *total > 10);
/// assert_eq!(sum_past_ten(LazySequence::from_values(1..)), 15);
/// assert_eq!(sum_past_ten(LazySequence::from_values(1..=3)), 6);
/// ```
pub fn reduce_until<'a, S, A, F, P>(initial: A, function: F, stop: P) -> impl Fn(S) -> A
where
    S: IntoSequence<'a>,
    A: Clone,
    F: Fn(A, S::Value) -> A,
    P: Fn(&A) -> bool,
{
    move |input| {
        let mut accumulator = initial.clone();
        for (_, value) in input.into_sequence() {
            accumulator = function(accumulator, value);
            if stop(&accumulator) {
                break;
            }
        }
        accumulator
    }
}

/// Like [`reduce`], but `function` may fail.
///
/// # Errors
///
/// Returns the first error produced by `function`; later values are not
/// pulled.
pub fn try_reduce<'a, S, A, F, E>(initial: A, function: F) -> impl Fn(S) -> Result<A, E>
where
    S: IntoSequence<'a>,
    A: Clone,
    F: Fn(A, S::Value) -> Result<A, E>,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .try_fold(initial.clone(), |accumulator, (_, value)| {
                function(accumulator, value)
            })
    }
}

/// Returns the first value satisfying `predicate`.
///
/// `None` means no value matched; a matching falsy value is still
/// returned as `Some`.
///
/// # Examples
///
/// ```rust
/// use fnpipe::transform::fold;
///
/// let first_even = fold::first(|x: &i32| x % 2 == 0);
/// assert_eq!(first_even(vec![1, 2, 3, 4, 5]), Some(2));
/// assert_eq!(first_even(vec![1, 3, 5]), None);
/// ```
pub fn first<'a, S, P>(predicate: P) -> impl Fn(S) -> Option<S::Value>
where
    S: IntoSequence<'a>,
    P: Fn(&S::Value) -> bool,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .find(|(_, value)| predicate(value))
            .map(|(_, value)| value)
    }
}

/// Like [`first`], but `predicate` also receives each key.
pub fn first_with_keys<'a, S, P>(predicate: P) -> impl Fn(S) -> Option<S::Value>
where
    S: IntoSequence<'a>,
    P: Fn(&S::Value, &S::Key) -> bool,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .find(|(key, value)| predicate(value, key))
            .map(|(_, value)| value)
    }
}

/// Returns the first truthy result of `function`.
///
/// Falsy results are skipped, so a result of `None` cannot tell "nothing
/// matched" apart from "only falsy results were produced".
///
/// # Examples
///
/// ```rust
/// use fnpipe::transform::fold;
///
/// let first_positive_half = fold::first_value(|x: i32| x / 2);
/// assert_eq!(first_positive_half(vec![0, 1, 4, 6]), Some(2));
/// assert_eq!(first_positive_half(vec![1, -1]), None);
/// ```
pub fn first_value<'a, S, F, W>(function: F) -> impl Fn(S) -> Option<W>
where
    S: IntoSequence<'a>,
    F: Fn(S::Value) -> W,
    W: Truthy,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .map(|(_, value)| function(value))
            .find(Truthy::is_truthy)
    }
}

/// Like [`first_value`], but `function` also receives each key.
pub fn first_value_with_keys<'a, S, F, W>(function: F) -> impl Fn(S) -> Option<W>
where
    S: IntoSequence<'a>,
    F: Fn(S::Value, &S::Key) -> W,
    W: Truthy,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .map(|(key, value)| function(value, &key))
            .find(Truthy::is_truthy)
    }
}

/// Returns `true` if some value satisfies `predicate`; `false` for an
/// empty input.
pub fn any<'a, S, P>(predicate: P) -> impl Fn(S) -> bool
where
    S: IntoSequence<'a>,
    P: Fn(&S::Value) -> bool,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .any(|(_, value)| predicate(&value))
    }
}

/// Like [`any`], but `predicate` also receives each key.
pub fn any_with_keys<'a, S, P>(predicate: P) -> impl Fn(S) -> bool
where
    S: IntoSequence<'a>,
    P: Fn(&S::Value, &S::Key) -> bool,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .any(|(key, value)| predicate(&value, &key))
    }
}

/// Returns `true` if every value satisfies `predicate`; `true` for an
/// empty input.
pub fn all<'a, S, P>(predicate: P) -> impl Fn(S) -> bool
where
    S: IntoSequence<'a>,
    P: Fn(&S::Value) -> bool,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .all(|(_, value)| predicate(&value))
    }
}

/// Like [`all`], but `predicate` also receives each key.
pub fn all_with_keys<'a, S, P>(predicate: P) -> impl Fn(S) -> bool
where
    S: IntoSequence<'a>,
    P: Fn(&S::Value, &S::Key) -> bool,
{
    move |input| {
        input
            .into_sequence()
            .into_iter()
            .all(|(key, value)| predicate(&value, &key))
    }
}

/// Folds the first value with `first` and every later value with `rest`.
///
/// The input is walked once, so a single-pass lazy input works and its
/// first pair is not pulled twice. An empty input returns `initial`.
///
/// # Examples
///
/// ```rust
/// use fnpipe::transform::fold;
///
/// let fold = fold::head_tail(5, |total: i32, x: i32| total - x, |total: i32, x: i32| total + x);
/// assert_eq!(fold(vec![1, 2, 3]), 9);
/// assert_eq!(fold(Vec::new()), 5);
/// ```
pub fn head_tail<'a, S, A, F, G>(initial: A, first: F, rest: G) -> impl Fn(S) -> A
where
    S: IntoSequence<'a>,
    A: Clone,
    F: Fn(A, S::Value) -> A,
    G: Fn(A, S::Value) -> A,
{
    move |input| {
        let mut pairs = input.into_sequence().into_iter();
        match pairs.next() {
            Some((_, head)) => {
                let accumulator = first(initial.clone(), head);
                pairs.fold(accumulator, |accumulator, (_, value)| rest(accumulator, value))
            }
            None => initial.clone(),
        }
    }
}

/// Returns element `count - 1` of `iterate(initial, mapper)`, computed
/// directly with `count - 1` calls to `mapper`.
///
/// # Errors
///
/// Returns [`Error::ArgumentShape`] when `count` is `0`; there is no
/// element before the first.
///
/// # Examples
///
/// ```rust
/// use fnpipe::transform::fold;
///
/// assert_eq!(fold::nth(1, 0, |x: i32| x + 1), Ok(0));
/// assert_eq!(fold::nth(3, 0, |x: i32| x + 1), Ok(2));
/// assert!(fold::nth(0, 0, |x: i32| x + 1).is_err());
/// ```
pub fn nth<T, F>(count: usize, initial: T, mapper: F) -> Result<T, Error>
where
    F: Fn(T) -> T,
{
    if count == 0 {
        tracing::debug!(count, "nth rejected a zero count");
        return Err(Error::ArgumentShape {
            argument: "count",
            reason: "must be at least 1".to_string(),
        });
    }
    Ok((1..count).fold(initial, |value, _| mapper(value)))
}
