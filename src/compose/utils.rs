//! Helper functions for building pipelines.
//!
//! - [`identity`]: The identity function, unit of composition
//! - [`maybe`]: Lifts a function over an optional value
//! - [`trace`]: Logs a value as it passes through a pipeline

use std::fmt::Debug;

/// Returns the value unchanged.
///
/// The identity function is the unit element of function composition:
/// - `compose!(identity, f)` is equivalent to `f`
/// - `compose!(f, identity)` is equivalent to `f`
///
/// `compose!()` with no functions expands to it.
///
/// # Examples
///
/// ```
/// use fnpipe::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// Wraps `function` so that a `None` input short-circuits.
///
/// The returned function maps `Some(x)` to `Some(function(x))` and passes
/// `None` through without calling `function`, which lets a pipeline stage
/// skip missing values without a conditional.
///
/// # Examples
///
/// ```
/// use fnpipe::compose::maybe;
/// use fnpipe::pipe;
///
/// let parse = |text: &str| text.parse::<i32>().ok();
/// let double = maybe(|x: i32| x * 2);
///
/// assert_eq!(pipe!("21", parse, &double), Some(42));
/// assert_eq!(pipe!("many", parse, &double), None);
/// ```
#[inline]
pub fn maybe<T, U, F>(function: F) -> impl Fn(Option<T>) -> Option<U>
where
    F: Fn(T) -> U,
{
    move |value| value.map(&function)
}

/// Emits the value as a `DEBUG` event on the `fnpipe::compose` target and
/// returns it unchanged.
///
/// Drop it anywhere into a pipeline to see what flows through that point;
/// nothing is printed unless a `tracing` subscriber is installed.
///
/// # Examples
///
/// ```
/// use fnpipe::compose::trace;
/// use fnpipe::pipe;
///
/// let result = pipe!(3, |x: i32| x + 1, trace, |x: i32| x * 2);
/// assert_eq!(result, 8);
/// ```
pub fn trace<T: Debug>(value: T) -> T {
    tracing::debug!(target: "fnpipe::compose", ?value, "pipeline value");
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;

    #[rstest]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[rstest]
    fn test_maybe_skips_function_on_none() {
        let calls = Cell::new(0);
        let counted = maybe(|x: i32| {
            calls.set(calls.get() + 1);
            x + 1
        });

        assert_eq!(counted(None), None);
        assert_eq!(calls.get(), 0);
        assert_eq!(counted(Some(1)), Some(2));
        assert_eq!(calls.get(), 1);
    }

    #[rstest]
    fn test_maybe_chains_in_pipe() {
        let halve_even = |x: i32| if x % 2 == 0 { Some(x / 2) } else { None };
        let lookup = maybe(halve_even);
        let result = crate::pipe!(Some(8), &lookup, Option::flatten, &lookup, Option::flatten);
        assert_eq!(result, Some(2));
    }

    #[rstest]
    fn test_trace_returns_value() {
        assert_eq!(trace(vec!["a"]), vec!["a"]);
    }
}
