//! The `pipe!` macro for left-to-right function application.
//!
//! This module provides the [`pipe!`] macro which applies functions
//! from left to right, following the data flow style of programming.

/// Pipes a value through a series of functions from left to right.
///
/// `pipe!(x, f, g, h)` is equivalent to `h(g(f(x)))`, and to
/// `compose!(f, g, h)(x)` evaluated on the spot.
///
/// # Syntax
///
/// - `pipe!(x)` - Returns `x` unchanged
/// - `pipe!(x, f)` - Returns `f(x)`
/// - `pipe!(x, f, [g, h], k)` - Bracketed groups are applied in place, as
///   if their functions were written inline
///
/// # Type Requirements
///
/// Each function only needs to implement [`FnOnce`], since each function
/// is called exactly once. This allows using functions that consume their
/// captured environment.
///
/// # Examples
///
/// ## Basic pipeline
///
/// ```
/// use fnpipe::pipe;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // pipe!(x, f, g) = g(f(x)) = add_one(double(5)) = 11
/// let result = pipe!(5, double, add_one);
/// assert_eq!(result, 11);
/// ```
///
/// ## Grouped stages
///
/// ```
/// use fnpipe::pipe;
///
/// fn square(x: i32) -> i32 { x * x }
/// fn double(x: i32) -> i32 { x * 2 }
/// fn add_one(x: i32) -> i32 { x + 1 }
///
/// // 3 -> square = 9 -> double = 18 -> add_one = 19
/// assert_eq!(pipe!(3, square, [double, [add_one]]), 19);
/// ```
///
/// ## Sequence pipeline
///
/// ```
/// use fnpipe::pipe;
/// use fnpipe::transform::{eager, fold};
///
/// let result = pipe!(
///     vec![5, 6, 7, 8],
///     eager::map(|x: i32| x * 3),
///     eager::filter(|x: &i32| x % 2 == 0),
///     fold::reduce(0, |total: i32, x: i32| total + x),
/// );
/// assert_eq!(result, 42);
/// ```
///
/// ## With consuming closures
///
/// ```
/// use fnpipe::pipe;
///
/// let suffix = String::from("!");
/// let result = pipe!("hello", str::to_uppercase, move |s: String| s + &suffix);
/// assert_eq!(result, "HELLO!");
/// ```
#[macro_export]
macro_rules! pipe {
    // Value only: return as is
    ($value:expr $(,)?) => {
        $value
    };

    // Bracketed group: pipe through the group, then continue
    ($value:expr, [$($group:tt)*] $(, $($remaining:tt)*)?) => {
        $crate::pipe!($crate::pipe!($value, $($group)*) $(, $($remaining)*)?)
    };

    // Plain function: apply it, then continue
    ($value:expr, $function:expr $(, $($remaining:tt)*)?) => {
        $crate::pipe!($function($value) $(, $($remaining)*)?)
    };
}

#[cfg(test)]
mod tests {
    use crate::compose;
    use rstest::rstest;

    #[rstest]
    fn test_pipe_value_only() {
        let result = pipe!(42);
        assert_eq!(result, 42);
    }

    #[rstest]
    fn test_pipe_single() {
        let double = |x: i32| x * 2;
        let result = pipe!(5, double);
        assert_eq!(result, 10);
    }

    #[rstest]
    fn test_pipe_three() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        // square(3) = 9, double(9) = 18, add_one(18) = 19
        let result = pipe!(3, square, double, add_one);
        assert_eq!(result, 19);
    }

    #[rstest]
    fn test_pipe_nested_groups_match_inline() {
        let square = |x: i32| x * x;
        let double = |x: i32| x * 2;
        let add_one = |x: i32| x + 1;
        assert_eq!(
            pipe!(2, [square, [double]], [], add_one),
            pipe!(2, square, double, add_one)
        );
    }

    #[rstest]
    fn test_pipe_matches_compose() {
        let subtract = |x: i32| x - 3;
        let halve = |x: i32| x / 2;
        assert_eq!(pipe!(11, subtract, halve), compose!(subtract, halve)(11));
    }
}
