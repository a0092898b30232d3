//! The `compose!` macro for function composition.
//!
//! This module provides the [`compose!`] macro which composes functions
//! from left to right, in the order the data flows through them.

/// Composes functions from left to right.
///
/// `compose!(f, g, h)(x)` is equivalent to `h(g(f(x)))`: the leftmost
/// function is applied first.
///
/// # Laws
///
/// - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
/// - **Identity**: `compose!()` is [`identity`](crate::compose::identity), and
///   `compose!(f, identity) == compose!(identity, f) == f`
///
/// # Syntax
///
/// - `compose!()` - The identity function
/// - `compose!(f)` - Behaves like `f`
/// - `compose!(f, g)` - Returns `|x| g(f(x))`
/// - `compose!(f, [g, h], k)` - A bracketed group is composed first and
///   applied in place, so it behaves exactly as if its functions were
///   written inline. Groups may nest.
///
/// Each function expression is evaluated once, when the composition is
/// built.
///
/// # Examples
///
/// ## Basic composition
///
/// ```
/// use fnpipe::compose;
///
/// fn add_one(x: i32) -> i32 { x + 1 }
/// fn double(x: i32) -> i32 { x * 2 }
///
/// // add_one first, then double: double(add_one(5)) = 12
/// let composed = compose!(add_one, double);
/// assert_eq!(composed(5), 12);
/// ```
///
/// ## Nested groups
///
/// ```
/// use fnpipe::compose;
///
/// let add_one = |x: i32| x + 1;
/// let double = |x: i32| x * 2;
/// let square = |x: i32| x * x;
///
/// let grouped = compose!(add_one, [double, [square]], add_one);
/// let inline = compose!(add_one, double, square, add_one);
/// assert_eq!(grouped(2), inline(2));
/// assert_eq!(grouped(2), 37);
/// ```
///
/// ## Type conversion
///
/// ```
/// use fnpipe::compose;
///
/// fn to_string(x: i32) -> String { x.to_string() }
/// fn get_length(s: String) -> usize { s.len() }
///
/// let composed = compose!(to_string, get_length);
/// assert_eq!(composed(12345), 5);
/// ```
///
/// ## Building transforms once, applying them many times
///
/// ```
/// use fnpipe::compose;
/// use fnpipe::transform::{eager, fold};
///
/// let sum_of_doubled_evens = compose!(
///     eager::filter(|x: &i32| x % 2 == 0),
///     eager::map(|x: i32| x * 2),
///     fold::reduce(0, |total: i32, x: i32| total + x),
/// );
/// assert_eq!(sum_of_doubled_evens(vec![1, 2, 3, 4]), 12);
/// assert_eq!(sum_of_doubled_evens(vec![10]), 20);
/// ```
#[macro_export]
macro_rules! compose {
    // No functions: identity
    () => {
        $crate::compose::identity
    };

    // Bracketed group: composed first, then treated as one function
    ([$($group:tt)*] $(, $($remaining:tt)*)?) => {{
        let first = $crate::compose!($($group)*);
        let rest = $crate::compose!($($($remaining)*)?);
        move |input| rest(first(input))
    }};

    // Plain function followed by the remaining ones
    ($function:expr $(, $($remaining:tt)*)?) => {{
        let first = $function;
        let rest = $crate::compose!($($($remaining)*)?);
        move |input| rest(first(input))
    }};
}
