//! Sequence combinators.
//!
//! Each combinator is a factory: it takes its configuration (a callback,
//! a count, an initial value) and returns a unary transform over a
//! sequence. Transforms plug straight into [`pipe!`](crate::pipe) and
//! [`compose!`](crate::compose).
//!
//! - [`eager`]: materialize their result as an [`Entries`](crate::sequence::Entries)
//!   mapping, whatever the input shape.
//! - [`lazy`]: return a [`LazySequence`](crate::sequence::LazySequence) and do
//!   no work until it is pulled.
//! - [`fold`]: reduce a sequence to a single value, short-circuiting where
//!   the answer is known early.
//!
//! # Examples
//!
//! ```rust
//! use fnpipe::pipe;
//! use fnpipe::transform::{eager, fold};
//!
//! let total = pipe!(
//!     vec![1, 2, 3, 4, 5],
//!     eager::filter(|x: &i32| x % 2 == 1),
//!     eager::map(|x: i32| x * 10),
//!     fold::reduce(0, |sum: i32, x: i32| sum + x),
//! );
//! assert_eq!(total, 90);
//! ```

pub mod eager;
pub mod fold;
pub mod lazy;
mod nested;
