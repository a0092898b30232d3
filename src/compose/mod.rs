//! Function composition utilities.
//!
//! Pipelines in this crate are built from unary functions: every
//! combinator in [`transform`](crate::transform) returns one. This module
//! glues them together.
//!
//! # Overview
//!
//! - [`compose!`]: Compose functions left-to-right into a new function
//! - [`pipe!`]: Apply functions left-to-right to a value immediately
//! - [`compose()`] and [`pipe()`]: The same over [`Stage`] lists built at run time
//! - [`maybe`]: Let `None` skip a stage
//! - [`identity`]: The unit of composition
//! - [`trace`]: Log whatever passes a point in the pipeline
//!
//! Both macros accept bracketed groups of functions, which behave as if
//! their contents were written inline.
//!
//! # Examples
//!
//! ## Function composition
//!
//! ```
//! use fnpipe::compose;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // compose!(f, g)(x) = g(f(x))
//! let composed = compose!(add_one, double);
//! assert_eq!(composed(5), 12);
//! ```
//!
//! ## Pipeline
//!
//! ```
//! use fnpipe::pipe;
//!
//! fn add_one(x: i32) -> i32 { x + 1 }
//! fn double(x: i32) -> i32 { x * 2 }
//!
//! // pipe!(x, f, g) = g(f(x))
//! let result = pipe!(5, double, add_one);
//! assert_eq!(result, 11);
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose!(f, compose!(g, h)) == compose!(compose!(f, g), h)`
//! - **Identity**: `compose!(identity, f) == compose!(f, identity) == f`
//! - **Pipe is applied composition**: `pipe!(x, f, g) == compose!(f, g)(x)`

mod compose_macro;
mod pipe_macro;
mod stages;
mod utils;

pub use stages::{Stage, compose, pipe};
pub use utils::{identity, maybe, trace};

// Re-export macros (they are already at crate root via #[macro_export])
pub use crate::compose;
pub use crate::pipe;
