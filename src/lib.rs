//! # fnpipe
//!
//! Point-free pipelines for Rust: function composition, eager and lazy
//! sequence combinators, and structural updates of records.
//!
//! ## Overview
//!
//! - **Sequences**: one adapter over materialized mappings and single-pass
//!   lazy producers, both keyed and ordered
//! - **Transforms**: `map`, `filter`, `reduce`, `take`, `first`, `any`,
//!   `all` and friends, as factories returning unary functions
//! - **Composition**: `compose!`, `pipe!`, and `maybe` to glue them
//!   together
//! - **Records**: three-state fields, `evolve` for immutable updates, and
//!   `Newable` for argument-based construction
//!
//! ## Feature Flags
//!
//! - `sequence`: The sequence adapter (`Entries`, `LazySequence`)
//! - `transform`: Eager, lazy, and folding combinators
//! - `compose`: `compose!`, `pipe!`, and helpers
//! - `record`: `Field`, `Record`, `evolve`, and `Newable`
//! - `derive`: `#[derive(Record)]` and `#[derive(Newable)]`
//! - `serde`: Serialize and deserialize `Entries` as an ordered map
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use fnpipe::prelude::*;
//!
//! let words = pipe!(
//!     vec!["pipe", "", "compose", "maybe"],
//!     lazy::filter_truthy(),
//!     lazy::map(|word: &str| word.len()),
//!     eager::collect(),
//! );
//! assert_eq!(words.into_values(), vec![4, 7, 5]);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the sequence types, the transform modules, the composition
/// macros, and the record traits.
///
/// # Usage
///
/// ```rust
/// use fnpipe::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{Error, Result};

    #[cfg(feature = "sequence")]
    pub use crate::sequence::{Entries, IntoSequence, LazySequence, Sequence, Truthy};

    #[cfg(feature = "transform")]
    pub use crate::transform::{eager, fold, lazy};

    #[cfg(feature = "compose")]
    pub use crate::compose::{Stage, compose, identity, maybe, pipe, trace};

    #[cfg(feature = "record")]
    pub use crate::record::{Arguments, Evolvable, Field, Newable, Overrides, Record};

    #[cfg(feature = "record")]
    pub use crate::{args, overrides};
}

pub mod error;

pub use error::{Error, Result};

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "transform")]
pub mod transform;

#[cfg(feature = "compose")]
pub mod compose;

#[cfg(feature = "record")]
pub mod record;

#[cfg(feature = "derive")]
pub use fnpipe_derive::{Newable, Record};
