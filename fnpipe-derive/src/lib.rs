//! Derive macros for fnpipe records.
//!
//! # Available Derive Macros
//!
//! - [`Record`]: Describes a struct of `Field<T>` slots so it can be
//!   evolved
//! - [`Newable`]: Builds a struct from positional and named arguments
//!
//! Generated code refers to `::fnpipe`, so these macros are meant to be
//! used through the `fnpipe` crate's `derive` feature rather than
//! directly.
//!
//! # Example
//!
//! ```rust,ignore
//! use fnpipe::overrides;
//! use fnpipe::record::{Evolvable, Field, Record};
//!
//! #[derive(Debug, PartialEq, Record)]
//! struct Point {
//!     x: Field<i32>,
//!     y: Field<i32>,
//! }
//!
//! let origin = Point { x: Field::Initialized(0), y: Field::Initialized(0) };
//! let moved = origin.evolve(overrides!(x = 3)).unwrap();
//! assert_eq!(moved.x, Field::Initialized(3));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod field_type;
mod newable;
mod record;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro implementing `fnpipe::record::Record`.
///
/// # Requirements
///
/// - The type must be a struct with named fields
/// - Every field must be declared as `Field<T>` (any path prefix), with
///   `T: Clone + 'static`
///
/// # Generated Code
///
/// ```rust,ignore
/// impl Record for Point {
///     fn describe() -> Shape<Self> {
///         Shape::<Self>::new("Point")
///             .field("x", |record| &record.x, |record| &mut record.x)
///             .field("y", |record| &record.y, |record| &mut record.y)
///     }
///
///     fn blank() -> Self {
///         Self { x: Field::Uninitialized, y: Field::Uninitialized }
///     }
/// }
/// ```
#[proc_macro_derive(Record)]
pub fn derive_record(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(record::expand(&input))
}

/// Derive macro implementing `fnpipe::record::Newable`.
///
/// Declares one parameter per field, in declaration order:
///
/// - plain fields are required and bound with `BoundArguments::required`;
/// - `Field<T>` fields are optional and stay uninitialized when no
///   argument is given;
/// - tuple struct fields are named by position (`"0"`, `"1"`, ...);
/// - unit structs take no parameters.
///
/// # Example
///
/// ```rust,ignore
/// use fnpipe::args;
/// use fnpipe::record::{Field, Newable};
///
/// #[derive(Debug, PartialEq, Newable)]
/// struct Span {
///     start: usize,
///     end: usize,
///     label: Field<String>,
/// }
///
/// let span = Span::make(args![2_usize, end = 7_usize]).unwrap();
/// assert_eq!(span.label, Field::Uninitialized);
/// ```
#[proc_macro_derive(Newable)]
pub fn derive_newable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(newable::expand(&input))
}
