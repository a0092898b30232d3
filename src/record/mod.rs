//! Records: structs with three-state fields, structural evolve, and
//! argument-based construction.
//!
//! A *record* is a struct whose fields are each a [`Field<T>`], so every
//! field can be uninitialized as well as hold a value. Implementing
//! [`Record`] (usually with `#[derive(Record)]`) describes the field list
//! once; [`evolve`] then produces modified copies without running any
//! constructor:
//!
//! ```rust
//! use fnpipe::overrides;
//! use fnpipe::record::{Evolvable, Field, Record, Shape};
//!
//! #[derive(Debug, Default, PartialEq)]
//! struct User {
//!     name: Field<String>,
//!     email: Field<Option<String>>,
//! }
//!
//! impl Record for User {
//!     fn describe() -> Shape<Self> {
//!         Shape::<Self>::new("User")
//!             .field("name", |user| &user.name, |user| &mut user.name)
//!             .field("email", |user| &user.email, |user| &mut user.email)
//!     }
//!
//!     fn blank() -> Self {
//!         Self::default()
//!     }
//! }
//!
//! let draft = User { name: Field::Initialized("Ada".to_string()), ..User::default() };
//! let renamed = draft.evolve(overrides!(name = "Grace".to_string()))?;
//!
//! assert_eq!(renamed.name, Field::Initialized("Grace".to_string()));
//! assert!(!renamed.email.is_initialized());
//! # Ok::<(), fnpipe::Error>(())
//! ```
//!
//! [`Newable`] covers the other direction: building a value from
//! positional and named [`Arguments`], which makes constructors usable as
//! pipeline stages.

mod evolve;
mod field;
mod newable;
mod shape;

pub use evolve::{Evolvable, Overrides, evolve};
pub use field::Field;
pub use newable::{Arguments, BoundArguments, Newable};
pub use shape::{FieldAccess, FieldDescriptor, Shape, shape_of};

#[cfg(feature = "derive")]
pub use fnpipe_derive::{Newable, Record};

/// A struct whose fields are all [`Field`] slots, described by a [`Shape`].
///
/// Both required methods are generated by `#[derive(Record)]`, which
/// accepts structs with named fields that are all `Field<T>`:
///
/// ```rust
/// use fnpipe::record::{Field, Record};
///
/// #[derive(Record)]
/// struct Point {
///     x: Field<i32>,
///     y: Field<i32>,
/// }
///
/// let blank = Point::blank();
/// assert!(!blank.x.is_initialized());
/// assert_eq!(Point::shape().field_names().collect::<Vec<_>>(), vec!["x", "y"]);
/// ```
pub trait Record: Sized + 'static {
    /// Describes the declared fields, in declaration order.
    ///
    /// Called at most a few times per type; use [`Record::shape`] for the
    /// cached result.
    fn describe() -> Shape<Self>;

    /// Returns an instance with every field uninitialized.
    fn blank() -> Self;

    /// The cached shape of this type.
    fn shape() -> &'static Shape<Self> {
        shape_of::<Self>()
    }
}
