//! Structural evolve: copy a record with some fields replaced.

use std::any::Any;
use std::fmt;

use rustc_hash::FxHashMap;

use super::Record;
use crate::{Error, Result};

/// Field replacements for [`evolve`], keyed by field name.
///
/// Each value is stored type-erased and checked against the field's
/// declared type when the evolve runs. A value may be the field's value
/// type `T` or a whole [`Field<T>`](super::Field), which can also reset a
/// field to uninitialized. Setting the same name twice keeps the last
/// value.
///
/// # Examples
///
/// ```rust
/// use fnpipe::overrides;
/// use fnpipe::record::Overrides;
///
/// let built = Overrides::new().set("x", 3).set("label", "origin");
/// let from_macro = overrides!(x = 3, label = "origin");
/// assert_eq!(
///     built.names().collect::<Vec<_>>(),
///     from_macro.names().collect::<Vec<_>>()
/// );
/// ```
#[derive(Default)]
pub struct Overrides {
    entries: Vec<(String, Box<dyn Any>)>,
}

impl Overrides {
    /// Creates an empty override set.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Adds or replaces the override for `name`.
    #[must_use]
    pub fn set<T: Any>(mut self, name: impl Into<String>, value: T) -> Self {
        self.insert(name, value);
        self
    }

    /// Adds or replaces the override for `name` in place.
    pub fn insert<T: Any>(&mut self, name: impl Into<String>, value: T) {
        let name = name.into();
        let value: Box<dyn Any> = Box::new(value);
        match self.entries.iter_mut().find(|(existing, _)| *existing == name) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Number of overridden fields.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is overridden.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The overridden field names, in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(name, _)| name.as_str())
    }
}

impl fmt::Debug for Overrides {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_set().entries(self.names()).finish()
    }
}

/// Builds an [`Overrides`] set from `name = value` pairs.
///
/// # Examples
///
/// ```rust
/// use fnpipe::overrides;
///
/// let overrides = overrides!(name = "Ada".to_string(), age = 36_u32);
/// assert_eq!(overrides.len(), 2);
/// assert!(overrides!().is_empty());
/// ```
#[macro_export]
macro_rules! overrides {
    ($($name:ident = $value:expr),* $(,)?) => {
        $crate::record::Overrides::new()$(.set(stringify!($name), $value))*
    };
}

/// Returns a copy of `source` with the fields named in `overrides`
/// replaced.
///
/// Every declared field of `R` is visited in order:
///
/// 1. an override for the field wins, even when the source holds a value;
/// 2. otherwise an initialized source field is cloned;
/// 3. otherwise the field stays uninitialized.
///
/// The result starts from [`Record::blank`], so no constructor or
/// validation logic runs. `source` is never modified.
///
/// # Errors
///
/// - [`Error::UnknownField`] when an override names a field `R` does not
///   declare. Names are checked before anything is copied.
/// - [`Error::FieldType`] when an override value has neither the field's
///   value type nor its `Field` type.
///
/// # Examples
///
/// ```rust
/// use fnpipe::overrides;
/// use fnpipe::record::{Field, Record, Shape, evolve};
///
/// #[derive(Debug, Default, PartialEq)]
/// struct Point {
///     x: Field<i32>,
///     y: Field<i32>,
/// }
///
/// impl Record for Point {
///     fn describe() -> Shape<Self> {
///         Shape::<Self>::new("Point")
///             .field("x", |point| &point.x, |point| &mut point.x)
///             .field("y", |point| &point.y, |point| &mut point.y)
///     }
///
///     fn blank() -> Self {
///         Self::default()
///     }
/// }
///
/// let point = Point { x: Field::Initialized(1), y: Field::Uninitialized };
/// let moved = evolve(&point, overrides!(x = 5)).unwrap();
///
/// assert_eq!(moved, Point { x: Field::Initialized(5), y: Field::Uninitialized });
/// assert!(evolve(&point, overrides!(z = 0)).is_err());
/// ```
pub fn evolve<R: Record>(source: &R, overrides: Overrides) -> Result<R> {
    let shape = R::shape();

    if let Some(unknown) = overrides.names().find(|name| shape.find(name).is_none()) {
        tracing::debug!(record = shape.type_name(), field = unknown, "evolve rejected an unknown field");
        return Err(Error::UnknownField {
            type_name: shape.type_name(),
            field: unknown.to_string(),
        });
    }

    tracing::trace!(
        record = shape.type_name(),
        overrides = overrides.len(),
        "evolving record"
    );

    let mut replacements: FxHashMap<String, Box<dyn Any>> = overrides.entries.into_iter().collect();
    let mut result = R::blank();
    for field in shape.fields() {
        match replacements.remove(field.name()) {
            Some(value) => {
                field
                    .assign(&mut result, value)
                    .map_err(|_| Error::FieldType {
                        type_name: shape.type_name(),
                        field: field.name(),
                        expected: field.value_type(),
                    })?;
            }
            None => field.copy(source, &mut result),
        }
    }
    Ok(result)
}

/// Method-call form of [`evolve`], available on every [`Record`].
///
/// # Examples
///
/// ```rust
/// use fnpipe::overrides;
/// use fnpipe::record::{Evolvable, Field, Record, Shape};
///
/// #[derive(Debug, Default, Clone, PartialEq)]
/// struct Label {
///     text: Field<String>,
/// }
///
/// impl Record for Label {
///     fn describe() -> Shape<Self> {
///         Shape::<Self>::new("Label").field("text", |label| &label.text, |label| &mut label.text)
///     }
///
///     fn blank() -> Self {
///         Self::default()
///     }
/// }
///
/// let label = Label { text: Field::Initialized("draft".to_string()) };
/// let copy = label.evolve(overrides!()).unwrap();
/// assert_eq!(copy, label);
/// ```
pub trait Evolvable: Record {
    /// Returns a copy of `self` with the fields in `overrides` replaced.
    ///
    /// # Errors
    ///
    /// See [`evolve`].
    fn evolve(&self, overrides: Overrides) -> Result<Self> {
        evolve(self, overrides)
    }
}

impl<R: Record> Evolvable for R {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Field, Shape};
    use rstest::rstest;

    #[derive(Debug, Default, Clone, PartialEq)]
    struct Account {
        owner: Field<String>,
        balance: Field<i64>,
        note: Field<Option<String>>,
    }

    impl Record for Account {
        fn describe() -> Shape<Self> {
            Shape::<Self>::new("Account")
                .field("owner", |account| &account.owner, |account| &mut account.owner)
                .field("balance", |account| &account.balance, |account| &mut account.balance)
                .field("note", |account| &account.note, |account| &mut account.note)
        }

        fn blank() -> Self {
            Self::default()
        }
    }

    fn opened() -> Account {
        Account {
            owner: Field::Initialized("ada".to_string()),
            balance: Field::Initialized(100),
            note: Field::Uninitialized,
        }
    }

    #[rstest]
    fn test_no_overrides_copies_including_uninitialized() {
        let source = opened();
        let copy = evolve(&source, Overrides::new());
        assert_eq!(copy, Ok(source));
    }

    #[rstest]
    fn test_override_sets_uninitialized_field_only() {
        let source = Account {
            balance: Field::Uninitialized,
            ..opened()
        };
        let result = evolve(&source, overrides!(balance = 5_i64));
        assert_eq!(
            result,
            Ok(Account {
                balance: Field::Initialized(5),
                ..opened()
            })
        );
    }

    #[rstest]
    fn test_null_override_wins() {
        let source = Account {
            note: Field::Initialized(Some("vip".to_string())),
            ..opened()
        };
        let result = evolve(&source, overrides!(note = None::<String>));
        assert_eq!(result.map(|account| account.note), Ok(Field::Initialized(None)));
    }

    #[rstest]
    fn test_field_override_can_unset() {
        let result = evolve(&opened(), overrides!(owner = Field::<String>::Uninitialized));
        assert_eq!(result.map(|account| account.owner), Ok(Field::Uninitialized));
    }

    #[rstest]
    fn test_unknown_field_is_rejected() {
        let result = evolve(&opened(), overrides!(balance = 1_i64, currency = "EUR"));
        assert_eq!(
            result,
            Err(Error::UnknownField {
                type_name: "Account",
                field: "currency".to_string(),
            })
        );
    }

    #[rstest]
    fn test_wrong_type_is_rejected() {
        let result = evolve(&opened(), overrides!(balance = 1_i32));
        assert_eq!(
            result,
            Err(Error::FieldType {
                type_name: "Account",
                field: "balance",
                expected: "i64",
            })
        );
    }

    #[rstest]
    fn test_source_is_untouched() {
        let source = opened();
        let _ = source.evolve(overrides!(owner = "grace".to_string()));
        assert_eq!(source, opened());
    }

    #[rstest]
    fn test_last_override_for_a_name_wins() {
        let overrides = Overrides::new().set("balance", 1_i64).set("balance", 2_i64);
        assert_eq!(overrides.len(), 1);
        let result = evolve(&opened(), overrides);
        assert_eq!(result.map(|account| account.balance), Ok(Field::Initialized(2)));
    }
}
