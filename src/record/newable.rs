//! Pipe-friendly construction from positional and named arguments.

use std::any::{Any, type_name};
use std::fmt;

use super::Field;
use crate::{Error, Result};

/// Arguments for [`Newable::make`]: an ordered positional list plus named
/// values.
///
/// Usually built with [`args!`](crate::args).
#[derive(Default)]
pub struct Arguments {
    positional: Vec<Box<dyn Any>>,
    named: Vec<(String, Box<dyn Any>)>,
}

impl Arguments {
    /// Creates an empty argument list.
    pub const fn new() -> Self {
        Self {
            positional: Vec::new(),
            named: Vec::new(),
        }
    }

    /// Appends a positional argument.
    #[must_use]
    pub fn positional<T: Any>(mut self, value: T) -> Self {
        self.positional.push(Box::new(value));
        self
    }

    /// Adds a named argument.
    #[must_use]
    pub fn named<T: Any>(mut self, name: impl Into<String>, value: T) -> Self {
        self.named.push((name.into(), Box::new(value)));
        self
    }

    /// Total number of arguments.
    pub fn len(&self) -> usize {
        self.positional.len() + self.named.len()
    }

    /// Returns `true` when there are no arguments.
    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }

    /// Matches the arguments against `parameters`.
    ///
    /// Positional arguments fill parameters in declaration order; named
    /// ones bind by name.
    ///
    /// # Errors
    ///
    /// - [`Error::ArgumentShape`] for more positional arguments than
    ///   parameters;
    /// - [`Error::UnknownParameter`] for a name not in `parameters`;
    /// - [`Error::DuplicateArgument`] for a parameter bound twice.
    pub fn bind(
        self,
        type_name: &'static str,
        parameters: &'static [&'static str],
    ) -> Result<BoundArguments> {
        if self.positional.len() > parameters.len() {
            tracing::debug!(
                target_type = type_name,
                given = self.positional.len(),
                accepted = parameters.len(),
                "too many positional arguments"
            );
            return Err(Error::ArgumentShape {
                argument: "positional",
                reason: format!(
                    "{type_name} takes {} parameters but {} positional arguments were given",
                    parameters.len(),
                    self.positional.len()
                ),
            });
        }

        let mut slots: Vec<Option<Box<dyn Any>>> = parameters.iter().map(|_| None).collect();
        for (slot, value) in slots.iter_mut().zip(self.positional) {
            *slot = Some(value);
        }

        for (name, value) in self.named {
            let Some(index) = parameters.iter().position(|parameter| *parameter == name) else {
                tracing::debug!(target_type = type_name, parameter = %name, "unknown named argument");
                return Err(Error::UnknownParameter {
                    type_name,
                    parameter: name,
                });
            };
            if slots[index].replace(value).is_some() {
                tracing::debug!(target_type = type_name, parameter = parameters[index], "argument bound twice");
                return Err(Error::DuplicateArgument {
                    type_name,
                    parameter: parameters[index],
                });
            }
        }

        Ok(BoundArguments {
            type_name,
            parameters,
            slots,
        })
    }
}

impl fmt::Debug for Arguments {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Arguments")
            .field("positional", &self.positional.len())
            .field(
                "named",
                &self.named.iter().map(|(name, _)| name.as_str()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Builds [`Arguments`] from a list of positional values followed or
/// interleaved with `name = value` pairs.
///
/// # Examples
///
/// ```rust
/// use fnpipe::args;
///
/// let arguments = args![1, 2.5, label = "point"];
/// assert_eq!(arguments.len(), 3);
/// assert!(args![].is_empty());
/// ```
#[macro_export]
macro_rules! args {
    (@collect $arguments:expr ;) => {
        $arguments
    };
    (@collect $arguments:expr ; $name:ident = $value:expr $(, $($rest:tt)*)?) => {
        $crate::args!(@collect $arguments.named(stringify!($name), $value) ; $($($rest)*)?)
    };
    (@collect $arguments:expr ; $value:expr $(, $($rest:tt)*)?) => {
        $crate::args!(@collect $arguments.positional($value) ; $($($rest)*)?)
    };
    ($($tokens:tt)*) => {
        $crate::args!(@collect $crate::record::Arguments::new() ; $($tokens)*)
    };
}

/// Arguments matched to declared parameters, ready to be taken out by
/// [`Newable::construct`].
pub struct BoundArguments {
    type_name: &'static str,
    parameters: &'static [&'static str],
    slots: Vec<Option<Box<dyn Any>>>,
}

impl BoundArguments {
    /// Takes the argument bound to the required parameter `name`.
    ///
    /// # Errors
    ///
    /// [`Error::MissingArgument`] when nothing was bound,
    /// [`Error::ArgumentType`] when the value is not a `T`.
    pub fn required<T: Any>(&mut self, name: &'static str) -> Result<T> {
        match self.take(name)? {
            Some(value) => self.downcast(name, value),
            None => {
                tracing::debug!(target_type = self.type_name, parameter = name, "missing argument");
                Err(Error::MissingArgument {
                    type_name: self.type_name,
                    parameter: name,
                })
            }
        }
    }

    /// Takes the argument bound to the optional parameter `name`, leaving
    /// the field uninitialized when nothing was bound.
    ///
    /// # Errors
    ///
    /// [`Error::ArgumentType`] when the value is not a `T`.
    pub fn optional<T: Any>(&mut self, name: &'static str) -> Result<Field<T>> {
        match self.take(name)? {
            Some(value) => self.downcast(name, value).map(Field::Initialized),
            None => Ok(Field::Uninitialized),
        }
    }

    fn take(&mut self, name: &'static str) -> Result<Option<Box<dyn Any>>> {
        let index = self
            .parameters
            .iter()
            .position(|parameter| *parameter == name)
            .ok_or_else(|| Error::UnknownParameter {
                type_name: self.type_name,
                parameter: name.to_string(),
            })?;
        Ok(self.slots[index].take())
    }

    fn downcast<T: Any>(&self, name: &'static str, value: Box<dyn Any>) -> Result<T> {
        value.downcast::<T>().map(|value| *value).map_err(|_| {
            tracing::debug!(target_type = self.type_name, parameter = name, "argument of the wrong type");
            Error::ArgumentType {
                type_name: self.type_name,
                parameter: name,
                expected: type_name::<T>(),
            }
        })
    }
}

impl fmt::Debug for BoundArguments {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound: Vec<&str> = self
            .parameters
            .iter()
            .zip(&self.slots)
            .filter(|(_, slot)| slot.is_some())
            .map(|(parameter, _)| *parameter)
            .collect();
        formatter
            .debug_struct("BoundArguments")
            .field("type_name", &self.type_name)
            .field("bound", &bound)
            .finish()
    }
}

/// Construction through [`Arguments`], so a type's constructor can be used
/// as a pipeline stage.
///
/// Implement by hand or with `#[derive(Newable)]`, which declares one
/// parameter per field: plain fields are required, `Field<T>` fields are
/// optional.
///
/// # Examples
///
/// ```rust
/// use fnpipe::record::{BoundArguments, Newable};
/// use fnpipe::{Result, args, pipe};
///
/// #[derive(Debug, PartialEq)]
/// struct Span {
///     start: usize,
///     end: usize,
/// }
///
/// impl Newable for Span {
///     const TYPE_NAME: &'static str = "Span";
///     const PARAMETERS: &'static [&'static str] = &["start", "end"];
///
///     fn construct(mut arguments: BoundArguments) -> Result<Self> {
///         Ok(Self {
///             start: arguments.required("start")?,
///             end: arguments.required("end")?,
///         })
///     }
/// }
///
/// let span = pipe!(args![2_usize, end = 7_usize], Span::make);
/// assert_eq!(span, Ok(Span { start: 2, end: 7 }));
/// ```
pub trait Newable: Sized {
    /// The type name used in error messages.
    const TYPE_NAME: &'static str;

    /// The declared parameter names, in positional order.
    const PARAMETERS: &'static [&'static str];

    /// Builds the value from arguments already matched to
    /// [`PARAMETERS`](Self::PARAMETERS).
    ///
    /// # Errors
    ///
    /// Missing or mistyped arguments.
    fn construct(arguments: BoundArguments) -> Result<Self>;

    /// Binds `arguments` to the declared parameters and builds the value.
    ///
    /// # Errors
    ///
    /// Any binding error from [`Arguments::bind`] or
    /// [`construct`](Self::construct).
    fn make(arguments: Arguments) -> Result<Self> {
        Self::construct(arguments.bind(Self::TYPE_NAME, Self::PARAMETERS)?)
    }
}
