//! Error type shared by the record and transform modules.
//!
//! Callback failures never appear here: panics unwind through the
//! combinators untouched, and the `try_*` combinators hand back the
//! callback's own error type.

use thiserror::Error;

/// Errors raised by configuration checks, structural evolve, and
/// argument binding.
///
/// # Examples
///
/// ```rust
/// use fnpipe::Error;
///
/// let error = Error::UnknownField {
///     type_name: "Point",
///     field: "z".to_string(),
/// };
/// assert_eq!(format!("{error}"), "Point has no field named `z`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An evolve override names a field the record type does not declare.
    #[error("{type_name} has no field named `{field}`")]
    UnknownField {
        /// The record type being evolved.
        type_name: &'static str,
        /// The offending override name.
        field: String,
    },

    /// An evolve override carries a value of the wrong type.
    #[error("field `{field}` of {type_name} expects a value of type {expected}")]
    FieldType {
        /// The record type being evolved.
        type_name: &'static str,
        /// The field whose override was rejected.
        field: &'static str,
        /// The declared value type of the field.
        expected: &'static str,
    },

    /// A combinator or factory was configured with an argument outside
    /// its accepted shape.
    #[error("invalid argument `{argument}`: {reason}")]
    ArgumentShape {
        /// The argument that was rejected.
        argument: &'static str,
        /// Why it was rejected.
        reason: String,
    },

    /// A named argument does not match any declared parameter.
    #[error("{type_name} has no parameter named `{parameter}`")]
    UnknownParameter {
        /// The type being constructed.
        type_name: &'static str,
        /// The unmatched argument name.
        parameter: String,
    },

    /// A parameter received both a positional and a named argument.
    #[error("parameter `{parameter}` of {type_name} is bound more than once")]
    DuplicateArgument {
        /// The type being constructed.
        type_name: &'static str,
        /// The parameter bound twice.
        parameter: &'static str,
    },

    /// A required parameter received no argument.
    #[error("missing argument for parameter `{parameter}` of {type_name}")]
    MissingArgument {
        /// The type being constructed.
        type_name: &'static str,
        /// The unbound parameter.
        parameter: &'static str,
    },

    /// An argument value does not have the parameter's type.
    #[error("parameter `{parameter}` of {type_name} expects a value of type {expected}")]
    ArgumentType {
        /// The type being constructed.
        type_name: &'static str,
        /// The parameter whose argument was rejected.
        parameter: &'static str,
        /// The declared parameter type.
        expected: &'static str,
    },
}

/// Result alias using the crate [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
