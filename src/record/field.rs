//! The three-state record field.

/// A record field slot that may hold no value at all.
///
/// `Uninitialized` is distinct from holding `None`: a nullable field is
/// declared as `Field<Option<T>>`, so it can be unset, set to `None`, or
/// set to a value.
///
/// # Examples
///
/// ```rust
/// use fnpipe::record::Field;
///
/// let mut nickname: Field<Option<&str>> = Field::Uninitialized;
/// assert!(!nickname.is_initialized());
///
/// nickname.set(None);
/// assert_eq!(nickname.get(), Some(&None));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Field<T> {
    /// The field holds no value.
    #[default]
    Uninitialized,
    /// The field holds a value.
    Initialized(T),
}

impl<T> Field<T> {
    /// Returns `true` if the field holds a value.
    #[inline]
    pub const fn is_initialized(&self) -> bool {
        matches!(self, Self::Initialized(_))
    }

    /// Borrows the value, if any.
    #[inline]
    pub const fn get(&self) -> Option<&T> {
        match self {
            Self::Initialized(value) => Some(value),
            Self::Uninitialized => None,
        }
    }

    /// Mutably borrows the value, if any.
    #[inline]
    pub const fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Initialized(value) => Some(value),
            Self::Uninitialized => None,
        }
    }

    /// Stores `value`, returning the previous one.
    pub fn set(&mut self, value: T) -> Option<T> {
        std::mem::replace(self, Self::Initialized(value)).into_option()
    }

    /// Takes the value out, leaving the field uninitialized.
    pub fn take(&mut self) -> Option<T> {
        std::mem::take(self).into_option()
    }

    /// Converts into an `Option`, mapping `Uninitialized` to `None`.
    #[inline]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Initialized(value) => Some(value),
            Self::Uninitialized => None,
        }
    }

    /// Builds a field from an `Option`, mapping `None` to `Uninitialized`.
    #[inline]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Uninitialized, Self::Initialized)
    }
}

impl<T> From<T> for Field<T> {
    #[inline]
    fn from(value: T) -> Self {
        Self::Initialized(value)
    }
}
