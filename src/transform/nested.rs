//! Arbitrarily nested lists and their flattening.

/// A value or a list of further nested values.
///
/// # Examples
///
/// ```rust
/// use fnpipe::transform::eager::{flatten, Nested};
///
/// let nested = vec![
///     Nested::leaf(1),
///     Nested::leaf(2),
///     Nested::list([Nested::leaf(3), Nested::leaf(4)]),
///     Nested::list([Nested::leaf(5), Nested::list([Nested::leaf(6), Nested::leaf(7)])]),
/// ];
/// assert_eq!(flatten(nested), vec![1, 2, 3, 4, 5, 6, 7]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Nested<T> {
    /// A single value.
    Leaf(T),
    /// A list of nested values.
    List(Vec<Nested<T>>),
}

impl<T> Nested<T> {
    /// Wraps a single value.
    #[inline]
    pub const fn leaf(value: T) -> Self {
        Self::Leaf(value)
    }

    /// Wraps a list of nested values.
    pub fn list(items: impl IntoIterator<Item = Self>) -> Self {
        Self::List(items.into_iter().collect())
    }

    /// Wraps a flat list of values.
    pub fn values(values: impl IntoIterator<Item = T>) -> Self {
        Self::List(values.into_iter().map(Self::Leaf).collect())
    }
}

/// Flattens nested lists into one list of leaves, depth first.
///
/// Works with an explicit stack, so nesting depth is bounded only by
/// memory.
pub fn flatten<T>(items: impl IntoIterator<Item = Nested<T>>) -> Vec<T> {
    let mut leaves = Vec::new();
    let mut pending: Vec<std::vec::IntoIter<Nested<T>>> =
        vec![items.into_iter().collect::<Vec<_>>().into_iter()];

    while let Some(current) = pending.last_mut() {
        match current.next() {
            Some(Nested::Leaf(value)) => leaves.push(value),
            Some(Nested::List(children)) => pending.push(children.into_iter()),
            None => {
                pending.pop();
            }
        }
    }

    leaves
}
