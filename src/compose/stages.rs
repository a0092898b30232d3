//! Runtime composition over lists of stages.
//!
//! The [`compose!`](crate::compose!) and [`pipe!`](crate::pipe!) macros fix
//! the shape of a pipeline at compile time. When the stages are only known
//! at run time (read from configuration, assembled in a loop), build them
//! as [`Stage`] values instead. All stages then share one value type `T`.

use std::fmt;

/// One element of a runtime pipeline: a function or a nested group of
/// stages.
///
/// A group behaves exactly as if its stages were spliced in place.
pub enum Stage<'a, T> {
    /// A single function.
    Function(Box<dyn Fn(T) -> T + 'a>),
    /// A nested list of stages.
    Group(Vec<Stage<'a, T>>),
}

impl<'a, T> Stage<'a, T> {
    /// Wraps a function as a stage.
    pub fn function(function: impl Fn(T) -> T + 'a) -> Self {
        Self::Function(Box::new(function))
    }

    /// Groups stages into one.
    pub fn group(stages: impl IntoIterator<Item = Self>) -> Self {
        Self::Group(stages.into_iter().collect())
    }

    fn apply(&self, value: T) -> T {
        match self {
            Self::Function(function) => function(value),
            Self::Group(stages) => stages.iter().fold(value, |value, stage| stage.apply(value)),
        }
    }
}

impl<T> fmt::Debug for Stage<'_, T> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Function(_) => formatter.write_str("Function(<fn>)"),
            Self::Group(stages) => formatter.debug_tuple("Group").field(stages).finish(),
        }
    }
}

/// Builds a single function that applies `stages` from first to last.
///
/// An empty list yields the identity function.
///
/// # Examples
///
/// ```
/// use fnpipe::compose::{Stage, compose};
///
/// let scale = 3;
/// let pipeline = compose(vec![
///     Stage::function(|x: i32| x + 1),
///     Stage::group([Stage::function(move |x: i32| x * scale), Stage::group([])]),
///     Stage::function(|x: i32| x - 2),
/// ]);
/// assert_eq!(pipeline(4), 13);
/// assert_eq!(compose(Vec::new())("same"), "same");
/// ```
pub fn compose<'a, T>(stages: impl IntoIterator<Item = Stage<'a, T>>) -> impl Fn(T) -> T + 'a
where
    T: 'a,
{
    let pipeline = Stage::group(stages);
    move |value| pipeline.apply(value)
}

/// Applies `stages` to `value` immediately, first to last.
///
/// # Examples
///
/// ```
/// use fnpipe::compose::{Stage, pipe};
///
/// let words = ["ab", "c"];
/// let stages: Vec<_> = words
///     .iter()
///     .map(|word| Stage::function(move |text: String| text + *word))
///     .collect();
/// assert_eq!(pipe(String::from(">"), &stages), ">abc");
/// ```
pub fn pipe<T>(value: T, stages: &[Stage<'_, T>]) -> T {
    stages.iter().fold(value, |value, stage| stage.apply(value))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn add(amount: i32) -> Stage<'static, i32> {
        Stage::function(move |x| x + amount)
    }

    fn times(factor: i32) -> Stage<'static, i32> {
        Stage::function(move |x| x * factor)
    }

    #[rstest]
    fn test_pipe_without_stages_returns_value() {
        assert_eq!(pipe(7, &[]), 7);
    }

    #[rstest]
    fn test_order_is_first_to_last() {
        assert_eq!(pipe(1, &[add(1), times(10)]), 20);
        assert_eq!(pipe(1, &[times(10), add(1)]), 11);
    }

    #[rstest]
    fn test_nested_groups_flatten() {
        let nested = compose([add(1), Stage::group([times(2), Stage::group([add(3)])])]);
        let flat = compose([add(1), times(2), add(3)]);
        for value in -3..3 {
            assert_eq!(nested(value), flat(value));
        }
    }

    #[rstest]
    fn test_debug_hides_functions() {
        let stages = Stage::group([add(1), Stage::group([])]);
        assert_eq!(format!("{stages:?}"), "Group([Function(<fn>), Group([])])");
    }
}
