//! Tagged result of a call that may be missing arguments.

/// The outcome of calling a curried helper with some arguments absent.
///
/// `Complete` holds the function's result when every argument was present.
/// `Partial` holds a continuation that waits for the missing ones.
///
/// # Examples
///
/// ```rust
/// use varity::arity::{binary, Applied};
///
/// let add = binary(|first: i32, second: i32| first + second);
///
/// assert_eq!(add.invoke(1, Some(2)).complete(), Some(3));
///
/// match add.invoke(1, None) {
///     Applied::Partial(add_one) => assert_eq!(add_one.call(2), 3),
///     Applied::Complete(_) => unreachable!(),
/// }
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Applied<R, K> {
    /// All arguments were present and the function ran.
    Complete(R),
    /// Some arguments were absent; the continuation awaits them.
    Partial(K),
}

impl<R, K> Applied<R, K> {
    /// Returns `true` for [`Applied::Complete`].
    #[inline]
    pub const fn is_complete(&self) -> bool {
        matches!(self, Self::Complete(_))
    }

    /// Returns `true` for [`Applied::Partial`].
    #[inline]
    pub const fn is_partial(&self) -> bool {
        matches!(self, Self::Partial(_))
    }

    /// The result, if the call completed.
    pub fn complete(self) -> Option<R> {
        match self {
            Self::Complete(result) => Some(result),
            Self::Partial(_) => None,
        }
    }

    /// The continuation, if the call was partial.
    pub fn partial(self) -> Option<K> {
        match self {
            Self::Complete(_) => None,
            Self::Partial(continuation) => Some(continuation),
        }
    }

    /// Transforms a completed result, leaving a continuation untouched.
    pub fn map_complete<S, F>(self, function: F) -> Applied<S, K>
    where
        F: FnOnce(R) -> S,
    {
        match self {
            Self::Complete(result) => Applied::Complete(function(result)),
            Self::Partial(continuation) => Applied::Partial(continuation),
        }
    }

    /// Collapses both cases into one value.
    pub fn fold<T, C, P>(self, on_complete: C, on_partial: P) -> T
    where
        C: FnOnce(R) -> T,
        P: FnOnce(K) -> T,
    {
        match self {
            Self::Complete(result) => on_complete(result),
            Self::Partial(continuation) => on_partial(continuation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn predicates_match_variant() {
        let done: Applied<i32, ()> = Applied::Complete(1);
        let waiting: Applied<i32, ()> = Applied::Partial(());
        assert!(done.is_complete() && !done.is_partial());
        assert!(waiting.is_partial() && !waiting.is_complete());
    }

    #[rstest]
    fn map_complete_skips_partial() {
        let waiting: Applied<i32, &str> = Applied::Partial("later");
        assert_eq!(waiting.map_complete(|value| value * 2), Applied::Partial("later"));
        let done: Applied<i32, &str> = Applied::Complete(4);
        assert_eq!(done.map_complete(|value| value * 2), Applied::Complete(8));
    }

    #[rstest]
    fn fold_picks_branch() {
        let done: Applied<i32, i32> = Applied::Complete(3);
        assert_eq!(done.fold(|value| value + 1, |value| value - 1), 4);
    }
}
