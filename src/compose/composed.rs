//! Runtime composition of a list of unary functions.

use std::fmt;

use crate::variadic::variadic1;

/// Returns its argument unchanged.
///
/// The unit of composition: `compose!(identity, f)` and `compose!(f, identity)`
/// behave like `f`, and composing an empty list behaves like `identity`.
///
/// # Examples
///
/// ```rust
/// use varity::compose::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// ```
#[inline]
pub const fn identity<T>(value: T) -> T {
    value
}

/// A list of `T -> T` functions applied right to left.
///
/// Created by [`compose`].
#[derive(Clone)]
pub struct Composed<F> {
    functions: Vec<F>,
}

impl<F> Composed<F> {
    /// Applies the functions from last to first.
    pub fn call<T>(&self, input: T) -> T
    where
        F: Fn(T) -> T,
    {
        self.functions
            .iter()
            .rev()
            .fold(input, |value, function| function(value))
    }

    /// Number of composed functions.
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// `true` when nothing was composed, in which case [`call`](Self::call)
    /// is the identity.
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }

    /// Returns a closure running the composition.
    pub fn into_fn<T>(self) -> impl Fn(T) -> T
    where
        F: Fn(T) -> T,
    {
        move |input: T| self.call(input)
    }
}

impl<F> fmt::Debug for Composed<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Composed")
            .field("len", &self.functions.len())
            .finish_non_exhaustive()
    }
}

/// Composes any number of unary functions, right to left.
///
/// `compose([f, g, h]).call(x) == f(g(h(x)))`. The functions are gathered as
/// a variadic rest list, so zero functions is allowed and yields the
/// identity. All functions share one type; box them to mix closures.
///
/// # Examples
///
/// ```rust
/// use varity::compose::compose;
///
/// fn one(value: i32) -> i32 { value + 1 }
/// fn two(value: i32) -> i32 { value * 2 }
/// fn three(value: i32) -> i32 { value - 3 }
///
/// let composed = compose([one as fn(i32) -> i32, two, three]);
/// assert_eq!(composed.call(1), one(two(three(1))));
///
/// let offset = 100;
/// let mut boxed: Vec<Box<dyn Fn(i32) -> i32>> = Vec::new();
/// boxed.push(Box::new(one));
/// boxed.push(Box::new(move |value: i32| value + offset));
/// assert_eq!(compose(boxed).call(0), 101);
/// ```
pub fn compose<F, I>(functions: I) -> Composed<F>
where
    I: IntoIterator<Item = F>,
{
    let collect = variadic1(|functions: Vec<F>| Composed { functions });
    collect(functions.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn empty_composition_is_identity() {
        let composed = compose(Vec::<fn(i32) -> i32>::new());
        assert!(composed.is_empty());
        assert_eq!(composed.call(17), 17);
    }

    #[rstest]
    fn rightmost_runs_first() {
        let composed = compose([
            (|text: String| text + "f") as fn(String) -> String,
            |text: String| text + "g",
            |text: String| text + "h",
        ]);
        assert_eq!(composed.len(), 3);
        assert_eq!(composed.call(String::new()), "hgf");
    }

    #[rstest]
    fn into_fn_can_feed_iterators() {
        let composed = compose([(|value: i32| value * 10) as fn(i32) -> i32, |value: i32| value + 1]).into_fn();
        let results: Vec<i32> = (0..3).map(composed).collect();
        assert_eq!(results, vec![10, 20, 30]);
    }
}
