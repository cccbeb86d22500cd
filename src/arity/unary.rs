//! Restricting a function to a single argument.

use super::positional::Positional;

/// A function restricted to its first argument.
///
/// Created by [`unary`].
#[derive(Clone, Copy, Debug)]
pub struct Unary<F> {
    function: F,
}

impl<F> Unary<F> {
    /// Calls the function with one argument.
    #[inline]
    pub fn call<A, R>(&self, argument: A) -> R
    where
        F: Fn(A) -> R,
    {
        (self.function)(argument)
    }

    /// Calls the function with the first element of `arguments`, discarding
    /// the rest.
    #[inline]
    pub fn call_with<P, R>(&self, arguments: P) -> R
    where
        P: Positional,
        F: Fn(P::First) -> R,
    {
        (self.function)(arguments.into_first())
    }

    /// Returns a closure that accepts an argument tuple and keeps its first
    /// element.
    pub fn into_fn<P, R>(self) -> impl Fn(P) -> R
    where
        P: Positional,
        F: Fn(P::First) -> R,
    {
        move |arguments: P| self.call_with(arguments)
    }

    /// Returns the wrapped function.
    pub fn into_inner(self) -> F {
        self.function
    }
}

/// Wraps `function` so that only its first argument is ever passed.
///
/// # Examples
///
/// ```rust
/// use varity::arity::unary;
///
/// let negate = unary(|value: i32| -value);
/// assert_eq!(negate.call(4), -4);
/// assert_eq!(negate.call_with((1, 2, 3)), -1);
///
/// // Keeping only the index of enumerated pairs.
/// let keep_index = unary(|index: usize| index * 10);
/// let indices: Vec<usize> = ["a", "b"]
///     .into_iter()
///     .enumerate()
///     .map(|pair| keep_index.call_with(pair))
///     .collect();
/// assert_eq!(indices, vec![0, 10]);
/// ```
pub const fn unary<F>(function: F) -> Unary<F> {
    Unary { function }
}
